use yew::prelude::*;

use crate::markup::{
    KPI_MONEY_ID, KPI_TIME_ID, OUT_MINUTES_ID, OUT_RATE_ID, OUT_REVIEWS_ID, RANGE_MINUTES_ID,
    RANGE_RATE_ID, RANGE_REVIEWS_ID,
};

#[derive(Properties, PartialEq)]
pub struct RoiSliderProps {
    pub input_id: AttrValue,
    pub output_id: AttrValue,
    pub label: AttrValue,
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub value: u32,
    #[prop_or_default]
    pub unit: AttrValue,
}

#[function_component(RoiSlider)]
pub fn roi_slider(props: &RoiSliderProps) -> Html {
    html! {
        <div class="roi-slider">
            <label for={props.input_id.clone()}>
                <span class="roi-slider__label">{props.label.clone()}</span>
                <span class="roi-slider__value">
                    <output id={props.output_id.clone()}>{props.value.to_string()}</output>
                    {props.unit.clone()}
                </span>
            </label>
            <input
                type="range"
                id={props.input_id.clone()}
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={props.value.to_string()}
            />
        </div>
    }
}

// The numbers are filled in by the calculator binding once the page mounts.
#[function_component(RoiSection)]
pub fn roi_section() -> Html {
    html! {
        <section id="roi" class="roi">
            <h2>{"What is reading every review costing you?"}</h2>
            <p class="roi-intro">
                {"Move the sliders to match your shop. Echo reads, sorts and summarises reviews so you don't have to."}
            </p>
            <div class="roi-grid">
                <div class="roi-inputs">
                    <RoiSlider
                        input_id={RANGE_REVIEWS_ID}
                        output_id={OUT_REVIEWS_ID}
                        label="New reviews per day"
                        min={0} max={200} step={1} value={10}
                    />
                    <RoiSlider
                        input_id={RANGE_MINUTES_ID}
                        output_id={OUT_MINUTES_ID}
                        label="Minutes spent per review"
                        min={1} max={15} step={1} value={5}
                        unit=" min"
                    />
                    <RoiSlider
                        input_id={RANGE_RATE_ID}
                        output_id={OUT_RATE_ID}
                        label="Hourly cost of your team"
                        min={10} max={120} step={5} value={20}
                        unit=" €/h"
                    />
                </div>
                <div class="roi-kpis">
                    <div class="roi-kpi">
                        <span class="roi-kpi__label">{"Saved every month"}</span>
                        <strong id={KPI_MONEY_ID} class="roi-kpi__value">{"–"}</strong>
                    </div>
                    <div class="roi-kpi">
                        <span class="roi-kpi__label">{"Time back"}</span>
                        <strong id={KPI_TIME_ID} class="roi-kpi__value">{"–"}</strong>
                    </div>
                </div>
            </div>
        </section>
    }
}
