use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::{Binding, Listener};
use crate::config::RoiConfig;
use crate::error::Result;
use crate::markup::{
    KPI_MONEY_ID, KPI_TIME_ID, OUT_MINUTES_ID, OUT_RATE_ID, OUT_REVIEWS_ID, RANGE_MINUTES_ID,
    RANGE_RATE_ID, RANGE_REVIEWS_ID,
};
use crate::widgets::roi::{RawInputs, RoiCalculator, RoiReadout, RoiView};

struct DomRoiView {
    reviews: HtmlInputElement,
    minutes: HtmlInputElement,
    rate: HtmlInputElement,
    out_reviews: Option<Element>,
    out_minutes: Option<Element>,
    out_rate: Option<Element>,
    money: Option<Element>,
    time: Option<Element>,
}

fn set_text(element: &Option<Element>, text: &str) {
    if let Some(element) = element {
        element.set_text_content(Some(text));
    }
}

impl RoiView for DomRoiView {
    fn read(&self) -> RawInputs {
        RawInputs {
            reviews: self.reviews.value(),
            minutes_per_review: self.minutes.value(),
            hourly_rate: self.rate.value(),
        }
    }

    fn write(&mut self, readout: &RoiReadout) {
        set_text(&self.out_reviews, &readout.reviews);
        set_text(&self.out_minutes, &readout.minutes_per_review);
        set_text(&self.out_rate, &readout.hourly_rate);
        set_text(&self.money, &readout.money);
        set_text(&self.time, &readout.time);
    }
}

fn range_input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

/// Wires the three sliders to the calculator and renders the initial estimate.
/// Needs all three sliders; every output element is optional.
pub fn bind(document: &Document, config: RoiConfig) -> Result<Option<Binding>> {
    let (Some(reviews), Some(minutes), Some(rate)) = (
        range_input(document, RANGE_REVIEWS_ID),
        range_input(document, RANGE_MINUTES_ID),
        range_input(document, RANGE_RATE_ID),
    ) else {
        return Ok(None);
    };

    let sliders = [reviews.clone(), minutes.clone(), rate.clone()];
    let view = DomRoiView {
        reviews,
        minutes,
        rate,
        out_reviews: document.get_element_by_id(OUT_REVIEWS_ID),
        out_minutes: document.get_element_by_id(OUT_MINUTES_ID),
        out_rate: document.get_element_by_id(OUT_RATE_ID),
        money: document.get_element_by_id(KPI_MONEY_ID),
        time: document.get_element_by_id(KPI_TIME_ID),
    };
    let calculator = Rc::new(RefCell::new(RoiCalculator::new(view, config)));

    let mut listeners = Vec::with_capacity(sliders.len());
    for slider in &sliders {
        let calculator = calculator.clone();
        listeners.push(Listener::new(slider, "input", move |_| {
            calculator.borrow_mut().refresh();
        })?);
    }

    calculator.borrow_mut().refresh();
    Ok(Some(Binding::new(listeners)))
}
