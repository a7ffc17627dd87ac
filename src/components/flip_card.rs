use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum FlipVariant {
    /// Opens over a dimmed, scroll-locked page.
    Overlay,
    /// Flips in place.
    Lite,
}

#[derive(Properties, PartialEq)]
pub struct FlipCardProps {
    pub variant: FlipVariant,
    pub title: AttrValue,
    pub teaser: AttrValue,
    #[prop_or_default]
    pub kicker: Option<AttrValue>,
    /// Shown on the back face in a region that doesn't close the card when
    /// clicked, so the link stays usable.
    #[prop_or_default]
    pub footnote: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FlipCard)]
pub fn flip_card(props: &FlipCardProps) -> Html {
    let faces = html! {
        <>
            <div class="flip-front" data-flip-front="" role="button" tabindex="0">
                {
                    if let Some(kicker) = &props.kicker {
                        html! { <span class="flip-kicker">{kicker.clone()}</span> }
                    } else {
                        html! {}
                    }
                }
                <h3>{props.title.clone()}</h3>
                <p>{props.teaser.clone()}</p>
                <button class="poster-plus" type="button" aria-label="Show more">{"+"}</button>
            </div>
            <div class="flip-back">
                <button class="poster-close" type="button" aria-label="Close">{"×"}</button>
                <h3>{props.title.clone()}</h3>
                { for props.children.iter() }
                {
                    if let Some(footnote) = &props.footnote {
                        html! {
                            <div class="flip-note no-close">
                                <span>{footnote.clone()}</span>
                                {" "}
                                <a href="#roi">{"Estimate your savings"}</a>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </>
    };

    match props.variant {
        FlipVariant::Overlay => html! {
            <article class="flip-card flip-card--overlay" data-flip="" aria-expanded="false">
                {faces}
            </article>
        },
        FlipVariant::Lite => html! {
            <article class="flip-card flip-card--lite" data-flip-lite="" aria-expanded="false">
                {faces}
            </article>
        },
    }
}
