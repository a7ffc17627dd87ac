use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use super::{Binding, Listener};
use crate::config::ParallaxConfig;
use crate::error::Result;
use crate::markup::HERO_BG_SELECTOR;
use crate::widgets::parallax::{Parallax, ParallaxTarget};

struct DomParallaxTarget(HtmlElement);

impl ParallaxTarget for DomParallaxTarget {
    fn set_transform(&mut self, transform: &str) {
        let _ = self.0.style().set_property("transform", transform);
    }
}

pub fn bind(window: &Window, document: &Document, config: ParallaxConfig) -> Result<Option<Binding>> {
    let Some(background) = document
        .query_selector(HERO_BG_SELECTOR)?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(None);
    };

    let mut parallax = Parallax::new(DomParallaxTarget(background), config);
    let window_clone = window.clone();
    let listener = Listener::passive(window, "scroll", move |_| {
        if let Ok(scroll_y) = window_clone.scroll_y() {
            parallax.on_scroll(scroll_y);
        }
    })?;
    Ok(Some(Binding::new(vec![listener])))
}
