//! Attaches the widgets to rendered markup.
//!
//! Every listener is held by a [`Listener`] guard which unregisters it when
//! dropped, so dropping the [`Bindings`] returned by [`mount`] tears all
//! widgets down, including any page state a [`Binding`] resets on teardown.

use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::config::WidgetConfig;
use crate::error::{Result, WidgetError};

pub mod flip;
pub mod parallax;
pub mod roi;

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event, false, handler)
    }

    /// Registers a listener that promises never to call `preventDefault`, so
    /// the browser doesn't wait on it before scrolling.
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event, true, handler)
    }

    fn register<F>(target: &EventTarget, event: &'static str, passive: bool, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// One widget's listeners plus an optional step that resets page state the
/// widget left behind. The step runs when the binding is dropped.
pub struct Binding {
    listeners: Vec<Listener>,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Binding {
    pub fn new(listeners: Vec<Listener>) -> Self {
        Self {
            listeners,
            teardown: None,
        }
    }

    pub fn on_teardown<F>(mut self, teardown: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.teardown = Some(Box::new(teardown));
        self
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

#[derive(Default)]
pub struct Bindings {
    bound: Vec<Binding>,
}

impl Bindings {
    fn attach(&mut self, widget: &str, bound: Result<Option<Binding>>) {
        match bound {
            Ok(Some(binding)) => {
                info!("Bound {} ({} listeners)", widget, binding.listeners.len());
                self.bound.push(binding);
            }
            Ok(None) => debug!("No markup for {}, skipping", widget),
            Err(e) => gloo_console::error!(format!("Failed to bind {}: {}", widget, e)),
        }
    }
}

/// Binds every widget found in the current document. A widget whose markup is
/// absent is skipped; one that fails to bind is logged and skipped.
pub fn mount() -> Result<Bindings> {
    let window = web_sys::window().ok_or(WidgetError::NoWindow)?;
    let document = window.document().ok_or(WidgetError::NoDocument)?;
    let config = WidgetConfig::load(&window);

    let mut bindings = Bindings::default();
    bindings.attach("overlay flip cards", flip::bind_overlay(&window, &document));
    bindings.attach("lite flip cards", flip::bind_lite(&document));
    bindings.attach("ROI calculator", roi::bind(&document, config.roi));
    bindings.attach("parallax", parallax::bind(&window, &document, config.parallax));
    Ok(bindings)
}
