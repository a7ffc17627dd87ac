use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

use super::{Binding, Listener};
use crate::error::{Result, WidgetError};
use crate::markup::{
    BACK_SELECTOR, CLOSE_SELECTOR, EXPAND_SELECTOR, FRONT_SELECTOR, LITE_CARD_SELECTOR,
    LOCKED_CLASS, NO_CLOSE_SELECTOR, OPEN_CLASS, OVERLAY_CARD_SELECTOR, OVERLAY_CLASS,
    OVERLAY_SELECTOR, VISIBLE_CLASS,
};
use crate::widgets::flip::{
    CardId, FlipInput, FlipSurface, LiteFlip, OverlayFlip, OverlaySurface, Trigger,
};

type Dispatch = Rc<dyn Fn(FlipInput)>;

#[derive(Clone)]
struct DomCard {
    root: Element,
    front: Option<Element>,
    expand: Option<Element>,
    close: Option<Element>,
    back: Option<Element>,
}

impl DomCard {
    fn from_root(root: Element) -> Result<Self> {
        Ok(Self {
            front: root.query_selector(FRONT_SELECTOR)?,
            expand: root.query_selector(EXPAND_SELECTOR)?,
            close: root.query_selector(CLOSE_SELECTOR)?,
            back: root.query_selector(BACK_SELECTOR)?,
            root,
        })
    }

    fn trigger_element(&self, trigger: Trigger) -> &Element {
        match trigger {
            Trigger::Front => self.front.as_ref(),
            Trigger::Expand => self.expand.as_ref(),
            Trigger::Card => None,
        }
        .unwrap_or(&self.root)
    }
}

fn collect_cards(document: &Document, selector: &str) -> Result<Vec<DomCard>> {
    let nodes = document.query_selector_all(selector)?;
    let mut cards = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(root) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            cards.push(DomCard::from_root(root)?);
        }
    }
    Ok(cards)
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let _ = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

struct DomFlipSurface {
    cards: Vec<DomCard>,
}

impl FlipSurface for DomFlipSurface {
    fn set_open(&mut self, card: CardId, open: bool) {
        if let Some(card) = self.cards.get(card) {
            toggle_class(&card.root, OPEN_CLASS, open);
            let _ = card
                .root
                .set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
    }

    fn focus_back(&mut self, card: CardId) {
        let Some(back) = self.cards.get(card).and_then(|card| card.back.as_ref()) else {
            return;
        };
        let _ = back.set_attribute("tabindex", "-1");
        if let Some(back) = back.dyn_ref::<HtmlElement>() {
            let _ = back.focus();
        }
    }
}

struct DomOverlaySurface {
    cards: DomFlipSurface,
    overlay: Element,
    body: HtmlElement,
}

impl FlipSurface for DomOverlaySurface {
    fn set_open(&mut self, card: CardId, open: bool) {
        self.cards.set_open(card, open);
    }

    fn focus_back(&mut self, card: CardId) {
        self.cards.focus_back(card);
    }
}

impl OverlaySurface for DomOverlaySurface {
    fn set_overlay_visible(&mut self, visible: bool) {
        toggle_class(&self.overlay, VISIBLE_CLASS, visible);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        toggle_class(&self.body, LOCKED_CLASS, locked);
    }

    fn restore_focus(&mut self, card: CardId, trigger: Trigger) -> Result<()> {
        let card = self
            .cards
            .cards
            .get(card)
            .ok_or_else(|| WidgetError::MissingElement(format!("overlay card {}", card)))?;
        let trigger = card
            .trigger_element(trigger)
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| WidgetError::MissingElement("focusable trigger".to_string()))?;
        trigger.focus()?;
        Ok(())
    }
}

fn find_or_create_overlay(document: &Document, body: &HtmlElement) -> Result<Element> {
    if let Some(overlay) = document.query_selector(OVERLAY_SELECTOR)? {
        return Ok(overlay);
    }
    let overlay = document.create_element("div")?;
    overlay.set_class_name(OVERLAY_CLASS);
    body.append_child(&overlay)?;
    Ok(overlay)
}

fn in_no_close_region(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(NO_CLOSE_SELECTOR).ok().flatten())
        .is_some()
}

fn bind_card_clicks(cards: &[DomCard], dispatch: &Dispatch) -> Result<Vec<Listener>> {
    let mut listeners = Vec::new();
    for (id, card) in cards.iter().enumerate() {
        if let Some(front) = &card.front {
            let dispatch = dispatch.clone();
            listeners.push(Listener::new(front, "click", move |_| {
                dispatch(FlipInput::FrontClick(id))
            })?);
        }
        if let Some(expand) = &card.expand {
            let dispatch = dispatch.clone();
            listeners.push(Listener::new(expand, "click", move |e: Event| {
                e.stop_propagation();
                dispatch(FlipInput::ExpandClick(id));
            })?);
        }
        if let Some(back) = &card.back {
            let dispatch = dispatch.clone();
            listeners.push(Listener::new(back, "click", move |e: Event| {
                dispatch(FlipInput::BackClick {
                    card: id,
                    exempt: in_no_close_region(&e),
                });
            })?);
        }
        if let Some(close) = &card.close {
            let dispatch = dispatch.clone();
            listeners.push(Listener::new(close, "click", move |e: Event| {
                e.stop_propagation();
                dispatch(FlipInput::CloseClick(id));
            })?);
        }
    }
    Ok(listeners)
}

fn bind_keys(document: &Document, dispatch: &Dispatch) -> Result<Listener> {
    let dispatch = dispatch.clone();
    Listener::new(document, "keydown", move |e: Event| {
        if let Some(key) = e.dyn_ref::<KeyboardEvent>().map(|e| e.key()) {
            dispatch(FlipInput::Key(key));
        }
    })
}

pub fn bind_overlay(window: &Window, document: &Document) -> Result<Option<Binding>> {
    let cards = collect_cards(document, OVERLAY_CARD_SELECTOR)?;
    if cards.is_empty() {
        return Ok(None);
    }

    let body = document
        .body()
        .ok_or_else(|| WidgetError::MissingElement("body".to_string()))?;
    let overlay = find_or_create_overlay(document, &body)?;
    let surface = DomOverlaySurface {
        cards: DomFlipSurface {
            cards: cards.clone(),
        },
        overlay: overlay.clone(),
        body,
    };
    let controller = Rc::new(RefCell::new(OverlayFlip::new(
        surface,
        cards.len(),
        window.scroll_y()?,
    )));
    let released = controller.clone();
    let dispatch: Dispatch = Rc::new(move |input: FlipInput| controller.borrow_mut().handle(&input));

    let mut listeners = bind_card_clicks(&cards, &dispatch)?;
    listeners.push(bind_keys(document, &dispatch)?);
    {
        let dispatch = dispatch.clone();
        listeners.push(Listener::new(&overlay, "click", move |_| {
            dispatch(FlipInput::OverlayClick)
        })?);
    }
    {
        let dispatch = dispatch.clone();
        let window_clone = window.clone();
        listeners.push(Listener::passive(window, "scroll", move |_| {
            if let Ok(scroll_y) = window_clone.scroll_y() {
                dispatch(FlipInput::Scroll(scroll_y));
            }
        })?);
    }
    Ok(Some(Binding::new(listeners).on_teardown(move || {
        released.borrow_mut().release()
    })))
}

pub fn bind_lite(document: &Document) -> Result<Option<Binding>> {
    let cards = collect_cards(document, LITE_CARD_SELECTOR)?;
    if cards.is_empty() {
        return Ok(None);
    }

    let controller = Rc::new(RefCell::new(LiteFlip::new(
        DomFlipSurface {
            cards: cards.clone(),
        },
        cards.len(),
    )));
    let dispatch: Dispatch = Rc::new(move |input: FlipInput| controller.borrow_mut().handle(&input));

    let mut listeners = bind_card_clicks(&cards, &dispatch)?;
    listeners.push(bind_keys(document, &dispatch)?);
    Ok(Some(Binding::new(listeners)))
}
