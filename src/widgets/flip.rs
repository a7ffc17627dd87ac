//! Flip card controllers.
//!
//! Two independent controllers share the same input vocabulary: [`OverlayFlip`]
//! opens cards into a dimmed, scroll-locked modal state and [`LiteFlip`] flips
//! cards in place. Both keep at most one card open. Neither touches the DOM
//! directly; visual state goes through a [`FlipSurface`].

use log::debug;

use crate::error::Result;

/// Index of a card in document order within its controller.
pub type CardId = usize;

pub const ESCAPE_KEY: &str = "Escape";

/// The element that opened a card, so focus can go back to it on close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Card,
    Front,
    Expand,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlipInput {
    FrontClick(CardId),
    /// Click on the expand control. The binding stops propagation so the
    /// front face does not also report a click.
    ExpandClick(CardId),
    /// Click on the back face; `exempt` is set when the click landed inside a
    /// region that must not close the card.
    BackClick { card: CardId, exempt: bool },
    CloseClick(CardId),
    OverlayClick,
    Key(String),
    Scroll(f64),
}

pub trait FlipSurface {
    /// Applies or clears the open class and `aria-expanded`.
    fn set_open(&mut self, card: CardId, open: bool);
    fn focus_back(&mut self, card: CardId);
}

pub trait OverlaySurface: FlipSurface {
    fn set_overlay_visible(&mut self, visible: bool);
    fn set_scroll_locked(&mut self, locked: bool);
    fn restore_focus(&mut self, card: CardId, trigger: Trigger) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenCard {
    card: CardId,
    trigger: Trigger,
}

pub struct OverlayFlip<S> {
    surface: S,
    card_count: usize,
    open: Option<OpenCard>,
    last_scroll_y: f64,
}

impl<S: OverlaySurface> OverlayFlip<S> {
    pub fn new(surface: S, card_count: usize, scroll_y: f64) -> Self {
        Self {
            surface,
            card_count,
            open: None,
            last_scroll_y: scroll_y,
        }
    }

    pub fn open_card(&self) -> Option<CardId> {
        self.open.map(|open| open.card)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn open(&mut self, card: CardId, trigger: Trigger) {
        if card >= self.card_count {
            debug!("Ignoring open for unknown overlay card {}", card);
            return;
        }
        if self.open.map_or(false, |open| open.card != card) {
            self.close_open(false);
        }

        debug!("Opening overlay card {} from {:?}", card, trigger);
        self.open = Some(OpenCard { card, trigger });
        self.surface.set_open(card, true);
        self.surface.set_overlay_visible(true);
        self.surface.set_scroll_locked(true);
        self.surface.focus_back(card);
    }

    /// Closes the open card, if any, and returns focus to its trigger.
    pub fn close(&mut self) {
        self.close_open(true);
    }

    /// Closes the open card on teardown so the page isn't left dimmed and
    /// scroll-locked. Focus stays where it is.
    pub fn release(&mut self) {
        self.close_open(false);
    }

    fn close_open(&mut self, restore_focus: bool) {
        let Some(open) = self.open.take() else {
            return;
        };

        debug!("Closing overlay card {}", open.card);
        self.surface.set_open(open.card, false);
        self.surface.set_overlay_visible(false);
        self.surface.set_scroll_locked(false);

        if restore_focus {
            if let Err(e) = self.surface.restore_focus(open.card, open.trigger) {
                debug!("Ignoring focus restore failure for card {}: {}", open.card, e);
            }
        }
    }

    pub fn handle(&mut self, input: &FlipInput) {
        match input {
            FlipInput::FrontClick(card) => self.open(*card, Trigger::Front),
            FlipInput::ExpandClick(card) => self.open(*card, Trigger::Expand),
            FlipInput::BackClick { exempt: false, .. }
            | FlipInput::CloseClick(_)
            | FlipInput::OverlayClick => self.close(),
            FlipInput::BackClick { exempt: true, .. } => {}
            FlipInput::Key(key) => {
                if key == ESCAPE_KEY {
                    self.close();
                }
            }
            FlipInput::Scroll(y) => {
                if self.open.is_some() && (y - self.last_scroll_y).abs() > 0.0 {
                    self.close();
                }
                self.last_scroll_y = *y;
            }
        }
    }
}

pub struct LiteFlip<S> {
    surface: S,
    card_count: usize,
    open: Option<CardId>,
}

impl<S: FlipSurface> LiteFlip<S> {
    pub fn new(surface: S, card_count: usize) -> Self {
        Self {
            surface,
            card_count,
            open: None,
        }
    }

    pub fn open_card(&self) -> Option<CardId> {
        self.open
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn open(&mut self, card: CardId) {
        if card >= self.card_count {
            debug!("Ignoring open for unknown lite card {}", card);
            return;
        }
        if let Some(previous) = self.open.filter(|&previous| previous != card) {
            self.surface.set_open(previous, false);
        }

        debug!("Opening lite card {}", card);
        self.open = Some(card);
        self.surface.set_open(card, true);
        self.surface.focus_back(card);
    }

    pub fn close(&mut self, card: CardId) {
        if card >= self.card_count {
            return;
        }
        self.surface.set_open(card, false);
        if self.open == Some(card) {
            self.open = None;
        }
    }

    pub fn close_open(&mut self) {
        if let Some(card) = self.open.take() {
            self.surface.set_open(card, false);
        }
    }

    pub fn handle(&mut self, input: &FlipInput) {
        match input {
            FlipInput::FrontClick(card) | FlipInput::ExpandClick(card) => self.open(*card),
            FlipInput::BackClick { card, exempt: false } | FlipInput::CloseClick(card) => {
                self.close(*card)
            }
            FlipInput::Key(key) => {
                if key == ESCAPE_KEY {
                    self.close_open();
                }
            }
            FlipInput::BackClick { exempt: true, .. }
            | FlipInput::OverlayClick
            | FlipInput::Scroll(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WidgetError;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Focus {
        Back(CardId),
        Trigger(CardId, Trigger),
    }

    #[derive(Default)]
    struct FakeSurface {
        open: BTreeSet<CardId>,
        overlay_visible: bool,
        scroll_locked: bool,
        focused: Option<Focus>,
        fail_focus_restore: bool,
        overlay_writes: usize,
    }

    impl FakeSurface {
        fn open_cards(&self) -> Vec<CardId> {
            self.open.iter().copied().collect()
        }
    }

    impl FlipSurface for FakeSurface {
        fn set_open(&mut self, card: CardId, open: bool) {
            if open {
                self.open.insert(card);
            } else {
                self.open.remove(&card);
            }
        }

        fn focus_back(&mut self, card: CardId) {
            self.focused = Some(Focus::Back(card));
        }
    }

    impl OverlaySurface for FakeSurface {
        fn set_overlay_visible(&mut self, visible: bool) {
            self.overlay_writes += 1;
            self.overlay_visible = visible;
        }

        fn set_scroll_locked(&mut self, locked: bool) {
            self.scroll_locked = locked;
        }

        fn restore_focus(&mut self, card: CardId, trigger: Trigger) -> Result<()> {
            if self.fail_focus_restore {
                return Err(WidgetError::Js("element is detached".to_string()));
            }
            self.focused = Some(Focus::Trigger(card, trigger));
            Ok(())
        }
    }

    fn overlay(cards: usize) -> OverlayFlip<FakeSurface> {
        OverlayFlip::new(FakeSurface::default(), cards, 0.0)
    }

    fn lite(cards: usize) -> LiteFlip<FakeSurface> {
        LiteFlip::new(FakeSurface::default(), cards)
    }

    fn escape() -> FlipInput {
        FlipInput::Key(ESCAPE_KEY.to_string())
    }

    #[test]
    fn front_click_opens_into_overlay() {
        let mut flip = overlay(3);
        flip.handle(&FlipInput::FrontClick(1));

        assert_eq!(flip.open_card(), Some(1));
        let surface = flip.surface();
        assert_eq!(surface.open_cards(), vec![1]);
        assert!(surface.overlay_visible);
        assert!(surface.scroll_locked);
        assert_eq!(surface.focused, Some(Focus::Back(1)));
    }

    #[test]
    fn close_reverses_state_and_returns_focus_to_trigger() {
        let mut flip = overlay(2);
        flip.handle(&FlipInput::ExpandClick(0));
        flip.handle(&FlipInput::CloseClick(0));

        assert_eq!(flip.open_card(), None);
        let surface = flip.surface();
        assert!(surface.open.is_empty());
        assert!(!surface.overlay_visible);
        assert!(!surface.scroll_locked);
        assert_eq!(surface.focused, Some(Focus::Trigger(0, Trigger::Expand)));
    }

    #[test]
    fn opening_second_card_displaces_first_without_restoring_focus() {
        let mut flip = overlay(3);
        flip.handle(&FlipInput::FrontClick(0));
        flip.handle(&FlipInput::ExpandClick(2));

        assert_eq!(flip.open_card(), Some(2));
        let surface = flip.surface();
        assert_eq!(surface.open_cards(), vec![2]);
        assert!(surface.overlay_visible);
        assert!(surface.scroll_locked);
        assert_eq!(surface.focused, Some(Focus::Back(2)));

        flip.handle(&escape());
        assert_eq!(
            flip.surface().focused,
            Some(Focus::Trigger(2, Trigger::Expand))
        );
    }

    #[test]
    fn reopening_open_card_keeps_it_open_and_updates_trigger() {
        let mut flip = overlay(2);
        flip.handle(&FlipInput::FrontClick(1));
        flip.handle(&FlipInput::ExpandClick(1));
        assert_eq!(flip.surface().open_cards(), vec![1]);

        flip.close();
        assert_eq!(
            flip.surface().focused,
            Some(Focus::Trigger(1, Trigger::Expand))
        );
    }

    #[test]
    fn escape_closes_open_card_and_hides_overlay() {
        let mut flip = overlay(2);
        flip.handle(&FlipInput::FrontClick(0));
        flip.handle(&escape());

        assert_eq!(flip.open_card(), None);
        assert!(!flip.surface().overlay_visible);
        assert!(!flip.surface().scroll_locked);
    }

    #[test]
    fn escape_with_nothing_open_is_a_noop() {
        let mut flip = overlay(2);
        flip.handle(&escape());

        let surface = flip.surface();
        assert_eq!(surface.overlay_writes, 0);
        assert_eq!(surface.focused, None);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut flip = overlay(2);
        flip.handle(&FlipInput::FrontClick(0));
        flip.handle(&FlipInput::Key("Enter".to_string()));
        flip.handle(&FlipInput::Key("escape".to_string()));

        assert_eq!(flip.open_card(), Some(0));
    }

    #[test]
    fn scroll_while_open_closes() {
        let mut flip = overlay(2);
        flip.handle(&FlipInput::Scroll(40.0));
        flip.handle(&FlipInput::FrontClick(1));
        flip.handle(&FlipInput::Scroll(41.0));

        assert_eq!(flip.open_card(), None);
        assert!(!flip.surface().scroll_locked);
        assert_eq!(
            flip.surface().focused,
            Some(Focus::Trigger(1, Trigger::Front))
        );
    }

    #[test]
    fn scroll_without_movement_keeps_card_open() {
        let mut flip = overlay(2);
        flip.handle(&FlipInput::Scroll(300.0));
        flip.handle(&FlipInput::FrontClick(0));
        flip.handle(&FlipInput::Scroll(300.0));

        assert_eq!(flip.open_card(), Some(0));
    }

    #[test]
    fn scroll_while_closed_changes_nothing() {
        let mut flip = overlay(2);
        for y in [10.0, 250.0, 0.0] {
            flip.handle(&FlipInput::Scroll(y));
        }

        assert_eq!(flip.surface().overlay_writes, 0);
        assert_eq!(flip.surface().focused, None);
    }

    #[test]
    fn overlay_click_closes() {
        let mut flip = overlay(1);
        flip.handle(&FlipInput::FrontClick(0));
        flip.handle(&FlipInput::OverlayClick);

        assert_eq!(flip.open_card(), None);
    }

    #[test]
    fn back_click_respects_exempt_regions() {
        let mut flip = overlay(1);
        flip.handle(&FlipInput::FrontClick(0));

        flip.handle(&FlipInput::BackClick { card: 0, exempt: true });
        assert_eq!(flip.open_card(), Some(0));

        flip.handle(&FlipInput::BackClick { card: 0, exempt: false });
        assert_eq!(flip.open_card(), None);
    }

    #[test]
    fn failed_focus_restore_is_swallowed() {
        let mut flip = OverlayFlip::new(
            FakeSurface {
                fail_focus_restore: true,
                ..FakeSurface::default()
            },
            2,
            0.0,
        );
        flip.handle(&FlipInput::FrontClick(0));
        flip.handle(&FlipInput::CloseClick(0));

        assert_eq!(flip.open_card(), None);
        let surface = flip.surface();
        assert!(surface.open.is_empty());
        assert!(!surface.overlay_visible);
        assert!(!surface.scroll_locked);
        assert_eq!(surface.focused, Some(Focus::Back(0)));
    }

    #[test]
    fn release_clears_overlay_and_scroll_lock_without_moving_focus() {
        let mut flip = overlay(2);
        flip.handle(&FlipInput::ExpandClick(1));
        flip.release();

        assert_eq!(flip.open_card(), None);
        let surface = flip.surface();
        assert!(surface.open.is_empty());
        assert!(!surface.overlay_visible);
        assert!(!surface.scroll_locked);
        assert_eq!(surface.focused, Some(Focus::Back(1)));
    }

    #[test]
    fn release_with_nothing_open_is_a_noop() {
        let mut flip = overlay(2);
        flip.release();

        assert_eq!(flip.surface().overlay_writes, 0);
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut flip = overlay(2);
        flip.handle(&FlipInput::FrontClick(5));

        assert_eq!(flip.open_card(), None);
        assert_eq!(flip.surface().overlay_writes, 0);
    }

    #[test]
    fn at_most_one_overlay_card_open_across_event_sequence() {
        let mut flip = overlay(3);
        let inputs = [
            FlipInput::FrontClick(0),
            FlipInput::ExpandClick(1),
            FlipInput::FrontClick(2),
            FlipInput::BackClick { card: 2, exempt: true },
            FlipInput::FrontClick(0),
            FlipInput::Scroll(12.0),
            FlipInput::ExpandClick(2),
            FlipInput::FrontClick(1),
            FlipInput::OverlayClick,
            FlipInput::FrontClick(2),
        ];
        for input in &inputs {
            flip.handle(input);
            let open = flip.surface().open_cards();
            assert!(open.len() <= 1, "{:?} left {:?} open", input, open);
            assert_eq!(open.first().copied(), flip.open_card());
            assert_eq!(flip.surface().overlay_visible, flip.open_card().is_some());
        }
    }

    #[test]
    fn lite_open_and_close_without_overlay() {
        let mut flip = lite(3);
        flip.handle(&FlipInput::FrontClick(1));

        assert_eq!(flip.open_card(), Some(1));
        assert_eq!(flip.surface().open_cards(), vec![1]);
        assert_eq!(flip.surface().focused, Some(Focus::Back(1)));
        assert!(!flip.surface().overlay_visible);
        assert!(!flip.surface().scroll_locked);

        flip.handle(&FlipInput::CloseClick(1));
        assert_eq!(flip.open_card(), None);
        assert!(flip.surface().open.is_empty());
        assert_eq!(flip.surface().focused, Some(Focus::Back(1)));
    }

    #[test]
    fn lite_opening_another_card_closes_previous() {
        let mut flip = lite(3);
        flip.handle(&FlipInput::FrontClick(0));
        flip.handle(&FlipInput::ExpandClick(2));

        assert_eq!(flip.open_card(), Some(2));
        assert_eq!(flip.surface().open_cards(), vec![2]);
    }

    #[test]
    fn lite_escape_closes_open_card() {
        let mut flip = lite(2);
        flip.handle(&escape());
        assert!(flip.surface().open.is_empty());

        flip.handle(&FlipInput::FrontClick(0));
        flip.handle(&escape());
        assert_eq!(flip.open_card(), None);
        assert!(flip.surface().open.is_empty());
    }

    #[test]
    fn lite_ignores_scroll_and_overlay_clicks() {
        let mut flip = lite(2);
        flip.handle(&FlipInput::FrontClick(0));
        flip.handle(&FlipInput::Scroll(500.0));
        flip.handle(&FlipInput::OverlayClick);
        flip.handle(&FlipInput::BackClick { card: 0, exempt: true });

        assert_eq!(flip.open_card(), Some(0));
    }

    #[test]
    fn lite_closing_other_card_keeps_open_reference() {
        let mut flip = lite(3);
        flip.handle(&FlipInput::FrontClick(0));
        flip.handle(&FlipInput::BackClick { card: 1, exempt: false });

        assert_eq!(flip.open_card(), Some(0));
        assert_eq!(flip.surface().open_cards(), vec![0]);
    }

    #[test]
    fn overlay_and_lite_invariants_are_independent() {
        let mut cards = overlay(2);
        let mut lites = lite(2);

        cards.handle(&FlipInput::FrontClick(0));
        lites.handle(&FlipInput::FrontClick(1));
        lites.handle(&escape());

        assert_eq!(cards.open_card(), Some(0));
        assert_eq!(lites.open_card(), None);

        cards.handle(&escape());
        lites.handle(&FlipInput::FrontClick(0));
        assert_eq!(cards.open_card(), None);
        assert_eq!(lites.open_card(), Some(0));
    }
}
