//! Popup orchestration state.
//!
//! Exactly one popup is active at a time. Opening while another popup is
//! active swaps to the new one; closing always resets the ingredients side
//! panel. Every transition bumps a generation counter so that fetch
//! continuations issued for an earlier popup cycle can recognize themselves
//! as stale and drop their result.

use crate::pin::PinPurpose;

/// The popup kinds the kiosk can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Popup {
    /// Drink-detail popup for the cocktail with this id.
    Drink(u32),
    /// PIN entry popup, armed for this purpose.
    Pin(PinPurpose),
}

/// Orchestrator state: the active popup, the ingredients sub-panel flag and
/// the staleness generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupState {
    active: Option<Popup>,
    ingredients_open: bool,
    generation: u64,
}

impl PopupState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn active(&self) -> Option<Popup> {
        self.active
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub const fn ingredients_open(&self) -> bool {
        self.ingredients_open
    }

    /// Generation token to capture before issuing a popup-scoped fetch.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a fetch issued under `generation` may still apply its result.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Activate `popup`, swapping out whichever popup was active before.
    pub fn open(&mut self, popup: Popup) {
        self.active = Some(popup);
        self.ingredients_open = false;
        self.generation += 1;
    }

    /// Deactivate the active popup and reset the ingredients panel.
    pub fn close(&mut self) {
        if self.active.is_none() {
            return;
        }
        self.active = None;
        self.ingredients_open = false;
        self.generation += 1;
    }

    pub fn set_ingredients_open(&mut self, open: bool) {
        self.ingredients_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_swaps_the_active_popup() {
        let mut state = PopupState::new();
        state.open(Popup::Drink(1));
        assert_eq!(state.active(), Some(Popup::Drink(1)));
        state.open(Popup::Pin(PinPurpose::Admin));
        assert_eq!(state.active(), Some(Popup::Pin(PinPurpose::Admin)));
    }

    #[test]
    fn close_resets_ingredients_panel() {
        let mut state = PopupState::new();
        state.open(Popup::Drink(2));
        state.set_ingredients_open(true);
        state.close();
        assert!(!state.is_open());
        assert!(!state.ingredients_open());
    }

    #[test]
    fn swap_also_resets_ingredients_panel() {
        let mut state = PopupState::new();
        state.open(Popup::Drink(2));
        state.set_ingredients_open(true);
        state.open(Popup::Drink(3));
        assert!(!state.ingredients_open());
    }

    #[test]
    fn close_on_closed_state_is_a_noop() {
        let mut state = PopupState::new();
        let generation = state.generation();
        state.close();
        assert_eq!(state.generation(), generation);
    }

    #[test]
    fn transitions_invalidate_earlier_generations() {
        let mut state = PopupState::new();
        state.open(Popup::Drink(1));
        let issued = state.generation();
        assert!(state.is_current(issued));
        state.close();
        assert!(!state.is_current(issued));
        state.open(Popup::Drink(1));
        assert!(!state.is_current(issued));
    }
}
