//! Mixkiosk Core
//!
//! Platform-agnostic state and wire types for the mixkiosk ordering flow.
//! This crate carries the catalog model, the PIN entry state machine, the
//! popup orchestration state and the numeric prompt logic without any UI or
//! browser-specific dependencies.

pub mod catalog;
pub mod order;
pub mod pin;
pub mod popup;
pub mod prompt;

// Re-export commonly used types
pub use catalog::{
    CatalogView, CategoryFilter, Cocktail, Ingredient, IngredientStatus, RefillOutcome,
    catalog_view,
};
pub use order::{OrderConfirmation, OrderRequest};
pub use pin::{PIN_LENGTH, PinBuffer, PinCheckRequest, PinCheckResponse, PinPurpose};
pub use popup::{Popup, PopupState};
pub use prompt::{NumberPrompt, PromptConstraints, PromptError};
