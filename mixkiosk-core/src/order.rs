//! Order wire types for `POST /api/order`.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/order`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct OrderRequest {
    pub cocktail_id: u32,
}

/// Order confirmation payload.
///
/// The backend reports the mixing status and, for drinks with non-pumpable
/// ingredients, the manual preparation steps to show the user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct OrderConfirmation {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub cocktail: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl OrderConfirmation {
    /// One-line summary for the success notification.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut text = match (&self.cocktail, &self.volume) {
            (Some(name), Some(volume)) => format!("{name} ({volume}) wird gemischt."),
            (Some(name), None) => format!("{name} wird gemischt."),
            _ => "Dein Cocktail wird gemischt.".to_string(),
        };
        if !self.instructions.is_empty() {
            text.push(' ');
            text.push_str("Manuelle Schritte: ");
            text.push_str(&self.instructions.join(" "));
        }
        text
    }
}
