//! PIN entry buffer and check-PIN wire types.
//!
//! The keypad feeds digits into a [`PinBuffer`]; once the buffer holds
//! [`PIN_LENGTH`] digits the caller is expected to take the code (which
//! drains the buffer) and dispatch it to the backend for verification.
//! Verification is server-authoritative; no PIN constant ships with the
//! client.

use serde::{Deserialize, Serialize};

/// Fixed number of digits a PIN consists of.
pub const PIN_LENGTH: usize = 4;

/// What a successful PIN entry unlocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinPurpose {
    Alcohol,
    Admin,
}

/// Body of `POST /api/check-pin`.
#[derive(Clone, Debug, Serialize)]
pub struct PinCheckRequest {
    pub pin: String,
    pub purpose: PinPurpose,
}

/// Response of `POST /api/check-pin`.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PinCheckResponse {
    pub valid: bool,
}

/// Accumulated digits of an in-progress PIN entry.
///
/// Invariants: length never exceeds [`PIN_LENGTH`], backspace on an empty
/// buffer is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PinBuffer {
    digits: String,
}

impl PinBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit. Returns false when the buffer is already full or the
    /// input is not a decimal digit.
    pub fn push(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || self.digits.len() >= PIN_LENGTH {
            return false;
        }
        self.digits.push(digit);
        true
    }

    /// Remove the last digit, if any.
    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Whether the indicator dot at `index` should render filled.
    #[must_use]
    pub fn filled(&self, index: usize) -> bool {
        index < self.digits.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.digits.len() == PIN_LENGTH
    }

    /// Take the completed code out of the buffer, leaving it empty.
    ///
    /// Returns `None` while the buffer is still short of [`PIN_LENGTH`], so a
    /// verification attempt can only ever fire once per completed entry.
    pub fn take_code(&mut self) -> Option<String> {
        if self.is_complete() {
            Some(std::mem::take(&mut self.digits))
        } else {
            None
        }
    }
}
