//! Numeric prompt buffer and validation.
//!
//! Backs the themed number dialog: digits and an optional decimal point
//! accumulate into a display string under configurable constraints, and
//! submitting validates the result against the numeric bounds.

use thiserror::Error;

/// Constraints a number dialog enforces on its input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PromptConstraints {
    pub max_len: usize,
    pub allow_decimal: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Default for PromptConstraints {
    fn default() -> Self {
        Self {
            max_len: 6,
            allow_decimal: false,
            min: None,
            max: None,
        }
    }
}

/// Why a submitted value was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum PromptError {
    #[error("Bitte eine Zahl eingeben.")]
    Empty,
    #[error("Bitte mindestens {0} eingeben.")]
    BelowMin(f64),
    #[error("Bitte maximal {0} eingeben.")]
    AboveMax(f64),
}

/// Accumulated input of an open number dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberPrompt {
    value: String,
    constraints: PromptConstraints,
}

impl NumberPrompt {
    #[must_use]
    pub fn new(constraints: PromptConstraints) -> Self {
        Self {
            value: String::new(),
            constraints,
        }
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[must_use]
    pub const fn constraints(&self) -> &PromptConstraints {
        &self.constraints
    }

    /// Append a digit, respecting the length limit.
    pub fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() || self.value.len() >= self.constraints.max_len {
            return;
        }
        self.value.push(digit);
    }

    /// Append the decimal point. A leading point becomes `0.`; a second point
    /// is ignored, as is the whole press when decimals are not allowed.
    pub fn push_decimal(&mut self) {
        if !self.constraints.allow_decimal
            || self.value.contains('.')
            || self.value.len() >= self.constraints.max_len
        {
            return;
        }
        if self.value.is_empty() {
            self.value.push('0');
        }
        self.value.push('.');
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Validate the accumulated input against the constraints.
    ///
    /// # Errors
    /// Returns [`PromptError`] when the input is empty, not a number, or out
    /// of bounds. The buffer is left untouched so the dialog can stay open
    /// for correction.
    pub fn submit(&self) -> Result<f64, PromptError> {
        let parsed: f64 = self.value.parse().map_err(|_| PromptError::Empty)?;
        if !parsed.is_finite() {
            return Err(PromptError::Empty);
        }
        if let Some(min) = self.constraints.min {
            if parsed < min {
                return Err(PromptError::BelowMin(min));
            }
        }
        if let Some(max) = self.constraints.max {
            if parsed > max {
                return Err(PromptError::AboveMax(max));
            }
        }
        Ok(parsed)
    }
}
