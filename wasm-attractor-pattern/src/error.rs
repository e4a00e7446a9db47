//! Error types for pattern configuration.
//!
//! Every variant is a configuration problem reported back to the host. They
//! are raised before a reset touches any session state, so a rejected
//! configuration leaves the previous pattern intact.

use std::fmt;

use wasm_bindgen::JsValue;

/// Result type alias for pattern operations
pub type PatternResult<T> = Result<T, PatternError>;

#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// Family tag is not one of clifford, dejong or fujii
    UnknownFamily(String),

    /// Seed input could not be parsed as an unsigned integer
    InvalidSeed(String),

    /// Canvas cannot fit the fixed 50/80 pixel margins
    CanvasTooSmall { width: u32, height: u32 },

    /// Iteration budget must be positive
    InvalidIterationBudget(u64),

    /// Numeric setting outside of its allowed range
    OutOfRange { field: &'static str, value: f64 },

    /// Settings object from the host could not be decoded
    InvalidSettings(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::UnknownFamily(tag) => {
                write!(
                    f,
                    "Unknown attractor family '{}': expected clifford, dejong or fujii",
                    tag
                )
            }
            PatternError::InvalidSeed(input) => {
                write!(f, "Seed '{}' is not a non-negative integer", input)
            }
            PatternError::CanvasTooSmall { width, height } => {
                write!(
                    f,
                    "Canvas {}x{} is too small: at least {}x{} pixels are required",
                    width,
                    height,
                    crate::surface::MIN_CANVAS_SIZE,
                    crate::surface::MIN_CANVAS_SIZE
                )
            }
            PatternError::InvalidIterationBudget(budget) => {
                write!(f, "Iteration budget must be positive, got {}", budget)
            }
            PatternError::OutOfRange { field, value } => {
                write!(f, "Setting '{}' is out of range: {}", field, value)
            }
            PatternError::InvalidSettings(details) => {
                write!(f, "Invalid settings object: {}", details)
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl From<PatternError> for JsValue {
    fn from(err: PatternError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = PatternError::UnknownFamily("lorenz".into());
        assert!(err.to_string().contains("lorenz"));

        let err = PatternError::CanvasTooSmall {
            width: 100,
            height: 90,
        };
        let message = err.to_string();
        assert!(message.contains("100x90"));
        assert!(message.contains("130x130"));
    }
}
