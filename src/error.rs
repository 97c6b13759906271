//! Error types for color conversion and palette generation.

use thiserror::Error;

use crate::Component;

/// Result type alias for tinct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when converting colors or generating
/// palettes.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not `#` followed by exactly 6 hexadecimal digits.
    #[error("invalid hex color {input:?}, expected #RRGGBB")]
    InvalidHexFormat {
        /// The rejected input.
        input: String,
    },

    /// A palette must contain at least one color.
    #[error("invalid palette size {count}, at least 1 color is required")]
    InvalidCount {
        /// The rejected count.
        count: usize,
    },

    /// An HSL component is outside of its valid range, or not a number.
    #[error("{component} is out of range: {value}")]
    InvalidRange {
        /// Name of the offending component.
        component: &'static str,
        /// The rejected value.
        value: Component,
    },

    /// A strategy name that does not match any palette strategy.
    #[error("unknown palette strategy {name:?}")]
    UnknownStrategy {
        /// The rejected name.
        name: String,
    },

    /// The palette configuration could not be parsed.
    #[error("invalid palette configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHexFormat {
            input: input.into(),
        }
    }

    /// Check if this error was caused by a malformed value passed in by the
    /// caller, as opposed to a malformed configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidHexFormat { .. }
                | Error::InvalidCount { .. }
                | Error::InvalidRange { .. }
                | Error::UnknownStrategy { .. }
        )
    }
}
