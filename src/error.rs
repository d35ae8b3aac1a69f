//! Crate-level error types.

use std::fmt;

use crate::interaction::NavigationBehavior;

/// Errors produced by the orbitrig crate.
///
/// Attachment mistakes (attaching twice, detaching the wrong host) are not
/// represented here: they are programming errors and fail fast with an
/// assertion instead.
#[derive(Debug)]
pub enum RigError {
    /// A parameter write was rejected because the value is outside its
    /// domain (non-positive distance, degenerate field of view, zero-length
    /// rotation axis, non-finite component).
    InvalidParameter {
        /// Name of the rejected parameter.
        name: &'static str,
        /// The offending value (axis length for rotation axes).
        value: f64,
    },
    /// No interaction handler exists for this input/response pairing.
    UnsupportedBehavior(NavigationBehavior),
    /// Generic I/O failure while loading or saving options.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl RigError {
    pub(crate) const fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid {name}: {value}")
            }
            Self::UnsupportedBehavior(nb) => {
                write!(
                    f,
                    "no interaction available for {:?}/{:?}",
                    nb.input, nb.response
                )
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{InputKind, ResponseKind};

    #[test]
    fn invalid_parameter_message_names_field() {
        let err = RigError::invalid("distance", -1.0);
        assert_eq!(err.to_string(), "invalid distance: -1");
    }

    #[test]
    fn unsupported_behavior_message() {
        let err = RigError::UnsupportedBehavior(NavigationBehavior::new(
            InputKind::Scroll,
            ResponseKind::Pan,
        ));
        assert_eq!(err.to_string(), "no interaction available for Scroll/Pan");
    }
}
