//! Style parsing errors.

/// Error returned when a string does not name a known style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStyleError {
    /// The input was empty or only whitespace
    Empty,
    /// The input is not one of the canonical style ids
    Unknown { name: String },
}

impl std::fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseStyleError::Empty => write!(f, "style name is empty"),
            ParseStyleError::Unknown { name } => {
                write!(f, "unknown style '{}'", name)
            }
        }
    }
}

impl std::error::Error for ParseStyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_error_display() {
        let err = ParseStyleError::Unknown {
            name: "gothic".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown"));
        assert!(msg.contains("gothic"));
    }

    #[test]
    fn test_empty_error_display() {
        assert_eq!(ParseStyleError::Empty.to_string(), "style name is empty");
    }
}
