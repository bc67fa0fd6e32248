use crate::domain::model::ClickType;
use crate::utils::error::{AkapunError, Result};
use std::str::FromStr;

/// Resolves the gesture string of a device event. Anything but the three
/// known gestures is rejected, never guessed.
pub fn resolve_click_type(raw: &str) -> Result<ClickType> {
    match raw {
        "SINGLE" => Ok(ClickType::Single),
        "DOUBLE" => Ok(ClickType::Double),
        "LONG" => Ok(ClickType::Long),
        other => Err(AkapunError::UnknownClickType(other.to_string())),
    }
}

impl FromStr for ClickType {
    type Err = AkapunError;

    fn from_str(s: &str) -> Result<Self> {
        resolve_click_type(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_gestures() {
        assert_eq!(resolve_click_type("SINGLE").unwrap(), ClickType::Single);
        assert_eq!(resolve_click_type("DOUBLE").unwrap(), ClickType::Double);
        assert_eq!(resolve_click_type("LONG").unwrap(), ClickType::Long);
        assert_eq!("LONG".parse::<ClickType>().unwrap(), ClickType::Long);
    }

    #[test]
    fn test_unknown_gesture_names_raw_string() {
        for raw in ["unknown-type", "", "single", "TRIPLE", " SINGLE"] {
            let err = resolve_click_type(raw).unwrap_err();
            assert_eq!(err.to_string(), format!("unknown click type was given: {}", raw));
        }
    }

    #[test]
    fn test_display_round_trips_through_resolver() {
        for click_type in [ClickType::Single, ClickType::Double, ClickType::Long] {
            assert_eq!(resolve_click_type(&click_type.to_string()).unwrap(), click_type);
        }
    }
}
