//! # Delivery Areas
//!
//! Matches a pincode against the static serviceable-area table.
//!
//! ## Matching Rule
//! ```text
//! input "110023"  →  key "110" (or fewer chars for short input)
//!                       │
//!                       ▼
//!   ┌────────┬───────────┬────────────┐
//!   │ 110    │ New Delhi │ 30-45 mins │ ◄── first match wins
//!   │ 400    │ Mumbai    │ 25-40 mins │
//!   │ ...    │ ...       │ ...        │
//!   └────────┴───────────┴────────────┘
//! ```
//!
//! There is no remote service behind this; the lookup is synchronous. Any
//! artificial latency belongs to the caller.

use serde::Serialize;
use ts_rs::TS;

use crate::types::ServiceableArea;
use crate::validation::{validate_postal_code, ValidationResult};

/// Characters of a pincode that decide the delivery area.
pub const PREFIX_LENGTH: usize = 3;

/// Serviceable areas in match order.
pub const SERVICEABLE_AREAS: [ServiceableArea; 6] = [
    ServiceableArea { prefix: "110", area: "New Delhi", eta_range: "30-45 mins" },
    ServiceableArea { prefix: "400", area: "Mumbai", eta_range: "25-40 mins" },
    ServiceableArea { prefix: "560", area: "Bangalore", eta_range: "35-50 mins" },
    ServiceableArea { prefix: "600", area: "Chennai", eta_range: "40-60 mins" },
    ServiceableArea { prefix: "700", area: "Kolkata", eta_range: "30-45 mins" },
    ServiceableArea { prefix: "500", area: "Hyderabad", eta_range: "35-50 mins" },
];

/// Outcome of an availability check.
///
/// `area` and `eta_range` are present exactly when `available` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCheck {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_range: Option<String>,
}

impl DeliveryCheck {
    fn not_available() -> Self {
        DeliveryCheck {
            available: false,
            area: None,
            eta_range: None,
        }
    }
}

impl From<&ServiceableArea> for DeliveryCheck {
    fn from(area: &ServiceableArea) -> Self {
        DeliveryCheck {
            available: true,
            area: Some(area.area.to_string()),
            eta_range: Some(area.eta_range.to_string()),
        }
    }
}

/// Up to the first 3 characters of `s`.
fn lookup_key(s: &str) -> &str {
    s.char_indices()
        .nth(PREFIX_LENGTH)
        .map_or(s, |(idx, _)| &s[..idx])
}

/// Finds the serviceable area for a pincode in a given table.
///
/// An area matches when its prefix starts with the first (up to) 3
/// characters of the trimmed input, so a partial "11" still lands on
/// New Delhi. Blank input matches nothing.
pub fn find_area<'a>(areas: &'a [ServiceableArea], postal_code: &str) -> Option<&'a ServiceableArea> {
    let postal_code = postal_code.trim();
    if postal_code.is_empty() {
        return None;
    }

    let key = lookup_key(postal_code);
    areas.iter().find(|a| a.prefix.starts_with(key))
}

/// Checks whether the storefront delivers to a pincode.
///
/// No format check: anything that does not match reads as "not available".
///
/// ## Example
/// ```rust
/// use spirit_core::delivery::check_availability;
///
/// let check = check_availability("110023");
/// assert!(check.available);
/// assert_eq!(check.area.as_deref(), Some("New Delhi"));
///
/// assert!(!check_availability("999999").available);
/// ```
pub fn check_availability(postal_code: &str) -> DeliveryCheck {
    find_area(&SERVICEABLE_AREAS, postal_code)
        .map(DeliveryCheck::from)
        .unwrap_or_else(DeliveryCheck::not_available)
}

/// Validates the pincode first, so a malformed code is reported as such
/// instead of as "not serviceable".
pub fn check_postal_code(postal_code: &str) -> ValidationResult<DeliveryCheck> {
    let code = validate_postal_code(postal_code)?;
    Ok(check_availability(code))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_new_delhi_prefix() {
        let check = check_availability("110023");
        assert_eq!(
            check,
            DeliveryCheck {
                available: true,
                area: Some("New Delhi".to_string()),
                eta_range: Some("30-45 mins".to_string()),
            }
        );
    }

    #[test]
    fn test_unknown_prefix() {
        let check = check_availability("999999");
        assert!(!check.available);
        assert!(check.area.is_none());
        assert!(check.eta_range.is_none());
    }

    #[test]
    fn test_every_table_entry_matches_itself() {
        for area in &SERVICEABLE_AREAS {
            let code = format!("{}001", area.prefix);
            assert_eq!(check_availability(&code).area.as_deref(), Some(area.area));
        }
    }

    #[test]
    fn test_short_input_matches_leading_digits() {
        assert_eq!(check_availability("4").area.as_deref(), Some("Mumbai"));
        assert_eq!(check_availability("11").area.as_deref(), Some("New Delhi"));
        assert_eq!(check_availability("56").area.as_deref(), Some("Bangalore"));
        // "5" hits Bangalore before Hyderabad: first match wins
        assert_eq!(check_availability("5").area.as_deref(), Some("Bangalore"));
        assert!(!check_availability("9").available);
    }

    #[test]
    fn test_blank_input_never_matches() {
        assert!(!check_availability("").available);
        assert!(!check_availability("   ").available);
    }

    #[test]
    fn test_input_is_trimmed() {
        assert!(check_availability("  560034 ").available);
    }

    #[test]
    fn test_first_match_wins() {
        let areas = [
            ServiceableArea { prefix: "400", area: "Mumbai", eta_range: "25-40 mins" },
            ServiceableArea { prefix: "400", area: "Thane", eta_range: "45-60 mins" },
        ];
        assert_eq!(find_area(&areas, "400607").map(|a| a.area), Some("Mumbai"));
    }

    #[test]
    fn test_check_postal_code_distinguishes_bad_format() {
        assert!(check_postal_code("700091").unwrap().available);
        assert!(!check_postal_code("999999").unwrap().available);
        assert!(matches!(
            check_postal_code("7000"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            check_postal_code(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_serialization_omits_missing_fields() {
        let json = serde_json::to_value(check_availability("999999")).unwrap();
        assert_eq!(json, serde_json::json!({ "available": false }));

        let json = serde_json::to_value(check_availability("400001")).unwrap();
        assert_eq!(json["etaRange"], "25-40 mins");
    }
}
