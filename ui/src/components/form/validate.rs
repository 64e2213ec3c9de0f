//! Field validators: pattern matching for text inputs, uniqueness and
//! length bounds for lists.

use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

use super::store::FieldValidator;

/// Validator for `pattern`-constrained text fields.
///
/// Absent and empty values pass; the pattern only constrains what the user
/// actually typed. A pattern that does not compile degrades to a visible
/// field error instead of failing the render.
pub fn pattern_validator(pattern: &str) -> FieldValidator {
    match Regex::new(pattern) {
        Ok(re) => {
            let message = format!("String should follow pattern {}", pattern);
            Arc::new(move |value: &Value| match value {
                Value::String(s) if !s.is_empty() && !re.is_match(s) => Some(message.clone()),
                _ => None,
            })
        }
        Err(_) => {
            let message = format!("Invalid pattern {}", pattern);
            Arc::new(move |_: &Value| Some(message.clone()))
        }
    }
}

/// Indices of elements whose serialized form repeats an earlier element.
pub fn find_duplicates(items: &[Value]) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let serialized = item.to_string();
        if !seen.insert(serialized) {
            duplicates.push(idx);
        }
    }

    duplicates
}

/// Combined list validator: uniqueness, then `maxItems`, then `minItems`.
/// Later checks overwrite earlier ones, so a length violation reports over
/// a duplicate one.
pub fn list_validator(
    min_items: Option<u64>,
    max_items: Option<u64>,
    unique_items: bool,
) -> FieldValidator {
    Arc::new(move |value: &Value| {
        let empty = Vec::new();
        let items = value.as_array().unwrap_or(&empty);

        let mut error = None;
        if unique_items && !find_duplicates(items).is_empty() {
            error = Some(
                "Duplicate entries are not allowed. Please make sure each entry is unique."
                    .to_string(),
            );
        }
        if let Some(max) = max_items {
            if items.len() as u64 > max {
                error = Some(format!("You can only add up to {} items", max));
            }
        }
        if let Some(min) = min_items {
            if (items.len() as u64) < min {
                error = Some(format!("Please add at least {} items.", min));
            }
        }
        error
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pattern_validator_reports_literal_pattern() {
        let validate = pattern_validator("^[0-9]+$");

        assert_eq!(
            validate(&json!("12a")),
            Some("String should follow pattern ^[0-9]+$".to_string())
        );
        assert_eq!(validate(&json!("123")), None);
    }

    #[test]
    fn test_pattern_validator_passes_absent_values() {
        let validate = pattern_validator("^[0-9]+$");

        assert_eq!(validate(&json!("")), None);
        assert_eq!(validate(&Value::Null), None);
    }

    #[test]
    fn test_invalid_pattern_degrades_to_field_error() {
        let validate = pattern_validator("([");

        assert_eq!(validate(&json!("anything")), Some("Invalid pattern ([".to_string()));
    }

    #[test]
    fn test_find_duplicates_reports_later_indices() {
        let items = vec![json!({"a": 1}), json!({"a": 2}), json!({"a": 1})];
        assert_eq!(find_duplicates(&items), vec![2]);

        let distinct = vec![json!({"a": 1}), json!({"a": 2})];
        assert!(find_duplicates(&distinct).is_empty());
    }

    #[test]
    fn test_unique_items_violation() {
        let validate = list_validator(None, None, true);

        assert_eq!(
            validate(&json!([{"a": 1}, {"a": 1}])),
            Some(
                "Duplicate entries are not allowed. Please make sure each entry is unique."
                    .to_string()
            )
        );
        assert_eq!(validate(&json!([{"a": 1}, {"a": 2}])), None);
    }

    #[test]
    fn test_max_items_message_names_the_bound() {
        let validate = list_validator(None, Some(2), false);

        assert_eq!(
            validate(&json!(["a", "b", "c"])),
            Some("You can only add up to 2 items".to_string())
        );
        assert_eq!(validate(&json!(["a", "b"])), None);
    }

    #[test]
    fn test_min_items_message_names_the_bound() {
        let validate = list_validator(Some(2), None, false);

        assert_eq!(
            validate(&json!(["a"])),
            Some("Please add at least 2 items.".to_string())
        );
        assert_eq!(validate(&json!(["a", "b"])), None);
    }

    #[test]
    fn test_length_violation_overwrites_duplicate_report() {
        let validate = list_validator(None, Some(2), true);

        // Both checks fire; the later length check wins.
        assert_eq!(
            validate(&json!(["x", "x", "x"])),
            Some("You can only add up to 2 items".to_string())
        );
    }

    #[test]
    fn test_non_array_value_counts_as_empty() {
        let validate = list_validator(Some(1), None, false);

        assert_eq!(
            validate(&Value::Null),
            Some("Please add at least 1 items.".to_string())
        );
    }
}
