//! Input validation helpers
//!
//! Centralized limits and validation functions for order/cart input.
//! Rejections happen synchronously before any state mutation.

use crate::utils::AppError;

// ── Limits ──────────────────────────────────────────────────────────

/// Entity names: table ids, item names, guest names, modifier names
pub const MAX_NAME_LEN: usize = 200;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

/// Maximum allowed unit price (€1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {MAX_NAME_LEN})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a line quantity (strictly positive, bounded).
pub fn validate_quantity(quantity: i32, field: &str) -> Result<(), AppError> {
    if quantity <= 0 {
        return Err(AppError::validation(format!(
            "{field} must be positive, got {quantity}"
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"
        )));
    }
    Ok(())
}

/// Validate a unit price (finite, non-negative, bounded).
pub fn validate_price(price: f64, field: &str) -> Result<(), AppError> {
    if !price.is_finite() {
        return Err(AppError::validation(format!(
            "{field} must be a finite number, got {price}"
        )));
    }
    if price < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {price}"
        )));
    }
    if price > MAX_PRICE {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_PRICE}), got {price}"
        )));
    }
    Ok(())
}

/// Normalize a modifier list into the canonical set used for item identity:
/// trimmed, empty entries dropped, deduplicated, sorted.
pub fn normalize_modifiers(modifiers: &[String]) -> Vec<String> {
    let mut out: Vec<String> = modifiers
        .iter()
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("T3", "table").is_ok());
        assert!(validate_required_text("   ", "table").is_err());
        assert!(validate_required_text(&"x".repeat(201), "table").is_err());
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(validate_quantity(1, "quantity").is_ok());
        assert!(validate_quantity(0, "quantity").is_err());
        assert!(validate_quantity(-2, "quantity").is_err());
        assert!(validate_quantity(10_000, "quantity").is_err());
    }

    #[test]
    fn test_price_bounds() {
        assert!(validate_price(0.0, "price").is_ok());
        assert!(validate_price(-0.01, "price").is_err());
        assert!(validate_price(f64::NAN, "price").is_err());
        assert!(validate_price(f64::INFINITY, "price").is_err());
    }

    #[test]
    fn test_normalize_modifiers_sorted_deduped() {
        let raw = vec![
            " extra cheese ".to_string(),
            "no onion".to_string(),
            "extra cheese".to_string(),
            "".to_string(),
        ];
        assert_eq!(
            normalize_modifiers(&raw),
            vec!["extra cheese".to_string(), "no onion".to_string()]
        );
    }
}
