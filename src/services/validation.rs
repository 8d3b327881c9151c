//! Field normalization shared by the inventory services
//!
//! Request bodies are trimmed before they reach a store. Blank optional text is
//! stored as NULL.

use chrono::{DateTime, Utc};

use crate::errors::{InternalError, InventoryError};

/// Trim a required text field, rejecting blank values
pub fn required(field: &str, value: &str) -> Result<String, InternalError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        tracing::debug!("Validation rejected blank field {}", field);
        return Err(InventoryError::validation(format!("El campo {} es obligatorio", field)).into());
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank becomes None
pub fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Required field with a character-count window
pub fn length_between(field: &str, value: &str, min: usize, max: usize) -> Result<String, InternalError> {
    let trimmed = required(field, value)?;
    let len = trimmed.chars().count();
    if len < min || len > max {
        tracing::debug!("Validation rejected {} with length {}", field, len);
        return Err(InventoryError::validation(format!(
            "El campo {} debe tener entre {} y {} caracteres",
            field, min, max
        ))
        .into());
    }
    Ok(trimmed)
}

/// Reject an end date that precedes the start date
pub fn date_order(inicio: DateTime<Utc>, fin: Option<DateTime<Utc>>) -> Result<(), InternalError> {
    match fin {
        Some(fin) if fin < inicio => Err(InventoryError::validation(
            "La fecha de finalización no puede ser anterior a la fecha de inicio",
        )
        .into()),
        _ => Ok(()),
    }
}

/// Reject a referenced id that does not exist (400)
pub fn reference(exists: bool, message: &str) -> Result<(), InternalError> {
    if exists {
        Ok(())
    } else {
        tracing::debug!("Validation rejected reference: {}", message);
        Err(InventoryError::invalid_reference(message).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_required_trims_and_rejects_blank() {
        assert_eq!(required("nombre", "  Hacienda ").unwrap(), "Hacienda");

        let err = required("nombre", "   ").unwrap_err();
        assert!(matches!(
            err,
            InternalError::Inventory(InventoryError::Validation(ref m)) if m.contains("nombre")
        ));
    }

    #[test]
    fn test_optional_drops_blank_values() {
        assert_eq!(optional(&Some(" 3001234567 ".to_string())), Some("3001234567".to_string()));
        assert_eq!(optional(&Some("  ".to_string())), None);
        assert_eq!(optional(&None), None);
    }

    #[test]
    fn test_length_between_counts_characters() {
        assert!(length_between("nombre", "Dañado", 3, 50).is_ok());
        assert!(length_between("nombre", "ab", 3, 50).is_err());
        assert!(length_between("nombre", &"x".repeat(51), 3, 50).is_err());
    }

    #[test]
    fn test_date_order() {
        let inicio = Utc::now();
        assert!(date_order(inicio, None).is_ok());
        assert!(date_order(inicio, Some(inicio + Duration::hours(2))).is_ok());
        assert!(date_order(inicio, Some(inicio - Duration::minutes(1))).is_err());
    }

    #[test]
    fn test_reference_maps_to_invalid_reference() {
        assert!(reference(true, "x").is_ok());
        assert!(matches!(
            reference(false, "La dependencia especificada no existe"),
            Err(InternalError::Inventory(InventoryError::InvalidReference(_)))
        ));
    }
}
