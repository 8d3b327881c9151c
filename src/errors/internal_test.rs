use crate::errors::internal::{CredentialError, InternalError, InventoryError};
use sea_orm::DbErr;

#[test]
fn test_database_error_includes_operation() {
    let db_err = DbErr::RecordNotFound("test record".to_string());
    let error = InternalError::database("create_equipo", db_err);

    let error_string = error.to_string();
    assert!(error_string.contains("create_equipo"));
    assert!(error_string.contains("Database error"));
}

#[test]
fn test_transaction_errors_are_distinguished() {
    let begin = InternalError::transaction_begin(DbErr::Custom("locked".into()));
    assert!(begin.to_string().starts_with("Transaction begin failed"));

    let commit = InternalError::transaction_commit(DbErr::Custom("locked".into()));
    assert!(commit.to_string().starts_with("Transaction commit failed"));
}

#[test]
fn test_from_write_keeps_plain_database_errors() {
    let error = InternalError::from_write("update_equipo", DbErr::Custom("boom".into()));
    assert!(matches!(error, InternalError::Database(_)));
}

#[test]
fn test_parse_error_includes_value_type() {
    let error = InternalError::parse("fecha", "invalid format");

    let error_string = error.to_string();
    assert!(error_string.contains("fecha"));
    assert!(error_string.contains("Parse error"));
}

#[test]
fn test_crypto_error_includes_operation() {
    let error = InternalError::crypto("argon2_init", "invalid secret length");
    assert!(error.to_string().contains("argon2_init"));
}

#[test]
fn test_inventory_not_found_message() {
    let error = InventoryError::not_found("Secretaria", 3);
    assert_eq!(error.to_string(), "Secretaria with id 3 not found");
}

#[test]
fn test_credential_error_invalid_token() {
    let error = CredentialError::invalid_token("jwt", "signature invalid");
    assert_eq!(error.to_string(), "Invalid token: jwt - signature invalid");
}

#[test]
fn test_domain_errors_auto_convert_to_internal_error() {
    let internal_error: InternalError = CredentialError::InvalidCredentials.into();
    assert!(internal_error.to_string().contains("Invalid credentials"));

    let internal_error: InternalError = InventoryError::conflict("en uso").into();
    assert!(matches!(internal_error, InternalError::Inventory(_)));
}
