use crate::errors::ApiError;
use crate::errors::internal::{CredentialError, InternalError, InventoryError};
use sea_orm::DbErr;

#[test]
fn test_not_found_names_the_entity() {
    let err = ApiError::from(InternalError::from(InventoryError::not_found("Equipo", 7)));
    assert!(matches!(err, ApiError::NotFound(_)));
    assert_eq!(err.message(), "Equipo no encontrado");
    assert_eq!(err.status_code(), 404);
}

#[test]
fn test_validation_and_reference_errors_are_bad_requests() {
    let validation = ApiError::from(InternalError::from(InventoryError::validation(
        "El campo marca es obligatorio",
    )));
    assert_eq!(validation.status_code(), 400);
    assert_eq!(validation.message(), "El campo marca es obligatorio");

    let reference = ApiError::from(InternalError::from(InventoryError::invalid_reference(
        "La dependencia no existe",
    )));
    assert!(matches!(reference, ApiError::BadRequest(_)));
}

#[test]
fn test_duplicate_is_conflict() {
    let err = ApiError::from(InternalError::from(InventoryError::duplicate(
        "Ya existe un equipo con ese serial",
    )));
    assert_eq!(err.status_code(), 409);
}

#[test]
fn test_infrastructure_errors_hide_details() {
    let err = ApiError::from(InternalError::database(
        "create_equipo",
        DbErr::Custom("disk full".into()),
    ));
    assert!(matches!(err, ApiError::InternalError(_)));
    assert!(!err.message().contains("disk full"));

    let render = ApiError::from(InternalError::render("reporte_servicio", "font missing"));
    assert_eq!(render.status_code(), 500);
}

#[test]
fn test_token_errors_are_unauthorized() {
    let err = ApiError::from(InternalError::from(CredentialError::ExpiredToken(
        "jwt".into(),
    )));
    assert_eq!(err.status_code(), 401);

    let role = ApiError::from(InternalError::from(CredentialError::InsufficientRole {
        required: "admin".into(),
    }));
    assert_eq!(role.status_code(), 403);
}
