use crate::errors::AuthError;
use crate::errors::internal::{CredentialError, InternalError};
use sea_orm::DbErr;

#[test]
fn test_database_error_converts_to_internal_server_error() {
    let internal_err = InternalError::database("find_usuario", DbErr::RecordNotFound("x".into()));
    let auth_err = AuthError::from_internal_error(internal_err);

    assert!(matches!(auth_err, AuthError::InternalError(_)));
    assert_eq!(auth_err.message(), "Error interno del servidor");
}

#[test]
fn test_invalid_credentials_converts_correctly() {
    let auth_err = AuthError::from_internal_error(CredentialError::InvalidCredentials.into());
    assert!(matches!(auth_err, AuthError::InvalidCredentials(_)));
    assert_eq!(auth_err.message(), "Credenciales inválidas");
}

#[test]
fn test_disabled_account_is_forbidden() {
    let auth_err =
        AuthError::from_internal_error(CredentialError::AccountDisabled("tecnico1".into()).into());
    assert!(matches!(auth_err, AuthError::AccountDisabled(_)));
}

#[test]
fn test_token_type_selects_refresh_variant() {
    let invalid = AuthError::from_internal_error(
        CredentialError::invalid_token("refresh_token", "not found").into(),
    );
    assert!(matches!(invalid, AuthError::InvalidRefreshToken(_)));

    let expired =
        AuthError::from_internal_error(CredentialError::ExpiredToken("jwt".into()).into());
    assert!(matches!(expired, AuthError::ExpiredToken(_)));
}

#[test]
fn test_duplicate_user_is_conflict() {
    let auth_err =
        AuthError::from_internal_error(CredentialError::DuplicateUser("admin".into()).into());
    assert!(matches!(auth_err, AuthError::DuplicateUser(_)));
}
