use std::sync::Arc;

use poem_openapi::auth::Bearer;
use poem_openapi::{OpenApi, SecurityScheme, Tags, payload::Json};

use crate::api::Created;
use crate::app_data::AppData;
use crate::errors::AuthError;
use crate::types::dto::auth::{
    LoginRequest, LoginResponse, LogoutRequest, RefreshRequest, RefreshResponse, RegisterRequest,
    UsuarioResponse,
};
use crate::types::dto::common::MessageResponse;
use crate::types::internal::auth::Claims;

/// Authentication API endpoints
pub struct AuthApi {
    app_data: Arc<AppData>,
}

impl AuthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }

    async fn claims(&self, auth: &BearerAuth) -> Result<Claims, AuthError> {
        self.app_data
            .auth_service
            .authenticate(&auth.0.token)
            .await
            .map_err(AuthError::from_internal_error)
    }
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with username and password to receive authentication tokens
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
        let sesion = self
            .app_data
            .auth_service
            .login(&body.username, &body.password)
            .await
            .map_err(AuthError::from_internal_error)?;

        Ok(Json(LoginResponse {
            token: sesion.token,
            refresh_token: sesion.refresh_token,
            token_type: "Bearer".to_string(),
            expires_at: sesion.expires_at,
            usuario: sesion.usuario.into(),
        }))
    }

    /// Exchange a refresh token for a new access token
    #[oai(path = "/refresh", method = "post", tag = "AuthTags::Authentication")]
    async fn refresh(&self, body: Json<RefreshRequest>) -> Result<Json<RefreshResponse>, AuthError> {
        let (token, expires_at) = self
            .app_data
            .auth_service
            .refresh(&body.refresh_token)
            .await
            .map_err(AuthError::from_internal_error)?;

        Ok(Json(RefreshResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_at,
        }))
    }

    /// Register a system user (admin only)
    #[oai(path = "/register", method = "post", tag = "AuthTags::Authentication")]
    async fn register(
        &self,
        auth: BearerAuth,
        body: Json<RegisterRequest>,
    ) -> Result<Created<UsuarioResponse>, AuthError> {
        let claims = self.claims(&auth).await?;
        let usuario = self
            .app_data
            .auth_service
            .register(&claims, &body.0)
            .await
            .map_err(AuthError::from_internal_error)?;

        Ok(Created::Created(Json(usuario.into())))
    }

    /// The authenticated user's record
    #[oai(path = "/profile", method = "get", tag = "AuthTags::Authentication")]
    async fn profile(&self, auth: BearerAuth) -> Result<Json<UsuarioResponse>, AuthError> {
        let claims = self.claims(&auth).await?;
        let usuario = self
            .app_data
            .auth_service
            .profile(&claims)
            .await
            .map_err(AuthError::from_internal_error)?;

        Ok(Json(usuario.into()))
    }

    /// Revoke a refresh token
    #[oai(path = "/logout", method = "post", tag = "AuthTags::Authentication")]
    async fn logout(
        &self,
        auth: BearerAuth,
        body: Json<LogoutRequest>,
    ) -> Result<Json<MessageResponse>, AuthError> {
        self.claims(&auth).await?;
        self.app_data
            .auth_service
            .logout(&body.refresh_token)
            .await
            .map_err(AuthError::from_internal_error)?;

        Ok(Json(MessageResponse::new("Sesión cerrada correctamente")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SecretariasApi;
    use crate::errors::ApiError;
    use crate::test::utils::{
        TEST_PASSWORD, bearer, crear_usuario, desactivar_usuario, setup_test_app_data,
    };
    use crate::types::catalog::Rol;

    async fn setup() -> AuthApi {
        let app_data = setup_test_app_data().await;
        crear_usuario(&app_data.usuario_store, "admin", Rol::Admin).await;
        crear_usuario(&app_data.usuario_store, "tecnico", Rol::Tecnico).await;
        AuthApi::new(app_data)
    }

    fn login_request(username: &str, password: &str) -> Json<LoginRequest> {
        Json(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    fn registro(username: &str) -> Json<RegisterRequest> {
        Json(RegisterRequest {
            nombre: "Nuevo".to_string(),
            apellido: "Usuario".to_string(),
            email: format!("{}@tumaco.gov.co", username),
            username: username.to_string(),
            password: "clave123".to_string(),
            rol: Some(Rol::Tecnico),
            cedula: None,
        })
    }

    #[tokio::test]
    async fn test_login_returns_tokens_and_usuario() {
        let api = setup().await;

        let response = api.login(login_request("admin", TEST_PASSWORD)).await.unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert!(!response.token.is_empty());
        assert!(!response.refresh_token.is_empty());
        assert_eq!(response.usuario.username, "admin");
        assert!(response.usuario.ultimo_login.is_some());
    }

    #[tokio::test]
    async fn test_login_with_bad_password_is_invalid_credentials() {
        let api = setup().await;

        let result = api.login(login_request("admin", "incorrecta")).await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[tokio::test]
    async fn test_refresh_issues_new_access_token() {
        let api = setup().await;
        let login = api.login(login_request("tecnico", TEST_PASSWORD)).await.unwrap();

        let response = api
            .refresh(Json(RefreshRequest {
                refresh_token: login.refresh_token.clone(),
            }))
            .await
            .unwrap();

        let profile = api.profile(bearer(&response.token)).await.unwrap();
        assert_eq!(profile.username, "tecnico");
    }

    #[tokio::test]
    async fn test_refresh_with_unknown_token_fails() {
        let api = setup().await;

        let result = api
            .refresh(Json(RefreshRequest {
                refresh_token: "no-existe".to_string(),
            }))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidRefreshToken(_))));
    }

    #[tokio::test]
    async fn test_register_requires_admin_and_rejects_duplicates() {
        let api = setup().await;
        let tecnico = api.login(login_request("tecnico", TEST_PASSWORD)).await.unwrap();
        let admin = api.login(login_request("admin", TEST_PASSWORD)).await.unwrap();

        let result = api.register(bearer(&tecnico.token), registro("nuevo")).await;
        assert!(matches!(result, Err(AuthError::Forbidden(_))));

        let Created::Created(created) = api.register(bearer(&admin.token), registro("nuevo")).await.unwrap();
        assert_eq!(created.rol, Rol::Tecnico);

        let result = api.register(bearer(&admin.token), registro("nuevo")).await;
        assert!(matches!(result, Err(AuthError::DuplicateUser(_))));
    }

    #[tokio::test]
    async fn test_profile_rejects_garbage_token() {
        let api = setup().await;

        let result = api.profile(bearer("not-a-jwt")).await;

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn test_logout_revokes_refresh_token() {
        let api = setup().await;
        let login = api.login(login_request("tecnico", TEST_PASSWORD)).await.unwrap();

        api.logout(
            bearer(&login.token),
            Json(LogoutRequest {
                refresh_token: login.refresh_token.clone(),
            }),
        )
        .await
        .unwrap();

        let result = api
            .refresh(Json(RefreshRequest {
                refresh_token: login.refresh_token.clone(),
            }))
            .await;
        assert!(matches!(result, Err(AuthError::InvalidRefreshToken(_))));
    }

    #[tokio::test]
    async fn test_login_of_inactive_account_is_forbidden() {
        let app_data = setup_test_app_data().await;
        let usuario = crear_usuario(&app_data.usuario_store, "inactivo", Rol::Tecnico).await;
        desactivar_usuario(&app_data.db, usuario).await;
        let api = AuthApi::new(app_data);

        let result = api.login(login_request("inactivo", TEST_PASSWORD)).await;

        assert!(matches!(result, Err(AuthError::AccountDisabled(_))));
    }

    #[tokio::test]
    async fn test_token_stops_working_once_account_is_deactivated() {
        let app_data = setup_test_app_data().await;
        let usuario = crear_usuario(&app_data.usuario_store, "tecnico", Rol::Tecnico).await;
        let api = AuthApi::new(app_data.clone());
        let secretarias = SecretariasApi::new(app_data.clone());
        let login = api.login(login_request("tecnico", TEST_PASSWORD)).await.unwrap();

        assert!(secretarias.list(bearer(&login.token)).await.is_ok());

        desactivar_usuario(&app_data.db, usuario).await;

        let listed = secretarias.list(bearer(&login.token)).await;
        assert!(matches!(listed, Err(ApiError::Forbidden(_))));

        let profile = api.profile(bearer(&login.token)).await;
        assert!(matches!(profile, Err(AuthError::AccountDisabled(_))));
    }
}
