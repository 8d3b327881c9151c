use std::sync::Arc;

use crate::errors::{CredentialError, InternalError, InventoryError};
use crate::services::validation::{optional, required};
use crate::services::{PasswordValidator, TokenService};
use crate::stores::{NuevoUsuario, UsuarioStore};
use crate::types::catalog::{self, Rol};
use crate::types::db::usuario;
use crate::types::dto::auth::RegisterRequest;
use crate::types::internal::auth::Claims;

/// Tokens issued by a successful login
#[derive(Debug)]
pub struct Sesion {
    pub token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    pub usuario: usuario::Model,
}

/// Login, token refresh, registration and logout flows
pub struct AuthService {
    usuario_store: Arc<UsuarioStore>,
    token_service: Arc<TokenService>,
    password_validator: PasswordValidator,
}

impl AuthService {
    pub fn new(usuario_store: Arc<UsuarioStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            usuario_store,
            token_service,
            password_validator: PasswordValidator::new(),
        }
    }

    /// Verify credentials, stamp the login and issue both tokens
    pub async fn login(&self, username: &str, password: &str) -> Result<Sesion, InternalError> {
        let usuario = match self.usuario_store.verify_credentials(username.trim(), password).await {
            Ok(usuario) => usuario,
            Err(err) => {
                tracing::info!("Failed login for username {}", username);
                return Err(err);
            }
        };
        let usuario = self.usuario_store.touch_ultimo_login(usuario).await?;

        let (token, expires_at) = self.token_service.generate_jwt(&usuario)?;
        let refresh_token = self.token_service.generate_refresh_token();
        let token_hash = self.token_service.hash_refresh_token(&refresh_token)?;
        self.usuario_store
            .store_refresh_token(token_hash, usuario.id, self.token_service.get_refresh_expiration())
            .await?;

        tracing::info!("Usuario {} logged in", usuario.id);
        Ok(Sesion {
            token,
            refresh_token,
            expires_at,
            usuario,
        })
    }

    /// Exchange a refresh token for a new access token; the refresh token stays valid
    pub async fn refresh(&self, refresh_token: &str) -> Result<(String, i64), InternalError> {
        let token_hash = self.token_service.hash_refresh_token(refresh_token)?;
        let usuario_id = self.usuario_store.validate_refresh_token(&token_hash).await?;
        let usuario = self.usuario_store.find_by_id(usuario_id).await?;

        if !usuario.activo {
            return Err(CredentialError::AccountDisabled(usuario.username).into());
        }

        tracing::debug!("Access token refreshed for usuario {}", usuario.id);
        self.token_service.generate_jwt(&usuario)
    }

    /// Create a system user; only admins may register others
    pub async fn register(&self, claims: &Claims, data: &RegisterRequest) -> Result<usuario::Model, InternalError> {
        if !claims.is_admin() {
            return Err(CredentialError::InsufficientRole {
                required: catalog::label(&Rol::Admin),
            }
            .into());
        }

        self.password_validator
            .validate(&data.password)
            .map_err(|e| InventoryError::validation(e.to_string()))?;

        let nuevo = NuevoUsuario {
            nombre: required("nombre", &data.nombre)?,
            apellido: required("apellido", &data.apellido)?,
            email: required("email", &data.email)?,
            username: required("username", &data.username)?,
            password: data.password.clone(),
            rol: data.rol.unwrap_or_default(),
            cedula: optional(&data.cedula),
        };

        let created = self.usuario_store.create_usuario(nuevo).await?;
        tracing::info!("Usuario {} registered by {}", created.id, claims.sub);
        Ok(created)
    }

    pub async fn profile(&self, claims: &Claims) -> Result<usuario::Model, InternalError> {
        let usuario_id = claims
            .usuario_id()
            .ok_or_else(|| CredentialError::invalid_token("access_token", "malformed subject"))?;
        self.usuario_store.find_by_id(usuario_id).await
    }

    /// Revoke a refresh token
    pub async fn logout(&self, refresh_token: &str) -> Result<(), InternalError> {
        let token_hash = self.token_service.hash_refresh_token(refresh_token)?;
        let usuario_id = self.usuario_store.revoke_refresh_token(&token_hash).await?;
        tracing::info!("Usuario {} logged out", usuario_id);
        Ok(())
    }

    /// Claims of a bearer access token whose usuario still exists and is active
    pub async fn authenticate(&self, token: &str) -> Result<Claims, InternalError> {
        let claims = self.token_service.validate_jwt(token)?;
        let usuario_id = claims
            .usuario_id()
            .ok_or_else(|| CredentialError::invalid_token("access_token", "malformed subject"))?;

        match self.usuario_store.is_active(usuario_id).await? {
            Some(true) => Ok(claims),
            Some(false) => {
                tracing::debug!("Rejected token of inactive usuario {}", usuario_id);
                Err(CredentialError::AccountDisabled(claims.username).into())
            }
            None => Err(CredentialError::invalid_token("access_token", "unknown usuario").into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{
        TEST_JWT_SECRET, TEST_PEPPER, TEST_REFRESH_SECRET, desactivar_usuario, setup_test_db,
    };
    use sea_orm::{DatabaseConnection, EntityTrait};

    async fn setup() -> (AuthService, Arc<UsuarioStore>) {
        let (service, store, _db) = setup_with_db().await;
        (service, store)
    }

    async fn setup_with_db() -> (AuthService, Arc<UsuarioStore>, DatabaseConnection) {
        let db = setup_test_db().await;
        let store = Arc::new(UsuarioStore::new(db.clone(), TEST_PEPPER.to_string()));
        let tokens = Arc::new(TokenService::new(
            TEST_JWT_SECRET.to_string(),
            TEST_REFRESH_SECRET.to_string(),
            60,
            7,
        ));
        (AuthService::new(store.clone(), tokens), store, db)
    }

    async fn crear_usuario(store: &UsuarioStore, username: &str, rol: Rol) -> usuario::Model {
        store
            .create_usuario(NuevoUsuario {
                nombre: "Nombre".to_string(),
                apellido: "Apellido".to_string(),
                email: format!("{}@tumaco.gov.co", username),
                username: username.to_string(),
                password: "secreto123".to_string(),
                rol,
                cedula: None,
            })
            .await
            .unwrap()
    }

    fn registro(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            nombre: "Nuevo".to_string(),
            apellido: "Usuario".to_string(),
            email: format!("{}@tumaco.gov.co", username),
            username: username.to_string(),
            password: password.to_string(),
            rol: None,
            cedula: None,
        }
    }

    #[tokio::test]
    async fn test_login_issues_tokens_and_stamps_login() {
        let (service, store) = setup().await;
        crear_usuario(&store, "admin", Rol::Admin).await;

        let sesion = service.login("admin", "secreto123").await.unwrap();

        assert!(!sesion.token.is_empty());
        assert_eq!(sesion.refresh_token.len(), 44);
        assert!(sesion.usuario.ultimo_login.is_some());

        let claims = service.authenticate(&sesion.token).await.unwrap();
        assert_eq!(claims.usuario_id(), Some(sesion.usuario.id));
        assert!(claims.is_admin());
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_fails() {
        let (service, store) = setup().await;
        crear_usuario(&store, "admin", Rol::Admin).await;

        assert!(matches!(
            service.login("admin", "otra-clave").await,
            Err(InternalError::Credential(CredentialError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn test_refresh_keeps_refresh_token_valid() {
        let (service, store) = setup().await;
        crear_usuario(&store, "tecnico", Rol::Tecnico).await;
        let sesion = service.login("tecnico", "secreto123").await.unwrap();

        let (token, _) = service.refresh(&sesion.refresh_token).await.unwrap();
        assert_eq!(service.authenticate(&token).await.unwrap().rol, "tecnico");

        assert!(service.refresh(&sesion.refresh_token).await.is_ok());
    }

    #[tokio::test]
    async fn test_logout_revokes_refresh_token() {
        let (service, store) = setup().await;
        crear_usuario(&store, "tecnico", Rol::Tecnico).await;
        let sesion = service.login("tecnico", "secreto123").await.unwrap();

        service.logout(&sesion.refresh_token).await.unwrap();

        assert!(matches!(
            service.refresh(&sesion.refresh_token).await,
            Err(InternalError::Credential(CredentialError::InvalidToken { .. }))
        ));
    }

    #[tokio::test]
    async fn test_register_requires_admin() {
        let (service, store) = setup().await;
        crear_usuario(&store, "tecnico", Rol::Tecnico).await;
        let sesion = service.login("tecnico", "secreto123").await.unwrap();
        let claims = service.authenticate(&sesion.token).await.unwrap();

        assert!(matches!(
            service.register(&claims, &registro("nuevo", "clave123")).await,
            Err(InternalError::Credential(CredentialError::InsufficientRole { .. }))
        ));
    }

    #[tokio::test]
    async fn test_register_defaults_rol_and_rejects_short_password() {
        let (service, store) = setup().await;
        crear_usuario(&store, "admin", Rol::Admin).await;
        let sesion = service.login("admin", "secreto123").await.unwrap();
        let claims = service.authenticate(&sesion.token).await.unwrap();

        assert!(matches!(
            service.register(&claims, &registro("corto", "12345")).await,
            Err(InternalError::Inventory(InventoryError::Validation(_)))
        ));

        let created = service.register(&claims, &registro("nuevo", "clave123")).await.unwrap();
        assert_eq!(created.rol, Rol::Usuario);

        assert!(matches!(
            service.register(&claims, &registro("nuevo", "clave123")).await,
            Err(InternalError::Credential(CredentialError::DuplicateUser(_)))
        ));
    }

    #[tokio::test]
    async fn test_profile_returns_caller() {
        let (service, store) = setup().await;
        let usuario = crear_usuario(&store, "admin", Rol::Admin).await;
        let sesion = service.login("admin", "secreto123").await.unwrap();
        let claims = service.authenticate(&sesion.token).await.unwrap();

        assert_eq!(service.profile(&claims).await.unwrap().id, usuario.id);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_deactivated_usuario() {
        let (service, store, db) = setup_with_db().await;
        let usuario = crear_usuario(&store, "tecnico", Rol::Tecnico).await;
        let sesion = service.login("tecnico", "secreto123").await.unwrap();
        assert!(service.authenticate(&sesion.token).await.is_ok());

        desactivar_usuario(&db, usuario).await;

        assert!(matches!(
            service.authenticate(&sesion.token).await,
            Err(InternalError::Credential(CredentialError::AccountDisabled(_)))
        ));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_token_of_removed_usuario() {
        let (service, store, db) = setup_with_db().await;
        let usuario = crear_usuario(&store, "temporal", Rol::Usuario).await;
        let (token, _) = service.token_service.generate_jwt(&usuario).unwrap();

        usuario::Entity::delete_by_id(usuario.id).exec(&db).await.unwrap();

        assert!(matches!(
            service.authenticate(&token).await,
            Err(InternalError::Credential(CredentialError::InvalidToken { .. }))
        ));
    }
}
