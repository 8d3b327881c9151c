use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, Set,
};

use crate::errors::{CredentialError, InternalError};
use crate::types::catalog::Rol;
use crate::types::db::refresh_token::{self, Entity as RefreshToken};
use crate::types::db::usuario::{self, Entity as Usuario};

/// Fields needed to create a system user
#[derive(Debug, Clone)]
pub struct NuevoUsuario {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub rol: Rol,
    pub cedula: Option<String>,
}

/// UsuarioStore manages system users and their refresh tokens
pub struct UsuarioStore {
    db: DatabaseConnection,
    password_pepper: String,
}

impl UsuarioStore {
    /// Create a new UsuarioStore
    ///
    /// # Arguments
    /// * `db` - The database connection
    /// * `password_pepper` - Secret mixed into every password hash (from SecretManager)
    pub fn new(db: DatabaseConnection, password_pepper: String) -> Self {
        Self {
            db,
            password_pepper,
        }
    }

    fn argon2(&self) -> Result<Argon2<'_>, InternalError> {
        Argon2::new_with_secret(
            self.password_pepper.as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
        .map_err(|e| InternalError::crypto("argon2_init", e.to_string()))
    }

    fn hash_password(&self, password: &str) -> Result<String, InternalError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);
        let hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredentialError::PasswordHashingFailed(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Add a new user with an argon2id password hash
    ///
    /// # Returns
    /// * `Ok(usuario::Model)` - The stored user
    /// * `Err(InternalError)` - DuplicateUser when username or email is taken
    pub async fn create_usuario(&self, nuevo: NuevoUsuario) -> Result<usuario::Model, InternalError> {
        let existing = Usuario::find()
            .filter(
                Condition::any()
                    .add(usuario::Column::Username.eq(&nuevo.username))
                    .add(usuario::Column::Email.eq(&nuevo.email)),
            )
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_usuario_duplicado", e))?;

        if existing.is_some() {
            return Err(CredentialError::DuplicateUser(nuevo.username).into());
        }

        let password_hash = self.hash_password(&nuevo.password)?;
        let now = Utc::now().timestamp();

        let model = usuario::ActiveModel {
            nombre: Set(nuevo.nombre),
            apellido: Set(nuevo.apellido),
            email: Set(nuevo.email),
            username: Set(nuevo.username.clone()),
            password_hash: Set(password_hash),
            rol: Set(nuevo.rol),
            activo: Set(true),
            cedula: Set(nuevo.cedula),
            ultimo_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))) {
                CredentialError::DuplicateUser(nuevo.username.clone()).into()
            } else {
                InternalError::database("create_usuario", e)
            }
        })
    }

    /// Verify a username/password pair
    ///
    /// Unknown users and wrong passwords both yield InvalidCredentials. A correct
    /// password on an inactive account yields AccountDisabled.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<usuario::Model, InternalError> {
        let usuario = self
            .find_by_username(username)
            .await?
            .ok_or(CredentialError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&usuario.password_hash)
            .map_err(|_| CredentialError::InvalidCredentials)?;

        self.argon2()?
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| CredentialError::InvalidCredentials)?;

        if !usuario.activo {
            return Err(CredentialError::AccountDisabled(usuario.username).into());
        }

        Ok(usuario)
    }

    /// Stamp the last successful login
    pub async fn touch_ultimo_login(&self, usuario: usuario::Model) -> Result<usuario::Model, InternalError> {
        let now = Utc::now().timestamp();
        let mut model = usuario.into_active_model();
        model.ultimo_login = Set(Some(now));
        model.updated_at = Set(now);

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_ultimo_login", e))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<usuario::Model, InternalError> {
        Usuario::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_usuario", e))?
            .ok_or_else(|| CredentialError::UserNotFound(id.to_string()).into())
    }

    /// `None` when the usuario does not exist
    pub async fn is_active(&self, id: i32) -> Result<Option<bool>, InternalError> {
        let usuario = Usuario::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("usuario_is_active", e))?;
        Ok(usuario.map(|u| u.activo))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<usuario::Model>, InternalError> {
        Usuario::find()
            .filter(usuario::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_usuario_by_username", e))
    }

    pub async fn count(&self) -> Result<u64, InternalError> {
        Usuario::find()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_usuarios", e))
    }

    /// Store the HMAC hash of a refresh token
    pub async fn store_refresh_token(
        &self,
        token_hash: String,
        usuario_id: i32,
        expires_at: i64,
    ) -> Result<(), InternalError> {
        let model = refresh_token::ActiveModel {
            token_hash: Set(token_hash),
            usuario_id: Set(usuario_id),
            expires_at: Set(expires_at),
            created_at: Set(Utc::now().timestamp()),
        };

        RefreshToken::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| InternalError::database("store_refresh_token", e))?;

        Ok(())
    }

    /// Validate a refresh token hash and return the owning user id
    ///
    /// # Returns
    /// * `Err(InternalError)` - InvalidToken if unknown, ExpiredToken if past its expiry
    pub async fn validate_refresh_token(&self, token_hash: &str) -> Result<i32, InternalError> {
        let token = RefreshToken::find_by_id(token_hash.to_string())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_refresh_token", e))?
            .ok_or_else(|| CredentialError::invalid_token("refresh_token", "not found"))?;

        if token.expires_at < Utc::now().timestamp() {
            return Err(CredentialError::ExpiredToken("refresh_token".to_string()).into());
        }

        Ok(token.usuario_id)
    }

    /// Revoke a refresh token by deleting it
    ///
    /// The refresh token itself is the authority; ownership is not checked.
    pub async fn revoke_refresh_token(&self, token_hash: &str) -> Result<i32, InternalError> {
        let token = RefreshToken::find_by_id(token_hash.to_string())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_refresh_token", e))?
            .ok_or_else(|| CredentialError::invalid_token("refresh_token", "not found"))?;

        RefreshToken::delete_by_id(token_hash.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("revoke_refresh_token", e))?;

        Ok(token.usuario_id)
    }
}

impl std::fmt::Debug for UsuarioStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsuarioStore")
            .field("db", &"<connection>")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_test_db() -> (DatabaseConnection, UsuarioStore) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let store = UsuarioStore::new(db.clone(), "test-pepper-for-unit-tests".to_string());
        (db, store)
    }

    fn nuevo(username: &str, email: &str) -> NuevoUsuario {
        NuevoUsuario {
            nombre: "Ana".to_string(),
            apellido: "Quiñones".to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password: "secreto123".to_string(),
            rol: Rol::Tecnico,
            cedula: Some("1087000111".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_usuario_hashes_password() {
        let (_db, store) = setup_test_db().await;

        let usuario = store
            .create_usuario(nuevo("ana", "ana@tumaco.gov.co"))
            .await
            .unwrap();

        assert_ne!(usuario.password_hash, "secreto123");
        assert!(usuario.password_hash.starts_with("$argon2id"));
        assert!(usuario.activo);
        assert_eq!(usuario.rol, Rol::Tecnico);
    }

    #[tokio::test]
    async fn test_create_usuario_rejects_duplicate_username_and_email() {
        let (_db, store) = setup_test_db().await;
        store
            .create_usuario(nuevo("ana", "ana@tumaco.gov.co"))
            .await
            .unwrap();

        let same_username = store.create_usuario(nuevo("ana", "otra@tumaco.gov.co")).await;
        assert!(matches!(
            same_username,
            Err(InternalError::Credential(CredentialError::DuplicateUser(_)))
        ));

        let same_email = store.create_usuario(nuevo("otra", "ana@tumaco.gov.co")).await;
        assert!(matches!(
            same_email,
            Err(InternalError::Credential(CredentialError::DuplicateUser(_)))
        ));
    }

    #[tokio::test]
    async fn test_verify_credentials() {
        let (_db, store) = setup_test_db().await;
        let created = store
            .create_usuario(nuevo("ana", "ana@tumaco.gov.co"))
            .await
            .unwrap();

        let ok = store.verify_credentials("ana", "secreto123").await.unwrap();
        assert_eq!(ok.id, created.id);

        let wrong = store.verify_credentials("ana", "otraclave").await;
        assert!(matches!(
            wrong,
            Err(InternalError::Credential(CredentialError::InvalidCredentials))
        ));

        let unknown = store.verify_credentials("nadie", "secreto123").await;
        assert!(matches!(
            unknown,
            Err(InternalError::Credential(CredentialError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn test_verify_credentials_rejects_inactive_user() {
        let (db, store) = setup_test_db().await;
        let created = store
            .create_usuario(nuevo("ana", "ana@tumaco.gov.co"))
            .await
            .unwrap();

        let mut model = created.into_active_model();
        model.activo = Set(false);
        model.update(&db).await.unwrap();

        let result = store.verify_credentials("ana", "secreto123").await;
        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::AccountDisabled(_)))
        ));
    }

    #[tokio::test]
    async fn test_is_active() {
        let (db, store) = setup_test_db().await;
        let created = store
            .create_usuario(nuevo("ana", "ana@tumaco.gov.co"))
            .await
            .unwrap();
        assert_eq!(store.is_active(created.id).await.unwrap(), Some(true));
        assert_eq!(store.is_active(created.id + 100).await.unwrap(), None);

        let id = created.id;
        let mut model = created.into_active_model();
        model.activo = Set(false);
        model.update(&db).await.unwrap();

        assert_eq!(store.is_active(id).await.unwrap(), Some(false));
    }

    #[tokio::test]
    async fn test_password_hash_depends_on_pepper() {
        let (db, store) = setup_test_db().await;
        store
            .create_usuario(nuevo("ana", "ana@tumaco.gov.co"))
            .await
            .unwrap();

        let other = UsuarioStore::new(db, "a-completely-different-pepper".to_string());
        assert!(other.verify_credentials("ana", "secreto123").await.is_err());
    }

    #[tokio::test]
    async fn test_touch_ultimo_login() {
        let (_db, store) = setup_test_db().await;
        let created = store
            .create_usuario(nuevo("ana", "ana@tumaco.gov.co"))
            .await
            .unwrap();
        assert!(created.ultimo_login.is_none());

        let updated = store.touch_ultimo_login(created).await.unwrap();
        assert!(updated.ultimo_login.is_some());
    }

    #[tokio::test]
    async fn test_refresh_token_lifecycle() {
        let (_db, store) = setup_test_db().await;
        let usuario = store
            .create_usuario(nuevo("ana", "ana@tumaco.gov.co"))
            .await
            .unwrap();

        let expires_at = Utc::now().timestamp() + 3600;
        store
            .store_refresh_token("hash-1".to_string(), usuario.id, expires_at)
            .await
            .unwrap();

        assert_eq!(store.validate_refresh_token("hash-1").await.unwrap(), usuario.id);
        assert_eq!(store.revoke_refresh_token("hash-1").await.unwrap(), usuario.id);

        let revoked = store.validate_refresh_token("hash-1").await;
        assert!(matches!(
            revoked,
            Err(InternalError::Credential(CredentialError::InvalidToken { .. }))
        ));
    }

    #[tokio::test]
    async fn test_expired_refresh_token() {
        let (_db, store) = setup_test_db().await;
        let usuario = store
            .create_usuario(nuevo("ana", "ana@tumaco.gov.co"))
            .await
            .unwrap();

        store
            .store_refresh_token("old".to_string(), usuario.id, Utc::now().timestamp() - 10)
            .await
            .unwrap();

        let result = store.validate_refresh_token("old").await;
        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::ExpiredToken(_)))
        ));
    }
}
