// Admin account creation from the command line

use crate::errors::{InternalError, InventoryError};
use crate::services::PasswordValidator;
use crate::services::crypto::generate_secure_password;
use crate::stores::{NuevoUsuario, UsuarioStore};
use crate::types::catalog::Rol;
use crate::types::db::usuario;

pub struct NuevoAdmin {
    pub username: String,
    pub email: String,
    pub nombre: String,
    pub apellido: String,
    pub password: Option<String>,
}

/// Create an admin account, printing the password when it was generated
pub async fn create_admin(store: &UsuarioStore, nuevo: NuevoAdmin) -> Result<usuario::Model, InternalError> {
    let generated = nuevo.password.is_none();
    let password = nuevo.password.unwrap_or_else(generate_secure_password);

    PasswordValidator::new()
        .validate(&password)
        .map_err(|e| InventoryError::validation(e.to_string()))?;

    let created = store
        .create_usuario(NuevoUsuario {
            nombre: nuevo.nombre,
            apellido: nuevo.apellido,
            email: nuevo.email,
            username: nuevo.username,
            password: password.clone(),
            rol: Rol::Admin,
            cedula: None,
        })
        .await?;

    tracing::info!("Admin {} created from CLI", created.id);
    println!("✓ Admin '{}' created", created.username);
    if generated {
        println!("  Password: {}", password);
        println!("  ⚠️  Store it now, it will not be shown again.");
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CredentialError;
    use crate::test::utils::{TEST_PEPPER, setup_test_db};

    fn nuevo(username: &str, password: Option<&str>) -> NuevoAdmin {
        NuevoAdmin {
            username: username.to_string(),
            email: format!("{}@tumaco-narino.gov.co", username),
            nombre: "Soporte".to_string(),
            apellido: "Sistemas".to_string(),
            password: password.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_admin_with_generated_password() {
        let store = UsuarioStore::new(setup_test_db().await, TEST_PEPPER.to_string());

        let created = create_admin(&store, nuevo("soporte", None)).await.unwrap();

        assert_eq!(created.rol, Rol::Admin);
        assert!(created.activo);
    }

    #[tokio::test]
    async fn test_create_admin_rejects_short_password_and_duplicates() {
        let store = UsuarioStore::new(setup_test_db().await, TEST_PEPPER.to_string());

        let short = create_admin(&store, nuevo("soporte", Some("abc"))).await;
        assert!(matches!(short, Err(InternalError::Inventory(InventoryError::Validation(_)))));

        create_admin(&store, nuevo("soporte", Some("clave-segura"))).await.unwrap();
        let duplicate = create_admin(&store, nuevo("soporte", Some("clave-segura"))).await;
        assert!(matches!(
            duplicate,
            Err(InternalError::Credential(CredentialError::DuplicateUser(_)))
        ));
    }
}
