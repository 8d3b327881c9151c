//! Idempotent insertion of reference data and the bootstrap admin.
//!
//! Every row is matched by name before inserting, so running the seed again
//! changes nothing.

pub mod data;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::errors::InternalError;
use crate::services::crypto::generate_secure_password;
use crate::stores::{DependenciaStore, EstadoEquipoStore, NuevoUsuario, SecretariaStore, UsuarioStore};
use crate::types::catalog::Rol;
use crate::types::dto::organizacion::{DependenciaRequest, SecretariaRequest};

use self::data::{DEPENDENCIAS, ESTADOS, SECRETARIAS};

pub const ADMIN_USERNAME: &str = "admin";

/// Rows inserted by one seed run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeedReport {
    pub secretarias: usize,
    pub dependencias: usize,
    pub estados: usize,
    pub admin_created: bool,
}

pub struct Seeder {
    secretarias: SecretariaStore,
    dependencias: DependenciaStore,
    estados: EstadoEquipoStore,
    usuarios: Arc<UsuarioStore>,
}

impl Seeder {
    pub fn new(db: DatabaseConnection, usuarios: Arc<UsuarioStore>) -> Self {
        Self {
            secretarias: SecretariaStore::new(db.clone()),
            dependencias: DependenciaStore::new(db.clone()),
            estados: EstadoEquipoStore::new(db),
            usuarios,
        }
    }

    /// Seed everything in dependency order
    ///
    /// `admin_password` is used for the default admin; when absent a random
    /// password is generated and logged once.
    pub async fn seed_all(&self, admin_password: Option<String>) -> Result<SeedReport, InternalError> {
        tracing::info!("Seeding reference data");

        let report = SeedReport {
            secretarias: self.seed_secretarias().await?,
            dependencias: self.seed_dependencias().await?,
            estados: self.seed_estados().await?,
            admin_created: self.seed_admin(admin_password).await?,
        };

        tracing::info!(
            "Seed finished: {} secretarias, {} dependencias, {} estados inserted",
            report.secretarias,
            report.dependencias,
            report.estados
        );
        Ok(report)
    }

    async fn seed_secretarias(&self) -> Result<usize, InternalError> {
        let mut inserted = 0;
        for seed in &SECRETARIAS {
            if self.secretarias.find_by_nombre(seed.nombre).await?.is_some() {
                tracing::debug!("Secretaria '{}' already present", seed.nombre);
                continue;
            }
            self.secretarias
                .create(&SecretariaRequest {
                    nombre: seed.nombre.to_string(),
                    descripcion: seed.descripcion.to_string(),
                    ubicacion: seed.ubicacion.to_string(),
                    secretario: seed.secretario.to_string(),
                    telefono: Some(seed.telefono.to_string()).filter(|t| !t.is_empty()),
                })
                .await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn seed_dependencias(&self) -> Result<usize, InternalError> {
        let mut inserted = 0;
        for seed in &DEPENDENCIAS {
            let Some(secretaria) = self.secretarias.find_by_nombre(seed.secretaria).await? else {
                tracing::warn!(
                    "Secretaria '{}' not found for dependencia '{}'",
                    seed.secretaria,
                    seed.nombre
                );
                continue;
            };

            if self
                .dependencias
                .find_by_nombre_in_secretaria(seed.nombre, secretaria.id)
                .await?
                .is_some()
            {
                continue;
            }

            self.dependencias
                .create(&DependenciaRequest {
                    secretaria_id: secretaria.id,
                    nombre: seed.nombre.to_string(),
                    descripcion: seed.descripcion.to_string(),
                    ubicacion_oficina: seed.ubicacion_oficina.to_string(),
                    jefe_oficina: seed.jefe_oficina.to_string(),
                    correo_institucional: seed.correo_institucional.to_string(),
                    telefono: Some(seed.telefono.to_string()),
                })
                .await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn seed_estados(&self) -> Result<usize, InternalError> {
        let mut inserted = 0;
        for seed in &ESTADOS {
            if self.estados.find_by_nombre(seed.nombre).await?.is_some() {
                continue;
            }
            self.estados
                .create(seed.nombre, seed.descripcion, seed.activo)
                .await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Create the default admin when no user exists yet
    async fn seed_admin(&self, admin_password: Option<String>) -> Result<bool, InternalError> {
        if self.usuarios.count().await? > 0 {
            return Ok(false);
        }

        let generated = admin_password.is_none();
        let password = admin_password.unwrap_or_else(generate_secure_password);

        self.usuarios
            .create_usuario(NuevoUsuario {
                nombre: "Administrador".to_string(),
                apellido: "Sistema".to_string(),
                email: "admin@tumaco-narino.gov.co".to_string(),
                username: ADMIN_USERNAME.to_string(),
                password: password.clone(),
                rol: Rol::Admin,
                cedula: None,
            })
            .await?;

        if generated {
            tracing::warn!(
                "Default admin '{}' created with generated password: {} (change it after first login)",
                ADMIN_USERNAME,
                password
            );
        } else {
            tracing::info!("Default admin '{}' created", ADMIN_USERNAME);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{TEST_PEPPER, setup_test_db};

    #[tokio::test]
    async fn test_seed_inserts_reference_data() {
        let db = setup_test_db().await;
        let usuarios = Arc::new(UsuarioStore::new(db.clone(), TEST_PEPPER.to_string()));
        let seeder = Seeder::new(db.clone(), usuarios.clone());

        let report = seeder.seed_all(Some("admin-inicial".to_string())).await.unwrap();

        assert_eq!(
            report,
            SeedReport {
                secretarias: 5,
                dependencias: 10,
                estados: 5,
                admin_created: true,
            }
        );

        let activos = EstadoEquipoStore::new(db).find_activos().await.unwrap();
        assert_eq!(activos.len(), 1);
        assert_eq!(activos[0].nombre, "Activo");

        assert!(usuarios.verify_credentials(ADMIN_USERNAME, "admin-inicial").await.is_ok());
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = setup_test_db().await;
        let usuarios = Arc::new(UsuarioStore::new(db.clone(), TEST_PEPPER.to_string()));
        let seeder = Seeder::new(db.clone(), usuarios.clone());

        seeder.seed_all(None).await.unwrap();
        let second = seeder.seed_all(None).await.unwrap();

        assert_eq!(second, SeedReport::default());
        assert_eq!(SecretariaStore::new(db.clone()).find_all().await.unwrap().len(), 5);
        assert_eq!(DependenciaStore::new(db).find_all().await.unwrap().len(), 10);
        assert_eq!(usuarios.count().await.unwrap(), 1);
    }
}
