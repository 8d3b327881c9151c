//! Services for the records that hang off an equipment: peripherals, internal
//! hardware, software, network configuration, system accounts, remote access
//! and backups.

use std::sync::Arc;

use crate::errors::{InternalError, InventoryError};
use crate::services::validation::{optional, reference, required};
use crate::stores::{
    AccesoRemotoStore, BackupStore, ConfiguracionRedStore, EquipoStore, HardwareInternoStore,
    PerifericoStore, SoftwareStore, UsuarioSistemaStore,
};
use crate::types::db::{
    acceso_remoto, backup, configuracion_red, hardware_interno, periferico, software,
    usuario_sistema,
};
use crate::types::dto::componentes::{
    AccesoRemotoRequest, BackupRequest, ConfiguracionRedRequest, HardwareInternoRequest,
    PerifericoRequest, SoftwareRequest, UsuarioSistemaRequest,
};

/// The owning equipment of a body must exist (400)
async fn equipo_referenciado(equipos: &EquipoStore, equipo_id: i32) -> Result<(), InternalError> {
    reference(
        equipos.exists(equipo_id).await?,
        "El equipo especificado no existe",
    )
}

/// The equipment in a listing path must exist (404)
async fn equipo_encontrado(equipos: &EquipoStore, equipo_id: i32) -> Result<(), InternalError> {
    if equipos.exists(equipo_id).await? {
        Ok(())
    } else {
        Err(InventoryError::not_found("Equipo", equipo_id).into())
    }
}

pub struct PerifericoService {
    store: Arc<PerifericoStore>,
    equipos: Arc<EquipoStore>,
}

impl PerifericoService {
    pub fn new(store: Arc<PerifericoStore>, equipos: Arc<EquipoStore>) -> Self {
        Self { store, equipos }
    }

    async fn normalize(&self, data: &PerifericoRequest) -> Result<PerifericoRequest, InternalError> {
        equipo_referenciado(&self.equipos, data.equipo_id).await?;
        Ok(PerifericoRequest {
            equipo_id: data.equipo_id,
            tipo_periferico: data.tipo_periferico,
            placa_inventario: optional(&data.placa_inventario),
            marca: optional(&data.marca),
            serial: optional(&data.serial),
        })
    }

    pub async fn create(&self, data: &PerifericoRequest) -> Result<periferico::Model, InternalError> {
        let data = self.normalize(data).await?;
        let created = self.store.create(&data).await?;
        tracing::info!("Periferico {} created for equipo {}", created.id, created.equipo_id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<periferico::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<periferico::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    pub async fn list_by_equipo(&self, equipo_id: i32) -> Result<Vec<periferico::Model>, InternalError> {
        equipo_encontrado(&self.equipos, equipo_id).await?;
        self.store.find_by_equipo(equipo_id).await
    }

    pub async fn update(&self, id: i32, data: &PerifericoRequest) -> Result<periferico::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data).await?;
        self.store.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Periferico {} deleted", id);
        Ok(())
    }
}

pub struct HardwareInternoService {
    store: Arc<HardwareInternoStore>,
    equipos: Arc<EquipoStore>,
}

impl HardwareInternoService {
    pub fn new(store: Arc<HardwareInternoStore>, equipos: Arc<EquipoStore>) -> Self {
        Self { store, equipos }
    }

    async fn normalize(&self, data: &HardwareInternoRequest) -> Result<HardwareInternoRequest, InternalError> {
        let normalized = HardwareInternoRequest {
            equipo_id: data.equipo_id,
            componente: data.componente,
            tecnologia: required("tecnologia", &data.tecnologia)?,
            capacidad: required("capacidad", &data.capacidad)?,
        };
        equipo_referenciado(&self.equipos, normalized.equipo_id).await?;
        Ok(normalized)
    }

    pub async fn create(&self, data: &HardwareInternoRequest) -> Result<hardware_interno::Model, InternalError> {
        let data = self.normalize(data).await?;
        let created = self.store.create(&data).await?;
        tracing::info!("Hardware interno {} created for equipo {}", created.id, created.equipo_id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<hardware_interno::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<hardware_interno::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    pub async fn list_by_equipo(&self, equipo_id: i32) -> Result<Vec<hardware_interno::Model>, InternalError> {
        equipo_encontrado(&self.equipos, equipo_id).await?;
        self.store.find_by_equipo(equipo_id).await
    }

    pub async fn update(
        &self,
        id: i32,
        data: &HardwareInternoRequest,
    ) -> Result<hardware_interno::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data).await?;
        self.store.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Hardware interno {} deleted", id);
        Ok(())
    }
}

pub struct SoftwareService {
    store: Arc<SoftwareStore>,
    equipos: Arc<EquipoStore>,
}

impl SoftwareService {
    pub fn new(store: Arc<SoftwareStore>, equipos: Arc<EquipoStore>) -> Self {
        Self { store, equipos }
    }

    async fn normalize(&self, data: &SoftwareRequest) -> Result<SoftwareRequest, InternalError> {
        let normalized = SoftwareRequest {
            equipo_id: data.equipo_id,
            nombre: required("nombre", &data.nombre)?,
            version: optional(&data.version),
            tipo_licencia: optional(&data.tipo_licencia),
            categoria: data.categoria,
        };
        equipo_referenciado(&self.equipos, normalized.equipo_id).await?;
        Ok(normalized)
    }

    pub async fn create(&self, data: &SoftwareRequest) -> Result<software::Model, InternalError> {
        let data = self.normalize(data).await?;
        let created = self.store.create(&data).await?;
        tracing::info!("Software {} created for equipo {}", created.id, created.equipo_id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<software::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<software::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    pub async fn list_by_equipo(&self, equipo_id: i32) -> Result<Vec<software::Model>, InternalError> {
        equipo_encontrado(&self.equipos, equipo_id).await?;
        self.store.find_by_equipo(equipo_id).await
    }

    pub async fn update(&self, id: i32, data: &SoftwareRequest) -> Result<software::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data).await?;
        self.store.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Software {} deleted", id);
        Ok(())
    }
}

/// Network configuration; at most one per equipment
pub struct ConfiguracionRedService {
    store: Arc<ConfiguracionRedStore>,
    equipos: Arc<EquipoStore>,
}

impl ConfiguracionRedService {
    pub fn new(store: Arc<ConfiguracionRedStore>, equipos: Arc<EquipoStore>) -> Self {
        Self { store, equipos }
    }

    async fn normalize(
        &self,
        data: &ConfiguracionRedRequest,
        current_id: Option<i32>,
    ) -> Result<ConfiguracionRedRequest, InternalError> {
        let normalized = ConfiguracionRedRequest {
            equipo_id: data.equipo_id,
            direccion_ip: required("direccion_ip", &data.direccion_ip)?,
            asignacion_ip: data.asignacion_ip,
            nombre_dispositivo: required("nombre_dispositivo", &data.nombre_dispositivo)?,
            conectividad: optional(&data.conectividad),
        };
        equipo_referenciado(&self.equipos, normalized.equipo_id).await?;

        if let Some(existing) = self.store.find_by_equipo(normalized.equipo_id).await? {
            if Some(existing.id) != current_id {
                return Err(InventoryError::duplicate(
                    "El equipo ya tiene una configuración de red registrada",
                )
                .into());
            }
        }

        Ok(normalized)
    }

    pub async fn create(&self, data: &ConfiguracionRedRequest) -> Result<configuracion_red::Model, InternalError> {
        let data = self.normalize(data, None).await?;
        let created = self.store.create(&data).await?;
        tracing::info!("Configuracion de red {} created for equipo {}", created.id, created.equipo_id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<configuracion_red::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<configuracion_red::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    /// The configuration of an equipment, 404 when it has none
    pub async fn get_by_equipo(&self, equipo_id: i32) -> Result<configuracion_red::Model, InternalError> {
        equipo_encontrado(&self.equipos, equipo_id).await?;
        self.store.find_by_equipo(equipo_id).await?.ok_or_else(|| {
            InventoryError::NotFoundBy(format!(
                "El equipo {} no tiene configuración de red",
                equipo_id
            ))
            .into()
        })
    }

    pub async fn update(
        &self,
        id: i32,
        data: &ConfiguracionRedRequest,
    ) -> Result<configuracion_red::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data, Some(id)).await?;
        self.store.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Configuracion de red {} deleted", id);
        Ok(())
    }
}

/// Operating-system accounts; names are unique per equipment
pub struct UsuarioSistemaService {
    store: Arc<UsuarioSistemaStore>,
    equipos: Arc<EquipoStore>,
}

impl UsuarioSistemaService {
    pub fn new(store: Arc<UsuarioSistemaStore>, equipos: Arc<EquipoStore>) -> Self {
        Self { store, equipos }
    }

    async fn normalize(
        &self,
        data: &UsuarioSistemaRequest,
        current_id: Option<i32>,
    ) -> Result<UsuarioSistemaRequest, InternalError> {
        let normalized = UsuarioSistemaRequest {
            equipo_id: data.equipo_id,
            nombre_usuario: required("nombre_usuario", &data.nombre_usuario)?,
            contrasena: optional(&data.contrasena),
            es_administrador: data.es_administrador,
        };
        equipo_referenciado(&self.equipos, normalized.equipo_id).await?;

        if let Some(existing) = self
            .store
            .find_in_equipo(normalized.equipo_id, &normalized.nombre_usuario)
            .await?
        {
            if Some(existing.id) != current_id {
                return Err(InventoryError::duplicate(format!(
                    "El usuario {} ya existe en este equipo",
                    normalized.nombre_usuario
                ))
                .into());
            }
        }

        Ok(normalized)
    }

    pub async fn create(&self, data: &UsuarioSistemaRequest) -> Result<usuario_sistema::Model, InternalError> {
        let data = self.normalize(data, None).await?;
        let created = self.store.create(&data).await?;
        tracing::info!("Usuario de sistema {} created for equipo {}", created.id, created.equipo_id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<usuario_sistema::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<usuario_sistema::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    pub async fn list_by_equipo(&self, equipo_id: i32) -> Result<Vec<usuario_sistema::Model>, InternalError> {
        equipo_encontrado(&self.equipos, equipo_id).await?;
        self.store.find_by_equipo(equipo_id).await
    }

    /// Search by partial account name and/or equipment; blank criteria are ignored
    pub async fn buscar(
        &self,
        nombre_usuario: Option<String>,
        equipo_id: Option<i32>,
    ) -> Result<Vec<usuario_sistema::Model>, InternalError> {
        let nombre = optional(&nombre_usuario);
        self.store.search(nombre.as_deref(), equipo_id).await
    }

    pub async fn update(
        &self,
        id: i32,
        data: &UsuarioSistemaRequest,
    ) -> Result<usuario_sistema::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data, Some(id)).await?;
        self.store.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Usuario de sistema {} deleted", id);
        Ok(())
    }
}

pub struct AccesoRemotoService {
    store: Arc<AccesoRemotoStore>,
    equipos: Arc<EquipoStore>,
}

impl AccesoRemotoService {
    pub fn new(store: Arc<AccesoRemotoStore>, equipos: Arc<EquipoStore>) -> Self {
        Self { store, equipos }
    }

    async fn normalize(&self, data: &AccesoRemotoRequest) -> Result<AccesoRemotoRequest, InternalError> {
        let normalized = AccesoRemotoRequest {
            equipo_id: data.equipo_id,
            plataforma: optional(&data.plataforma),
            usuario: required("usuario", &data.usuario)?,
            contrasena: optional(&data.contrasena),
            id_conexion: required("id_conexion", &data.id_conexion)?,
        };
        equipo_referenciado(&self.equipos, normalized.equipo_id).await?;
        Ok(normalized)
    }

    pub async fn create(&self, data: &AccesoRemotoRequest) -> Result<acceso_remoto::Model, InternalError> {
        let data = self.normalize(data).await?;
        let created = self.store.create(&data).await?;
        tracing::info!("Acceso remoto {} created for equipo {}", created.id, created.equipo_id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<acceso_remoto::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<acceso_remoto::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    pub async fn list_by_equipo(&self, equipo_id: i32) -> Result<Vec<acceso_remoto::Model>, InternalError> {
        equipo_encontrado(&self.equipos, equipo_id).await?;
        self.store.find_by_equipo(equipo_id).await
    }

    pub async fn update(&self, id: i32, data: &AccesoRemotoRequest) -> Result<acceso_remoto::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data).await?;
        self.store.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Acceso remoto {} deleted", id);
        Ok(())
    }
}

pub struct BackupService {
    store: Arc<BackupStore>,
    equipos: Arc<EquipoStore>,
}

impl BackupService {
    pub fn new(store: Arc<BackupStore>, equipos: Arc<EquipoStore>) -> Self {
        Self { store, equipos }
    }

    async fn normalize(&self, data: &BackupRequest) -> Result<BackupRequest, InternalError> {
        if matches!(data.num_carpetas, Some(n) if n < 0) {
            return Err(InventoryError::validation("num_carpetas no puede ser negativo").into());
        }
        let normalized = BackupRequest {
            equipo_id: data.equipo_id,
            fecha: data.fecha,
            num_carpetas: data.num_carpetas,
            peso_total_archivos: optional(&data.peso_total_archivos),
            ruta_backup: required("ruta_backup", &data.ruta_backup)?,
            se_realizo_backup: data.se_realizo_backup,
        };
        equipo_referenciado(&self.equipos, normalized.equipo_id).await?;
        Ok(normalized)
    }

    pub async fn create(&self, data: &BackupRequest) -> Result<backup::Model, InternalError> {
        let data = self.normalize(data).await?;
        let created = self.store.create(&data).await?;
        tracing::info!("Backup {} created for equipo {}", created.id, created.equipo_id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<backup::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<backup::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    pub async fn list_by_equipo(&self, equipo_id: i32) -> Result<Vec<backup::Model>, InternalError> {
        equipo_encontrado(&self.equipos, equipo_id).await?;
        self.store.find_by_equipo(equipo_id).await
    }

    pub async fn update(&self, id: i32, data: &BackupRequest) -> Result<backup::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data).await?;
        self.store.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Backup {} deleted", id);
        Ok(())
    }
}
