//! Service reports and the records attached to them.

use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::{InternalError, InventoryError};
use crate::pdf::{ServiceReportData, render_service_report};
use crate::services::validation::{date_order, optional, reference, required};
use crate::stores::{
    EquipoStore, FuncionarioStore, ReporteCompleto, ReporteServicioStore, RepuestoStore,
    TipoMantenimientoStore, UsuarioResponsableStore, UsuarioStore,
};
use crate::types::db::{reporte_servicio, repuesto, tipo_mantenimiento};
use crate::types::dto::reporte::{
    ReporteCompletoRequest, ReporteResumenResponse, ReporteServicioRequest, RepuestoDetalle,
    RepuestoRequest, TipoMantenimientoDetalle, TipoMantenimientoRequest,
};

fn normalize_reporte(data: &ReporteServicioRequest) -> Result<ReporteServicioRequest, InternalError> {
    let normalized = ReporteServicioRequest {
        equipo_id: data.equipo_id,
        fecha_inicio: data.fecha_inicio,
        fecha_finalizacion: data.fecha_finalizacion,
        dependencia: required("dependencia", &data.dependencia)?,
        ubicacion: required("ubicacion", &data.ubicacion)?,
        diagnostico_falla: optional(&data.diagnostico_falla),
        actividad_realizada: required("actividad_realizada", &data.actividad_realizada)?,
        observaciones: optional(&data.observaciones),
    };
    date_order(normalized.fecha_inicio, normalized.fecha_finalizacion)?;
    Ok(normalized)
}

fn normalize_tipo(detalle: &TipoMantenimientoDetalle) -> Result<TipoMantenimientoDetalle, InternalError> {
    let descripcion_otro = optional(&detalle.descripcion_otro);
    if detalle.otro && descripcion_otro.is_none() {
        tracing::debug!("Validation rejected otro without descripcion_otro");
        return Err(InventoryError::validation(
            "Debe especificar la descripción cuando se marca la opción Otro",
        )
        .into());
    }
    Ok(TipoMantenimientoDetalle {
        descripcion_otro,
        ..detalle.clone()
    })
}

fn normalize_repuesto(detalle: &RepuestoDetalle) -> Result<RepuestoDetalle, InternalError> {
    if detalle.cantidad <= 0 {
        tracing::debug!("Validation rejected repuesto cantidad {}", detalle.cantidad);
        return Err(InventoryError::validation("La cantidad debe ser mayor a 0").into());
    }
    Ok(RepuestoDetalle {
        cantidad: detalle.cantidad,
        serial_numero_parte: required("serial_numero_parte", &detalle.serial_numero_parte)?,
        marca: optional(&detalle.marca),
        tecnologia: optional(&detalle.tecnologia),
        capacidad: optional(&detalle.capacidad),
        descripcion: required("descripcion", &detalle.descripcion)?,
        fecha_utilizacion: detalle.fecha_utilizacion,
    })
}

/// Prefix a validation message with the 1-based position of the spare part
fn en_posicion(posicion: usize, err: InternalError) -> InternalError {
    match err {
        InternalError::Inventory(InventoryError::Validation(message)) => {
            InventoryError::validation(format!("Repuesto {}: {}", posicion, message)).into()
        }
        other => other,
    }
}

pub struct ReporteServicioService {
    store: Arc<ReporteServicioStore>,
    equipos: Arc<EquipoStore>,
    funcionarios: Arc<FuncionarioStore>,
    responsables: Arc<UsuarioResponsableStore>,
    usuarios: Arc<UsuarioStore>,
}

impl ReporteServicioService {
    pub fn new(
        store: Arc<ReporteServicioStore>,
        equipos: Arc<EquipoStore>,
        funcionarios: Arc<FuncionarioStore>,
        responsables: Arc<UsuarioResponsableStore>,
        usuarios: Arc<UsuarioStore>,
    ) -> Self {
        Self {
            store,
            equipos,
            funcionarios,
            responsables,
            usuarios,
        }
    }

    async fn normalize(&self, data: &ReporteServicioRequest) -> Result<ReporteServicioRequest, InternalError> {
        let normalized = normalize_reporte(data)?;
        if let Some(equipo_id) = normalized.equipo_id {
            reference(
                self.equipos.exists(equipo_id).await?,
                "El equipo especificado no existe",
            )?;
        }
        Ok(normalized)
    }

    pub async fn create(
        &self,
        data: &ReporteServicioRequest,
        creado_por_id: i32,
    ) -> Result<reporte_servicio::Model, InternalError> {
        let data = self.normalize(data).await?;
        let created = self.store.create(&data, Some(creado_por_id)).await?;
        tracing::info!("Reporte de servicio {} created by usuario {}", created.id, creado_por_id);
        Ok(created)
    }

    /// Validate the whole composite payload, then write it in one transaction
    ///
    /// Nothing is written when any check fails. The returned report is reloaded
    /// with its children after the commit.
    pub async fn create_completo(
        &self,
        data: &ReporteCompletoRequest,
        creado_por_id: i32,
    ) -> Result<ReporteCompleto, InternalError> {
        let reporte = normalize_reporte(&data.reporte)?;
        let tipo_mantenimiento = normalize_tipo(&data.tipo_mantenimiento)?;
        let repuestos = data
            .repuestos
            .iter()
            .enumerate()
            .map(|(i, detalle)| normalize_repuesto(detalle).map_err(|e| en_posicion(i + 1, e)))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(equipo_id) = reporte.equipo_id {
            if !self.equipos.exists(equipo_id).await? {
                return Err(InventoryError::not_found("Equipo", equipo_id).into());
            }
        }

        let mut vistos = HashSet::new();
        let mut funcionario_ids = Vec::new();
        for id in data.funcionario_ids.iter().copied() {
            if !vistos.insert(id) {
                continue;
            }
            reference(
                self.funcionarios.exists(id).await?,
                &format!("El funcionario con ID {} no existe", id),
            )?;
            funcionario_ids.push(id);
        }

        let normalized = ReporteCompletoRequest {
            reporte,
            tipo_mantenimiento,
            repuestos,
            funcionario_ids,
        };
        let created = self.store.create_full(&normalized, Some(creado_por_id)).await?;
        tracing::info!(
            "Reporte de servicio {} created with {} repuestos and {} funcionarios",
            created.id,
            normalized.repuestos.len(),
            normalized.funcionario_ids.len()
        );

        self.store.find_completo(created.id).await
    }

    pub async fn list(&self) -> Result<Vec<reporte_servicio::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get_completo(&self, id: i32) -> Result<ReporteCompleto, InternalError> {
        self.store.find_completo(id).await
    }

    pub async fn list_by_equipo(&self, equipo_id: i32) -> Result<Vec<reporte_servicio::Model>, InternalError> {
        if !self.equipos.exists(equipo_id).await? {
            return Err(InventoryError::not_found("Equipo", equipo_id).into());
        }
        self.store.find_by_equipo(equipo_id).await
    }

    pub async fn resumen(&self) -> Result<Vec<ReporteResumenResponse>, InternalError> {
        Ok(self.store.resumen().await?.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        data: &ReporteServicioRequest,
    ) -> Result<reporte_servicio::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let data = self.normalize(data).await?;
        self.store.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Reporte de servicio {} deleted", id);
        Ok(())
    }

    /// Render the report form; `usuario_id` is the system user signing for IT
    pub async fn pdf(&self, id: i32, usuario_id: i32) -> Result<Vec<u8>, InternalError> {
        let reporte = self.store.find_completo(id).await?;
        let tecnico = self.usuarios.find_by_id(usuario_id).await?;

        let equipo = match reporte.reporte.equipo_id {
            Some(equipo_id) => Some(self.equipos.find_by_id(equipo_id).await?),
            None => None,
        };
        let responsable = match equipo.as_ref().and_then(|e| e.usuario_responsable_id) {
            Some(responsable_id) => Some(self.responsables.find_by_id(responsable_id).await?),
            None => None,
        };

        let bytes = render_service_report(&ServiceReportData {
            reporte: &reporte,
            equipo: equipo.as_ref(),
            responsable: responsable.as_ref(),
            tecnico: &tecnico,
        })?;
        tracing::debug!("Rendered PDF for reporte {} ({} bytes)", id, bytes.len());
        Ok(bytes)
    }
}

pub struct TipoMantenimientoService {
    store: Arc<TipoMantenimientoStore>,
    reportes: Arc<ReporteServicioStore>,
}

impl TipoMantenimientoService {
    pub fn new(store: Arc<TipoMantenimientoStore>, reportes: Arc<ReporteServicioStore>) -> Self {
        Self { store, reportes }
    }

    async fn normalize(
        &self,
        data: &TipoMantenimientoRequest,
    ) -> Result<TipoMantenimientoDetalle, InternalError> {
        let detalle = normalize_tipo(&data.detalle)?;
        reference(
            self.reportes.exists(data.reporte_id).await?,
            "El reporte de servicio especificado no existe",
        )?;
        Ok(detalle)
    }

    pub async fn create(
        &self,
        data: &TipoMantenimientoRequest,
    ) -> Result<tipo_mantenimiento::Model, InternalError> {
        let detalle = self.normalize(data).await?;
        let created = self.store.create(data.reporte_id, &detalle).await?;
        tracing::info!("Tipo de mantenimiento {} created for reporte {}", created.id, created.reporte_id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<tipo_mantenimiento::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<tipo_mantenimiento::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    pub async fn list_by_reporte(&self, reporte_id: i32) -> Result<Vec<tipo_mantenimiento::Model>, InternalError> {
        if !self.reportes.exists(reporte_id).await? {
            return Err(InventoryError::not_found("Reporte de servicio", reporte_id).into());
        }
        self.store.find_by_reporte(reporte_id).await
    }

    pub async fn update(
        &self,
        id: i32,
        data: &TipoMantenimientoRequest,
    ) -> Result<tipo_mantenimiento::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let detalle = self.normalize(data).await?;
        self.store.update(id, data.reporte_id, &detalle).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Tipo de mantenimiento {} deleted", id);
        Ok(())
    }
}

pub struct RepuestoService {
    store: Arc<RepuestoStore>,
    reportes: Arc<ReporteServicioStore>,
}

impl RepuestoService {
    pub fn new(store: Arc<RepuestoStore>, reportes: Arc<ReporteServicioStore>) -> Self {
        Self { store, reportes }
    }

    async fn normalize(&self, data: &RepuestoRequest) -> Result<RepuestoDetalle, InternalError> {
        let detalle = normalize_repuesto(&data.detalle)?;
        if let Some(reporte_id) = data.reporte_id {
            reference(
                self.reportes.exists(reporte_id).await?,
                "El reporte de servicio especificado no existe",
            )?;
        }
        Ok(detalle)
    }

    pub async fn create(&self, data: &RepuestoRequest) -> Result<repuesto::Model, InternalError> {
        let detalle = self.normalize(data).await?;
        let created = self.store.create(data.reporte_id, &detalle).await?;
        tracing::info!("Repuesto {} created", created.id);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<repuesto::Model>, InternalError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<repuesto::Model, InternalError> {
        self.store.find_by_id(id).await
    }

    pub async fn list_by_reporte(&self, reporte_id: i32) -> Result<Vec<repuesto::Model>, InternalError> {
        if !self.reportes.exists(reporte_id).await? {
            return Err(InventoryError::not_found("Reporte de servicio", reporte_id).into());
        }
        self.store.find_by_reporte(reporte_id).await
    }

    pub async fn update(&self, id: i32, data: &RepuestoRequest) -> Result<repuesto::Model, InternalError> {
        self.store.find_by_id(id).await?;
        let detalle = self.normalize(data).await?;
        self.store.update(id, data.reporte_id, &detalle).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        self.store.delete(id).await?;
        tracing::info!("Repuesto {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::catalog::ClaseMantenimiento;

    fn detalle_repuesto(cantidad: i32, serial: &str) -> RepuestoDetalle {
        RepuestoDetalle {
            cantidad,
            serial_numero_parte: serial.to_string(),
            marca: Some("  ".to_string()),
            tecnologia: None,
            capacidad: None,
            descripcion: "Memoria".to_string(),
            fecha_utilizacion: None,
        }
    }

    #[test]
    fn test_normalize_repuesto_rejects_zero_quantity() {
        let err = normalize_repuesto(&detalle_repuesto(0, "X1")).unwrap_err();
        assert!(matches!(err, InternalError::Inventory(InventoryError::Validation(_))));
    }

    #[test]
    fn test_normalize_repuesto_blanks_optional_fields() {
        let detalle = normalize_repuesto(&detalle_repuesto(2, " X1 ")).unwrap();
        assert_eq!(detalle.serial_numero_parte, "X1");
        assert_eq!(detalle.marca, None);
    }

    #[test]
    fn test_position_is_added_to_validation_message() {
        let err = normalize_repuesto(&detalle_repuesto(1, "   "))
            .map_err(|e| en_posicion(3, e))
            .unwrap_err();
        match err {
            InternalError::Inventory(InventoryError::Validation(message)) => {
                assert!(message.starts_with("Repuesto 3:"), "{}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_otro_requires_description() {
        let detalle = TipoMantenimientoDetalle {
            tipo: ClaseMantenimiento::Preventivo,
            revision: false,
            instalacion: false,
            configuracion: false,
            ingreso: false,
            salida: false,
            concepto_baja: false,
            otro: true,
            descripcion_otro: Some(" ".to_string()),
        };
        assert!(normalize_tipo(&detalle).is_err());

        let detalle = TipoMantenimientoDetalle {
            descripcion_otro: Some(" Limpieza ".to_string()),
            ..detalle
        };
        assert_eq!(
            normalize_tipo(&detalle).unwrap().descripcion_otro.as_deref(),
            Some("Limpieza")
        );
    }
}
