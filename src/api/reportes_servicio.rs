use std::sync::Arc;

use poem_openapi::param::Path;
use poem_openapi::payload::{Binary, Json};
use poem_openapi::{ApiResponse, OpenApi, Tags};

use crate::api::{BearerAuth, Created, authenticate};
use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::pdf;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::reporte::{
    FuncionarioResponse, ReporteCompletoRequest, ReporteCompletoResponse, ReporteCreadoResponse,
    ReporteResumenResponse, ReporteServicioRequest, ReporteServicioResponse, RepuestoRequest,
    RepuestoResponse, TipoMantenimientoRequest, TipoMantenimientoResponse,
};
use crate::types::internal::auth::Claims;

#[derive(Tags)]
enum ReporteTags {
    /// Service reports, composite creation and PDF form
    ReportesServicio,
    /// Maintenance classification of a report
    TiposMantenimiento,
    /// Spare parts used in a service
    Repuestos,
}

/// Rendered service report form
#[derive(ApiResponse)]
pub enum PdfResponse {
    #[oai(status = 200, content_type = "application/pdf")]
    Pdf(Binary<Vec<u8>>, #[oai(header = "Content-Disposition")] String),
}

fn usuario_id(claims: &Claims) -> Result<i32, ApiError> {
    claims
        .usuario_id()
        .ok_or_else(|| ApiError::unauthorized("Token inválido o expirado"))
}

pub struct ReportesServicioApi {
    app_data: Arc<AppData>,
}

impl ReportesServicioApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }

    async fn render(&self, auth: &BearerAuth, id: i32, disposition: &str) -> Result<PdfResponse, ApiError> {
        let claims = authenticate(&self.app_data, auth).await?;
        let bytes = self
            .app_data
            .reporte_servicio_service
            .pdf(id, usuario_id(&claims)?)
            .await?;

        Ok(PdfResponse::Pdf(
            Binary(bytes),
            format!("{}; filename={}", disposition, pdf::file_name(id)),
        ))
    }
}

#[OpenApi(tag = "ReporteTags::ReportesServicio")]
impl ReportesServicioApi {
    /// Create a report header; the caller is recorded as its creator
    #[oai(path = "/reportes-servicio", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<ReporteServicioRequest>,
    ) -> Result<Created<ReporteServicioResponse>, ApiError> {
        let claims = authenticate(&self.app_data, &auth).await?;
        let created = self
            .app_data
            .reporte_servicio_service
            .create(&body.0, usuario_id(&claims)?)
            .await?;
        Ok(Created::Created(Json(created.into())))
    }

    /// Create a report with its maintenance type, spare parts and staff in one transaction
    #[oai(path = "/reportes-servicio/completo", method = "post")]
    async fn create_completo(
        &self,
        auth: BearerAuth,
        body: Json<ReporteCompletoRequest>,
    ) -> Result<Created<ReporteCreadoResponse>, ApiError> {
        let claims = authenticate(&self.app_data, &auth).await?;
        let completo = self
            .app_data
            .reporte_servicio_service
            .create_completo(&body.0, usuario_id(&claims)?)
            .await?;

        Ok(Created::Created(Json(ReporteCreadoResponse {
            message: "Reporte creado exitosamente".to_string(),
            reporte: completo.into(),
        })))
    }

    #[oai(path = "/reportes-servicio", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<ReporteServicioResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let reportes = self.app_data.reporte_servicio_service.list().await?;
        Ok(Json(reportes.into_iter().map(Into::into).collect()))
    }

    /// One row per report, newest first
    #[oai(path = "/reportes-servicio/resumen", method = "get")]
    async fn resumen(&self, auth: BearerAuth) -> Result<Json<Vec<ReporteResumenResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.reporte_servicio_service.resumen().await?))
    }

    #[oai(path = "/reportes-servicio/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<ReporteCompletoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.reporte_servicio_service.get_completo(id.0).await?.into()))
    }

    #[oai(path = "/reportes-servicio/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<ReporteServicioRequest>,
    ) -> Result<Json<ReporteServicioResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.reporte_servicio_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/reportes-servicio/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.reporte_servicio_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Reporte de servicio eliminado correctamente")))
    }

    #[oai(path = "/reportes-servicio/:id/tipos-mantenimiento", method = "get")]
    async fn tipos_mantenimiento(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<Vec<TipoMantenimientoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.tipo_mantenimiento_service.list_by_reporte(id.0).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/reportes-servicio/:id/repuestos", method = "get")]
    async fn repuestos(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<Vec<RepuestoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.repuesto_service.list_by_reporte(id.0).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/reportes-servicio/:id/funcionarios", method = "get")]
    async fn funcionarios(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<Vec<FuncionarioResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.funcionario_service.list_by_reporte(id.0).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    /// Download the report form as a PDF attachment
    #[oai(path = "/reportes-servicio/:id/pdf", method = "get")]
    async fn pdf(&self, auth: BearerAuth, id: Path<i32>) -> Result<PdfResponse, ApiError> {
        self.render(&auth, id.0, "attachment").await
    }

    /// Show the report form inline in the browser
    #[oai(path = "/reportes-servicio/:id/pdf/view", method = "get")]
    async fn pdf_view(&self, auth: BearerAuth, id: Path<i32>) -> Result<PdfResponse, ApiError> {
        self.render(&auth, id.0, "inline").await
    }
}

pub struct TiposMantenimientoApi {
    app_data: Arc<AppData>,
}

impl TiposMantenimientoApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "ReporteTags::TiposMantenimiento")]
impl TiposMantenimientoApi {
    #[oai(path = "/tipos-mantenimiento", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<TipoMantenimientoRequest>,
    ) -> Result<Created<TipoMantenimientoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.tipo_mantenimiento_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/tipos-mantenimiento", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<TipoMantenimientoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.tipo_mantenimiento_service.list().await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/tipos-mantenimiento/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<TipoMantenimientoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.tipo_mantenimiento_service.get(id.0).await?.into()))
    }

    #[oai(path = "/tipos-mantenimiento/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<TipoMantenimientoRequest>,
    ) -> Result<Json<TipoMantenimientoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.tipo_mantenimiento_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/tipos-mantenimiento/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.tipo_mantenimiento_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Tipo de mantenimiento eliminado correctamente")))
    }
}

pub struct RepuestosApi {
    app_data: Arc<AppData>,
}

impl RepuestosApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[OpenApi(tag = "ReporteTags::Repuestos")]
impl RepuestosApi {
    #[oai(path = "/repuestos", method = "post")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<RepuestoRequest>,
    ) -> Result<Created<RepuestoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let created = self.app_data.repuesto_service.create(&body.0).await?;
        Ok(Created::Created(Json(created.into())))
    }

    #[oai(path = "/repuestos", method = "get")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<RepuestoResponse>>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        let items = self.app_data.repuesto_service.list().await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/repuestos/:id", method = "get")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<RepuestoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.repuesto_service.get(id.0).await?.into()))
    }

    #[oai(path = "/repuestos/:id", method = "put")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<RepuestoRequest>,
    ) -> Result<Json<RepuestoResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        Ok(Json(self.app_data.repuesto_service.update(id.0, &body.0).await?.into()))
    }

    #[oai(path = "/repuestos/:id", method = "delete")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
        authenticate(&self.app_data, &auth).await?;
        self.app_data.repuesto_service.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Repuesto eliminado correctamente")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::test::utils::{admin_token, bearer, crear_equipo_completo, setup_test_app_data};
    use crate::types::catalog::{AreaFuncionario, ClaseMantenimiento, TipoFuncionario};
    use crate::types::dto::reporte::{FuncionarioRequest, RepuestoDetalle, TipoMantenimientoDetalle};

    fn encabezado(equipo_id: Option<i32>) -> ReporteServicioRequest {
        ReporteServicioRequest {
            equipo_id,
            fecha_inicio: Utc::now(),
            fecha_finalizacion: None,
            dependencia: "Sistemas".to_string(),
            ubicacion: "Piso 2".to_string(),
            diagnostico_falla: Some("No enciende".to_string()),
            actividad_realizada: "Cambio de fuente".to_string(),
            observaciones: None,
        }
    }

    fn detalle_tipo() -> TipoMantenimientoDetalle {
        TipoMantenimientoDetalle {
            tipo: ClaseMantenimiento::Correctivo,
            revision: true,
            instalacion: false,
            configuracion: false,
            ingreso: false,
            salida: false,
            concepto_baja: false,
            otro: false,
            descripcion_otro: None,
        }
    }

    fn repuesto(serial: &str) -> RepuestoDetalle {
        RepuestoDetalle {
            cantidad: 1,
            serial_numero_parte: serial.to_string(),
            marca: None,
            tecnologia: None,
            capacidad: None,
            descripcion: "Fuente de poder".to_string(),
            fecha_utilizacion: None,
        }
    }

    async fn crear_funcionario(app_data: &AppData, cedula: &str) -> i32 {
        app_data
            .funcionario_service
            .create(&FuncionarioRequest {
                nombre: "Carlos Angulo".to_string(),
                cargo: "Técnico".to_string(),
                cedula: cedula.to_string(),
                tipo: TipoFuncionario::Funcionario,
                area: AreaFuncionario::Sistemas,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_records_caller_as_creator() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let api = ReportesServicioApi::new(app_data);

        let Created::Created(created) = api.create(bearer(&token), Json(encabezado(None))).await.unwrap();

        assert!(created.creado_por_id.is_some());
        assert_eq!(created.equipo_id, None);
    }

    #[tokio::test]
    async fn test_end_before_start_is_bad_request() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let api = ReportesServicioApi::new(app_data);

        let mut request = encabezado(None);
        request.fecha_finalizacion = Some(request.fecha_inicio - Duration::hours(1));
        let result = api.create(bearer(&token), Json(request)).await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_create_completo_and_nested_listings() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let equipo = crear_equipo_completo(&app_data.db, "SER-500").await;
        let funcionario_id = crear_funcionario(&app_data, "1087555666").await;
        let api = ReportesServicioApi::new(app_data);

        let Created::Created(created) = api
            .create_completo(
                bearer(&token),
                Json(ReporteCompletoRequest {
                    reporte: encabezado(Some(equipo.id)),
                    tipo_mantenimiento: detalle_tipo(),
                    repuestos: vec![repuesto("FP-1"), repuesto("FP-2")],
                    funcionario_ids: vec![funcionario_id, funcionario_id],
                }),
            )
            .await
            .unwrap();

        assert_eq!(created.message, "Reporte creado exitosamente");
        let reporte_id = created.reporte.reporte.id;
        assert_eq!(created.reporte.tipos_mantenimiento.len(), 1);
        assert_eq!(created.reporte.repuestos.len(), 2);
        assert_eq!(created.reporte.funcionarios.len(), 1);
        assert!(created.reporte.creado_por_nombre.is_some());

        let repuestos = api.repuestos(bearer(&token), Path(reporte_id)).await.unwrap();
        assert_eq!(repuestos.len(), 2);
        let funcionarios = api.funcionarios(bearer(&token), Path(reporte_id)).await.unwrap();
        assert_eq!(funcionarios[0].id, funcionario_id);

        let resumen = api.resumen(bearer(&token)).await.unwrap();
        assert_eq!(resumen[0].repuestos, "Sí (2)");
        assert_eq!(resumen[0].tipo_mantenimiento.as_deref(), Some("CORRECTIVO"));
    }

    #[tokio::test]
    async fn test_create_completo_with_unknown_funcionario_writes_nothing() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let api = ReportesServicioApi::new(app_data);

        let result = api
            .create_completo(
                bearer(&token),
                Json(ReporteCompletoRequest {
                    reporte: encabezado(None),
                    tipo_mantenimiento: detalle_tipo(),
                    repuestos: vec![repuesto("FP-3")],
                    funcionario_ids: vec![777],
                }),
            )
            .await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
        assert!(api.list(bearer(&token)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_completo_rejects_otro_without_description() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let api = ReportesServicioApi::new(app_data);

        let result = api
            .create_completo(
                bearer(&token),
                Json(ReporteCompletoRequest {
                    reporte: encabezado(None),
                    tipo_mantenimiento: TipoMantenimientoDetalle {
                        otro: true,
                        ..detalle_tipo()
                    },
                    repuestos: vec![],
                    funcionario_ids: vec![],
                }),
            )
            .await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_pdf_download_and_inline_view() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let equipo = crear_equipo_completo(&app_data.db, "SER-501").await;
        let api = ReportesServicioApi::new(app_data);
        let Created::Created(created) = api
            .create(bearer(&token), Json(encabezado(Some(equipo.id))))
            .await
            .unwrap();

        let PdfResponse::Pdf(bytes, disposition) = api.pdf(bearer(&token), Path(created.id)).await.unwrap();
        assert!(bytes.0.starts_with(b"%PDF"));
        assert_eq!(
            disposition,
            format!("attachment; filename=reporte_servicio_{}.pdf", created.id)
        );

        let PdfResponse::Pdf(_, disposition) = api.pdf_view(bearer(&token), Path(created.id)).await.unwrap();
        assert!(disposition.starts_with("inline;"));

        let missing = api.pdf(bearer(&token), Path(999)).await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_tipo_mantenimiento_and_repuesto_apis() {
        let app_data = setup_test_app_data().await;
        let token = admin_token(&app_data).await;
        let reportes = ReportesServicioApi::new(app_data.clone());
        let tipos = TiposMantenimientoApi::new(app_data.clone());
        let repuestos = RepuestosApi::new(app_data);

        let Created::Created(reporte) = reportes.create(bearer(&token), Json(encabezado(None))).await.unwrap();

        let Created::Created(tipo) = tipos
            .create(
                bearer(&token),
                Json(TipoMantenimientoRequest {
                    reporte_id: reporte.id,
                    detalle: detalle_tipo(),
                }),
            )
            .await
            .unwrap();
        assert_eq!(tipo.tipo, ClaseMantenimiento::Correctivo);

        let unknown = tipos
            .create(
                bearer(&token),
                Json(TipoMantenimientoRequest {
                    reporte_id: 999,
                    detalle: detalle_tipo(),
                }),
            )
            .await;
        assert!(matches!(unknown, Err(ApiError::BadRequest(_))));

        let Created::Created(suelto) = repuestos
            .create(
                bearer(&token),
                Json(RepuestoRequest {
                    reporte_id: None,
                    detalle: repuesto("RAM-1"),
                }),
            )
            .await
            .unwrap();
        assert_eq!(suelto.reporte_id, None);

        let invalid = repuestos
            .create(
                bearer(&token),
                Json(RepuestoRequest {
                    reporte_id: Some(reporte.id),
                    detalle: RepuestoDetalle {
                        cantidad: 0,
                        ..repuesto("RAM-2")
                    },
                }),
            )
            .await;
        assert!(matches!(invalid, Err(ApiError::BadRequest(_))));
    }
}
