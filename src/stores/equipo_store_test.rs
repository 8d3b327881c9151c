use chrono::Utc;

use crate::errors::{InternalError, InventoryError};
use crate::stores::{EquipoStore, PerifericoStore, ReporteServicioStore, SoftwareStore};
use crate::test::utils::{crear_equipo_completo, equipo_request, setup_test_db};
use crate::types::catalog::TipoPeriferico;
use crate::types::dto::componentes::{PerifericoRequest, SoftwareRequest};
use crate::types::dto::reporte::ReporteServicioRequest;

fn periferico(equipo_id: i32) -> PerifericoRequest {
    PerifericoRequest {
        equipo_id,
        tipo_periferico: TipoPeriferico::Monitor,
        placa_inventario: None,
        marca: Some("Samsung".to_string()),
        serial: None,
    }
}

fn reporte(equipo_id: Option<i32>) -> ReporteServicioRequest {
    ReporteServicioRequest {
        equipo_id,
        fecha_inicio: Utc::now(),
        fecha_finalizacion: None,
        dependencia: "Sistemas".to_string(),
        ubicacion: "Piso 2".to_string(),
        diagnostico_falla: None,
        actividad_realizada: "Limpieza general".to_string(),
        observaciones: None,
    }
}

#[tokio::test]
async fn test_find_con_hijos_loads_children() {
    let db = setup_test_db().await;
    let store = EquipoStore::new(db.clone());
    let equipo = crear_equipo_completo(&db, "SER-001").await;

    PerifericoStore::new(db.clone()).create(&periferico(equipo.id)).await.unwrap();
    SoftwareStore::new(db.clone())
        .create(&SoftwareRequest {
            equipo_id: equipo.id,
            nombre: "LibreOffice".to_string(),
            version: Some("7.6".to_string()),
            tipo_licencia: None,
            categoria: None,
        })
        .await
        .unwrap();
    ReporteServicioStore::new(db.clone())
        .create(&reporte(Some(equipo.id)), None)
        .await
        .unwrap();

    let hijos = store.find_con_hijos(equipo.id).await.unwrap();

    assert_eq!(hijos.equipo.serial, "SER-001");
    assert_eq!(hijos.perifericos.len(), 1);
    assert_eq!(hijos.software.len(), 1);
    assert!(hijos.configuracion_red.is_none());
    assert_eq!(hijos.reportes_servicio.len(), 1);
}

#[tokio::test]
async fn test_delete_cascades_children_and_detaches_reports() {
    let db = setup_test_db().await;
    let store = EquipoStore::new(db.clone());
    let perifericos = PerifericoStore::new(db.clone());
    let reportes = ReporteServicioStore::new(db.clone());
    let equipo = crear_equipo_completo(&db, "SER-002").await;

    let hijo = perifericos.create(&periferico(equipo.id)).await.unwrap();
    let reporte = reportes.create(&reporte(Some(equipo.id)), None).await.unwrap();

    store.delete(equipo.id).await.unwrap();

    assert!(matches!(
        perifericos.find_by_id(hijo.id).await,
        Err(InternalError::Inventory(InventoryError::NotFound { .. }))
    ));
    let reporte = reportes.find_by_id(reporte.id).await.unwrap();
    assert_eq!(reporte.equipo_id, None);
}

#[tokio::test]
async fn test_delete_missing_equipo_is_not_found() {
    let db = setup_test_db().await;

    assert!(matches!(
        EquipoStore::new(db).delete(999).await,
        Err(InternalError::Inventory(InventoryError::NotFound { .. }))
    ));
}

#[tokio::test]
async fn test_duplicate_serial_is_rejected() {
    let db = setup_test_db().await;
    let store = EquipoStore::new(db);
    store.create(&equipo_request("SER-003")).await.unwrap();

    assert!(store.create(&equipo_request("SER-003")).await.is_err());
}

#[tokio::test]
async fn test_hoja_de_vida_joins_owner_office_and_status() {
    let db = setup_test_db().await;
    let store = EquipoStore::new(db.clone());
    let equipo = crear_equipo_completo(&db, "SER-004").await;
    let suelto = store.create(&equipo_request("SER-005")).await.unwrap();

    let filas = store.hojas_de_vida(Some(equipo.id)).await.unwrap();
    assert_eq!(filas.len(), 1);
    assert_eq!(filas[0].nombres_apellidos.as_deref(), Some("María Quiñones"));
    assert_eq!(filas[0].cedula.as_deref(), Some("CC-SER-004"));
    assert_eq!(filas[0].ubicacion_oficina.as_deref(), Some("Piso 2"));
    assert_eq!(filas[0].estado.as_deref(), Some("Estado SER-004"));

    let todas = store.hojas_de_vida(None).await.unwrap();
    assert_eq!(todas.len(), 2);
    let sin_dueno = todas.iter().find(|fila| fila.id == suelto.id).unwrap();
    assert!(sin_dueno.nombres_apellidos.is_none());
    assert!(sin_dueno.estado.is_none());
}

#[tokio::test]
async fn test_find_by_dependencia_follows_responsable() {
    let db = setup_test_db().await;
    let store = EquipoStore::new(db.clone());
    let equipo = crear_equipo_completo(&db, "SER-006").await;
    store.create(&equipo_request("SER-007")).await.unwrap();

    let responsable = crate::stores::UsuarioResponsableStore::new(db.clone())
        .find_by_id(equipo.usuario_responsable_id.unwrap())
        .await
        .unwrap();

    let equipos = store.find_by_dependencia(responsable.dependencia_id).await.unwrap();
    assert_eq!(equipos.len(), 1);
    assert_eq!(equipos[0].id, equipo.id);
}
