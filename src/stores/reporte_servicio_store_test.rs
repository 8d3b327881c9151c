use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::stores::{FuncionarioStore, RepuestoStore, ReporteServicioStore, UsuarioStore};
use crate::test::utils::{TEST_PEPPER, crear_equipo_completo, crear_usuario, setup_test_db};
use crate::types::catalog::{AreaFuncionario, ClaseMantenimiento, Rol, TipoFuncionario};
use crate::types::db::{reporte_funcionario, reporte_servicio, repuesto, tipo_mantenimiento};
use crate::types::dto::reporte::{
    FuncionarioRequest, ReporteCompletoRequest, ReporteResumenResponse, ReporteServicioRequest,
    RepuestoDetalle, TipoMantenimientoDetalle,
};

fn cabecera(equipo_id: Option<i32>) -> ReporteServicioRequest {
    ReporteServicioRequest {
        equipo_id,
        fecha_inicio: Utc::now() - Duration::hours(2),
        fecha_finalizacion: Some(Utc::now()),
        dependencia: "Sistemas".to_string(),
        ubicacion: "Piso 2".to_string(),
        diagnostico_falla: Some("No enciende".to_string()),
        actividad_realizada: "Cambio de fuente".to_string(),
        observaciones: None,
    }
}

fn detalle(tipo: ClaseMantenimiento) -> TipoMantenimientoDetalle {
    TipoMantenimientoDetalle {
        tipo,
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

fn repuesto_detalle(serial: &str) -> RepuestoDetalle {
    RepuestoDetalle {
        cantidad: 1,
        serial_numero_parte: serial.to_string(),
        marca: Some("Corsair".to_string()),
        tecnologia: None,
        capacidad: Some("500W".to_string()),
        descripcion: "Fuente de poder".to_string(),
        fecha_utilizacion: None,
    }
}

async fn crear_funcionario(store: &FuncionarioStore, cedula: &str) -> i32 {
    store
        .create(&FuncionarioRequest {
            nombre: "Carlos Cortés".to_string(),
            cargo: "Técnico".to_string(),
            cedula: cedula.to_string(),
            tipo: TipoFuncionario::Contratista,
            area: AreaFuncionario::Sistemas,
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_create_full_writes_every_part() {
    let db = setup_test_db().await;
    let store = ReporteServicioStore::new(db.clone());
    let usuarios = UsuarioStore::new(db.clone(), TEST_PEPPER.to_string());
    let tecnico = crear_usuario(&usuarios, "tecnico", Rol::Tecnico).await;
    let equipo = crear_equipo_completo(&db, "SER-100").await;
    let funcionario_id = crear_funcionario(&FuncionarioStore::new(db.clone()), "111").await;

    let reporte = store
        .create_full(
            &ReporteCompletoRequest {
                reporte: cabecera(Some(equipo.id)),
                tipo_mantenimiento: detalle(ClaseMantenimiento::Correctivo),
                repuestos: vec![repuesto_detalle("PS-1"), repuesto_detalle("PS-2")],
                funcionario_ids: vec![funcionario_id],
            },
            Some(tecnico.id),
        )
        .await
        .unwrap();

    let completo = store.find_completo(reporte.id).await.unwrap();
    assert_eq!(completo.reporte.creado_por_id, Some(tecnico.id));
    assert_eq!(completo.creado_por.map(|u| u.username), Some("tecnico".to_string()));
    assert_eq!(completo.tipos_mantenimiento.len(), 1);
    assert_eq!(completo.tipos_mantenimiento[0].tipo, ClaseMantenimiento::Correctivo);
    assert_eq!(completo.repuestos.len(), 2);
    assert_eq!(completo.funcionarios.len(), 1);
}

#[tokio::test]
async fn test_create_full_rolls_back_on_unknown_funcionario() {
    let db = setup_test_db().await;
    let store = ReporteServicioStore::new(db.clone());
    let equipo = crear_equipo_completo(&db, "SER-101").await;

    let result = store
        .create_full(
            &ReporteCompletoRequest {
                reporte: cabecera(Some(equipo.id)),
                tipo_mantenimiento: detalle(ClaseMantenimiento::Preventivo),
                repuestos: vec![repuesto_detalle("PS-3")],
                funcionario_ids: vec![9999],
            },
            None,
        )
        .await;

    assert!(result.is_err());
    assert_eq!(reporte_servicio::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(tipo_mantenimiento::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(repuesto::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(reporte_funcionario::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_cascades_to_children() {
    let db = setup_test_db().await;
    let store = ReporteServicioStore::new(db.clone());
    let funcionario_id = crear_funcionario(&FuncionarioStore::new(db.clone()), "222").await;

    let reporte = store
        .create_full(
            &ReporteCompletoRequest {
                reporte: cabecera(None),
                tipo_mantenimiento: detalle(ClaseMantenimiento::Preventivo),
                repuestos: vec![repuesto_detalle("PS-4")],
                funcionario_ids: vec![funcionario_id],
            },
            None,
        )
        .await
        .unwrap();

    store.delete(reporte.id).await.unwrap();

    assert_eq!(tipo_mantenimiento::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(repuesto::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(reporte_funcionario::Entity::find().count(&db).await.unwrap(), 0);
    assert!(FuncionarioStore::new(db).exists(funcionario_id).await.unwrap());
}

#[tokio::test]
async fn test_resumen_counts_repuestos_and_formats_dates() {
    let db = setup_test_db().await;
    let store = ReporteServicioStore::new(db.clone());
    let usuarios = UsuarioStore::new(db.clone(), TEST_PEPPER.to_string());
    let admin = crear_usuario(&usuarios, "admin", Rol::Admin).await;

    let con_repuestos = store
        .create_full(
            &ReporteCompletoRequest {
                reporte: cabecera(None),
                tipo_mantenimiento: detalle(ClaseMantenimiento::Correctivo),
                repuestos: vec![repuesto_detalle("PS-5"), repuesto_detalle("PS-6")],
                funcionario_ids: vec![],
            },
            Some(admin.id),
        )
        .await
        .unwrap();
    let sin_nada = store.create(&cabecera(None), None).await.unwrap();

    let filas: Vec<ReporteResumenResponse> =
        store.resumen().await.unwrap().into_iter().map(Into::into).collect();
    assert_eq!(filas.len(), 2);

    let fila = filas.iter().find(|f| f.id == con_repuestos.id).unwrap();
    assert_eq!(fila.repuestos, "Sí (2)");
    assert_eq!(fila.tipo_mantenimiento.as_deref(), Some("CORRECTIVO"));
    assert_eq!(fila.creado_por_nombre.as_deref(), Some("Nombre Apellido"));
    assert_eq!(fila.fecha_inicio.len(), "2025-03-01 08:30".len());

    let fila = filas.iter().find(|f| f.id == sin_nada.id).unwrap();
    assert_eq!(fila.repuestos, "No");
    assert!(fila.tipo_mantenimiento.is_none());
    assert!(fila.creado_por_nombre.is_none());
}

#[tokio::test]
async fn test_repuesto_without_reporte_is_not_counted() {
    let db = setup_test_db().await;
    let store = ReporteServicioStore::new(db.clone());
    store.create(&cabecera(None), None).await.unwrap();
    RepuestoStore::new(db).create(None, &repuesto_detalle("PS-7")).await.unwrap();

    let filas = store.resumen().await.unwrap();
    assert_eq!(filas[0].total_repuestos, 0);
}
