// Stores layer - Data access over sea-orm entities
pub mod acceso_remoto_store;
pub mod backup_store;
pub mod configuracion_red_store;
pub mod dependencia_store;
pub mod equipo_store;
pub mod estado_equipo_store;
pub mod funcionario_store;
pub mod hardware_interno_store;
pub mod periferico_store;
pub mod reporte_servicio_store;
pub mod repuesto_store;
pub mod secretaria_store;
pub mod software_store;
pub mod tipo_mantenimiento_store;
pub mod usuario_responsable_store;
pub mod usuario_sistema_store;
pub mod usuario_store;

pub use acceso_remoto_store::AccesoRemotoStore;
pub use backup_store::BackupStore;
pub use configuracion_red_store::ConfiguracionRedStore;
pub use dependencia_store::DependenciaStore;
pub use equipo_store::{EquipoConHijos, EquipoStore};
pub use estado_equipo_store::EstadoEquipoStore;
pub use funcionario_store::FuncionarioStore;
pub use hardware_interno_store::HardwareInternoStore;
pub use periferico_store::PerifericoStore;
pub use reporte_servicio_store::{ReporteCompleto, ReporteResumenFila, ReporteServicioStore};
pub use repuesto_store::RepuestoStore;
pub use secretaria_store::SecretariaStore;
pub use software_store::SoftwareStore;
pub use tipo_mantenimiento_store::TipoMantenimientoStore;
pub use usuario_responsable_store::UsuarioResponsableStore;
pub use usuario_sistema_store::UsuarioSistemaStore;
pub use usuario_store::{NuevoUsuario, UsuarioStore};

#[cfg(test)]
mod equipo_store_test;
#[cfg(test)]
mod reporte_servicio_store_test;
