// Database entities - SeaORM models
pub mod acceso_remoto;
pub mod backup;
pub mod configuracion_red;
pub mod dependencia;
pub mod equipo;
pub mod estado_equipo;
pub mod funcionario;
pub mod hardware_interno;
pub mod periferico;
pub mod refresh_token;
pub mod reporte_funcionario;
pub mod reporte_servicio;
pub mod repuesto;
pub mod secretaria;
pub mod software;
pub mod tipo_mantenimiento;
pub mod usuario;
pub mod usuario_responsable;
pub mod usuario_sistema;
