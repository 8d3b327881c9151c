// Services layer - Business rules over the stores
pub mod auth_service;
pub mod componente_service;
pub mod crypto;
pub mod dependencia_service;
pub mod equipo_service;
pub mod estado_equipo_service;
pub mod funcionario_service;
pub mod password_validator;
pub mod reporte_service;
pub mod secretaria_service;
pub mod token_service;
pub mod usuario_responsable_service;
pub mod validation;

pub use auth_service::{AuthService, Sesion};
pub use componente_service::{
    AccesoRemotoService, BackupService, ConfiguracionRedService, HardwareInternoService,
    PerifericoService, SoftwareService, UsuarioSistemaService,
};
pub use dependencia_service::DependenciaService;
pub use equipo_service::EquipoService;
pub use estado_equipo_service::EstadoEquipoService;
pub use funcionario_service::FuncionarioService;
pub use password_validator::{PasswordValidationError, PasswordValidator};
pub use reporte_service::{RepuestoService, ReporteServicioService, TipoMantenimientoService};
pub use secretaria_service::SecretariaService;
pub use token_service::TokenService;
pub use usuario_responsable_service::UsuarioResponsableService;
