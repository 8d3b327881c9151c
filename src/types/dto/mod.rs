// DTOs - request and response bodies of the HTTP API
pub mod auth;
pub mod common;
pub mod componentes;
pub mod equipo;
pub mod organizacion;
pub mod reporte;
