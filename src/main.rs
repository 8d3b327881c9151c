use std::sync::Arc;

use clap::Parser;
use poem::http::Method;
use poem::listener::TcpListener;
use poem::middleware::{Cors, Tracing};
use poem::{EndpointExt, Route, Server};

use inventario_backend::api::api_service;
use inventario_backend::app_data::AppData;
use inventario_backend::cli::{self, Cli, Commands};
use inventario_backend::config::{BootstrapSettings, connect_database, init_logging, migrate_database};
use inventario_backend::seed::Seeder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let args = Cli::parse();

    init_logging()?;

    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded settings: {:?}", settings);

    let command = args.command();
    if command == Commands::Migrate {
        cli::migrate::run_migrations(&settings).await?;
        return Ok(());
    }

    let db = connect_database(&settings).await?;
    migrate_database(&db).await?;
    tracing::info!("Database ready at {}", settings.database_url());

    let app_data = Arc::new(AppData::init(db, &settings).await?);
    let admin_password = app_data.secret_manager.admin_password().map(str::to_string);

    if command != Commands::Serve {
        return cli::execute_command(command, &app_data, admin_password).await;
    }

    Seeder::new(app_data.db.clone(), app_data.usuario_store.clone())
        .seed_all(admin_password)
        .await?;

    let server_url = format!("http://{}/api", settings.server_address());
    let api = api_service(app_data, &server_url);
    let ui = api.swagger_ui();

    let cors = Cors::new()
        .allow_origins(settings.allowed_origins())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(["Origin", "Content-Type", "Accept", "Authorization"])
        .expose_headers(["Content-Length", "Content-Disposition"])
        .allow_credentials(true);

    let app = Route::new()
        .nest("/api", api)
        .nest("/swagger", ui)
        .with(cors)
        .with(Tracing);

    tracing::info!("Starting server on http://{}", settings.server_address());
    tracing::info!("Swagger UI available at http://{}/swagger", settings.server_address());

    Server::new(TcpListener::bind(settings.server_address()))
        .run(app)
        .await?;

    Ok(())
}
