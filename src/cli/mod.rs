// CLI module for running the server and one-off administrative tasks

pub mod admin;
pub mod migrate;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;
use crate::seed::Seeder;

/// Inventario backend command line
#[derive(Parser, Debug)]
#[command(name = "inventario-backend")]
#[command(about = "Municipal IT inventory backend", long_about = None)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Migrate, seed and start the HTTP server
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Insert reference data and the default admin, skipping what exists
    Seed,

    /// Create an additional admin account
    CreateAdmin {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "Administrador")]
        nombre: String,

        #[arg(long, default_value = "Sistema")]
        apellido: String,

        /// Generated and printed once when omitted
        #[arg(long)]
        password: Option<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}

/// Execute a one-off command against an initialized AppData
///
/// `Serve` and `Migrate` are handled by main.rs before this is reached.
pub async fn execute_command(
    command: Commands,
    app_data: &AppData,
    admin_password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Seed => {
            let report = Seeder::new(app_data.db.clone(), app_data.usuario_store.clone())
                .seed_all(admin_password)
                .await?;
            println!(
                "Seed completed: {} secretarias, {} dependencias, {} estados inserted",
                report.secretarias, report.dependencias, report.estados
            );
            if report.admin_created {
                println!("Default admin account created");
            }
        }
        Commands::CreateAdmin {
            username,
            email,
            nombre,
            apellido,
            password,
        } => {
            admin::create_admin(
                &app_data.usuario_store,
                admin::NuevoAdmin {
                    username,
                    email,
                    nombre,
                    apellido,
                    password,
                },
            )
            .await?;
        }
        Commands::Serve | Commands::Migrate => {
            tracing::debug!("{:?} is not a one-off command", command);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::parse_from(["inventario-backend"]);
        assert_eq!(cli.command(), Commands::Serve);
    }

    #[test]
    fn test_parse_create_admin() {
        let cli = Cli::parse_from([
            "inventario-backend",
            "create-admin",
            "--username",
            "soporte",
            "--email",
            "soporte@tumaco-narino.gov.co",
        ]);

        match cli.command() {
            Commands::CreateAdmin {
                username,
                nombre,
                password,
                ..
            } => {
                assert_eq!(username, "soporte");
                assert_eq!(nombre, "Administrador");
                assert_eq!(password, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
