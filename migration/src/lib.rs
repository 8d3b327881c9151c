pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_organization_tables;
mod m20250301_000002_create_equipment_tables;
mod m20250301_000003_create_auth_tables;
mod m20250301_000004_create_service_report_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_organization_tables::Migration),
            Box::new(m20250301_000002_create_equipment_tables::Migration),
            Box::new(m20250301_000003_create_auth_tables::Migration),
            Box::new(m20250301_000004_create_service_report_tables::Migration),
        ]
    }
}
