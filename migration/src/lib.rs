pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_room_table;
mod m20250810_000002_create_tenant_table;
mod m20250810_000003_create_payment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_room_table::Migration),
            Box::new(m20250810_000002_create_tenant_table::Migration),
            Box::new(m20250810_000003_create_payment_table::Migration),
        ]
    }
}
