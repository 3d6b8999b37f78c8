pub use sea_orm_migration::prelude::*;

mod m20231222_000001_create_tables;
mod m20240110_000001_unique_occupancy_rate;
pub mod entity_iden;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231222_000001_create_tables::Migration),
            Box::new(m20240110_000001_unique_occupancy_rate::Migration),
        ]
    }
}
