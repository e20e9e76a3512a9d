//! Database migrations for catalog service

use sea_orm_migration::prelude::*;

mod m20240301_000001_create_artists;
mod m20240301_000002_create_albums;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_artists::Migration),
            Box::new(m20240301_000002_create_albums::Migration),
        ]
    }
}
