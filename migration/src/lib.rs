pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_series_table;
mod m20260101_000003_create_company_table;
mod m20260101_000004_create_creator_table;
mod m20260102_000005_create_book_table;
mod m20260102_000006_create_disc_table;
mod m20260102_000007_create_game_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_series_table::Migration),
            Box::new(m20260101_000003_create_company_table::Migration),
            Box::new(m20260101_000004_create_creator_table::Migration),
            Box::new(m20260102_000005_create_book_table::Migration),
            Box::new(m20260102_000006_create_disc_table::Migration),
            Box::new(m20260102_000007_create_game_table::Migration),
        ]
    }
}
