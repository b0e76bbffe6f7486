pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users_and_instruments;
mod m20250101_000002_create_trade_tables;
mod m20250101_000003_create_history_ledger_indicators;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_and_instruments::Migration),
            Box::new(m20250101_000002_create_trade_tables::Migration),
            Box::new(m20250101_000003_create_history_ledger_indicators::Migration),
        ]
    }
}
