//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240115_000001_create_school_tables;
mod m20240115_000002_create_application_user_table;
mod m20240116_000001_department_stored_procedures;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240115_000001_create_school_tables::Migration),
            Box::new(m20240115_000002_create_application_user_table::Migration),
            Box::new(m20240116_000001_department_stored_procedures::Migration),
        ]
    }
}
