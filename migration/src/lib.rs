pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_email_message_template;
mod m20240101_000002_add_can_override_per_object;
mod m20240101_000003_create_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_email_message_template::Migration),
            Box::new(m20240101_000002_add_can_override_per_object::Migration),
            Box::new(m20240101_000003_create_log::Migration),
        ]
    }
}
