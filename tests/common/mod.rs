#![allow(dead_code)]

use email_templates::{
    authz::{Authorizer, Subject},
    templates::{self, NewTemplate},
};
use entity::email_message_template;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::Level;

pub async fn setup() -> DatabaseConnection {
    // Set up logging
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();

    // Every pooled connection would get its own in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn generic(
    db: &DatabaseConnection,
    name: &str,
    subject: &str,
) -> email_message_template::Model {
    templates::create_generic(
        db,
        NewTemplate::new(name, format!("{name} email"), subject, format!("Body of {name}")),
        "admin",
    )
    .await
    .unwrap()
}

/// Grants the listed permission names to everyone except "mallory".
pub struct Grants(pub Vec<&'static str>);

impl Authorizer for Grants {
    fn has_permission(&self, user: &str, permission: &str, _subject: Subject<'_>) -> bool {
        user != "mallory" && self.0.contains(&permission)
    }
}
