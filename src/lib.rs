use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, Level};

pub mod audit;
pub mod authz;
pub mod email_list;
pub mod error;
pub mod resolver;
pub mod settings;
pub mod target;
pub mod templates;
pub mod views;

pub use error::{Error, Result};
pub use resolver::{
    create_override, edit_template, list_distinct_templates_for, resolve, revert_override,
    TemplateUpdate,
};
pub use settings::Settings;
pub use target::{Target, TargetRef};

pub fn init_logging(level: Level) {
    tracing_subscriber::fmt().with_max_level(level).init();
}

/// Opens the configured database and brings its schema up to date.
pub async fn connect(settings: &Settings) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(settings.get_db_url()?);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    info!("database ready");

    Ok(db)
}

pub async fn real_main(settings: Settings, target: Option<TargetRef>) -> Result<()> {
    let db = connect(&settings).await?;

    if let Some(target) = target {
        for template in list_distinct_templates_for(&db, &target).await? {
            let kind = if template.is_override() {
                "override"
            } else {
                "generic"
            };
            println!("{}\t{}\t{}", template.name, template.id, kind);
        }
    }

    Ok(())
}
