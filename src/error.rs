use config::ConfigError;
use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no email template named {name:?} for {target}")]
    NotFound { name: String, target: String },

    #[error("email template {id} does not exist")]
    NoSuchTemplate { id: i32 },

    #[error("permission {permission:?} denied to {user:?}")]
    PermissionDenied { user: String, permission: String },

    #[error("email template {name:?} cannot be customized per object")]
    NotOverridable { name: String },

    #[error("email template {id} is an override, not a generic template")]
    NotGeneric { id: i32 },

    #[error("a generic email template named {name:?} already exists")]
    AlreadyExists { name: String },

    #[error("invalid email address {0:?}")]
    InvalidEmail(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// True for every failure a caller should present as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::NoSuchTemplate { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
