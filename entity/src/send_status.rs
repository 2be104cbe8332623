use sea_orm::{DeriveActiveEnum, EnumIter};

#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i16", db_type = "Integer")]
pub enum SendStatus {
    Queued = 0,
    Sent = 1,
    Failed = 2,
}
