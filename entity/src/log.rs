use sea_orm::entity::prelude::*;

use super::send_status::SendStatus;

/// Audit record of one send attempt. Rows are only ever inserted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub template_id: Option<i32>,
    pub date: DateTimeWithTimeZone,
    pub status: SendStatus,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[sea_orm(column_type = "Text")]
    pub to: String,
    #[sea_orm(column_type = "Text")]
    pub cc: String,
    #[sea_orm(column_type = "Text")]
    pub bcc: String,
    pub from_email: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::email_message_template::Entity",
        from = "Column::TemplateId",
        to = "super::email_message_template::Column::Id",
        on_delete = "SetNull"
    )]
    EmailMessageTemplate,
}

impl Related<super::email_message_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmailMessageTemplate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
