use sea_orm::entity::prelude::*;

/// One email message template.
///
/// A row with neither `content_type` nor `object_id` set is the generic
/// template for `name`. A row with both set is an override of that generic
/// template, scoped to one application object.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "email_message_template")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub subject_template: String,
    #[sea_orm(column_type = "Text")]
    pub body_template: String,
    #[sea_orm(column_type = "Text")]
    pub body_template_html: String,
    #[sea_orm(column_name = "type")]
    pub type_: String,
    pub sender: String,
    /// Comma separated addresses.
    #[sea_orm(column_type = "Text")]
    pub base_cc: String,
    /// Comma separated addresses.
    #[sea_orm(column_type = "Text")]
    pub base_bcc: String,
    pub autogenerate_text: bool,
    pub enabled: bool,
    pub can_override_per_object: bool,
    pub edited_date: DateTimeWithTimeZone,
    pub edited_user: String,
    pub content_type: Option<String>,
    pub object_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::log::Entity")]
    Log,
}

impl Related<super::log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Log.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_generic(&self) -> bool {
        self.content_type.is_none() && self.object_id.is_none()
    }

    pub fn is_override(&self) -> bool {
        self.object_id.is_some()
    }
}
