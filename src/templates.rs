//! Administration of generic templates.

use chrono::Utc;
use entity::{email_message_template, prelude::EmailMessageTemplate};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use tracing::info;

use crate::{
    email_list,
    error::{Error, Result},
};

type Template = email_message_template::Model;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTemplate {
    pub name: String,
    pub description: String,
    pub subject_template: String,
    pub body_template: String,
    pub body_template_html: String,
    pub type_: String,
    pub sender: String,
    pub base_cc: String,
    pub base_bcc: String,
    pub autogenerate_text: bool,
    pub enabled: bool,
    pub can_override_per_object: bool,
}

impl NewTemplate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        subject_template: impl Into<String>,
        body_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            subject_template: subject_template.into(),
            body_template: body_template.into(),
            body_template_html: String::new(),
            type_: "text/plain".to_owned(),
            sender: String::new(),
            base_cc: String::new(),
            base_bcc: String::new(),
            autogenerate_text: true,
            enabled: true,
            can_override_per_object: true,
        }
    }
}

pub async fn create_generic<C>(db: &C, new: NewTemplate, user: &str) -> Result<Template>
where
    C: ConnectionTrait,
{
    email_list::validate_sender(&new.sender)?;

    let template = email_message_template::ActiveModel {
        name: Set(new.name.clone()),
        description: Set(new.description),
        subject_template: Set(new.subject_template),
        body_template: Set(new.body_template),
        body_template_html: Set(new.body_template_html),
        type_: Set(new.type_),
        sender: Set(new.sender.trim().to_owned()),
        base_cc: Set(email_list::normalize(&new.base_cc)?),
        base_bcc: Set(email_list::normalize(&new.base_bcc)?),
        autogenerate_text: Set(new.autogenerate_text),
        enabled: Set(new.enabled),
        can_override_per_object: Set(new.can_override_per_object),
        edited_date: Set(Utc::now().into()),
        edited_user: Set(user.to_owned()),
        content_type: Set(None),
        object_id: Set(None),
        ..Default::default()
    };

    match template.insert(db).await {
        Ok(created) => {
            info!("created generic template {} ({})", created.id, created.name);
            Ok(created)
        }
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            Err(Error::AlreadyExists { name: new.name })
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn find_by_id<C>(db: &C, id: i32) -> Result<Template>
where
    C: ConnectionTrait,
{
    EmailMessageTemplate::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NoSuchTemplate { id })
}

pub async fn list_generic<C>(db: &C) -> Result<Vec<Template>>
where
    C: ConnectionTrait,
{
    Ok(EmailMessageTemplate::find()
        .filter(email_message_template::Column::ContentType.is_null())
        .filter(email_message_template::Column::ObjectId.is_null())
        .order_by_asc(email_message_template::Column::Name)
        .all(db)
        .await?)
}

/// Every override of `name`, across all objects.
pub async fn list_overrides<C>(db: &C, name: &str) -> Result<Vec<Template>>
where
    C: ConnectionTrait,
{
    Ok(EmailMessageTemplate::find()
        .filter(email_message_template::Column::Name.eq(name))
        .filter(email_message_template::Column::ObjectId.is_not_null())
        .order_by_asc(email_message_template::Column::ContentType)
        .order_by_asc(email_message_template::Column::ObjectId)
        .all(db)
        .await?)
}

/// Removes a generic template. Overrides go through
/// [`crate::resolver::revert_override`] instead.
pub async fn delete_generic<C>(db: &C, id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    let template = find_by_id(db, id).await?;
    if !template.is_generic() {
        return Err(Error::NotGeneric { id });
    }

    let name = template.name.clone();
    template.delete(db).await?;
    info!("deleted generic template {} ({})", id, name);
    Ok(())
}
