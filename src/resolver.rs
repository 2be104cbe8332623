//! Override-or-generic lookup and the override lifecycle.
//!
//! All functions take any [`ConnectionTrait`], so they run equally on a pooled
//! connection or inside a transaction owned by the caller.

use chrono::Utc;
use entity::{email_message_template, prelude::EmailMessageTemplate};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use tracing::{debug, info, warn};

use crate::{
    email_list,
    error::{Error, Result},
    target::Target,
};

type Template = email_message_template::Model;

/// Field changes accepted by [`edit_template`]. `None` leaves a field alone.
///
/// The name, description and owner of a row are fixed once it exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateUpdate {
    pub subject_template: Option<String>,
    pub body_template: Option<String>,
    pub body_template_html: Option<String>,
    pub type_: Option<String>,
    pub sender: Option<String>,
    pub base_cc: Option<String>,
    pub base_bcc: Option<String>,
    pub autogenerate_text: Option<bool>,
    pub enabled: Option<bool>,
    pub can_override_per_object: Option<bool>,
}

impl TemplateUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

async fn find_override<C, T>(db: &C, name: &str, target: &T) -> Result<Option<Template>>
where
    C: ConnectionTrait,
    T: Target + ?Sized,
{
    Ok(EmailMessageTemplate::find()
        .filter(email_message_template::Column::Name.eq(name))
        .filter(email_message_template::Column::ContentType.eq(target.type_tag()))
        .filter(email_message_template::Column::ObjectId.eq(target.target_id()))
        .one(db)
        .await?)
}

pub async fn find_generic<C>(db: &C, name: &str) -> Result<Option<Template>>
where
    C: ConnectionTrait,
{
    Ok(EmailMessageTemplate::find()
        .filter(email_message_template::Column::Name.eq(name))
        .filter(email_message_template::Column::ContentType.is_null())
        .filter(email_message_template::Column::ObjectId.is_null())
        .order_by_asc(email_message_template::Column::Id)
        .one(db)
        .await?)
}

/// Returns the enabled override of `name` for `target`, else the generic
/// template for `name`.
pub async fn resolve<C, T>(db: &C, name: &str, target: &T) -> Result<Template>
where
    C: ConnectionTrait,
    T: Target + ?Sized,
{
    if let Some(custom) = find_override(db, name, target).await? {
        if custom.enabled {
            debug!("{} resolves to override {} for {}", name, custom.id, target.target_ref());
            return Ok(custom);
        }
        debug!("override {} of {} is disabled", custom.id, name);
    }

    match find_generic(db, name).await? {
        Some(generic) => {
            debug!("{} resolves to generic {} for {}", name, generic.id, target.target_ref());
            Ok(generic)
        }
        None => Err(Error::NotFound {
            name: name.to_owned(),
            target: target.target_ref().to_string(),
        }),
    }
}

/// Resolves every known template name against `target`, ordered by name.
///
/// Names that only exist as overrides of other objects are left out.
pub async fn list_distinct_templates_for<C, T>(db: &C, target: &T) -> Result<Vec<Template>>
where
    C: ConnectionTrait,
    T: Target + ?Sized,
{
    let names: Vec<String> = EmailMessageTemplate::find()
        .select_only()
        .column(email_message_template::Column::Name)
        .distinct()
        .order_by_asc(email_message_template::Column::Name)
        .into_tuple::<String>()
        .all(db)
        .await?;

    let mut templates = Vec::with_capacity(names.len());
    for name in names {
        match resolve(db, &name, target).await {
            Ok(template) => templates.push(template),
            Err(Error::NotFound { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(templates)
}

/// Gets or creates the override of `generic` for `target`.
///
/// A new override copies the name, description, subject and body of the
/// generic template. Losing an insert race to another request yields the
/// row that request created.
pub async fn create_override<C, T>(db: &C, generic: &Template, target: &T) -> Result<Template>
where
    C: ConnectionTrait + TransactionTrait,
    T: Target + ?Sized,
{
    if !generic.is_generic() {
        return Err(Error::NotGeneric { id: generic.id });
    }
    if !generic.can_override_per_object {
        return Err(Error::NotOverridable {
            name: generic.name.clone(),
        });
    }

    if let Some(existing) = find_override(db, &generic.name, target).await? {
        return Ok(existing);
    }

    let custom = email_message_template::ActiveModel {
        name: Set(generic.name.clone()),
        description: Set(generic.description.clone()),
        subject_template: Set(generic.subject_template.clone()),
        body_template: Set(generic.body_template.clone()),
        body_template_html: Set(String::new()),
        type_: Set("text/plain".to_owned()),
        sender: Set(String::new()),
        base_cc: Set(String::new()),
        base_bcc: Set(String::new()),
        autogenerate_text: Set(true),
        enabled: Set(true),
        can_override_per_object: Set(true),
        edited_date: Set(Utc::now().into()),
        edited_user: Set(String::new()),
        content_type: Set(Some(target.type_tag().to_owned())),
        object_id: Set(Some(target.target_id())),
        ..Default::default()
    };

    // A failed insert aborts the enclosing transaction on some backends, so
    // it gets a savepoint of its own.
    let txn = db.begin().await?;
    match custom.insert(&txn).await {
        Ok(created) => {
            txn.commit().await?;
            info!(
                "created override {} of {} for {}",
                created.id,
                created.name,
                target.target_ref()
            );
            Ok(created)
        }
        Err(e) if is_unique_violation(&e) => {
            txn.rollback().await?;
            warn!(
                "override of {} for {} was created concurrently, re-fetching",
                generic.name,
                target.target_ref()
            );
            find_override(db, &generic.name, target)
                .await?
                .ok_or_else(|| Error::Database(e))
        }
        Err(e) => Err(e.into()),
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Deletes an override so its generic template applies again.
///
/// Generic rows are left untouched. Returns whether a row was deleted.
pub async fn revert_override<C>(db: &C, template: &Template) -> Result<bool>
where
    C: ConnectionTrait,
{
    if template.object_id.is_none() {
        debug!("template {} is generic, nothing to revert", template.id);
        return Ok(false);
    }

    let res = template.clone().delete(db).await?;
    info!(
        "reverted override {} of {} for {:?}:{:?}",
        template.id, template.name, template.content_type, template.object_id
    );
    Ok(res.rows_affected > 0)
}

/// Applies `update` to a generic or override row and stamps the editor.
pub async fn edit_template<C>(
    db: &C,
    template: &Template,
    update: TemplateUpdate,
    user: &str,
) -> Result<Template>
where
    C: ConnectionTrait,
{
    let mut active: email_message_template::ActiveModel = template.clone().into();

    if let Some(subject_template) = update.subject_template {
        active.subject_template = Set(subject_template);
    }
    if let Some(body_template) = update.body_template {
        active.body_template = Set(body_template);
    }
    if let Some(body_template_html) = update.body_template_html {
        active.body_template_html = Set(body_template_html);
    }
    if let Some(type_) = update.type_ {
        active.type_ = Set(type_);
    }
    if let Some(sender) = update.sender {
        email_list::validate_sender(&sender)?;
        active.sender = Set(sender.trim().to_owned());
    }
    if let Some(base_cc) = update.base_cc {
        active.base_cc = Set(email_list::normalize(&base_cc)?);
    }
    if let Some(base_bcc) = update.base_bcc {
        active.base_bcc = Set(email_list::normalize(&base_bcc)?);
    }
    if let Some(autogenerate_text) = update.autogenerate_text {
        active.autogenerate_text = Set(autogenerate_text);
    }
    if let Some(enabled) = update.enabled {
        active.enabled = Set(enabled);
    }
    if let Some(can_override_per_object) = update.can_override_per_object {
        active.can_override_per_object = Set(can_override_per_object);
    }

    active.edited_user = Set(user.to_owned());
    active.edited_date = Set(Utc::now().into());

    let updated = active.update(db).await?;
    info!("template {} ({}) edited by {}", updated.id, updated.name, user);
    Ok(updated)
}
