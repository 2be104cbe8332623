//! The per-object template screens: list, customize, edit and revert.
//!
//! Each operation loads what it needs, runs the configured permission checks
//! and then hands over to [`crate::resolver`].

use entity::email_message_template;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::{
    authz::{authorize, Authorizer, PermissionLists},
    error::{Error, Result},
    resolver::{self, TemplateUpdate},
    target::{Target, TargetRef},
    templates,
};

type Template = email_message_template::Model;

pub struct TemplateViews<'a, A: ?Sized> {
    db: &'a DatabaseConnection,
    authorizer: &'a A,
    permissions: PermissionLists,
}

impl<'a, A> TemplateViews<'a, A>
where
    A: Authorizer + ?Sized,
{
    pub fn new(db: &'a DatabaseConnection, authorizer: &'a A, permissions: PermissionLists) -> Self {
        Self {
            db,
            authorizer,
            permissions,
        }
    }

    pub async fn list<T>(&self, user: &str, target: &T) -> Result<Vec<Template>>
    where
        T: Target + ?Sized,
    {
        let target = target.target_ref();
        authorize(self.authorizer, user, &self.permissions, &target, None)?;
        resolver::list_distinct_templates_for(self.db, &target).await
    }

    /// Creates (or reuses) the override of generic template `template_id` for
    /// `target`, then applies `update` to it. Both steps commit together.
    pub async fn customize<T>(
        &self,
        user: &str,
        target: &T,
        template_id: i32,
        update: TemplateUpdate,
    ) -> Result<Template>
    where
        T: Target + ?Sized,
    {
        let target = target.target_ref();
        let generic = templates::find_by_id(self.db, template_id).await?;
        self.check(user, &target, &generic)?;

        let txn = self.db.begin().await?;
        let mut custom = resolver::create_override(&txn, &generic, &target).await?;
        if !update.is_empty() {
            custom = resolver::edit_template(&txn, &custom, update, user).await?;
        }
        txn.commit().await?;

        Ok(custom)
    }

    pub async fn edit<T>(
        &self,
        user: &str,
        target: &T,
        template_id: i32,
        update: TemplateUpdate,
    ) -> Result<Template>
    where
        T: Target + ?Sized,
    {
        let target = target.target_ref();
        let template = self.load_for(user, &target, template_id).await?;
        resolver::edit_template(self.db, &template, update, user).await
    }

    /// Drops the override so `target` falls back to the generic template.
    /// Returns whether anything was deleted.
    pub async fn revert<T>(&self, user: &str, target: &T, template_id: i32) -> Result<bool>
    where
        T: Target + ?Sized,
    {
        let target = target.target_ref();
        let template = self.load_for(user, &target, template_id).await?;
        resolver::revert_override(self.db, &template).await
    }

    /// Loads a row addressed through `target`'s screens and checks access to
    /// it. Overrides belonging to another object are reported as missing.
    ///
    /// An override whose generic template was deleted is checked against its
    /// own flags, so it can still be edited or reverted.
    async fn load_for(&self, user: &str, target: &TargetRef, template_id: i32) -> Result<Template> {
        let template = templates::find_by_id(self.db, template_id).await?;

        let checked = match TargetRef::of(&template) {
            None => template.clone(),
            Some(owner) if &owner == target => {
                match resolver::find_generic(self.db, &template.name).await? {
                    Some(generic) => generic,
                    None => {
                        debug!("template {} has no generic, checking it directly", template_id);
                        template.clone()
                    }
                }
            }
            Some(owner) => {
                debug!("template {} belongs to {}, not {}", template_id, owner, target);
                return Err(Error::NoSuchTemplate { id: template_id });
            }
        };

        self.check(user, target, &checked)?;
        Ok(template)
    }

    fn check(&self, user: &str, target: &TargetRef, template: &Template) -> Result<()> {
        if !template.can_override_per_object {
            return Err(Error::NotOverridable {
                name: template.name.clone(),
            });
        }
        authorize(self.authorizer, user, &self.permissions, target, Some(template))
    }
}
