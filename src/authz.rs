use entity::email_message_template;

use crate::{
    error::{Error, Result},
    target::TargetRef,
};

/// What a permission is checked against.
#[derive(Clone, Copy, Debug)]
pub enum Subject<'a> {
    Object(&'a TargetRef),
    Template(&'a email_message_template::Model),
}

/// Host application hook answering "may `user` do `permission` on `subject`".
pub trait Authorizer {
    fn has_permission(&self, user: &str, permission: &str, subject: Subject<'_>) -> bool;
}

/// Permission names required before touching an object's templates, e.g.
/// `can_edit_site` for `object` and `can_edit_template` for `template`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionLists {
    pub object: Vec<String>,
    pub template: Vec<String>,
}

/// Template permissions are checked before object permissions.
pub fn authorize<A>(
    authorizer: &A,
    user: &str,
    lists: &PermissionLists,
    target: &TargetRef,
    template: Option<&email_message_template::Model>,
) -> Result<()>
where
    A: Authorizer + ?Sized,
{
    if let Some(template) = template {
        for permission in &lists.template {
            if !authorizer.has_permission(user, permission, Subject::Template(template)) {
                return Err(denied(user, permission));
            }
        }
    }

    for permission in &lists.object {
        if !authorizer.has_permission(user, permission, Subject::Object(target)) {
            return Err(denied(user, permission));
        }
    }

    Ok(())
}

fn denied(user: &str, permission: &str) -> Error {
    Error::PermissionDenied {
        user: user.to_owned(),
        permission: permission.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    struct Nobody;

    impl Authorizer for Nobody {
        fn has_permission(&self, _user: &str, _permission: &str, _subject: Subject<'_>) -> bool {
            false
        }
    }

    fn welcome() -> email_message_template::Model {
        email_message_template::Model {
            id: 1,
            name: "welcome".to_owned(),
            description: "Welcome email".to_owned(),
            subject_template: "Hi".to_owned(),
            body_template: String::new(),
            body_template_html: String::new(),
            type_: "text/plain".to_owned(),
            sender: String::new(),
            base_cc: String::new(),
            base_bcc: String::new(),
            autogenerate_text: true,
            enabled: true,
            can_override_per_object: true,
            edited_date: Utc::now().into(),
            edited_user: String::new(),
            content_type: None,
            object_id: None,
        }
    }

    fn lists() -> PermissionLists {
        PermissionLists {
            object: vec!["can_edit_site".to_owned()],
            template: vec!["can_edit_template".to_owned()],
        }
    }

    #[test]
    fn template_permissions_come_first() {
        let site = TargetRef::new("site", 42);

        match authorize(&Nobody, "bob", &lists(), &site, Some(&welcome())) {
            Err(Error::PermissionDenied { permission, .. }) => {
                assert_eq!(permission, "can_edit_template")
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn without_template_only_object_permissions_apply() {
        let site = TargetRef::new("site", 42);

        match authorize(&Nobody, "bob", &lists(), &site, None) {
            Err(Error::PermissionDenied { permission, .. }) => {
                assert_eq!(permission, "can_edit_site")
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert!(authorize(&Nobody, "bob", &PermissionLists::default(), &site, None).is_ok());
    }
}
