use std::fmt;

use entity::email_message_template;

/// Anything an email template can be customized for.
///
/// Implementors expose a stable type tag (for example `"site"`) and a numeric
/// identifier. Together they form the owner columns of an override row.
pub trait Target {
    fn type_tag(&self) -> &str;

    fn target_id(&self) -> i64;

    fn target_ref(&self) -> TargetRef {
        TargetRef::new(self.type_tag(), self.target_id())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetRef {
    pub type_tag: String,
    pub id: i64,
}

impl TargetRef {
    pub fn new(type_tag: impl Into<String>, id: i64) -> Self {
        Self {
            type_tag: type_tag.into(),
            id,
        }
    }

    /// The owner of an override row, or `None` for a generic row.
    pub fn of(template: &email_message_template::Model) -> Option<Self> {
        match (&template.content_type, template.object_id) {
            (Some(type_tag), Some(id)) => Some(Self::new(type_tag.clone(), id)),
            _ => None,
        }
    }
}

impl Target for TargetRef {
    fn type_tag(&self) -> &str {
        &self.type_tag
    }

    fn target_id(&self) -> i64 {
        self.id
    }

    fn target_ref(&self) -> TargetRef {
        self.clone()
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_tag, self.id)
    }
}
