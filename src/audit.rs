//! Send log. Rows are appended by the mail pipeline and never changed.

use chrono::Utc;
use entity::{email_message_template, log, prelude::Log, send_status::SendStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewLog {
    pub status: SendStatus,
    pub message: String,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub from_email: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub template_id: Option<i32>,
    pub status: Option<SendStatus>,
}

pub async fn record<C>(
    db: &C,
    template: &email_message_template::Model,
    entry: NewLog,
) -> Result<log::Model>
where
    C: ConnectionTrait,
{
    let row = log::ActiveModel {
        template_id: Set(Some(template.id)),
        date: Set(Utc::now().into()),
        status: Set(entry.status),
        message: Set(entry.message),
        to: Set(entry.to.join(", ")),
        cc: Set(entry.cc.join(", ")),
        bcc: Set(entry.bcc.join(", ")),
        from_email: Set(entry.from_email),
        subject: Set(entry.subject),
        body: Set(entry.body),
        ..Default::default()
    }
    .insert(db)
    .await?;

    debug!("logged {:?} send of template {}", row.status, template.id);
    Ok(row)
}

/// Newest first.
pub async fn list<C>(db: &C, filter: LogFilter) -> Result<Vec<log::Model>>
where
    C: ConnectionTrait,
{
    let mut query = Log::find();
    if let Some(template_id) = filter.template_id {
        query = query.filter(log::Column::TemplateId.eq(template_id));
    }
    if let Some(status) = filter.status {
        query = query.filter(log::Column::Status.eq(status));
    }

    Ok(query
        .order_by_desc(log::Column::Date)
        .order_by_desc(log::Column::Id)
        .all(db)
        .await?)
}
