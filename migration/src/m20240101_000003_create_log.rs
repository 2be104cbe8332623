use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Log::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Log::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Log::TemplateId).integer())
                    .col(
                        ColumnDef::new(Log::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Log::Status).small_integer().not_null())
                    .col(ColumnDef::new(Log::Message).text().not_null().default(""))
                    .col(ColumnDef::new(Log::To).text().not_null())
                    .col(ColumnDef::new(Log::Cc).text().not_null().default(""))
                    .col(ColumnDef::new(Log::Bcc).text().not_null().default(""))
                    .col(ColumnDef::new(Log::FromEmail).string_len(75).not_null())
                    .col(ColumnDef::new(Log::Subject).string_len(2000).not_null())
                    .col(ColumnDef::new(Log::Body).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Log::Table, Log::TemplateId)
                            .to(EmailMessageTemplate::Table, EmailMessageTemplate::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_log_template_status")
                    .if_not_exists()
                    .table(Log::Table)
                    .col(Log::TemplateId)
                    .col(Log::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Log::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Log {
    Table,
    Id,
    TemplateId,
    Date,
    Status,
    Message,
    To,
    Cc,
    Bcc,
    FromEmail,
    Subject,
    Body,
}

#[derive(DeriveIden)]
enum EmailMessageTemplate {
    Table,
    Id,
}
