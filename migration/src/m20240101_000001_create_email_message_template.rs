use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailMessageTemplate::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmailMessageTemplate::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::Name)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::SubjectTemplate)
                            .string_len(2000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::BodyTemplate)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::BodyTemplateHtml)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::Type)
                            .string_len(20)
                            .not_null()
                            .default("text/plain"),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::Sender)
                            .string_len(75)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::BaseCc)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::BaseBcc)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::AutogenerateText)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::EditedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(EmailMessageTemplate::EditedUser)
                            .string_len(30)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(EmailMessageTemplate::ContentType).string_len(100))
                    .col(ColumnDef::new(EmailMessageTemplate::ObjectId).big_integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_email_message_template_name_object")
                    .if_not_exists()
                    .table(EmailMessageTemplate::Table)
                    .col(EmailMessageTemplate::Name)
                    .col(EmailMessageTemplate::ContentType)
                    .col(EmailMessageTemplate::ObjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // NULLs never collide in the index above, so generic rows need their own
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_email_message_template_generic_name
                 ON email_message_template (name)
                 WHERE content_type IS NULL AND object_id IS NULL",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmailMessageTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmailMessageTemplate {
    Table,
    Id,
    Name,
    Description,
    SubjectTemplate,
    BodyTemplate,
    BodyTemplateHtml,
    Type,
    Sender,
    BaseCc,
    BaseBcc,
    AutogenerateText,
    Enabled,
    EditedDate,
    EditedUser,
    ContentType,
    ObjectId,
}
