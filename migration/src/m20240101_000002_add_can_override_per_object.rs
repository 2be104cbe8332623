use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(EmailMessageTemplate::Table)
                    .add_column(
                        ColumnDef::new(EmailMessageTemplate::CanOverridePerObject)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(EmailMessageTemplate::Table)
                    .drop_column(EmailMessageTemplate::CanOverridePerObject)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum EmailMessageTemplate {
    Table,
    CanOverridePerObject,
}
