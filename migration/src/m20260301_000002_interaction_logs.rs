use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InteractionLog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InteractionLog::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InteractionLog::AdminId).string().not_null())
                    .col(
                        ColumnDef::new(InteractionLog::CampaignId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InteractionLog::EmailId).string().not_null())
                    .col(
                        ColumnDef::new(InteractionLog::InteractionType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InteractionLog::OccurredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_interaction_logs_email_id")
                    .table(InteractionLog::Table)
                    .col(InteractionLog::EmailId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_interaction_logs_campaign_id")
                    .table(InteractionLog::Table)
                    .col(InteractionLog::CampaignId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_interaction_logs_campaign_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_interaction_logs_email_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InteractionLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InteractionLog {
    #[sea_orm(iden = "interaction_logs")]
    Table,
    Id,
    AdminId,
    CampaignId,
    EmailId,
    InteractionType,
    OccurredAt,
}
