use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParticipantList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParticipantList::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ParticipantList::AdminId).string().not_null())
                    .col(ColumnDef::new(ParticipantList::Name).text().not_null())
                    .col(ColumnDef::new(ParticipantList::Emails).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campaign::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campaign::AdminId).string().not_null())
                    .col(ColumnDef::new(Campaign::Name).text().not_null())
                    .col(ColumnDef::new(Campaign::EmailTemplate).string().not_null())
                    .col(
                        ColumnDef::new(Campaign::ParticipantListId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Campaign::ScheduledAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Campaign::Status).string().not_null())
                    .col(
                        ColumnDef::new(Campaign::Sent)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Campaign::Clicked)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Campaign::Submitted)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Campaign::CreatedAt)
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
                    .name("idx_campaigns_admin_id")
                    .table(Campaign::Table)
                    .col(Campaign::AdminId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PhishingEmail::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PhishingEmail::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PhishingEmail::AdminId).string().not_null())
                    .col(
                        ColumnDef::new(PhishingEmail::CampaignId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PhishingEmail::ParticipantEmail)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PhishingEmail::SentAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PhishingEmail::DeliveryStatus)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_phishing_emails_campaign_id")
                    .table(PhishingEmail::Table)
                    .col(PhishingEmail::CampaignId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_phishing_emails_campaign_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PhishingEmail::Table).to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_campaigns_admin_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Campaign::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ParticipantList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ParticipantList {
    #[sea_orm(iden = "participant_lists")]
    Table,
    Id,
    AdminId,
    Name,
    Emails,
}

#[derive(DeriveIden)]
enum Campaign {
    #[sea_orm(iden = "campaigns")]
    Table,
    Id,
    AdminId,
    Name,
    EmailTemplate,
    ParticipantListId,
    ScheduledAt,
    Status,
    Sent,
    Clicked,
    Submitted,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PhishingEmail {
    #[sea_orm(iden = "phishing_emails")]
    Table,
    Id,
    AdminId,
    CampaignId,
    ParticipantEmail,
    SentAt,
    DeliveryStatus,
}
