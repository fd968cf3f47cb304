//! Database operations for SeaOrmStorage
//!
//! The interaction write path is the concurrency-sensitive part: the event
//! append and the campaign counter bump run in one transaction, and the
//! counter moves via an in-place `SET col = col + 1` expression so parallel
//! requests never read-modify-write each other's updates away.

use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::{debug, info};

use super::SeaOrmStorage;
use super::converters::{
    model_to_campaign, model_to_email, model_to_interaction, model_to_participant_list,
};
use super::retry;
use crate::errors::{PhishdrillError, Result};
use crate::storage::models::{
    Campaign, CampaignStatus, InteractionKind, InteractionLog, NewCampaign, ParticipantList,
    PhishingEmail,
};

use migration::entities::{campaign, interaction_log, participant_list, phishing_email};

/// Which denormalized campaign counter an interaction kind feeds
fn counter_column(kind: InteractionKind) -> campaign::Column {
    match kind {
        InteractionKind::LinkClick => campaign::Column::Clicked,
        InteractionKind::SubmittedData => campaign::Column::Submitted,
    }
}

enum RecordOutcome {
    Recorded,
    UnknownIdentity,
}

impl SeaOrmStorage {
    /// Persist a campaign bundle: participant list, campaign record, and one
    /// recipient email record per address, in a single transaction.
    ///
    /// Sending is simulated: every recipient record is written with
    /// `delivery_status = "sent"` and a store-stamped `sent_at`.
    pub async fn create_campaign(&self, new: &NewCampaign) -> Result<Campaign> {
        let db = &self.db;
        let now = chrono::Utc::now();

        let addresses: Vec<&str> = new
            .recipients
            .iter()
            .map(|r| r.participant_email.as_str())
            .collect();
        let emails_json = serde_json::to_string(&addresses)?;

        retry::with_retry(
            &format!("create_campaign({})", new.id),
            self.retry_config,
            || async {
                let txn = db.begin().await?;

                participant_list::Entity::insert(participant_list::ActiveModel {
                    id: Set(new.participant_list_id.clone()),
                    admin_id: Set(new.admin_id.clone()),
                    name: Set(new.participant_list_name.clone()),
                    emails: Set(emails_json.clone()),
                })
                .exec(&txn)
                .await?;

                campaign::Entity::insert(campaign::ActiveModel {
                    id: Set(new.id.clone()),
                    admin_id: Set(new.admin_id.clone()),
                    name: Set(new.name.clone()),
                    email_template: Set(new.email_template.clone()),
                    participant_list_id: Set(new.participant_list_id.clone()),
                    scheduled_at: Set(new.scheduled_at),
                    status: Set(CampaignStatus::Scheduled.as_str().to_string()),
                    sent: Set(new.recipients.len() as i64),
                    clicked: Set(0),
                    submitted: Set(0),
                    created_at: Set(now),
                })
                .exec(&txn)
                .await?;

                let recipient_models: Vec<phishing_email::ActiveModel> = new
                    .recipients
                    .iter()
                    .map(|r| phishing_email::ActiveModel {
                        id: Set(r.email_id.clone()),
                        admin_id: Set(new.admin_id.clone()),
                        campaign_id: Set(new.id.clone()),
                        participant_email: Set(r.participant_email.clone()),
                        sent_at: Set(now),
                        delivery_status: Set("sent".to_string()),
                    })
                    .collect();

                if !recipient_models.is_empty() {
                    phishing_email::Entity::insert_many(recipient_models)
                        .exec(&txn)
                        .await?;
                }

                txn.commit().await?;
                Ok(())
            },
        )
        .await
        .map_err(|e| {
            PhishdrillError::database_operation(format!("Failed to create campaign: {}", e))
        })?;

        info!(
            "Campaign created: {} ({} recipients)",
            new.id,
            new.recipients.len()
        );

        Ok(Campaign {
            id: new.id.clone(),
            admin_id: new.admin_id.clone(),
            name: new.name.clone(),
            email_template: new.email_template.clone(),
            participant_list_id: new.participant_list_id.clone(),
            scheduled_at: new.scheduled_at,
            status: CampaignStatus::Scheduled,
            sent: new.recipients.len() as i64,
            clicked: 0,
            submitted: 0,
            created_at: now,
        })
    }

    /// Append an interaction event and bump the matching campaign counter.
    ///
    /// Both writes happen in one transaction; the event timestamp is stamped
    /// here, never taken from the caller. Repeat calls are counted again on
    /// purpose: repeat engagement is itself signal, so `clicked` may exceed
    /// the recipient count.
    pub async fn record_interaction(
        &self,
        admin_id: &str,
        campaign_id: &str,
        email_id: &str,
        kind: InteractionKind,
    ) -> Result<()> {
        let db = &self.db;
        let counter = counter_column(kind);

        let outcome = retry::with_retry(
            &format!("record_interaction({})", kind),
            self.retry_config,
            || async {
                // Resolve the recipient within its tenant and campaign scope
                // before opening the transaction; the transaction itself is
                // write-only so concurrent recorders queue on the write lock
                // instead of failing on snapshot conflicts.
                let recipient = phishing_email::Entity::find_by_id(email_id).one(db).await?;
                let resolved = matches!(
                    &recipient,
                    Some(m) if m.admin_id == admin_id && m.campaign_id == campaign_id
                );
                if !resolved {
                    return Ok(RecordOutcome::UnknownIdentity);
                }

                let txn = db.begin().await?;

                interaction_log::Entity::insert(interaction_log::ActiveModel {
                    admin_id: Set(admin_id.to_string()),
                    campaign_id: Set(campaign_id.to_string()),
                    email_id: Set(email_id.to_string()),
                    interaction_type: Set(kind.as_str().to_string()),
                    occurred_at: Set(chrono::Utc::now()),
                    ..Default::default()
                })
                .exec(&txn)
                .await?;

                let stmt = Query::update()
                    .table(campaign::Entity)
                    .value(counter, Expr::col(counter).add(1))
                    .and_where(Expr::col(campaign::Column::Id).eq(campaign_id))
                    .and_where(Expr::col(campaign::Column::AdminId).eq(admin_id))
                    .to_owned();

                let updated = txn.execute(&stmt).await?;
                if updated.rows_affected() == 0 {
                    txn.rollback().await?;
                    return Ok(RecordOutcome::UnknownIdentity);
                }

                txn.commit().await?;
                Ok(RecordOutcome::Recorded)
            },
        )
        .await
        .map_err(|e| {
            PhishdrillError::database_operation(format!("Failed to record interaction: {}", e))
        })?;

        match outcome {
            RecordOutcome::Recorded => {
                debug!(
                    "Interaction recorded: {} for email {} (campaign {})",
                    kind, email_id, campaign_id
                );
                Ok(())
            }
            RecordOutcome::UnknownIdentity => Err(PhishdrillError::not_found(format!(
                "No recipient record {} in campaign {}",
                email_id, campaign_id
            ))),
        }
    }

    pub async fn get_campaign(&self, admin_id: &str, campaign_id: &str) -> Result<Option<Campaign>> {
        let model = campaign::Entity::find_by_id(campaign_id)
            .one(&self.db)
            .await?;

        match model {
            Some(m) if m.admin_id == admin_id => Ok(Some(model_to_campaign(m)?)),
            _ => Ok(None),
        }
    }

    pub async fn list_campaigns(&self, admin_id: &str) -> Result<Vec<Campaign>> {
        let models = campaign::Entity::find()
            .filter(campaign::Column::AdminId.eq(admin_id))
            .order_by_desc(campaign::Column::CreatedAt)
            .all(&self.db)
            .await?;

        models.into_iter().map(model_to_campaign).collect()
    }

    pub async fn get_participant_list(
        &self,
        admin_id: &str,
        list_id: &str,
    ) -> Result<Option<ParticipantList>> {
        let model = participant_list::Entity::find_by_id(list_id)
            .one(&self.db)
            .await?;

        match model {
            Some(m) if m.admin_id == admin_id => Ok(Some(model_to_participant_list(m)?)),
            _ => Ok(None),
        }
    }

    pub async fn list_emails(&self, admin_id: &str, campaign_id: &str) -> Result<Vec<PhishingEmail>> {
        let models = phishing_email::Entity::find()
            .filter(phishing_email::Column::AdminId.eq(admin_id))
            .filter(phishing_email::Column::CampaignId.eq(campaign_id))
            .order_by_asc(phishing_email::Column::ParticipantEmail)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(model_to_email).collect())
    }

    pub async fn list_interactions(
        &self,
        admin_id: &str,
        campaign_id: &str,
    ) -> Result<Vec<InteractionLog>> {
        let models = interaction_log::Entity::find()
            .filter(interaction_log::Column::AdminId.eq(admin_id))
            .filter(interaction_log::Column::CampaignId.eq(campaign_id))
            .order_by_asc(interaction_log::Column::OccurredAt)
            .all(&self.db)
            .await?;

        models.into_iter().map(model_to_interaction).collect()
    }

    /// Total campaigns across tenants, used by the health check
    pub async fn count_campaigns(&self) -> Result<u64> {
        Ok(campaign::Entity::find().count(&self.db).await?)
    }
}
