use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A participant action recorded against a recipient email record.
///
/// The wire names ("link click" / "submitted data") double as the stored
/// representation, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    #[serde(rename = "link click")]
    LinkClick,
    #[serde(rename = "submitted data")]
    SubmittedData,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::LinkClick => "link click",
            InteractionKind::SubmittedData => "submitted data",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "link click" => Some(InteractionKind::LinkClick),
            "submitted data" => Some(InteractionKind::SubmittedData),
            _ => None,
        }
    }
}

impl std::fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Campaign lifecycle status. Transitions are operator-driven; the tracking
/// pipeline never changes the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Scheduled,
    Running,
    Completed,
    Archived,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Scheduled => "scheduled",
            CampaignStatus::Running => "running",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(CampaignStatus::Scheduled),
            "running" => Some(CampaignStatus::Running),
            "completed" => Some(CampaignStatus::Completed),
            "archived" => Some(CampaignStatus::Archived),
            _ => None,
        }
    }
}

/// One simulation run. `sent` is fixed at creation; `clicked` and
/// `submitted` are only ever moved by atomic in-place increments.
#[derive(Debug, Clone)]
pub struct Campaign {
    pub id: String,
    pub admin_id: String,
    pub name: String,
    pub email_template: String,
    pub participant_list_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: CampaignStatus,
    pub sent: i64,
    pub clicked: i64,
    pub submitted: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ParticipantList {
    pub id: String,
    pub admin_id: String,
    pub name: String,
    pub emails: Vec<String>,
}

/// One participant's entry within a campaign. Immutable after creation as
/// far as the tracking pipeline is concerned.
#[derive(Debug, Clone)]
pub struct PhishingEmail {
    pub id: String,
    pub admin_id: String,
    pub campaign_id: String,
    pub participant_email: String,
    pub sent_at: DateTime<Utc>,
    pub delivery_status: String,
}

/// Append-only interaction event.
#[derive(Debug, Clone)]
pub struct InteractionLog {
    pub id: i64,
    pub admin_id: String,
    pub campaign_id: String,
    pub email_id: String,
    pub kind: InteractionKind,
    pub occurred_at: DateTime<Utc>,
}

/// Everything needed to persist a campaign in one batch: the participant
/// list, the campaign record, and one recipient email record per address.
/// Ids are pre-generated by the caller.
#[derive(Debug, Clone)]
pub struct NewCampaign {
    pub id: String,
    pub admin_id: String,
    pub name: String,
    pub email_template: String,
    pub participant_list_id: String,
    pub participant_list_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub recipients: Vec<NewRecipient>,
}

#[derive(Debug, Clone)]
pub struct NewRecipient {
    pub email_id: String,
    pub participant_email: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub storage_type: String,
}
