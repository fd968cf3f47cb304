//! Campaign assembly
//!
//! Turns an operator's campaign request into the records the storage layer
//! persists in one batch, and builds the tracking links handed back to the
//! operator. No real mail leaves the system; "sending" is the creation of
//! the per-recipient records.

use chrono::{DateTime, Utc};

use crate::errors::{PhishdrillError, Result};
use crate::services::templates::get_template;
use crate::services::token::TrackingToken;
use crate::storage::{NewCampaign, NewRecipient};
use crate::utils::{RECORD_ID_LENGTH, generate_record_id};

#[derive(Debug, Clone)]
pub struct NewCampaignInput {
    pub name: String,
    pub template: String,
    pub participants: Vec<String>,
    pub scheduled_at: DateTime<Utc>,
}

pub struct CampaignService {}

impl CampaignService {
    /// Validate a campaign request and assign server-side record ids
    pub fn build_campaign(admin_id: &str, input: NewCampaignInput) -> Result<NewCampaign> {
        if admin_id.is_empty() {
            return Err(PhishdrillError::validation("Tenant id must not be empty"));
        }
        if input.name.trim().len() < 2 {
            return Err(PhishdrillError::validation(
                "Campaign name must be at least 2 characters",
            ));
        }
        if get_template(&input.template).is_none() {
            return Err(PhishdrillError::validation(format!(
                "Unknown email template: {}",
                input.template
            )));
        }

        let participants: Vec<String> = input
            .participants
            .iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if participants.is_empty() {
            return Err(PhishdrillError::validation(
                "Participant list cannot be empty",
            ));
        }
        for address in &participants {
            if !is_plausible_email(address) {
                return Err(PhishdrillError::validation(format!(
                    "Invalid participant email address: {}",
                    address
                )));
            }
        }

        let recipients = participants
            .into_iter()
            .map(|participant_email| NewRecipient {
                email_id: generate_record_id(RECORD_ID_LENGTH),
                participant_email,
            })
            .collect();

        Ok(NewCampaign {
            id: generate_record_id(RECORD_ID_LENGTH),
            admin_id: admin_id.to_string(),
            name: input.name.trim().to_string(),
            email_template: input.template,
            participant_list_id: generate_record_id(RECORD_ID_LENGTH),
            participant_list_name: format!("{} - Participants", input.name.trim()),
            scheduled_at: input.scheduled_at,
            recipients,
        })
    }

    /// Absolute tracking link for one recipient record.
    ///
    /// The token is percent-encoded: the base64 alphabet contains `+` and
    /// `/`, neither of which survives a query string untouched.
    pub fn tracking_link(base_url: &str, token: &TrackingToken) -> String {
        format!(
            "{}/api/interact?q={}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(&token.encode())
        )
    }
}

fn is_plausible_email(address: &str) -> bool {
    match address.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
