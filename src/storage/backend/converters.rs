use crate::errors::{PhishdrillError, Result};
use crate::storage::models::{
    Campaign, CampaignStatus, InteractionKind, InteractionLog, ParticipantList, PhishingEmail,
};
use migration::entities::{campaign, interaction_log, participant_list, phishing_email};

pub fn model_to_campaign(model: campaign::Model) -> Result<Campaign> {
    let status = CampaignStatus::parse(&model.status).ok_or_else(|| {
        PhishdrillError::validation(format!(
            "Unknown campaign status '{}' for campaign {}",
            model.status, model.id
        ))
    })?;

    Ok(Campaign {
        id: model.id,
        admin_id: model.admin_id,
        name: model.name,
        email_template: model.email_template,
        participant_list_id: model.participant_list_id,
        scheduled_at: model.scheduled_at,
        status,
        sent: model.sent,
        clicked: model.clicked,
        submitted: model.submitted,
        created_at: model.created_at,
    })
}

pub fn model_to_email(model: phishing_email::Model) -> PhishingEmail {
    PhishingEmail {
        id: model.id,
        admin_id: model.admin_id,
        campaign_id: model.campaign_id,
        participant_email: model.participant_email,
        sent_at: model.sent_at,
        delivery_status: model.delivery_status,
    }
}

pub fn model_to_interaction(model: interaction_log::Model) -> Result<InteractionLog> {
    let kind = InteractionKind::parse(&model.interaction_type).ok_or_else(|| {
        PhishdrillError::validation(format!(
            "Unknown interaction type '{}' in log record {}",
            model.interaction_type, model.id
        ))
    })?;

    Ok(InteractionLog {
        id: model.id,
        admin_id: model.admin_id,
        campaign_id: model.campaign_id,
        email_id: model.email_id,
        kind,
        occurred_at: model.occurred_at,
    })
}

pub fn model_to_participant_list(model: participant_list::Model) -> Result<ParticipantList> {
    let emails: Vec<String> = serde_json::from_str(&model.emails)?;

    Ok(ParticipantList {
        id: model.id,
        admin_id: model.admin_id,
        name: model.name,
        emails,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_campaign_status_parse() {
        let model = campaign::Model {
            id: "c1".to_string(),
            admin_id: "a1".to_string(),
            name: "Q4 drill".to_string(),
            email_template: "password-reset".to_string(),
            participant_list_id: "p1".to_string(),
            scheduled_at: Utc::now(),
            status: "scheduled".to_string(),
            sent: 3,
            clicked: 0,
            submitted: 0,
            created_at: Utc::now(),
        };

        let converted = model_to_campaign(model).unwrap();
        assert_eq!(converted.status, CampaignStatus::Scheduled);
        assert_eq!(converted.sent, 3);
    }

    #[test]
    fn test_model_to_campaign_unknown_status() {
        let model = campaign::Model {
            id: "c1".to_string(),
            admin_id: "a1".to_string(),
            name: "Q4 drill".to_string(),
            email_template: "password-reset".to_string(),
            participant_list_id: "p1".to_string(),
            scheduled_at: Utc::now(),
            status: "paused".to_string(),
            sent: 3,
            clicked: 0,
            submitted: 0,
            created_at: Utc::now(),
        };

        assert!(model_to_campaign(model).is_err());
    }

    #[test]
    fn test_model_to_interaction_kind_parse() {
        let model = interaction_log::Model {
            id: 7,
            admin_id: "a1".to_string(),
            campaign_id: "c1".to_string(),
            email_id: "e1".to_string(),
            interaction_type: "link click".to_string(),
            occurred_at: Utc::now(),
        };

        let converted = model_to_interaction(model).unwrap();
        assert_eq!(converted.kind, InteractionKind::LinkClick);
    }

    #[test]
    fn test_model_to_participant_list_emails_json() {
        let model = participant_list::Model {
            id: "p1".to_string(),
            admin_id: "a1".to_string(),
            name: "Q4 drill - Participants".to_string(),
            emails: r#"["one@corp.test","two@corp.test"]"#.to_string(),
        };

        let converted = model_to_participant_list(model).unwrap();
        assert_eq!(converted.emails.len(), 2);
        assert_eq!(converted.emails[0], "one@corp.test");
    }
}
