use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, trace};

use crate::config::get_config;
use crate::errors::PhishdrillError;
use crate::services::campaign::{CampaignService, NewCampaignInput};
use crate::services::templates::{all_templates, get_template};
use crate::services::token::TrackingToken;
use crate::storage::{Campaign, InteractionLog, ParticipantList, PhishingEmail, SeaOrmStorage};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub data: T,
}

/// Tenant scope for admin reads. The bearer token authenticates the
/// operator; the tenant id scopes which records are visible.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AdminQuery {
    pub admin_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PostNewCampaign {
    pub admin_id: String,
    pub name: String,
    pub template: String,
    pub participants: Vec<String>,
    /// RFC3339 send date
    pub scheduled_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CampaignResponse {
    pub id: String,
    pub admin_id: String,
    pub name: String,
    pub email_template: String,
    pub participant_list_id: String,
    pub scheduled_at: String,
    pub status: String,
    pub sent: i64,
    pub clicked: i64,
    pub submitted: i64,
    pub created_at: String,
}

impl From<Campaign> for CampaignResponse {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id,
            admin_id: campaign.admin_id,
            name: campaign.name,
            email_template: campaign.email_template,
            participant_list_id: campaign.participant_list_id,
            scheduled_at: campaign.scheduled_at.to_rfc3339(),
            status: campaign.status.as_str().to_string(),
            sent: campaign.sent,
            clicked: campaign.clicked,
            submitted: campaign.submitted,
            created_at: campaign.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EmailResponse {
    pub id: String,
    pub participant_email: String,
    pub sent_at: String,
    pub delivery_status: String,
    /// The link the operator hands to this participant
    pub tracking_link: String,
    pub subject: String,
    pub body: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct InteractionResponse {
    pub id: i64,
    pub email_id: String,
    pub interaction_type: String,
    pub occurred_at: String,
}

impl From<InteractionLog> for InteractionResponse {
    fn from(log: InteractionLog) -> Self {
        Self {
            id: log.id,
            email_id: log.email_id,
            interaction_type: log.kind.as_str().to_string(),
            occurred_at: log.occurred_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ParticipantListResponse {
    pub id: String,
    pub name: String,
    pub emails: Vec<String>,
}

impl From<ParticipantList> for ParticipantListResponse {
    fn from(list: ParticipantList) -> Self {
        Self {
            id: list.id,
            name: list.name,
            emails: list.emails,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TemplateResponse {
    pub id: String,
    pub name: String,
    pub subject: String,
}

pub struct AdminService {}

impl AdminService {
    fn json_response<T: Serialize>(status: StatusCode, code: i32, data: T) -> HttpResponse {
        HttpResponse::build(status)
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(ApiResponse { code, data })
    }

    fn success_response<T: Serialize>(data: T) -> HttpResponse {
        Self::json_response(StatusCode::OK, 0, data)
    }

    fn error_response(status: StatusCode, message: &str) -> HttpResponse {
        Self::json_response(status, 1, serde_json::json!({ "error": message }))
    }

    fn storage_error_response(e: PhishdrillError) -> HttpResponse {
        match e {
            PhishdrillError::Validation(msg) => {
                Self::error_response(StatusCode::BAD_REQUEST, &msg)
            }
            PhishdrillError::NotFound(msg) => Self::error_response(StatusCode::NOT_FOUND, &msg),
            other => {
                error!("Admin API storage error: {}", other);
                Self::error_response(StatusCode::INTERNAL_SERVER_ERROR, "storage error")
            }
        }
    }

    pub async fn post_campaign(
        payload: web::Json<PostNewCampaign>,
        storage: web::Data<Arc<SeaOrmStorage>>,
    ) -> impl Responder {
        let payload = payload.into_inner();
        trace!("Admin API: create campaign '{}'", payload.name);

        let scheduled_at = match chrono::DateTime::parse_from_rfc3339(&payload.scheduled_at) {
            Ok(time) => time.with_timezone(&chrono::Utc),
            Err(_) => {
                return Self::error_response(
                    StatusCode::BAD_REQUEST,
                    &format!(
                        "Invalid scheduled_at format: {}. Use RFC3339",
                        payload.scheduled_at
                    ),
                );
            }
        };

        let new_campaign = match CampaignService::build_campaign(
            &payload.admin_id,
            NewCampaignInput {
                name: payload.name,
                template: payload.template,
                participants: payload.participants,
                scheduled_at,
            },
        ) {
            Ok(new_campaign) => new_campaign,
            Err(e) => return Self::storage_error_response(e),
        };

        match storage.create_campaign(&new_campaign).await {
            Ok(campaign) => {
                info!("Campaign scheduled: {} ({})", campaign.name, campaign.id);
                Self::success_response(CampaignResponse::from(campaign))
            }
            Err(e) => Self::storage_error_response(e),
        }
    }

    pub async fn get_campaigns(
        query: web::Query<AdminQuery>,
        storage: web::Data<Arc<SeaOrmStorage>>,
    ) -> impl Responder {
        match storage.list_campaigns(&query.admin_id).await {
            Ok(campaigns) => Self::success_response(
                campaigns
                    .into_iter()
                    .map(CampaignResponse::from)
                    .collect::<Vec<_>>(),
            ),
            Err(e) => Self::storage_error_response(e),
        }
    }

    pub async fn get_campaign(
        path: web::Path<String>,
        query: web::Query<AdminQuery>,
        storage: web::Data<Arc<SeaOrmStorage>>,
    ) -> impl Responder {
        let campaign_id = path.into_inner();

        match storage.get_campaign(&query.admin_id, &campaign_id).await {
            Ok(Some(campaign)) => Self::success_response(CampaignResponse::from(campaign)),
            Ok(None) => Self::error_response(
                StatusCode::NOT_FOUND,
                &format!("Campaign not found: {}", campaign_id),
            ),
            Err(e) => Self::storage_error_response(e),
        }
    }

    /// Recipient records for one campaign, each with its tracking link and
    /// the rendered message the participant would have received.
    pub async fn get_campaign_emails(
        path: web::Path<String>,
        query: web::Query<AdminQuery>,
        storage: web::Data<Arc<SeaOrmStorage>>,
    ) -> impl Responder {
        let campaign_id = path.into_inner();

        let campaign = match storage.get_campaign(&query.admin_id, &campaign_id).await {
            Ok(Some(campaign)) => campaign,
            Ok(None) => {
                return Self::error_response(
                    StatusCode::NOT_FOUND,
                    &format!("Campaign not found: {}", campaign_id),
                );
            }
            Err(e) => return Self::storage_error_response(e),
        };

        let Some(template) = get_template(&campaign.email_template) else {
            error!(
                "Campaign {} references unknown template {}",
                campaign.id, campaign.email_template
            );
            return Self::error_response(StatusCode::INTERNAL_SERVER_ERROR, "template missing");
        };

        let emails = match storage.list_emails(&query.admin_id, &campaign_id).await {
            Ok(emails) => emails,
            Err(e) => return Self::storage_error_response(e),
        };

        let base_url = &get_config().features.public_base_url;
        let responses: Vec<EmailResponse> = emails
            .into_iter()
            .map(|email| Self::email_response(email, template, base_url))
            .collect();

        Self::success_response(responses)
    }

    fn email_response(
        email: PhishingEmail,
        template: &crate::services::templates::EmailTemplate,
        base_url: &str,
    ) -> EmailResponse {
        let token = TrackingToken::new(
            email.admin_id.clone(),
            email.campaign_id.clone(),
            email.id.clone(),
        );
        let tracking_link = CampaignService::tracking_link(base_url, &token);
        let body = template.render_body(&tracking_link);

        EmailResponse {
            id: email.id,
            participant_email: email.participant_email,
            sent_at: email.sent_at.to_rfc3339(),
            delivery_status: email.delivery_status,
            tracking_link,
            subject: template.subject.to_string(),
            body,
        }
    }

    /// The participant list a campaign was created against
    pub async fn get_campaign_participants(
        path: web::Path<String>,
        query: web::Query<AdminQuery>,
        storage: web::Data<Arc<SeaOrmStorage>>,
    ) -> impl Responder {
        let campaign_id = path.into_inner();

        let campaign = match storage.get_campaign(&query.admin_id, &campaign_id).await {
            Ok(Some(campaign)) => campaign,
            Ok(None) => {
                return Self::error_response(
                    StatusCode::NOT_FOUND,
                    &format!("Campaign not found: {}", campaign_id),
                );
            }
            Err(e) => return Self::storage_error_response(e),
        };

        match storage
            .get_participant_list(&query.admin_id, &campaign.participant_list_id)
            .await
        {
            Ok(Some(list)) => Self::success_response(ParticipantListResponse::from(list)),
            Ok(None) => Self::error_response(
                StatusCode::NOT_FOUND,
                &format!(
                    "Participant list not found: {}",
                    campaign.participant_list_id
                ),
            ),
            Err(e) => Self::storage_error_response(e),
        }
    }

    pub async fn get_campaign_interactions(
        path: web::Path<String>,
        query: web::Query<AdminQuery>,
        storage: web::Data<Arc<SeaOrmStorage>>,
    ) -> impl Responder {
        let campaign_id = path.into_inner();

        match storage
            .list_interactions(&query.admin_id, &campaign_id)
            .await
        {
            Ok(logs) => Self::success_response(
                logs.into_iter()
                    .map(InteractionResponse::from)
                    .collect::<Vec<_>>(),
            ),
            Err(e) => Self::storage_error_response(e),
        }
    }

    pub async fn get_templates() -> impl Responder {
        let templates: Vec<TemplateResponse> = all_templates()
            .iter()
            .map(|t| TemplateResponse {
                id: t.id.to_string(),
                name: t.name.to_string(),
                subject: t.subject.to_string(),
            })
            .collect();

        Self::success_response(templates)
    }
}

/// Admin route table; the caller wraps it with the auth middleware
pub fn admin_routes(prefix: &str) -> actix_web::Scope {
    web::scope(prefix)
        .route("/campaigns", web::post().to(AdminService::post_campaign))
        .route("/campaigns", web::get().to(AdminService::get_campaigns))
        .route("/campaigns/{id}", web::get().to(AdminService::get_campaign))
        .route(
            "/campaigns/{id}/emails",
            web::get().to(AdminService::get_campaign_emails),
        )
        .route(
            "/campaigns/{id}/participants",
            web::get().to(AdminService::get_campaign_participants),
        )
        .route(
            "/campaigns/{id}/interactions",
            web::get().to(AdminService::get_campaign_interactions),
        )
        .route("/templates", web::get().to(AdminService::get_templates))
}
