use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

use crate::errors::PhishdrillError;
use crate::services::recorder::InteractionRecorder;
use crate::services::token::TrackingToken;
use crate::storage::{InteractionKind, SeaOrmStorage};

/// Submission request body.
///
/// Only the token is modeled. Whatever the participant typed into the
/// simulated form never reaches this service: no credential field exists
/// in the schema, so nothing resembling one can be read, stored, or
/// echoed back.
#[derive(Debug, Deserialize)]
pub struct SubmitPayload {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    #[serde(rename = "redirectUrl")]
    pub redirect_url: String,
}

pub struct SubmitService {}

impl SubmitService {
    /// Handle a simulated credential submission.
    ///
    /// A valid token records a "submitted data" interaction and returns the
    /// educational debrief destination for the campaign named by the token.
    /// Unlike the click path there is no safe redirect fallback here: the
    /// caller is a programmatic client expecting JSON, so storage failures
    /// surface as a server error.
    pub async fn handle_submit(
        payload: web::Json<SubmitPayload>,
        storage: web::Data<Arc<SeaOrmStorage>>,
    ) -> impl Responder {
        let Some(raw_token) = payload.q.as_deref() else {
            return Self::bad_request("Missing tracking token.");
        };

        let token = match TrackingToken::decode(raw_token) {
            Ok(token) => token,
            Err(e) => {
                debug!("Rejected tracking token on submission: {}", e);
                return Self::bad_request("Invalid tracking token.");
            }
        };

        match InteractionRecorder::record(storage.get_ref(), &token, InteractionKind::SubmittedData)
            .await
        {
            Ok(()) => HttpResponse::Ok().json(SubmitResponse {
                redirect_url: format!("/landing/{}", token.campaign_id),
            }),
            Err(PhishdrillError::NotFound(msg)) => {
                debug!("Submission token references unknown identity: {}", msg);
                Self::bad_request("Invalid tracking token.")
            }
            Err(e) => {
                error!("Data submission tracking failed: {}", e);
                HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                    .insert_header(("Content-Type", "text/plain; charset=utf-8"))
                    .body("Internal Server Error")
            }
        }
    }

    fn bad_request(message: &'static str) -> HttpResponse {
        HttpResponse::build(StatusCode::BAD_REQUEST)
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .body(message)
    }
}
