use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::errors::PhishdrillError;
use crate::services::recorder::InteractionRecorder;
use crate::services::token::TrackingToken;
use crate::storage::{InteractionKind, SeaOrmStorage};

/// Where a tracked click lands next, carrying the same token
pub const LOGIN_SIMULATION_PATH: &str = "/login-simulation";

/// Neutral destination when recording breaks underneath a participant
pub const FALLBACK_PATH: &str = "/";

#[derive(Debug, Deserialize)]
pub struct InteractQuery {
    pub q: Option<String>,
}

pub struct InteractService {}

impl InteractService {
    /// Handle a tracked link visit.
    ///
    /// A valid token records a "link click" and forwards the participant to
    /// the simulated credential page with the token re-embedded. When the
    /// store fails underneath us the participant is still redirected, to
    /// the neutral landing page instead: a broken backend must never show
    /// an error page mid-training.
    pub async fn handle_interact(
        query: web::Query<InteractQuery>,
        storage: web::Data<Arc<SeaOrmStorage>>,
    ) -> impl Responder {
        let Some(raw_token) = query.q.as_deref() else {
            return Self::bad_request("Missing tracking token.");
        };

        let token = match TrackingToken::decode(raw_token) {
            Ok(token) => token,
            Err(e) => {
                debug!("Rejected tracking token on click: {}", e);
                return Self::bad_request("Invalid tracking token.");
            }
        };

        match InteractionRecorder::record(storage.get_ref(), &token, InteractionKind::LinkClick).await
        {
            Ok(()) => {
                let location = format!(
                    "{}?q={}",
                    LOGIN_SIMULATION_PATH,
                    urlencoding::encode(raw_token)
                );
                HttpResponse::TemporaryRedirect()
                    .insert_header(("Location", location))
                    .finish()
            }
            Err(PhishdrillError::NotFound(msg)) => {
                debug!("Click token references unknown identity: {}", msg);
                Self::bad_request("Invalid tracking token.")
            }
            Err(e) => {
                error!("Interaction tracking failed: {}", e);
                HttpResponse::TemporaryRedirect()
                    .insert_header(("Location", FALLBACK_PATH))
                    .finish()
            }
        }
    }

    fn bad_request(message: &'static str) -> HttpResponse {
        HttpResponse::build(StatusCode::BAD_REQUEST)
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .body(message)
    }
}
