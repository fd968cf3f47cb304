//! Interaction recorder
//!
//! Single chokepoint for participant interaction writes. Every recorded
//! interaction produces two effects against the store: an appended event
//! under the recipient's log, and an atomic +1 on the campaign counter
//! matching the interaction kind. The storage layer runs both in one
//! transaction, so a partially recorded interaction never persists.

use tracing::debug;

use crate::errors::Result;
use crate::services::token::TrackingToken;
use crate::storage::{InteractionKind, SeaOrmStorage};

pub struct InteractionRecorder {}

impl InteractionRecorder {
    /// Record one interaction for the identity a decoded token names.
    ///
    /// Calls are deliberately not deduplicated: a participant who clicks
    /// the same link twice produces two events and a counter of 2.
    /// Fails with a not-found error when the token references a tenant,
    /// campaign, or recipient the store does not know; nothing is written
    /// in that case.
    pub async fn record(
        storage: &SeaOrmStorage,
        token: &TrackingToken,
        kind: InteractionKind,
    ) -> Result<()> {
        debug!(
            "Recording '{}' for recipient {} (campaign {})",
            kind, token.email_id, token.campaign_id
        );

        storage
            .record_interaction(&token.admin_id, &token.campaign_id, &token.email_id, kind)
            .await
    }
}
