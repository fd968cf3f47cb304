//! Tracking token codec
//!
//! The token is the opaque identity triple carried in every simulation
//! link: base64 over a compact JSON object with the keys `a` (tenant),
//! `c` (campaign), `e` (recipient email record). It is an obfuscation
//! encoding, not a cryptographic commitment: the link itself is the
//! capability, and whoever follows it is exactly the signal the training
//! campaign wants to measure. Decode is the single validation gate in
//! front of every store write, so it rejects anything that is not the
//! exact expected shape.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::errors::{PhishdrillError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingToken {
    #[serde(rename = "a")]
    pub admin_id: String,
    #[serde(rename = "c")]
    pub campaign_id: String,
    #[serde(rename = "e")]
    pub email_id: String,
}

impl TrackingToken {
    pub fn new<A, C, E>(admin_id: A, campaign_id: C, email_id: E) -> Self
    where
        A: Into<String>,
        C: Into<String>,
        E: Into<String>,
    {
        Self {
            admin_id: admin_id.into(),
            campaign_id: campaign_id.into(),
            email_id: email_id.into(),
        }
    }

    /// Encode the triple into its opaque wire form
    pub fn encode(&self) -> String {
        let payload = serde_json::json!({
            "a": self.admin_id,
            "c": self.campaign_id,
            "e": self.email_id,
        });
        BASE64.encode(payload.to_string())
    }

    /// Decode and validate a wire token.
    ///
    /// Rejected: invalid base64, payloads that are not a JSON object of the
    /// expected shape, and payloads missing any of the three identifiers or
    /// carrying an empty one. Extra keys are ignored, never trusted.
    pub fn decode(token: &str) -> Result<Self> {
        let raw = BASE64.decode(token)?;

        let decoded: TrackingToken = serde_json::from_slice(&raw)
            .map_err(|e| PhishdrillError::token_decode(format!("Malformed token payload: {}", e)))?;

        if decoded.admin_id.is_empty()
            || decoded.campaign_id.is_empty()
            || decoded.email_id.is_empty()
        {
            return Err(PhishdrillError::token_decode(
                "Token is missing a required identifier",
            ));
        }

        Ok(decoded)
    }
}
