//! Built-in simulated phishing message templates
//!
//! Pure content: each template renders an HTML body around a tracking
//! link. Campaign creation validates its template id against this set.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct EmailTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    body: &'static str,
}

impl EmailTemplate {
    /// Render the message body with the recipient's tracking link in place
    pub fn render_body(&self, tracking_link: &str) -> String {
        self.body.replace("{tracking_link}", tracking_link)
    }
}

static TEMPLATES: [EmailTemplate; 4] = [
    EmailTemplate {
        id: "password-reset",
        name: "Password Reset",
        subject: "Action Required: Password Reset Request",
        body: r#"<div>
  <p>Hello,</p>
  <p>We received a request to reset the password for your account. If you did not make this request, please ignore this email.</p>
  <p>To reset your password, please click the link below:</p>
  <p><a href="{tracking_link}" style="color: #2563EB; text-decoration: underline;">Reset Your Password</a></p>
  <p>This link will expire in 24 hours.</p>
  <p>Thank you,<br/>The Security Team</p>
</div>"#,
    },
    EmailTemplate {
        id: "prize-alert",
        name: "Prize Alert",
        subject: "Congratulations! You've Won a Prize!",
        body: r#"<div>
  <p>Dear Valued Customer,</p>
  <p>You have been selected as a winner in our monthly giveaway! To claim your prize, you must verify your account details immediately.</p>
  <p>Click the link below to claim your reward:</p>
  <p><a href="{tracking_link}" style="color: #2563EB; text-decoration: underline;">Claim Your Prize Now</a></p>
  <p>Hurry, this is a limited-time offer!</p>
  <p>Sincerely,<br/>The Rewards Team</p>
</div>"#,
    },
    EmailTemplate {
        id: "account-alert",
        name: "Account Alert",
        subject: "Security Alert: Unusual Sign-In Detected",
        body: r#"<div>
  <p>We detected an unusual sign-in to your account from a new device. If this was not you, please secure your account immediately.</p>
  <p>If you don't recognize this activity, please click here to review your account and secure it:</p>
  <p><a href="{tracking_link}" style="color: #2563EB; text-decoration: underline;">Review Sign-In Activity</a></p>
  <p>Thank you,<br/>Account Security Team</p>
</div>"#,
    },
    EmailTemplate {
        id: "document-share",
        name: "Document Share",
        subject: "A document has been shared with you",
        body: r#"<div>
  <p>Hello,</p>
  <p>A document titled "Q4 Financial Projections" has been shared with you. Please review it at your earliest convenience.</p>
  <p>You can view the document by clicking the link below:</p>
  <p><a href="{tracking_link}" style="color: #2563EB; text-decoration: underline;">Open Document</a></p>
  <p>This document is confidential.</p>
  <p>Best regards,<br/>Your Team</p>
</div>"#,
    },
];

static TEMPLATE_INDEX: Lazy<HashMap<&'static str, &'static EmailTemplate>> =
    Lazy::new(|| TEMPLATES.iter().map(|t| (t.id, t)).collect());

pub fn get_template(id: &str) -> Option<&'static EmailTemplate> {
    TEMPLATE_INDEX.get(id).copied()
}

pub fn all_templates() -> &'static [EmailTemplate] {
    &TEMPLATES
}
