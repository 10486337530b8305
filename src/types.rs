//! Shared types for the email-understanding pipeline.
//!
//! Raw emails come in from the (external) mail-fetch collaborator,
//! flow through extraction and classification, and come out as either
//! `ClassifiedEmail` (new-application confirmations) or `ResponseRecord`
//! (replies signaling an outcome). All records are created fresh per
//! invocation and never mutated in place.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;

// ── Inbound email ───────────────────────────────────────────────────

/// A raw email as delivered by the mail-fetch collaborator.
///
/// Immutable input. The collaborator is responsible for normalizing
/// `date` to UTC; unparseable dates arrive as `None` and are never an
/// error here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEmail {
    /// Provider message ID. Batches may contain duplicates; the
    /// orchestrators treat a second occurrence idempotently.
    pub message_id: String,
    /// Subject line, possibly empty.
    pub subject: String,
    /// Raw From header — may be a bare address or `"Name" <addr>`.
    pub from_address: String,
    /// Raw To header.
    pub to_address: String,
    /// When the message was sent, if the header parsed.
    pub date: Option<DateTime<Utc>>,
    /// Plain-text body.
    pub body_text: String,
    /// Short body excerpt supplied by the fetcher.
    pub body_preview: String,
}

// ── Extraction ──────────────────────────────────────────────────────

/// Best-effort company/position extraction for a single email.
///
/// Stateless and recomputed per email. `None` fields mean "could not
/// extract with confidence" — downstream treats that as "needs manual
/// input", never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub platform: Platform,
    /// Heuristic reliability score in `[0, 1]`. Advisory, not a
    /// calibrated probability.
    pub confidence: f32,
}

// ── Classified outputs ──────────────────────────────────────────────

/// A parsed email on the new-application-confirmation path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedEmail {
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub platform: Platform,
    pub confidence: f32,
    /// Whether this looks like a genuine application confirmation.
    pub is_job_email: bool,
    pub email_subject: String,
    pub email_from: String,
    pub email_date: Option<DateTime<Utc>>,
    pub message_id: String,
    /// Body excerpt, truncated for display.
    pub body_preview: String,
}

/// The outcome a reply to an application signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Rejected,
    Interviewing,
    Offered,
}

impl ResponseType {
    /// Short label for logging and status fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Interviewing => "interviewing",
            Self::Offered => "offered",
        }
    }
}

/// A parsed email on the response-detection path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub platform: Platform,
    /// `None` means "not a response email" (including recruiter
    /// cold outreach, which is filtered out deliberately).
    pub response_type: Option<ResponseType>,
    pub is_response_email: bool,
    pub email_date: Option<DateTime<Utc>>,
    pub email_subject: String,
    pub email_from: String,
    pub message_id: String,
    pub body_preview: String,
}

// ── External application record ─────────────────────────────────────

/// A previously-tracked application record, owned by the caller's
/// store. The matcher only reads these and returns candidates — it
/// never mutates them; reconciliation is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRef {
    pub id: i64,
    pub company_name: String,
    pub position: Option<String>,
    pub status: String,
    pub date_applied: Option<NaiveDate>,
    pub response_received: bool,
    pub response_date: Option<NaiveDate>,
}
