//! Entry points tying extraction and classification together.
//!
//! Flow per email:
//! 1. detect the platform from the sender,
//! 2. extract company and position,
//! 3. score confidence,
//! 4. classify (application confirmation or response type).
//!
//! The batch functions are tolerant: an email that fails to parse is
//! logged and skipped, duplicates by message ID are processed once, and
//! the batch always returns whatever succeeded.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::classify::response::detect_response_type;
use crate::classify::{calculate_confidence, is_job_application_email};
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::extract::{extract_company, extract_company_from_response, extract_position};
use crate::platform::detect_platform;
use crate::text::prefix;
use crate::types::{ClassifiedEmail, ExtractionResult, RawEmail, ResponseRecord};

/// The email-understanding pipeline.
#[derive(Debug, Default)]
pub struct JobEmailParser {
    config: ParserConfig,
}

impl JobEmailParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn preview(&self, email: &RawEmail) -> String {
        let source = if email.body_preview.is_empty() {
            &email.body_text
        } else {
            &email.body_preview
        };
        prefix(source, self.config.preview_max_chars).to_string()
    }

    /// Run extraction alone, without classification.
    pub fn extract(&self, email: &RawEmail) -> ExtractionResult {
        let platform = detect_platform(&email.from_address, &email.subject);
        let company = extract_company(&email.subject, &email.body_text, &email.from_address);
        let position = extract_position(&email.subject, &email.body_text);
        let confidence = calculate_confidence(company.as_deref(), position.as_deref(), platform);
        ExtractionResult {
            company_name: company,
            position,
            platform,
            confidence,
        }
    }

    /// Whether a classified email is reliable enough for the caller to
    /// import without review.
    pub fn is_auto_importable(&self, email: &ClassifiedEmail) -> bool {
        email.is_job_email && email.confidence >= self.config.auto_import_threshold
    }

    /// Parse one email on the new-application path.
    ///
    /// Always produces a record for a well-formed email; `is_job_email`
    /// says whether it looks like an application confirmation. The only
    /// error is a missing message ID.
    pub fn parse_email(&self, email: &RawEmail) -> Result<ClassifiedEmail, ParseError> {
        if email.message_id.is_empty() {
            return Err(ParseError::MissingMessageId {
                from_address: email.from_address.clone(),
            });
        }

        let extraction = self.extract(email);
        let is_job_email =
            is_job_application_email(&email.subject, &email.body_text, &email.from_address);

        debug!(
            message_id = %email.message_id,
            platform = extraction.platform.label(),
            company = extraction.company_name.as_deref().unwrap_or("-"),
            position = extraction.position.as_deref().unwrap_or("-"),
            confidence = extraction.confidence,
            is_job_email,
            "parsed email"
        );

        Ok(ClassifiedEmail {
            company_name: extraction.company_name,
            position: extraction.position,
            platform: extraction.platform,
            confidence: extraction.confidence,
            is_job_email,
            email_subject: email.subject.clone(),
            email_from: email.from_address.clone(),
            email_date: email.date,
            message_id: email.message_id.clone(),
            body_preview: self.preview(email),
        })
    }

    /// Parse one email on the response-detection path.
    ///
    /// Company extraction prefers response-specific phrasing and falls
    /// back to the standard cascade.
    pub fn parse_response_email(&self, email: &RawEmail) -> Result<ResponseRecord, ParseError> {
        if email.message_id.is_empty() {
            return Err(ParseError::MissingMessageId {
                from_address: email.from_address.clone(),
            });
        }

        let platform = detect_platform(&email.from_address, &email.subject);
        let company =
            extract_company_from_response(&email.subject, &email.body_text, &email.from_address)
                .or_else(|| {
                    extract_company(&email.subject, &email.body_text, &email.from_address)
                });
        let position = extract_position(&email.subject, &email.body_text);
        let response_type =
            detect_response_type(&email.subject, &email.body_text, &email.from_address);

        debug!(
            message_id = %email.message_id,
            platform = platform.label(),
            company = company.as_deref().unwrap_or("-"),
            response_type = response_type.map(|r| r.label()).unwrap_or("-"),
            "parsed response email"
        );

        Ok(ResponseRecord {
            company_name: company,
            position,
            platform,
            response_type,
            is_response_email: response_type.is_some(),
            email_date: email.date,
            email_subject: email.subject.clone(),
            email_from: email.from_address.clone(),
            message_id: email.message_id.clone(),
            body_preview: self.preview(email),
        })
    }

    /// Parse a batch on the new-application path.
    ///
    /// Duplicate message IDs are processed once; parse failures are
    /// logged and skipped. Returns only emails classified as job
    /// applications, sorted by confidence descending, ties broken by
    /// date descending with dateless emails last.
    pub fn parse_multiple(&self, emails: &[RawEmail]) -> Vec<ClassifiedEmail> {
        let mut seen = HashSet::new();
        let mut results: Vec<ClassifiedEmail> = emails
            .iter()
            .filter(|email| seen.insert(email.message_id.clone()))
            .filter_map(|email| match self.parse_email(email) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warn!(from = %email.from_address, error = %err, "skipping unparseable email");
                    None
                }
            })
            .filter(|parsed| parsed.is_job_email)
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.email_date.cmp(&a.email_date))
        });
        results
    }

    /// Parse a batch on the response-detection path.
    ///
    /// Same tolerance as [`parse_multiple`]; returns only emails with a
    /// detected response type, newest first, dateless emails last.
    pub fn parse_response_emails(&self, emails: &[RawEmail]) -> Vec<ResponseRecord> {
        let mut seen = HashSet::new();
        let mut results: Vec<ResponseRecord> = emails
            .iter()
            .filter(|email| seen.insert(email.message_id.clone()))
            .filter_map(|email| match self.parse_response_email(email) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warn!(from = %email.from_address, error = %err, "skipping unparseable email");
                    None
                }
            })
            .filter(|parsed| parsed.response_type.is_some())
            .collect();

        results.sort_by(|a, b| b.email_date.cmp(&a.email_date));
        results
    }
}
