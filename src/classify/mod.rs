//! Keyword scoring that decides whether an email is a job-application
//! confirmation, and how confident the extraction is.
//!
//! The gate runs cheap rejections first (thread replies, personal
//! senders, job-alert subjects, account noise), then requires at least
//! one positive confirmation phrase in the subject or body head.

pub mod response;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::platform::{Platform, is_platform_sender};
use crate::text::prefix;

/// Body window scanned for classification keywords.
const CLASSIFY_BODY_WINDOW: usize = 2000;

static REPLY_SUBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(re:|fw:|fwd:)\s*").unwrap());

/// Webmail domains; mail from these is personal correspondence, not an
/// automated confirmation.
pub(crate) const PERSONAL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "icloud.com",
    "me.com",
    "live.com",
    "msn.com",
];

/// Mailbox prefixes used by hiring teams.
const CAREERS_MAILBOXES: &[&str] = &[
    "careers@",
    "jobs@",
    "recruiting@",
    "talent@",
    "hr@",
    "hiring@",
    "recruitment@",
    "staffing@",
    "humanresources@",
    "people@",
    "talentacquisition@",
    "employment@",
];

/// Phrases that confirm an application was submitted or is being
/// processed.
const POSITIVE_KEYWORDS: &[&str] = &[
    "application received",
    "application submitted",
    "application has been submitted",
    "thank you for applying",
    "thanks for applying",
    "application confirmation",
    "we received your application",
    "your application has been",
    "your application was",
    "application for",
    "applied for",
    "applying for",
    "thank you for your interest",
    "thanks for your interest",
    "job application",
    "you applied",
    "we have received your",
    "submitted your application",
    "applying to",
    "application to",
    "successfully submitted",
    "successfully applied",
    "your candidacy",
    "candidate",
    "hiring process",
    "recruitment process",
    "hiring team",
    "recruiting team",
    "talent team",
    "hr team",
    "human resources",
    "position you applied",
    "role you applied",
    "career opportunity",
    "job opportunity",
    "employment opportunity",
    "we appreciate your interest",
    "thank you for submitting",
    "your resume",
    "your qualifications",
    "interview",
    "next steps",
    "move forward",
];

/// Account and marketing noise; two or more of these and the email is
/// not an application confirmation.
const NEGATIVE_KEYWORDS: &[&str] = &[
    "your account",
    "password reset",
    "verify your email",
    "confirm your email",
    "subscription",
    "unsubscribe",
    "newsletter",
    "weekly digest",
    "daily digest",
];

/// Job-recommendation phrasing, checked against the subject only. One
/// hit means the email is an alert, not a confirmation.
const JOB_MATCH_KEYWORDS: &[&str] = &[
    "jobs matching",
    "job match",
    "jobs for you",
    "recommended jobs",
    "jobs you might be interested",
    "jobs you may be interested",
    "new jobs for",
    "jobs based on",
    "similar jobs",
    "jobs like",
    "job alert",
    "job alerts",
    "jobs in your area",
    "new jobs",
    "top job picks",
    "job recommendations",
    "recommended for you",
    "jobs we think",
    "personalized jobs",
    "daily job digest",
    "weekly job digest",
];

pub(crate) fn is_personal_sender(from_address: &str) -> bool {
    let from = from_address.to_lowercase();
    PERSONAL_DOMAINS.iter().any(|d| from.contains(d))
}

fn is_careers_mailbox(from_address: &str) -> bool {
    let from = from_address.to_lowercase();
    CAREERS_MAILBOXES.iter().any(|m| from.contains(m))
}

/// Decide whether an email is a job-application confirmation.
pub fn is_job_application_email(subject: &str, body: &str, from_address: &str) -> bool {
    let subject_lower = subject.to_lowercase();
    let text = format!("{} {}", subject, prefix(body, CLASSIFY_BODY_WINDOW)).to_lowercase();

    if REPLY_SUBJECT_RE.is_match(&subject_lower) {
        debug!(subject = %subject, "rejected: thread reply");
        return false;
    }
    if is_personal_sender(from_address) {
        debug!(from = %from_address, "rejected: personal sender");
        return false;
    }
    if JOB_MATCH_KEYWORDS.iter().any(|kw| subject_lower.contains(kw)) {
        debug!(subject = %subject, "rejected: job recommendation alert");
        return false;
    }

    let negative = NEGATIVE_KEYWORDS.iter().filter(|kw| text.contains(*kw)).count();
    if negative >= 2 {
        debug!(negative, "rejected: account/marketing noise");
        return false;
    }

    let positive = POSITIVE_KEYWORDS.iter().filter(|kw| text.contains(*kw)).count();
    if positive == 0 {
        return false;
    }

    debug!(
        positive,
        platform_sender = is_platform_sender(from_address),
        careers_sender = is_careers_mailbox(from_address),
        "classified as job application email"
    );
    true
}

/// Confidence score for an extraction.
///
/// Company and position each carry 0.4; a recognized platform 0.2;
/// company-or-position on a generic platform gets a 0.1 consolation.
/// Capped at 1.0.
pub fn calculate_confidence(
    company: Option<&str>,
    position: Option<&str>,
    platform: Platform,
) -> f32 {
    let mut score: f32 = 0.0;
    if company.is_some() {
        score += 0.4;
    }
    if position.is_some() {
        score += 0.4;
    }
    if platform != Platform::Generic {
        score += 0.2;
    } else if company.is_some() || position.is_some() {
        score += 0.1;
    }
    score.min(1.0)
}
