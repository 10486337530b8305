//! Best-effort extraction of company and position from raw emails.
//!
//! Ordered pattern cascades over subject/body/sender, each candidate
//! run through the cleaner and validity filters. Strict short-circuit:
//! the first candidate to survive cleaning and validation wins and
//! later steps are skipped. When nothing survives, the answer is
//! `None` — never a guess.

pub mod clean;
pub mod patterns;
pub mod validity;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::text::prefix;

pub use clean::{clean_company_name, clean_position_name, normalize_company_name};
pub use validity::{looks_like_company_name, looks_like_position};

use patterns::{
    BODY_POSITION_RULES, EXPLICIT_BODY_COMPANY_RULES, ExtractRule, RESPONSE_COMPANY_RULES,
    SUBJECT_POSITION_RULES, UNIVERSAL_COMPANY_RULES,
};

/// Body window for the explicit high-precision company patterns.
const EXPLICIT_BODY_WINDOW: usize = 3000;
/// Body window for the universal company cascade retry.
const UNIVERSAL_BODY_WINDOW: usize = 5000;
/// Body window for position patterns.
const POSITION_BODY_WINDOW: usize = 3000;

/// Sender display name in `"Name" <addr>` form.
static SENDER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"?([^"<]+?)"?\s*<"#).unwrap());

/// Bare domain token after `@`.
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@([^.>]+)").unwrap());

/// Display names that are platform or role mailboxes, not companies.
const SENDER_SKIP_NAMES: &[&str] = &[
    "indeed",
    "linkedin",
    "indeed apply",
    "linkedin jobs",
    "noreply",
    "no-reply",
    "jobs",
    "careers",
    "recruiting",
    "talent",
    "hr",
    "hiring",
    "notifications",
    "alerts",
    "updates",
    "candidates",
    "candidate",
    "applicant",
    "team",
    "workable",
    "greenhouse",
    "lever",
    "icims",
    "smartrecruiters",
    "handshake",
    "jobvite",
    "taleo",
    "ashby",
    "bamboohr",
    "zoho",
    "breezy",
    "jazz",
    "glassdoor",
    "ziprecruiter",
    "monster",
    "careerbuilder",
];

/// Platform words that disqualify a sender display name even as a
/// substring ("TEKsystems @ icims" is handled separately by splitting
/// on `" @ "` first).
const SENDER_PLATFORM_KEYWORDS: &[&str] = &[
    "indeed",
    "linkedin",
    "greenhouse",
    "lever",
    "workday",
    "icims",
    "smartrecruiters",
    "workable",
    "handshake",
    "jobvite",
    "taleo",
    "ashby",
    "bamboohr",
    "zoho",
    "adobe",
    "acrobat",
    "glassdoor",
    "ziprecruiter",
    "monster",
    "careerbuilder",
];

/// Domains that never stand for an employer.
const DOMAIN_SKIP: &[&str] = &[
    "indeed",
    "linkedin",
    "handshake",
    "greenhouse",
    "lever",
    "workday",
    "gmail",
    "outlook",
    "yahoo",
    "hotmail",
    "icims",
    "smartrecruiters",
    "jobvite",
    "taleo",
    "noreply",
    "no-reply",
    "notifications",
    "mail",
    "email",
    "e",
    "workable",
    "bamboohr",
    "zoho",
    "breezy",
    "jazz",
    "ashby",
    "recruiterbox",
    "candidates",
];

/// Run a company cascade over one text, returning the first candidate
/// that survives cleaning and validation.
fn first_valid_company(rules: &[ExtractRule], text: &str) -> Option<String> {
    for rule in rules {
        if let Some(m) = rule.regex.captures(text).and_then(|c| c.get(1)) {
            let cleaned = clean_company_name(m.as_str().trim());
            let len = cleaned.chars().count();
            if len > 1 && len < 100 && looks_like_company_name(&cleaned) {
                debug!(rule = rule.name, company = %cleaned, "company rule matched");
                return Some(cleaned);
            }
        }
    }
    None
}

/// Run a position cascade over one text.
fn first_valid_position(rules: &[ExtractRule], text: &str) -> Option<String> {
    for rule in rules {
        if let Some(m) = rule.regex.captures(text).and_then(|c| c.get(1)) {
            let raw = m.as_str().trim();
            // Stand-in for a negative look-ahead: "interest in the
            // following role(s)" belongs to the explicit rule above.
            if raw.to_lowercase().starts_with("following") {
                continue;
            }
            let cleaned = clean_position_name(raw);
            let len = cleaned.chars().count();
            if len > 2 && len < 150 && looks_like_position(&cleaned) {
                debug!(rule = rule.name, position = %cleaned, "position rule matched");
                return Some(cleaned);
            }
        }
    }
    None
}

/// Parse the display-name portion of a `"Name" <addr>` sender,
/// splitting off platform decorations like `"TEKsystems @ icims"`.
pub(crate) fn sender_display_name(from_address: &str) -> Option<String> {
    let m = SENDER_NAME_RE.captures(from_address)?.get(1)?;
    let mut name = m.as_str().trim().trim_matches(['"', '\'']).trim();
    if let Some((first, _)) = name.split_once(" @ ") {
        name = first.trim();
    }
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Company candidate from the sender display name, rejecting platform
/// and role-mailbox names.
fn company_from_sender_name(from_address: &str) -> Option<String> {
    let name = sender_display_name(from_address)?;
    let lower = name.to_lowercase();
    if SENDER_SKIP_NAMES.contains(&lower.trim()) || name.chars().count() <= 2 {
        return None;
    }
    if SENDER_PLATFORM_KEYWORDS.iter().any(|p| lower.contains(p)) {
        return None;
    }
    let cleaned = clean_company_name(&name);
    if !cleaned.is_empty() && looks_like_company_name(&cleaned) {
        debug!(company = %cleaned, "company taken from sender display name");
        return Some(cleaned);
    }
    None
}

/// Last-resort company guess from the sender's email domain.
///
/// Excludes platform and webmail domains; the domain token is
/// title-cased with `-`/`_` treated as word breaks.
fn company_from_domain(from_address: &str) -> Option<String> {
    let m = DOMAIN_RE.captures(from_address)?.get(1)?;
    let domain = m.as_str().to_lowercase();
    if DOMAIN_SKIP.contains(&domain.as_str()) || domain.chars().count() <= 2 {
        return None;
    }
    let guessed = title_case_words(&domain.replace(['-', '_'], " "));
    debug!(company = %guessed, "company guessed from sender domain");
    Some(guessed)
}

fn title_case_words(text: &str) -> String {
    text.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract a company name from an email.
///
/// Cascade, strictly short-circuiting:
/// 1. explicit body phrases (first 3000 chars),
/// 2. the universal cascade against the subject,
/// 3. the sender display name,
/// 4. the universal cascade against the body (first 5000 chars),
/// 5. a guess derived from the sender domain.
pub fn extract_company(subject: &str, body: &str, from_address: &str) -> Option<String> {
    first_valid_company(&EXPLICIT_BODY_COMPANY_RULES, prefix(body, EXPLICIT_BODY_WINDOW))
        .or_else(|| first_valid_company(&UNIVERSAL_COMPANY_RULES, subject))
        .or_else(|| company_from_sender_name(from_address))
        .or_else(|| {
            first_valid_company(&UNIVERSAL_COMPANY_RULES, prefix(body, UNIVERSAL_BODY_WINDOW))
        })
        .or_else(|| company_from_domain(from_address))
}

/// Extract a position title from an email.
///
/// Subject-only patterns run first (subjects are terser and less
/// ambiguous), then the shared patterns against subject and body.
pub fn extract_position(subject: &str, body: &str) -> Option<String> {
    first_valid_position(&SUBJECT_POSITION_RULES, subject)
        .or_else(|| first_valid_position(&BODY_POSITION_RULES, subject))
        .or_else(|| first_valid_position(&BODY_POSITION_RULES, prefix(body, POSITION_BODY_WINDOW)))
}

/// Extract a company name from a response email (rejection, interview
/// invite, offer), preferring response-specific phrasing.
///
/// Falls back to the sender display name; callers fall back further to
/// [`extract_company`] when this returns `None`.
pub fn extract_company_from_response(
    subject: &str,
    body: &str,
    from_address: &str,
) -> Option<String> {
    first_valid_company(&RESPONSE_COMPANY_RULES, subject)
        .or_else(|| {
            first_valid_company(&RESPONSE_COMPANY_RULES, prefix(body, UNIVERSAL_BODY_WINDOW))
        })
        .or_else(|| company_from_sender_name(from_address))
}
