//! Matching parsed emails back to tracked applications.
//!
//! Five strategies, tried in order of reliability; the first one that
//! produces any candidates wins and later strategies never run. All
//! strategies are read-only over the store; results are deduplicated
//! by id with first-seen order preserved.

pub mod status;
pub mod store;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::StoreError;
use crate::extract::clean::normalize_company_name;
use crate::extract::sender_display_name;
use crate::types::ApplicationRef;

pub use status::should_update_status;
pub use store::{ApplicationStore, MemoryStore};

/// Which cascade step produced the candidates. Logged per match so
/// precision of the weaker strategies can be audited from traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Normalized company names, mutual substring.
    NormalizedCompany,
    /// Individual long words of the company name.
    CompanyWords,
    /// Company names mined from the body preview.
    BodyCompanies,
    /// The sender's email domain.
    SenderDomain,
    /// The sender's display name.
    SenderName,
}

impl MatchStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NormalizedCompany => "normalized_company",
            Self::CompanyWords => "company_words",
            Self::BodyCompanies => "body_companies",
            Self::SenderDomain => "sender_domain",
            Self::SenderName => "sender_name",
        }
    }
}

/// Signature-block patterns that tend to carry the employer's name.
/// Deliberately case-sensitive so the capture stays anchored to a
/// capitalized name.
static BODY_COMPANY_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?m)[Ff]rom:\s*([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\s+Careers|\s+Team|\s*<|$|\n)",
        r"(?m)[Ss]incerely,?\s*\n([A-Z][A-Za-z0-9\s&.'\-]+)\n",
        r"(?m)--\s*\n([A-Z][A-Za-z0-9\s&.'\-]+)\s*\n",
        r"(\b[A-Z][a-z]+\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\s+(?:Careers|Team|Hiring|Recruiting)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@([^.>]+)").unwrap());

/// Domains too generic to identify an employer.
const MATCH_DOMAIN_SKIP: &[&str] = &[
    "indeed",
    "linkedin",
    "greenhouse",
    "lever",
    "gmail",
    "outlook",
    "yahoo",
    "hotmail",
    "icims",
    "workday",
    "smartrecruiters",
    "jobvite",
    "taleo",
    "ashby",
    "workable",
    "bamboohr",
    "breezy",
    "jazz",
    "zoho",
    "noreply",
    "mail",
];

const MATCH_SENDER_SKIP: &[&str] = &[
    "careers",
    "jobs",
    "recruiting",
    "talent",
    "hr",
    "hiring",
    "noreply",
    "no-reply",
    "notifications",
    "team",
];

const MATCH_SENDER_PLATFORMS: &[&str] = &[
    "indeed",
    "linkedin",
    "greenhouse",
    "lever",
    "workday",
    "icims",
    "smartrecruiters",
    "workable",
    "handshake",
];

/// Candidate company names mined from free text, via signature-block
/// patterns. Order of first appearance, deduplicated.
fn extract_companies_from_text(text: &str) -> Vec<String> {
    let mut companies: Vec<String> = Vec::new();
    for re in BODY_COMPANY_RES.iter() {
        for caps in re.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                let company = m.as_str().trim().to_string();
                let len = company.chars().count();
                if len > 3 && len < 80 && !companies.contains(&company) {
                    companies.push(company);
                }
            }
        }
    }
    companies
}

fn dedup_by_id(apps: Vec<ApplicationRef>) -> Vec<ApplicationRef> {
    let mut seen = HashSet::new();
    apps.into_iter().filter(|app| seen.insert(app.id)).collect()
}

/// Mutual substring match over normalized, lowered company names.
/// Empty strings never match anything.
fn companies_overlap(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    a.contains(&b) || b.contains(&a)
}

fn match_by_normalized_company(
    store: &dyn ApplicationStore,
    company: &str,
    position: Option<&str>,
) -> Result<Vec<ApplicationRef>, StoreError> {
    let normalized = normalize_company_name(company);
    let mut hits = Vec::new();
    for app in store.all()? {
        if !companies_overlap(&normalized, &normalize_company_name(&app.company_name)) {
            continue;
        }
        // An extracted position narrows the match; an app with no
        // recorded position cannot satisfy it.
        if let Some(position) = position {
            match &app.position {
                Some(app_position)
                    if app_position.to_lowercase().contains(&position.to_lowercase()) =>
                {
                    hits.push(app)
                }
                _ => {}
            }
        } else {
            hits.push(app);
        }
    }
    Ok(hits)
}

fn match_by_company_words(
    store: &dyn ApplicationStore,
    company: &str,
) -> Result<Vec<ApplicationRef>, StoreError> {
    let normalized = normalize_company_name(company);
    let mut hits = Vec::new();
    for word in normalized.split_whitespace().filter(|w| w.chars().count() > 3) {
        hits.extend(store.search_by_company(word)?);
    }
    Ok(dedup_by_id(hits))
}

fn match_by_body_companies(
    store: &dyn ApplicationStore,
    body_preview: &str,
) -> Result<Vec<ApplicationRef>, StoreError> {
    let mut hits = Vec::new();
    for candidate in extract_companies_from_text(body_preview) {
        let normalized = normalize_company_name(&candidate);
        if !normalized.is_empty() {
            hits.extend(store.search_by_company(&normalized)?);
        }
    }
    Ok(dedup_by_id(hits))
}

fn match_by_sender_domain(
    store: &dyn ApplicationStore,
    sender: &str,
) -> Result<Vec<ApplicationRef>, StoreError> {
    let Some(m) = DOMAIN_RE.captures(sender).and_then(|c| c.get(1)) else {
        return Ok(Vec::new());
    };
    let domain = m.as_str().to_lowercase();
    if MATCH_DOMAIN_SKIP.contains(&domain.as_str()) || domain.chars().count() <= 2 {
        return Ok(Vec::new());
    }
    Ok(dedup_by_id(store.search_by_company(&domain)?))
}

fn match_by_sender_name(
    store: &dyn ApplicationStore,
    sender: &str,
) -> Result<Vec<ApplicationRef>, StoreError> {
    let Some(name) = sender_display_name(sender) else {
        return Ok(Vec::new());
    };
    let lower = name.to_lowercase();
    if MATCH_SENDER_SKIP.contains(&lower.as_str())
        || name.chars().count() <= 2
        || MATCH_SENDER_PLATFORMS.iter().any(|p| lower.contains(p))
    {
        return Ok(Vec::new());
    }

    let hits = store.search_by_company(&name)?;
    if !hits.is_empty() {
        return Ok(dedup_by_id(hits));
    }

    // Full name found nothing; a distinctive first word may still hit
    // ("Acme Recruiting Team" vs a tracked "Acme").
    if let Some(first_word) = name.split_whitespace().next() {
        if name.contains(' ') && first_word.chars().count() > 3 {
            return Ok(dedup_by_id(store.search_by_company(first_word)?));
        }
    }
    Ok(Vec::new())
}

/// Find tracked applications that a parsed email plausibly refers to.
///
/// Strategies run in order and the first non-empty result is returned.
/// `company`/`position` are the extractor's outputs; `sender` is the
/// raw From header; `body_preview` is the stored excerpt.
pub fn find_matching_applications(
    store: &dyn ApplicationStore,
    company: Option<&str>,
    position: Option<&str>,
    sender: &str,
    body_preview: &str,
) -> Result<Vec<ApplicationRef>, StoreError> {
    if let Some(company) = company {
        let hits = match_by_normalized_company(store, company, position)?;
        if !hits.is_empty() {
            debug!(strategy = MatchStrategy::NormalizedCompany.label(), hits = hits.len(), "matched");
            return Ok(dedup_by_id(hits));
        }

        let hits = match_by_company_words(store, company)?;
        if !hits.is_empty() {
            debug!(strategy = MatchStrategy::CompanyWords.label(), hits = hits.len(), "matched");
            return Ok(hits);
        }
    }

    if !body_preview.is_empty() {
        let hits = match_by_body_companies(store, body_preview)?;
        if !hits.is_empty() {
            debug!(strategy = MatchStrategy::BodyCompanies.label(), hits = hits.len(), "matched");
            return Ok(hits);
        }
    }

    let hits = match_by_sender_domain(store, sender)?;
    if !hits.is_empty() {
        debug!(strategy = MatchStrategy::SenderDomain.label(), hits = hits.len(), "matched");
        return Ok(hits);
    }

    let hits = match_by_sender_name(store, sender)?;
    if !hits.is_empty() {
        debug!(strategy = MatchStrategy::SenderName.label(), hits = hits.len(), "matched");
        return Ok(hits);
    }

    Ok(Vec::new())
}
