//! Tagged pattern tables for field extraction.
//!
//! Each cascade is an ordered list of named rules tried in sequence —
//! more specific patterns first. Ordering and short-circuit behavior
//! live in the data, not in code layout, so they are testable. Tables
//! compile once and are read-only for the life of the process.

use std::sync::LazyLock;

use regex::Regex;

/// A single named extraction rule with a compiled regex.
///
/// Group 1 of the regex captures the candidate fragment. The name is
/// what shows up in trace logs when the rule fires.
#[derive(Debug)]
pub struct ExtractRule {
    /// Short identifier for logging.
    pub name: &'static str,
    /// Compiled regex; case-insensitive, multi-line.
    pub regex: Regex,
}

fn rule(name: &'static str, pattern: &str) -> ExtractRule {
    ExtractRule {
        name,
        regex: Regex::new(&format!("(?im){pattern}")).unwrap(),
    }
}

/// Explicit body phrases — least ambiguous, checked before anything
/// else. "application with X" almost always names the employer.
pub static EXPLICIT_BODY_COMPANY_RULES: LazyLock<Vec<ExtractRule>> = LazyLock::new(|| {
    vec![
        rule(
            "application-with",
            r"application with\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\.|!|,)",
        ),
        rule(
            "thanks-interest-in",
            r"(?:thanks|thank you) for (?:your )?interest in\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\.|!|,|\s+We)",
        ),
    ]
});

/// The universal company cascade, tried against the subject first and
/// the body as a later fallback. Order matters: "application to X" is
/// ambiguous and deliberately sits behind the explicit forms.
pub static UNIVERSAL_COMPANY_RULES: LazyLock<Vec<ExtractRule>> = LazyLock::new(|| {
    vec![
        rule(
            "application-with",
            r"application with\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\.|!|,)",
        ),
        rule(
            "thanks-for-applying-to",
            r"^thanks for applying to\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:!|\.?\s*$)",
        ),
        rule(
            "interest-in",
            r"interest in\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:!|\s*$)",
        ),
        rule(
            "application-update-prefix",
            r"^([A-Z][A-Za-z0-9\s&.\-]+?)\s+Application\s+(?:Update|Status|Confirmation)",
        ),
        rule(
            "application-to-at",
            r"application\s+(?:to|at|for .+? at)\s+([A-Z][A-Za-z0-9\s&.\-]+?)(?:!|\.|\s*$)",
        ),
        rule(
            "application-sent-to",
            r"application was sent to\s+([A-Z][A-Za-z0-9\s&.,'\-]+?)(?:\s*$|!)",
        ),
        rule(
            "application-viewed-by",
            r"application was viewed by\s+([A-Z][A-Za-z0-9\s&.,'\-]+?)(?:\s*$|!)",
        ),
        rule(
            "at-sign-company",
            r"@\s*([A-Z][A-Za-z0-9\s&.\-]+?)(?:\s*$|!)",
        ),
        rule(
            "at-company",
            r"\s+at\s+([A-Z][A-Za-z0-9\s&.\-]+?)(?:\s*$|!|\.)",
        ),
        rule("from-company", r"from\s+([A-Z][A-Za-z0-9\s&.\-]+?)(?:\s*$|!)"),
        rule(
            "thanks-interest-in",
            r"(?:thanks|thank you) for (?:your )?interest in\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\.|!|,|\s+We)",
        ),
        rule(
            "thanks-applying-to",
            r"(?:thanks|thank you) for (?:applying|your application) (?:to|at)\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\.|!)",
        ),
        rule(
            "application-to-has-been",
            r"application (?:to|at|with)\s+([A-Z][A-Za-z0-9\s&.\-]+?)\s+(?:has been|was|is)",
        ),
        rule(
            "applied-to",
            r"(?:you )?applied (?:to|at)\s+([A-Z][A-Za-z0-9\s&.\-]+?)(?:\.|!|\s+on|\s+for)",
        ),
        rule(
            "your-application-to",
            r"your application to\s+([A-Z][A-Za-z0-9\s&.\-]+?)(?:\s+has|\.|!)",
        ),
        rule(
            "received-your-application",
            r"received your application.*?(?:at|to)\s+([A-Z][A-Za-z0-9\s&.\-]+?)(?:\.|!)",
        ),
        rule(
            "company-city-state",
            r"\n\s*([A-Z][A-Za-z0-9\s&.,'\-]+?)\s+-\s+[A-Z][a-z]+,?\s+[A-Z]{2}(?:\s+\d{5})?",
        ),
        rule(
            "at-company-for",
            r"at\s+([A-Z][A-Za-z0-9\s&.\-]+?)\s+for\s+(?:the\s+)?",
        ),
        rule(
            "company-is-hiring",
            r"([A-Z][A-Za-z0-9\s&.\-]+?)\s+(?:is hiring|has received|received your)",
        ),
        rule(
            "joining-company",
            r"(?:joining|working at|working for)\s+([A-Z][A-Za-z0-9\s&.\-]+?)(?:\.|!|,)",
        ),
    ]
});

/// Company patterns tuned for response emails (rejections, interview
/// invites), where the phrasing differs from confirmations.
pub static RESPONSE_COMPANY_RULES: LazyLock<Vec<ExtractRule>> = LazyLock::new(|| {
    vec![
        rule(
            "update-from",
            r"update (?:from|on your.{0,30}(?:at|to|with))\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\s*$|!|\.)",
        ),
        rule(
            "interest-in",
            r"interest in\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\s*$|!|\.)",
        ),
        rule(
            "application-to",
            r"application (?:to|at|with)\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\s+has|\s+was|\.|!|,)",
        ),
        rule(
            "role-at",
            r"(?:role|position) at\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\s*$|!|\.|,)",
        ),
        rule(
            "from-company-team",
            r"from\s+([A-Z][A-Za-z0-9\s&.'\-]+?)\s+(?:Careers|Recruiting|Talent|HR|Team)(?:\s|$|<)",
        ),
        rule(
            "at-company-comma",
            r"(?:^|\. |\n)at\s+([A-Z][A-Za-z0-9\s&.'\-]+?),",
        ),
        rule(
            "company-has-reviewed",
            r"^([A-Z][A-Za-z0-9\s&.'\-]+?)\s+(?:has reviewed|Team|Recruiting|Careers)",
        ),
        rule(
            "on-behalf-of",
            r"on behalf of\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\s*$|!|\.|,)",
        ),
        rule(
            "update-colon",
            r"update:\s*([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\s*$|!|\.|,|-)",
        ),
        rule(
            "company-dash-application",
            r"^([A-Z][A-Za-z0-9\s&.'\-]+?)\s*[-–:]\s*(?:Application|Your|Status|Update)",
        ),
        rule(
            "team-at-company",
            r"the (?:team|hiring team|recruiting team) at\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\s*$|!|\.|,)",
        ),
        rule(
            "we-at-company",
            r"we at\s+([A-Z][A-Za-z0-9\s&.'\-]+?)(?:\s+|\.|,|!)",
        ),
    ]
});

/// Position patterns that only make sense on a subject line.
pub static SUBJECT_POSITION_RULES: LazyLock<Vec<ExtractRule>> = LazyLock::new(|| {
    vec![
        rule(
            "indeed-application",
            r"Indeed Application:\s*(.+?)(?:\s*@|\s*$)",
        ),
        rule(
            "application-update-colon",
            r"Application\s+(?:Update|Status|Confirmation):\s*(.+?)(?:\s*$)",
        ),
        rule("position-at-sign", r"^(.+?)\s*@\s*[A-Z]"),
        rule("position-at", r"^(.+?)\s+at\s+[A-Z]"),
        rule("position-dash-location", r"^(.+?)\s+-\s+[A-Z][a-z]+"),
        rule(
            "applying-to",
            r"applying to\s+(.+?)(?:\s+-\s+|\s+at\s+|\s*$)",
        ),
    ]
});

/// Position patterns usable on subject and body alike.
///
/// The first two capture the explicit ATS forms. The "interest in" /
/// "applying to" forms must not swallow "the following role(s):" —
/// the cascade rejects candidates starting with "following" after the
/// match, since the `regex` crate has no look-around.
pub static BODY_POSITION_RULES: LazyLock<Vec<ExtractRule>> = LazyLock::new(|| {
    vec![
        rule(
            "following-role",
            r"(?:following role|following position|following job)(?:\(s\))?:\s*\n?\s*(.+?)(?:\s*\(|\n|$)",
        ),
        rule(
            "position-of",
            r"position of\s+([A-Z][A-Za-z0-9\s/\-]+?)(?:\.|,|!|\s+at|\s+with|\n)",
        ),
        rule(
            "interest-in-position",
            r"interest in (?:the\s+)?(.+?)\s+(?:position|role|opportunity)",
        ),
        rule(
            "applying-to-position",
            r"applying to (?:the\s+)?(.+?)\s+(?:position|role)",
        ),
    ]
});
