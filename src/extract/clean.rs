//! Normalization of extracted company/position fragments.
//!
//! Cleaning is for display (strip boilerplate the patterns drag in);
//! normalization is for comparison only. Both are pure and idempotent:
//! `clean(clean(x)) == clean(x)`.

use std::sync::LazyLock;

use regex::Regex;

static URL_ARTIFACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[?https?://[^\s\]]*\]?").unwrap());
static ANGLE_REMNANT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static LEGAL_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[\s,]+(?:inc|llc|ltd|corp|corporation|company|co)\.?\s*$").unwrap()
});
static LEADING_THE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*the\s+").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Noise words stripped once from the start and end of a position.
const POSITION_NOISE_WORDS: &[&str] = &["position", "role", "opportunity", "job", "the"];

static POSITION_NOISE_RES: LazyLock<Vec<(Regex, Regex)>> = LazyLock::new(|| {
    POSITION_NOISE_WORDS
        .iter()
        .map(|w| {
            (
                Regex::new(&format!(r"(?i)^{w}\s+")).unwrap(),
                Regex::new(&format!(r"(?i)\s+{w}$")).unwrap(),
            )
        })
        .collect()
});

const EDGE_PUNCT: &[char] = &['.', ',', '!', '?', ':', ';', '-'];

fn trim_edges(text: &str) -> &str {
    text.trim()
        .trim_matches(|c: char| EDGE_PUNCT.contains(&c))
        .trim()
}

/// Strip trailing legal-entity suffixes (Inc., LLC, Corp, ...) until
/// none remain. A suffix must be preceded by whitespace or a comma, so
/// names like "Costco" are left alone.
fn strip_legal_suffixes(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = LEGAL_SUFFIX_RE.replace(&current, "").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_company_once(text: &str) -> String {
    let without_urls = URL_ARTIFACT_RE.replace_all(text, "");
    let without_angles = ANGLE_REMNANT_RE.replace_all(&without_urls, "");
    let without_suffixes = strip_legal_suffixes(without_angles.trim());
    let without_the = LEADING_THE_RE.replace(&without_suffixes, "");
    let collapsed = WHITESPACE_RE.replace_all(&without_the, " ");
    trim_edges(&collapsed).to_string()
}

/// Clean an extracted company name for display.
///
/// Strips URL and HTML remnants, legal-entity suffixes, a leading
/// "the ", collapses whitespace, and trims edge punctuation. Runs to a
/// fixpoint so the result is stable under re-cleaning.
pub fn clean_company_name(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let next = clean_company_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Clean an extracted position title for display.
///
/// Collapses whitespace, trims edge punctuation, and strips the noise
/// words "position"/"role"/"opportunity"/"job"/"the" once each from the
/// start and end (not recursively — "Job Opportunity Manager" keeps its
/// middle words).
pub fn clean_position_name(raw: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(raw, " ");
    let mut current = trim_edges(&collapsed).to_string();

    for (leading, trailing) in POSITION_NOISE_RES.iter() {
        current = leading.replace(&current, "").into_owned();
        current = trailing.replace(&current, "").into_owned();
    }

    trim_edges(&current).to_string()
}

/// Normalize a company name for equality/substring comparison.
///
/// Same suffix-stripping logic as cleaning but intended purely for
/// matching, never for display.
pub fn normalize_company_name(raw: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(raw.trim(), " ");
    strip_legal_suffixes(&collapsed).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── clean_company_name ──────────────────────────────────────

    #[test]
    fn strips_legal_suffixes() {
        assert_eq!(clean_company_name("Acme Robotics Inc."), "Acme Robotics");
        assert_eq!(clean_company_name("Initech, LLC"), "Initech");
        assert_eq!(clean_company_name("Globex Corporation"), "Globex");
        assert_eq!(clean_company_name("Wayne Enterprises Co"), "Wayne Enterprises");
    }

    #[test]
    fn strips_stacked_suffixes() {
        // Multiple trailing suffixes all come off.
        assert_eq!(clean_company_name("Acme Inc. Co."), "Acme");
    }

    #[test]
    fn suffix_requires_separator() {
        assert_eq!(clean_company_name("Costco"), "Costco");
        assert_eq!(clean_company_name("Cisco"), "Cisco");
    }

    #[test]
    fn strips_urls_and_angle_remnants() {
        assert_eq!(
            clean_company_name("Acme [https://acme.com/careers]"),
            "Acme"
        );
        assert_eq!(clean_company_name("Acme <careers@acme.com>"), "Acme");
    }

    #[test]
    fn strips_leading_the_and_punctuation() {
        assert_eq!(clean_company_name("the Boring Group!"), "Boring Group");
        assert_eq!(clean_company_name("  Acme Robotics, "), "Acme Robotics");
    }

    #[test]
    fn clean_company_is_idempotent() {
        for input in [
            "Acme Robotics Inc.",
            "Acme Inc. Co.",
            "the  Boring   Group!",
            "Initech, LLC",
            "",
            "-",
            "Costco",
        ] {
            let once = clean_company_name(input);
            assert_eq!(clean_company_name(&once), once, "input: {input:?}");
        }
    }

    // ── clean_position_name ─────────────────────────────────────

    #[test]
    fn strips_noise_words_at_edges() {
        assert_eq!(clean_position_name("the Backend Engineer role"), "Backend Engineer");
        assert_eq!(clean_position_name("Account Coordinator position"), "Account Coordinator");
    }

    #[test]
    fn keeps_noise_words_in_the_middle() {
        assert_eq!(clean_position_name("Job Placement Manager"), "Job Placement Manager");
    }

    #[test]
    fn collapses_whitespace_and_trims_punctuation() {
        assert_eq!(clean_position_name("  Data   Analyst - "), "Data Analyst");
    }

    #[test]
    fn clean_position_is_idempotent() {
        for input in [
            "the Backend Engineer role",
            "Account Coordinator position",
            "role - position",
            "Data   Analyst,",
            "",
        ] {
            let once = clean_position_name(input);
            assert_eq!(clean_position_name(&once), once, "input: {input:?}");
        }
    }

    // ── normalize_company_name ──────────────────────────────────

    #[test]
    fn normalize_strips_comma_suffix_forms() {
        assert_eq!(normalize_company_name("Acme Robotics, Inc."), "Acme Robotics");
        assert_eq!(normalize_company_name("Acme Robotics Inc"), "Acme Robotics");
    }

    #[test]
    fn normalize_preserves_case_for_comparison() {
        assert_eq!(normalize_company_name("ACME Robotics LLC"), "ACME Robotics");
    }
}
