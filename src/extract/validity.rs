//! Validity filters — do extracted fragments look like a company name
//! or a position title?
//!
//! Each filter is a short-circuiting sequence of rejections. The
//! design goal is precision over recall: never return a false field
//! rather than always return some field. Absence is preferred to a
//! wrong guess, because downstream matching and UI treat `None` as
//! "needs manual input".

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Generic and platform names that are never a real company.
const GENERIC_NAMES: &[&str] = &[
    "indeed",
    "linkedin",
    "hr team",
    "recruiting",
    "talent",
    "careers",
    "indeed apply",
    "indeed job",
    "linkedin jobs",
    "glassdoor",
    "ziprecruiter",
    "monster",
    "careerbuilder",
    "handshake",
    "greenhouse",
    "lever",
    "workday",
    "icims",
    "smartrecruiters",
    "workable",
    "jobvite",
    "taleo",
    "ashby",
    "bamboohr",
    "zoho",
    "breezy",
    "jazz",
    "recruiterbox",
    "adobe acrobat sign",
    "noreply",
    "no-reply",
    "notifications",
    "alerts",
    "updates",
    "human resources",
    "hr",
    "adobesign",
    "adobe sign",
];

/// Job-title keywords: a fragment containing one of these is probably a
/// position, not a company, unless a company indicator is also present.
const TITLE_KEYWORDS: &[&str] = &[
    "manager",
    "director",
    "coordinator",
    "specialist",
    "analyst",
    "engineer",
    "developer",
    "designer",
    "intern",
    "associate",
    "executive",
    "representative",
    "lead",
    "senior",
    "junior",
    "administrator",
    "assistant",
    "consultant",
    "advisor",
    "recruiter",
];

/// Suffix-style words that mark a fragment as a company.
const COMPANY_INDICATORS: &[&str] = &[
    "inc",
    "llc",
    "ltd",
    "corp",
    "group",
    "solutions",
    "services",
    "consulting",
    "technologies",
    "systems",
];

/// Wider indicator set used by the person-name shape test. Grown
/// empirically from real company names that would otherwise look like
/// "First Last".
const COMPANY_WORDS: &[&str] = &[
    "inc",
    "llc",
    "ltd",
    "corp",
    "group",
    "solutions",
    "services",
    "consulting",
    "technologies",
    "systems",
    "company",
    "studio",
    "media",
    "digital",
    "agency",
    "recruiting",
    "staffing",
    "partners",
    "associates",
    "robotics",
    "labs",
    "fitness",
    "clubs",
    "pirates",
    "phillies",
    "energy",
    "college",
    "university",
    "hospital",
    "medical",
];

/// Sentence fragments that show the capture ran past a company name.
static FRAGMENT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"^llc\.",
        r"we have",
        r"we are",
        r"in the meantime",
        r"please",
        r"thank you",
    ])
});

/// Boilerplate that disqualifies a company candidate outright.
static COMPANY_BAD_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"following job",
        r"has been",
        r"was received",
        r"thanks for",
        r"we received",
        r"your application",
        r"the position",
        r"this email",
        r"click here",
        r"log in",
        r"http",
        r"www\.",
        r"was intended",
        r"on \w+,",
        r"^\d{1,2}:\d{2}",
        r"hr team",
        r"recruiting team",
        r"talent team",
        r"intended for",
        r"apply now",
        r"view job",
        r"see all jobs",
    ])
});

const PLATFORM_PREFIXES: &[&str] = &["indeed", "linkedin", "glassdoor", "handshake"];

static STARTS_CAPITAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9]").unwrap());

/// Keywords whose presence marks a fragment as a position title.
/// A positive hit overrides every shape-based rejection below.
const POSITION_KEYWORDS: &[&str] = &[
    "intern",
    "manager",
    "director",
    "engineer",
    "developer",
    "analyst",
    "specialist",
    "coordinator",
    "assistant",
    "associate",
    "representative",
    "recruiter",
    "designer",
    "planner",
    "lead",
    "executive",
    "administrator",
    "consultant",
    "advisor",
    "officer",
    "estimator",
    "technician",
    "operator",
    "supervisor",
    "trainer",
];

/// Shapes that are companies or people, never bare position titles.
static COMPANY_SHAPED_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        // "David Yurman" — two capitalized words, nothing else
        r"^[A-Z][a-z]+\s+[A-Z][a-z]+$",
        // "WebFX"-style brand names
        r"^[A-Z][A-Za-z]+FX$",
        // "Breese.McIlvaine" — dotted person name
        r"^[A-Z][a-z]+\.[A-Z][a-z]+$",
    ])
});

/// Boilerplate that disqualifies a position candidate.
static POSITION_BAD_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"^the\s",
        r"http",
        r"www\.",
        r"click here",
        r"@",
        r"\.com",
        r"you signed",
        r"review documents",
        r"thanks for applying",
        r"thank you for",
        r"on \w+,",
        r"this email",
        r"was intended",
        r"to ensure",
        r"continue receiving",
        r"please add",
        r"just want to make sure",
        r"you can check",
        r"status of your",
        r"if you have any questions",
        r"hiring process",
        r"\[image:",
        r"^>",
        r"^\d{3}[.\-]",
        r"email:",
        r"phone:",
        r"^from:",
        r"was sent to",
        r"in the meantime",
        r"^of\s+",
        r"we'll also",
        r"we will",
        r"you've taken",
        r"first step",
        r"here$",
        r"^our\s+",
        r"your application",
        r"your recent",
        r"be considered",
        r"training program",
        r"one of our",
    ])
});

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// "First Last" / "First Middle Last" shape: two or three words, each
/// Titlecase and purely alphabetic.
fn is_person_name_shape(words: &[&str]) -> bool {
    (words.len() == 2 || words.len() == 3)
        && words.iter().all(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    first.is_uppercase()
                        && w.chars().count() > 1
                        && chars.all(|c| c.is_lowercase())
                        && w.chars().all(|c| c.is_alphabetic())
                }
                None => false,
            }
        })
}

/// Check whether a cleaned fragment looks like a valid company name.
pub fn looks_like_company_name(text: &str) -> bool {
    let char_count = text.chars().count();
    if char_count < 2 || char_count > 80 {
        return false;
    }

    let lower = text.trim().to_lowercase();

    if GENERIC_NAMES.contains(&lower.as_str()) {
        trace!(candidate = %text, "company candidate is a generic/platform name");
        return false;
    }

    // A job title with no company suffix is assumed to be a position.
    if TITLE_KEYWORDS.iter().any(|kw| lower.contains(kw))
        && !COMPANY_INDICATORS.iter().any(|ind| lower.contains(ind))
    {
        trace!(candidate = %text, "company candidate looks like a job title");
        return false;
    }

    // "First Last" shape with no company word is probably a person.
    // Known trade-off: short real company names without an indicator
    // word ("Grow Therapy") are rejected too.
    let words: Vec<&str> = text.split_whitespace().collect();
    if is_person_name_shape(&words) && !COMPANY_WORDS.iter().any(|w| lower.contains(w)) {
        trace!(candidate = %text, "company candidate looks like a person name");
        return false;
    }

    if FRAGMENT_RES.iter().any(|re| re.is_match(&lower)) {
        return false;
    }

    if PLATFORM_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return false;
    }

    if COMPANY_BAD_RES.iter().any(|re| re.is_match(&lower)) {
        return false;
    }

    STARTS_CAPITAL_RE.is_match(text)
}

/// Check whether a cleaned fragment looks like a valid position title.
pub fn looks_like_position(text: &str) -> bool {
    let char_count = text.chars().count();
    if char_count < 3 || char_count > 100 {
        return false;
    }

    let lower = text.to_lowercase();

    // Positive signal overrides the shape checks below.
    if POSITION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return true;
    }

    if COMPANY_SHAPED_RES.iter().any(|re| re.is_match(text)) {
        return false;
    }

    // A single capitalized word with no position keyword is a company.
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() == 1 && text.chars().next().is_some_and(|c| c.is_uppercase()) {
        return false;
    }

    !POSITION_BAD_RES.iter().any(|re| re.is_match(&lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── looks_like_company_name ─────────────────────────────────

    #[test]
    fn accepts_ordinary_company_names() {
        assert!(looks_like_company_name("Acme Robotics"));
        assert!(looks_like_company_name("Initech"));
        assert!(looks_like_company_name("TEKsystems"));
        assert!(looks_like_company_name("3M"));
    }

    #[test]
    fn rejects_length_bounds() {
        assert!(!looks_like_company_name("A"));
        assert!(!looks_like_company_name(&"X".repeat(81)));
    }

    #[test]
    fn rejects_generic_and_platform_names() {
        assert!(!looks_like_company_name("Indeed"));
        assert!(!looks_like_company_name("LinkedIn Jobs"));
        assert!(!looks_like_company_name("HR Team"));
        assert!(!looks_like_company_name("Greenhouse"));
    }

    #[test]
    fn rejects_job_titles_without_company_indicator() {
        assert!(!looks_like_company_name("Senior Software Engineer"));
        assert!(!looks_like_company_name("Marketing Manager"));
    }

    #[test]
    fn accepts_titles_with_company_indicator() {
        assert!(looks_like_company_name("Lead Solutions Group"));
    }

    #[test]
    fn rejects_person_names() {
        assert!(!looks_like_company_name("Jane Doe"));
        assert!(!looks_like_company_name("John Michael Smith"));
    }

    #[test]
    fn person_shape_with_company_word_passes() {
        assert!(looks_like_company_name("Acme Robotics"));
        assert!(looks_like_company_name("Crunch Fitness"));
        assert!(looks_like_company_name("Pittsburgh Pirates"));
    }

    #[test]
    fn two_titlecase_words_without_indicator_rejected() {
        // Known precision/recall trade-off: real short company names
        // with no indicator word are lost.
        assert!(!looks_like_company_name("Blue Apron"));
    }

    #[test]
    fn rejects_sentence_fragments_and_boilerplate() {
        assert!(!looks_like_company_name("We have received"));
        assert!(!looks_like_company_name("Please note"));
        assert!(!looks_like_company_name("Thank you for applying"));
        assert!(!looks_like_company_name("Your Application Team"));
        assert!(!looks_like_company_name("Www.example"));
    }

    #[test]
    fn rejects_platform_prefixes() {
        assert!(!looks_like_company_name("Indeed Apply Team"));
        assert!(!looks_like_company_name("Linkedin Talent"));
    }

    #[test]
    fn requires_leading_capital_or_digit() {
        assert!(!looks_like_company_name("acme robotics"));
        assert!(looks_like_company_name("42Floors"));
    }

    // ── looks_like_position ─────────────────────────────────────

    #[test]
    fn accepts_on_position_keyword() {
        assert!(looks_like_position("Backend Engineer"));
        assert!(looks_like_position("PR Intern"));
        assert!(looks_like_position("Senior Account Executive"));
        // Keyword overrides the two-titlecase-word company shape.
        assert!(looks_like_position("Operations Manager"));
    }

    #[test]
    fn rejects_position_length_bounds() {
        assert!(!looks_like_position("QA"));
        assert!(!looks_like_position(&"x".repeat(101)));
    }

    #[test]
    fn rejects_company_shaped_text() {
        assert!(!looks_like_position("David Yurman"));
        assert!(!looks_like_position("WebFX"));
        assert!(!looks_like_position("Breese.McIlvaine"));
    }

    #[test]
    fn rejects_single_capitalized_word() {
        assert!(!looks_like_position("Acme"));
        assert!(!looks_like_position("Phillies"));
    }

    #[test]
    fn rejects_boilerplate() {
        assert!(!looks_like_position("click here to view"));
        assert!(!looks_like_position("your application status"));
        assert!(!looks_like_position("of PR programs"));
        assert!(!looks_like_position("our Customer Marketing"));
        assert!(!looks_like_position("www.jobs.example"));
    }
}
