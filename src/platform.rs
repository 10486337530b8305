//! Job-platform detection from sender domains.
//!
//! Each known ATS or job board is identified by a small set of domain
//! substrings. The table is a process-wide read-only constant; domain
//! sets are designed to be disjoint, so no ordering guarantee is
//! needed across platforms.

use serde::{Deserialize, Serialize};

/// A third-party job-application or ATS service, identifiable by
/// sender domain. `Generic` means "no known platform".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Generic,
    Indeed,
    Linkedin,
    Greenhouse,
    Lever,
    Workday,
    Icims,
    Smartrecruiters,
    Workable,
    Jobvite,
    Taleo,
    Ashby,
    Bamboohr,
    Jazz,
    Breezy,
    Recruiterbox,
    Zoho,
    Handshake,
}

impl Platform {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Indeed => "indeed",
            Self::Linkedin => "linkedin",
            Self::Greenhouse => "greenhouse",
            Self::Lever => "lever",
            Self::Workday => "workday",
            Self::Icims => "icims",
            Self::Smartrecruiters => "smartrecruiters",
            Self::Workable => "workable",
            Self::Jobvite => "jobvite",
            Self::Taleo => "taleo",
            Self::Ashby => "ashby",
            Self::Bamboohr => "bamboohr",
            Self::Jazz => "jazz",
            Self::Breezy => "breezy",
            Self::Recruiterbox => "recruiterbox",
            Self::Zoho => "zoho",
            Self::Handshake => "handshake",
        }
    }
}

/// Platform → sender-domain substrings.
const PLATFORM_DOMAINS: &[(Platform, &[&str])] = &[
    (Platform::Indeed, &["indeed.com", "indeedemail.com", "indeedapply"]),
    (Platform::Linkedin, &["linkedin.com", "linkedin.email", "e.linkedin.com"]),
    (
        Platform::Handshake,
        &["handshake.com", "joinhandshake.com", "m.joinhandshake.com"],
    ),
    (Platform::Greenhouse, &["greenhouse.io", "greenhouse-mail.io"]),
    (Platform::Lever, &["lever.co", "hire.lever.co"]),
    (Platform::Workday, &["workday.com", "myworkdayjobs.com"]),
    (Platform::Icims, &["icims.com"]),
    (Platform::Smartrecruiters, &["smartrecruiters.com"]),
    (Platform::Workable, &["workablemail.com", "workable.com"]),
    (Platform::Jobvite, &["jobvite.com"]),
    (Platform::Taleo, &["taleo.net", "taleo.com"]),
    (Platform::Ashby, &["ashbyhq.com"]),
    (Platform::Bamboohr, &["bamboohr.com"]),
    (Platform::Jazz, &["jazz.co", "applytojob.com"]),
    (Platform::Breezy, &["breezy.hr"]),
    (Platform::Recruiterbox, &["recruiterbox.com"]),
    (Platform::Zoho, &["zoho.com", "zohorecruit.com"]),
];

/// Detect which job platform an email is from.
///
/// Returns the first platform whose domain substring appears anywhere
/// in the lower-cased sender address, `Generic` if none match. The
/// subject is accepted for interface symmetry but unused.
pub fn detect_platform(from_address: &str, _subject: &str) -> Platform {
    let from_lower = from_address.to_lowercase();

    for (platform, domains) in PLATFORM_DOMAINS {
        if domains.iter().any(|d| from_lower.contains(d)) {
            return *platform;
        }
    }

    Platform::Generic
}

/// Whether the sender address belongs to any known job platform.
pub fn is_platform_sender(from_address: &str) -> bool {
    detect_platform(from_address, "") != Platform::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_indeed_variants() {
        assert_eq!(
            detect_platform("Indeed Apply <indeedapply@indeed.com>", ""),
            Platform::Indeed
        );
        assert_eq!(
            detect_platform("donotreply@indeedemail.com", ""),
            Platform::Indeed
        );
    }

    #[test]
    fn detects_ats_domains() {
        assert_eq!(
            detect_platform("no-reply@greenhouse-mail.io", ""),
            Platform::Greenhouse
        );
        assert_eq!(detect_platform("jobs@hire.lever.co", ""), Platform::Lever);
        assert_eq!(
            detect_platform("talent@myworkdayjobs.com", ""),
            Platform::Workday
        );
        assert_eq!(detect_platform("careers@ashbyhq.com", ""), Platform::Ashby);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            detect_platform("Jobs-NoReply@LinkedIn.com", ""),
            Platform::Linkedin
        );
    }

    #[test]
    fn unknown_sender_is_generic() {
        assert_eq!(detect_platform("careers@acme.com", ""), Platform::Generic);
        assert_eq!(detect_platform("", ""), Platform::Generic);
    }

    #[test]
    fn platform_sender_check() {
        assert!(is_platform_sender("noreply@smartrecruiters.com"));
        assert!(!is_platform_sender("hr@acme.com"));
    }
}
