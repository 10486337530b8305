//! Response-type detection for application follow-up emails.
//!
//! Classifies an email as a rejection, an interview request, or an
//! offer. Signal strength is asymmetric on purpose: one rejection
//! phrase suffices, offers need two hits, interviews need three (or
//! two plus an explicit reference to an application the user actually
//! submitted). Recruiter cold outreach is screened out first so that
//! "exciting opportunity" mail never lands in the pipeline as an
//! interview.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::classify::is_personal_sender;
use crate::text::prefix;
use crate::types::ResponseType;

/// Body window scanned for response signals.
const RESPONSE_BODY_WINDOW: usize = 3000;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
        .collect()
}

static REJECTION_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"unfortunately",
        r"regret to inform",
        r"not (be )?moving forward",
        r"not selected",
        r"not (been )?chosen",
        r"decided not to proceed",
        r"will not be (proceeding|continuing)",
        r"position has been filled",
        r"role has been filled",
        r"pursuing other candidates",
        r"other candidates more closely",
        r"decided to (pursue|move forward with) other",
        r"not the right fit",
        r"not a (good )?match",
        r"we (have|'ve) decided to go",
        r"gone with another candidate",
        r"won't be advancing",
        r"unable to offer",
        r"not able to offer",
        r"will not be offering",
        r"your application (was|has been) unsuccessful",
        r"thank you for your interest.{0,50}however",
        r"we (appreciate|thank).{0,50}but.{0,50}(not|won't|decided)",
        r"after careful (consideration|review).{0,100}(not|decided|unfortunately)",
    ])
});

static INTERVIEW_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"schedule (an? )?(phone |video |virtual |in-person )?interview",
        r"interview (with|at|for)",
        r"like to (invite|schedule)",
        r"invit(e|ing) you (to|for).{0,30}interview",
        r"would you be available.{0,50}(call|chat|interview|meet)",
        r"set up (a |an )?(time|call|meeting|interview)",
        r"book (a |an )?(time|slot|interview)",
        r"next (step|stage|round)",
        r"move(d|ing)? (forward|to the next)",
        r"proceed(ing)? (to|with).{0,20}(interview|next)",
        r"pleased to (invite|inform|let you know)",
        r"excited to (invite|inform|move)",
        r"like to (speak|talk|chat|meet) with you",
        r"calendly\.com",
        r"doodle\.com",
        r"goodtime\.io",
        r"pick a time",
        r"select a time",
        r"choose a time",
        r"availability.{0,30}(interview|call|chat|meeting)",
        r"when.{0,20}available.{0,30}(talk|call|chat|meet|interview)",
    ])
});

static OFFER_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"offer (letter|of employment)",
        r"(pleased|happy|excited) to (offer|extend)",
        r"extend (an |a )?(job )?offer",
        r"we.{0,20}(like|want) to offer you",
        r"offer you (the |a )?(position|role|job)",
        r"congratulations.{0,50}(offer|accepted|position)",
        r"accept(ing)? (the |this )?(offer|position|role)",
        r"terms of (employment|your offer)",
        r"compensation (package|details)",
        r"start date",
        r"onboarding",
    ])
});

/// Phrasing recruiters use when cold-sourcing for a new role.
static OUTREACH_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"came across your (profile|resume|background|linkedin)",
        r"found your (profile|resume|background|linkedin)",
        r"saw your (profile|resume|background|linkedin)",
        r"viewed your (profile|resume|linkedin)",
        r"noticed your (profile|resume|background|linkedin)",
        r"i'm reaching out",
        r"i am reaching out",
        r"reaching out (to you )?(about|regarding|because)",
        r"wanted to reach out",
        r"reaching out to (see|gauge|discuss|explore)",
        r"i wanted to (connect|reach out|touch base|introduce)",
        r"thought (of you|you'd be|you might be)",
        r"you'd be (a )?(great|perfect|ideal|excellent) (fit|candidate|match)",
        r"you might be (interested|a good fit|a great fit)",
        r"perfect (fit|candidate|match) for",
        r"great (fit|candidate|match) for",
        r"ideal (candidate|fit) for",
        r"i have (a |an )?(opportunity|role|position)",
        r"i've got (a |an )?(opportunity|role|position)",
        r"we have (a |an )?(opportunity|role|position)",
        r"we've got (a |an )?(opportunity|role|position)",
        r"there's (a |an )?(opportunity|role|position)",
        r"exciting opportunity",
        r"new opportunity",
        r"open (role|position|opportunity)",
        r"are you (open to|interested in|looking for)",
        r"would you be (open to|interested in)",
        r"is this something you'd be interested",
        r"would this be of interest",
        r"are you currently (looking|open|exploring)",
        r"looking for (new opportunities|a new role|your next)",
        r"exploring (new opportunities|new roles)",
        r"on behalf of (my |our )?client",
        r"my client (is |has )",
        r"one of (my |our )clients",
        r"client of (mine|ours)",
        r"confidential (search|opportunity|role|position)",
        r"passive candidates",
        r"your (background|experience|skills) (caught|stood out|impressed|align)",
        r"based on your (experience|background|profile|linkedin)",
        r"your (linkedin|profile) (caught|stood out|impressed)",
        r"quick (call|chat|conversation)",
        r"brief (call|chat|conversation)",
        r"hop on a (call|quick call)",
        r"jump on a (call|quick call)",
        r"15 (minute|min) (call|chat)",
        r"20 (minute|min) (call|chat)",
        r"let me know if.{0,30}interested",
        r"let me know if.{0,30}open to",
        r"if you're interested.{0,30}let me know",
        r"if (this|you're) interested",
        r"feel free to reach out",
        r"feel free to reply",
        r"looking forward to (hearing|connecting)",
    ])
});

/// Outreach-flavored subject lines; weaker evidence on their own.
static OUTREACH_SUBJECT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"opportunity",
        r"interested\?",
        r"perfect fit",
        r"great fit",
        r"quick question",
        r"reaching out",
        r"your (profile|background|experience)",
        r"new role",
        r"open (role|position)",
        r"job opportunity",
        r"career opportunity",
    ])
});

/// Phrases showing the email is about an application the user made.
static APPLICATION_REFERENCE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"your application",
        r"you applied",
        r"application (?:to|at|for|with)",
        r"role you applied",
        r"position you applied",
        r"regarding your.{0,20}application",
        r"thank you for applying",
        r"thanks for applying",
        r"after reviewing your application",
        r"reviewed your application",
        r"your recent application",
    ])
});

fn count_matches(res: &[Regex], text: &str) -> usize {
    res.iter().filter(|re| re.is_match(text)).count()
}

/// Whether the email is a recruiter cold-sourcing for a new role
/// rather than responding to an application.
///
/// Two body/subject outreach phrases make it outreach outright; one
/// outreach phrase plus an outreach-flavored subject is also enough.
pub fn is_recruiter_outreach(subject: &str, body: &str) -> bool {
    let text = format!("{} {}", subject, prefix(body, RESPONSE_BODY_WINDOW)).to_lowercase();

    let outreach = count_matches(&OUTREACH_RES, &text);
    if outreach >= 2 {
        return true;
    }

    let subject_lower = subject.to_lowercase();
    let subject_outreach = count_matches(&OUTREACH_SUBJECT_RES, &subject_lower);
    subject_outreach >= 1 && outreach >= 1
}

/// Classify a follow-up email as rejection, interview, or offer.
///
/// Precedence: recruiter outreach is screened out first, then offers,
/// then interviews, then rejections. Rejection scanning is skipped for
/// personal webmail senders since those are usually human replies.
pub fn detect_response_type(subject: &str, body: &str, from_address: &str) -> Option<ResponseType> {
    let text = format!("{} {}", subject, prefix(body, RESPONSE_BODY_WINDOW)).to_lowercase();

    if is_recruiter_outreach(subject, body) {
        debug!(subject = %subject, "recruiter outreach, not a response");
        return None;
    }

    let offer_count = count_matches(&OFFER_RES, &text);
    if offer_count >= 2 {
        debug!(offer_count, "classified as offer");
        return Some(ResponseType::Offered);
    }

    let interview_count = count_matches(&INTERVIEW_RES, &text);
    let has_application_reference = APPLICATION_REFERENCE_RES.iter().any(|re| re.is_match(&text));
    if interview_count >= 3 || (interview_count >= 2 && has_application_reference) {
        debug!(interview_count, has_application_reference, "classified as interview request");
        return Some(ResponseType::Interviewing);
    }

    if !is_personal_sender(from_address) {
        let rejection_count = count_matches(&REJECTION_RES, &text);
        if rejection_count >= 1 {
            debug!(rejection_count, "classified as rejection");
            return Some(ResponseType::Rejected);
        }
    }

    None
}
