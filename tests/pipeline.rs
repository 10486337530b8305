//! End-to-end tests over the full email-understanding pipeline.
//!
//! Each test feeds realistic raw emails through the public entry
//! points and checks the classified output, with no mocking of the
//! extraction or classification layers.

use chrono::{TimeZone, Utc};

use jobmail::classify::response::detect_response_type;
use jobmail::extract::extract_company;
use jobmail::matcher::{MemoryStore, find_matching_applications, should_update_status};
use jobmail::parser::JobEmailParser;
use jobmail::platform::Platform;
use jobmail::types::{ApplicationRef, RawEmail, ResponseType};

/// Route pipeline traces into the test harness; `RUST_LOG=jobmail=debug`
/// shows which rules fired.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn raw_email(message_id: &str, subject: &str, from: &str, body: &str) -> RawEmail {
    RawEmail {
        message_id: message_id.to_string(),
        subject: subject.to_string(),
        from_address: from.to_string(),
        to_address: "me@example.com".to_string(),
        date: Some(Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()),
        body_text: body.to_string(),
        body_preview: String::new(),
    }
}

fn application(id: i64, company: &str, position: Option<&str>, status: &str) -> ApplicationRef {
    ApplicationRef {
        id,
        company_name: company.to_string(),
        position: position.map(str::to_string),
        status: status.to_string(),
        date_applied: None,
        response_received: false,
        response_date: None,
    }
}

#[test]
fn interest_subject_yields_company_without_body() {
    let company = extract_company(
        "Thank You For Your Interest in Acme Robotics!",
        "",
        "careers@acme.com",
    );
    assert_eq!(company.as_deref(), Some("Acme Robotics"));
}

#[test]
fn indeed_confirmation_parses_end_to_end() {
    init_tracing();
    let parser = JobEmailParser::new();
    let email = raw_email(
        "<conf-1@indeed.com>",
        "Indeed Application: Backend Engineer",
        "Indeed Apply <indeedapply@indeed.com>",
        "Thank you for your interest in Initech! Your application has been submitted.\n\
         We will review your qualifications shortly.",
    );

    let parsed = parser.parse_email(&email).unwrap();
    assert!(parsed.is_job_email);
    assert_eq!(parsed.platform, Platform::Indeed);
    assert_eq!(parsed.company_name.as_deref(), Some("Initech"));
    assert_eq!(parsed.position.as_deref(), Some("Backend Engineer"));
    assert!(parsed.confidence >= 0.9);
}

#[test]
fn interview_invitation_with_three_signals() {
    let response = detect_response_type(
        "Interview Invitation - Acme Robotics",
        "We would like to schedule a phone interview regarding your application to \
         Acme Robotics. Please pick a time via our calendly link.",
        "hr@acme.com",
    );
    assert_eq!(response, Some(ResponseType::Interviewing));
}

#[test]
fn recruiter_outreach_never_counts_as_response() {
    let response = detect_response_type(
        "Exciting Opportunity at TechCo",
        "I came across your profile on LinkedIn and thought you'd be a great fit \
         for an open role. Let me know if you're interested.",
        "jane@techco.com",
    );
    assert_eq!(response, None);
}

#[test]
fn outreach_wins_over_embedded_offer_language() {
    let response = detect_response_type(
        "Following up",
        "We have an opportunity with a generous compensation package and a \
         flexible start date. Are you open to a quick call?",
        "sourcer@agency.com",
    );
    assert_eq!(response, None);
}

#[test]
fn rejection_from_corporate_sender() {
    let response = detect_response_type(
        "Update on your application",
        "Unfortunately, we have decided to move forward with other candidates.",
        "noreply@bigcorp.com",
    );
    assert_eq!(response, Some(ResponseType::Rejected));
}

#[test]
fn personal_sender_never_yields_rejection() {
    let response = detect_response_type(
        "Update on your application",
        "Unfortunately, we have decided to move forward with other candidates.",
        "someone@gmail.com",
    );
    assert_eq!(response, None);
}

#[test]
fn matcher_strategy_one_spans_suffixes_and_position_levels() {
    let store = MemoryStore::new(vec![application(
        1,
        "Acme Robotics Inc.",
        Some("Backend Engineer II"),
        "applied",
    )]);

    let hits = find_matching_applications(
        &store,
        Some("Acme Robotics"),
        Some("Backend Engineer"),
        "jobs@acme.com",
        "",
    )
    .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn matcher_results_never_repeat_an_id() {
    let store = MemoryStore::new(vec![
        application(1, "Acme Dynamics Robotics", None, "applied"),
        application(2, "Globex", None, "applied"),
    ]);

    // Direct match fails (no mutual substring) so the word strategy
    // hits app 1 twice, once per long word.
    let hits =
        find_matching_applications(&store, Some("Dynamics Robotics Group"), None, "", "").unwrap();
    let mut ids: Vec<i64> = hits.iter().map(|a| a.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), hits.len());
}

#[test]
fn full_batch_flow_from_inbox_to_status_update() {
    init_tracing();
    let parser = JobEmailParser::new();
    let store = MemoryStore::new(vec![application(
        7,
        "Globex Corporation",
        None,
        "applied",
    )]);

    let inbox = vec![
        raw_email(
            "<alert-1>",
            "New jobs for you: 14 engineering roles",
            "alerts@linkedin.com",
            "Recommended jobs based on your profile.",
        ),
        raw_email(
            "<rej-1>",
            "Update on your application at Globex",
            "no-reply@globex.com",
            "Unfortunately, we will not be moving forward with your candidacy.",
        ),
    ];

    // The alert is filtered out of the application path.
    let applications = parser.parse_multiple(&inbox);
    assert!(applications.iter().all(|e| e.message_id != "<alert-1>"));

    // The rejection is detected and matched back to the tracked app.
    let responses = parser.parse_response_emails(&inbox);
    assert_eq!(responses.len(), 1);
    let rejection = &responses[0];
    assert_eq!(rejection.response_type, Some(ResponseType::Rejected));
    assert_eq!(rejection.company_name.as_deref(), Some("Globex"));

    let hits = find_matching_applications(
        &store,
        rejection.company_name.as_deref(),
        rejection.position.as_deref(),
        &rejection.email_from,
        &rejection.body_preview,
    )
    .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 7);

    // And the status guard allows the transition.
    assert!(should_update_status(&hits[0].status, ResponseType::Rejected));
    assert!(!should_update_status("offered", ResponseType::Rejected));
}

#[test]
fn duplicate_message_ids_are_processed_once() {
    let parser = JobEmailParser::new();
    let email = raw_email(
        "<dup-1>",
        "Thank You For Your Interest in Acme Robotics!",
        "careers@acme.com",
        "Thank you for applying. Our hiring team will review your application.",
    );

    let results = parser.parse_multiple(&[email.clone(), email]);
    assert_eq!(results.len(), 1);
}
