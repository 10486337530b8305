//! Guard rails for applying a detected response to a tracked
//! application's status.

use crate::types::ResponseType;

/// Whether a tracked application in `current` status should move to
/// the status implied by `response`.
///
/// Rejections never overwrite an offer or a withdrawal. Interview
/// requests only advance applications still in `applied`/`follow_up`.
/// Offers overwrite everything except a withdrawal.
pub fn should_update_status(current: &str, response: ResponseType) -> bool {
    match response {
        ResponseType::Rejected => !matches!(current, "offered" | "withdrawn"),
        ResponseType::Interviewing => matches!(current, "applied" | "follow_up"),
        ResponseType::Offered => current != "withdrawn",
    }
}
