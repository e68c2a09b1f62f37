//! Events flowing from the backend worker back to the UI thread.

use page_core::SubmitOutcome;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ContactSubmitted(SubmitOutcome),
    BackendUnavailable(String),
}
