//! Backend commands queued from UI to backend worker.

use shared::domain::ContactFormRecord;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    SubmitContact { record: ContactFormRecord },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SubmitContact { .. } => "submit_contact",
        }
    }
}
