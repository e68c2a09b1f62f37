use thiserror::Error;

use crate::domain::ContactField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{}`", .0.wire_name())]
    MissingField(ContactField),
    #[error("malformed email address: {0:?}")]
    MalformedEmail(String),
}
