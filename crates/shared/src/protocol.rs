//! Wire types for the external contact-form processor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CONTACT_ENDPOINT_PATH: &str = "contact_form.php";

/// Body returned by the contact endpoint. Only `success` is read, and it is
/// judged loosely since the processor is not strict about its type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmitResponse {
    #[serde(default)]
    pub success: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactSubmitResponse {
    /// Reads a decoded body. Anything other than a JSON object carries no
    /// `success` field and so reads as a failure.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                success: fields.remove("success").unwrap_or(Value::Null),
                message: fields
                    .remove("message")
                    .and_then(|message| message.as_str().map(str::to_string)),
            },
            _ => Self::default(),
        }
    }

    pub fn succeeded(&self) -> bool {
        is_truthy(&self.success)
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
