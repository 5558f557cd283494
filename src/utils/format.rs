//! Validation error formatting.
//!
//! Request validation produces an `{"issues": [{"path", "message"}]}`
//! document; [`format_validation_error`] turns such a document into the
//! single string shown to clients.

use serde::Serialize;
use serde_json::Value;

use crate::config::INVALID_INPUT_MESSAGE;

/// One failed validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

/// Ordered list of validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationIssues {
    pub issues: Vec<ValidationIssue>,
}

impl From<&validator::ValidationErrors> for ValidationIssues {
    fn from(errors: &validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        // HashMap order is random; sort so the message is stable
        fields.sort_by(|(a, _), (b, _)| a.to_string().cmp(&b.to_string()));

        let issues = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                let path = field.to_string();
                errs.iter().map(move |e| ValidationIssue {
                    path: path.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", path)),
                })
            })
            .collect();

        Self { issues }
    }
}

/// Render a validation failure document as one message.
///
/// - no usable `issues` entry: `"Invalid input"`
/// - non-empty `issues` array: the messages joined with `", "`
/// - anything else: the document serialized as JSON
pub fn format_validation_error(errors: &Value) -> String {
    let issues = match errors.get("issues") {
        Some(issues) if is_truthy(issues) => issues,
        _ => return INVALID_INPUT_MESSAGE.to_string(),
    };

    match issues.as_array() {
        Some(list) if !list.is_empty() => list
            .iter()
            .map(issue_message)
            .collect::<Vec<_>>()
            .join(", "),
        _ => serde_json::to_string(errors).unwrap_or_else(|_| INVALID_INPUT_MESSAGE.to_string()),
    }
}

fn issue_message(issue: &Value) -> String {
    match issue.get("message") {
        Some(Value::String(message)) => message.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
