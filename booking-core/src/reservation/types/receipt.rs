use alloc::string::{String, ToString};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::format::envelope::Reply;

/// What the backend returns after a successful create or manage call.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    #[serde(default)]
    pub message: String,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub reservation_id: Option<String>,
}

impl SubmissionReceipt {
    /// Never fails: a write the backend accepted is reported as accepted even
    /// when `data` has an unexpected shape.
    pub fn from_reply(reply: &Reply) -> Self {
        let mut receipt = match &reply.data {
            Value::Object(_) => reply.data_as::<SubmissionReceipt>().unwrap_or_default(),
            _ => SubmissionReceipt::default(),
        };
        if receipt.message.is_empty() {
            if let Some(message) = &reply.message {
                receipt.message = message.clone();
            }
        }
        receipt
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
