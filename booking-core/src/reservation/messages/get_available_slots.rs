use alloc::{string::String, vec::Vec};

use super::super::types::Slot;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetAvailableSlotsRequest {
    pub date_str: String,
    pub reservation_type: String,
}

pub type GetAvailableSlotsResponse = Vec<Slot>;
