use alloc::string::String;

use super::super::types::{ActionType, SelectedSlot, SubmissionReceipt};

/// Every key is always present on the wire; the `new_*` values are `null`
/// unless the action is a change.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationMutation {
    pub reservation_id: String,
    pub action_type: ActionType,
    pub new_slot_start: Option<String>,
    pub new_slot_end: Option<String>,
    pub new_type: Option<String>,
}

impl ReservationMutation {
    pub fn cancel(reservation_id: String) -> Self {
        Self {
            reservation_id,
            action_type: ActionType::Cancel,
            new_slot_start: None,
            new_slot_end: None,
            new_type: None,
        }
    }

    pub fn change(reservation_id: String, slot: Option<&SelectedSlot>, new_type: String) -> Self {
        let (start, end) = match slot {
            Some(slot) => (slot.start.clone(), slot.end.clone()),
            None => (String::new(), String::new()),
        };
        Self {
            reservation_id,
            action_type: ActionType::Change,
            new_slot_start: Some(start),
            new_slot_end: Some(end),
            new_type: Some(new_type),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManageReservationRequest {
    pub form_data: ReservationMutation,
}

pub type ManageReservationResponse = SubmissionReceipt;
