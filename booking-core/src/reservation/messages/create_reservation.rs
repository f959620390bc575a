use alloc::string::String;

use super::super::types::{SelectedSlot, SubmissionReceipt};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub reservation_type: String,
    pub selected_slot_start: String,
    pub selected_slot_end: String,
    pub line_user_id: String,
}

impl ReservationRequest {
    /// An unselected slot goes out as two empty strings.
    pub fn set_slot(&mut self, slot: Option<&SelectedSlot>) {
        match slot {
            Some(slot) => {
                self.selected_slot_start = slot.start.clone();
                self.selected_slot_end = slot.end.clone();
            }
            None => {
                self.selected_slot_start.clear();
                self.selected_slot_end.clear();
            }
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub form_data: ReservationRequest,
}

pub type CreateReservationResponse = SubmissionReceipt;
