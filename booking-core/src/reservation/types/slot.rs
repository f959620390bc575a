use alloc::string::String;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(rename = "time")]
    pub display_time: String,
    pub available_count: u32,
    pub start: String,
    pub end: String,
}

impl Slot {
    pub fn selected(&self) -> SelectedSlot {
        SelectedSlot {
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectedSlot {
    pub start: String,
    pub end: String,
}
