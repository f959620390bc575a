/// Backend operations the widget can invoke.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    GetAvailableSlots,
    CreateReservation,
    ManageReservation,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GetAvailableSlots => "getAvailableSlots",
            Action::CreateReservation => "createReservation",
            Action::ManageReservation => "manageReservation",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "getAvailableSlots" => Ok(Action::GetAvailableSlots),
            "createReservation" => Ok(Action::CreateReservation),
            "manageReservation" => Ok(Action::ManageReservation),
            _ => Err(()),
        }
    }
}
