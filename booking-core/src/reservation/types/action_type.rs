/// What the manage form does to an existing reservation.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    #[default]
    Cancel,
    Change,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Cancel => "cancel",
            ActionType::Change => "change",
        }
    }
}

impl core::fmt::Display for ActionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ActionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cancel" => Ok(ActionType::Cancel),
            "change" => Ok(ActionType::Change),
            _ => Err(()),
        }
    }
}
