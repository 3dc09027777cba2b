use serde::Deserialize;

/// Dashboard counters. `messages` counts unread messages only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AdminStats {
    #[serde(default)]
    pub illnesses: u64,
    #[serde(default)]
    pub doctors: u64,
    #[serde(default)]
    pub medicines: u64,
    #[serde(default)]
    pub messages: u64,
}
