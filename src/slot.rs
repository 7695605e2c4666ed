use crate::SlotId;
use serde::Deserialize;
use serde::Serialize;

/// One independent draw position (a "rotator" wheel).
///
/// Each slot produces its own result per round. The slot carries only its
/// identity and display label; in individual-pool mode its option list
/// lives in [`Pools::Individual`](crate::Pools), index-aligned with the
/// slot list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    id: SlotId,
    label: String,
}

impl Slot {
    pub fn new(id: SlotId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
    pub fn id(&self) -> SlotId {
        self.id
    }
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
