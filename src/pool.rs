use crate::SlotId;
use serde::Deserialize;
use serde::Serialize;

/// An ordered list of drawable options.
///
/// Order matters only for display; draws sample uniformly. Values are
/// plain strings because the UI treats them as opaque labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pool(Vec<String>);

impl Pool {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
    pub fn values(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Pool {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

/// Convenience for literals in tests and examples.
impl<S: Into<String>, const N: usize> From<[S; N]> for Pool {
    fn from(values: [S; N]) -> Self {
        Self(values.into_iter().map(Into::into).collect())
    }
}

/// Shared vs per-slot option pools for one lottery project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pools {
    /// One list drawn from by every slot.
    Shared(Pool),
    /// One list per slot, index-aligned with the slot list.
    Individual(Vec<Pool>),
}

impl Pools {
    /// The pool the slot at this position draws from.
    pub fn for_slot(&self, position: SlotId) -> Option<&Pool> {
        match self {
            Self::Shared(pool) => Some(pool),
            Self::Individual(pools) => pools.get(position),
        }
    }
    /// Picks a limited-mode round can sustain per slot.
    ///
    /// Shared pools sustain one pick per option; per-slot pools are bounded
    /// by the most constrained slot.
    pub fn capacity(&self) -> usize {
        match self {
            Self::Shared(pool) => pool.len(),
            Self::Individual(pools) => pools.iter().map(Pool::len).min().unwrap_or(0),
        }
    }
    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared(_))
    }
}
