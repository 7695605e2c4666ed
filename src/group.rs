use serde::Deserialize;
use serde::Serialize;

/// One allocated team.
///
/// Produced fresh by every [`Allocator`](crate::Allocator) run and never
/// mutated in place: re-shuffling yields a new set of `Group` values.
/// Ids are 1-based to match what the UI displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: usize,
    name: String,
    members: Vec<String>,
}

impl Group {
    pub fn new(id: usize, name: String, members: Vec<String>) -> Self {
        Self { id, name, members }
    }
    /// 1-based position of this group in the allocation.
    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn members(&self) -> &[String] {
        &self.members
    }
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.members.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// display renders a single "name: members" line for the CLI
    #[test]
    fn display_line() {
        let group = Group::new(1, "Group 1".into(), vec!["ana".into(), "bo".into()]);
        assert_eq!(group.to_string(), "Group 1: ana, bo");
        assert_eq!(group.size(), 2);
    }
}
