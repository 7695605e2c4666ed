use crate::Group;
use crate::InvalidConfiguration;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Balanced random partition of a member list into N groups.
///
/// Randomization is two-stage and the stages are independent:
///
/// 1. A Fisher–Yates shuffle of the members (every permutation equally
///    likely given a uniform random source).
/// 2. A uniform choice, without replacement, of which groups absorb the
///    leftover members when the list does not divide evenly.
///
/// The shuffled list is then sliced into contiguous chunks in group order,
/// so membership fairness and size fairness each hold on their own. Sizes
/// never differ by more than one, and with at least as many members as
/// groups no group is left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocator {
    members: Vec<String>,
    groups: usize,
    names: Vec<String>,
}

impl Allocator {
    pub fn new(members: Vec<String>, groups: usize) -> Self {
        Self {
            members,
            groups,
            names: Vec::new(),
        }
    }
    /// Custom group names; empty entries fall back to "Group {i+1}".
    pub fn named(self, names: Vec<String>) -> Self {
        Self { names, ..self }
    }

    /// Boundary pre-check for a proposed (members, group count) pair.
    ///
    /// Stricter than what [`allocate`](Self::allocate) itself requires:
    /// also rejects empty/whitespace-only and duplicate member names, which
    /// the algorithm tolerates but the product does not accept as input.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        self.check()?;
        if let Some(index) = self.members.iter().position(|m| m.trim().is_empty()) {
            return Err(InvalidConfiguration::EmptyMemberName { index });
        }
        let mut seen = HashSet::new();
        for name in self.members.iter() {
            if !seen.insert(name.as_str()) {
                return Err(InvalidConfiguration::DuplicateMemberName { name: name.clone() });
            }
        }
        Ok(())
    }

    /// Partitions the members into groups using the thread RNG.
    pub fn allocate(&self) -> Result<Vec<Group>, InvalidConfiguration> {
        self.allocate_with(&mut rand::rng())
    }

    /// Partitions the members into groups using the given random source.
    ///
    /// Group sizes and names are deterministic given a fixed source;
    /// membership is where the randomness lives.
    pub fn allocate_with<R: Rng>(&self, rng: &mut R) -> Result<Vec<Group>, InvalidConfiguration> {
        self.check()?;
        let mut pile = self.members.clone();
        pile.shuffle(rng);
        let base = pile.len() / self.groups;
        let extra = pile.len() % self.groups;
        // which groups take one leftover member, independent of the shuffle
        let mut sizes = vec![base; self.groups];
        let mut order = (0..self.groups).collect::<Vec<usize>>();
        order.shuffle(rng);
        for &i in order.iter().take(extra) {
            sizes[i] += 1;
        }
        let mut pile = pile.into_iter();
        Ok(sizes
            .into_iter()
            .enumerate()
            .map(|(i, size)| {
                let members = pile.by_ref().take(size).collect();
                Group::new(i + 1, self.label(i), members)
            })
            .collect())
    }

    /// Preconditions the algorithm itself depends on.
    fn check(&self) -> Result<(), InvalidConfiguration> {
        if self.groups == 0 {
            return Err(InvalidConfiguration::GroupCount {
                groups: self.groups,
            });
        }
        if self.members.len() < self.groups {
            return Err(InvalidConfiguration::NotEnoughMembers {
                members: self.members.len(),
                groups: self.groups,
            });
        }
        Ok(())
    }

    /// The i-th group's name: the custom one if present and non-empty.
    fn label(&self, i: usize) -> String {
        self.names
            .get(i)
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Group {}", i + 1))
    }
}
