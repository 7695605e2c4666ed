use crate::SlotId;

/// Rejection of a malformed draw or grouping configuration.
///
/// Raised by the pre-call validators, never mid-draw. Every variant is
/// caller-recoverable: the caller is expected to re-prompt the user with
/// the attached message rather than retry automatically. Pool exhaustion
/// is **not** an error; see [`Outcome::Exhausted`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidConfiguration {
    /// Group count must be at least 1.
    GroupCount { groups: usize },
    /// Fewer members than groups to fill.
    NotEnoughMembers { members: usize, groups: usize },
    /// A member name is empty or whitespace-only.
    EmptyMemberName { index: usize },
    /// The same member name appears more than once.
    DuplicateMemberName { name: String },
    /// Limited draw mode cannot sustain one pick per slot.
    TooManySlots { slots: usize, capacity: usize },
    /// Individual pool mode with a slot missing its pool.
    MissingPool { slot: SlotId },
}

impl std::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GroupCount { groups } => {
                write!(f, "group count must be at least 1, got {}", groups)
            }
            Self::NotEnoughMembers { members, groups } => {
                write!(f, "{} members cannot fill {} groups", members, groups)
            }
            Self::EmptyMemberName { index } => {
                write!(f, "member name at position {} is empty", index + 1)
            }
            Self::DuplicateMemberName { name } => {
                write!(f, "member name {:?} appears more than once", name)
            }
            Self::TooManySlots { slots, capacity } => {
                write!(
                    f,
                    "{} slots exceed the {} picks a limited-mode pool can sustain",
                    slots, capacity
                )
            }
            Self::MissingPool { slot } => {
                write!(f, "slot {} has no pool of its own", slot)
            }
        }
    }
}

impl std::error::Error for InvalidConfiguration {}

#[cfg(test)]
mod tests {
    use super::*;

    /// messages name the offending counts so the UI can re-prompt verbatim
    #[test]
    fn messages_name_counts() {
        let e = InvalidConfiguration::TooManySlots {
            slots: 5,
            capacity: 3,
        };
        assert!(e.to_string().contains('5'));
        assert!(e.to_string().contains('3'));
        let e = InvalidConfiguration::NotEnoughMembers {
            members: 2,
            groups: 4,
        };
        assert!(e.to_string().contains('2'));
        assert!(e.to_string().contains('4'));
    }
}
