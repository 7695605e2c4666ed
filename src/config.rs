use crate::InvalidConfiguration;
use crate::Pools;
use crate::Slot;
use serde::Deserialize;
use serde::Serialize;

/// Replacement rule for a draw session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Draw with replacement: values may recur across rounds.
    Unlimited,
    /// Draw without replacement: a drawn value stays out until reset.
    Limited,
}

/// Settings for one lottery draw session.
///
/// Whether the pool is shared or per-slot is carried by [`Pools`] itself;
/// this struct holds the rules applied on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    pub mode: DrawMode,
    /// When false, two slots never show the same value within one round
    /// (soft constraint: it resets once every distinct option has appeared).
    pub allow_duplicates: bool,
}

impl DrawConfig {
    /// Settings-layer pre-check, run before a session is constructed.
    ///
    /// In individual-pool mode every slot must have a pool; in limited mode
    /// the slot count must not exceed what the pools can sustain, since one
    /// round consumes one pick per slot.
    pub fn validate(&self, slots: &[Slot], pools: &Pools) -> Result<(), InvalidConfiguration> {
        if let Pools::Individual(each) = pools {
            if let Some(short) = slots.get(each.len()) {
                return Err(InvalidConfiguration::MissingPool { slot: short.id() });
            }
        }
        if self.mode == DrawMode::Limited && slots.len() > pools.capacity() {
            return Err(InvalidConfiguration::TooManySlots {
                slots: slots.len(),
                capacity: pools.capacity(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pool;

    fn slots(n: usize) -> Vec<Slot> {
        (1..=n).map(|i| Slot::new(i, format!("wheel {}", i))).collect()
    }

    /// limited mode caps slots at pool capacity, naming both counts
    #[test]
    fn limited_mode_capacity() {
        let config = DrawConfig {
            mode: DrawMode::Limited,
            allow_duplicates: true,
        };
        let pools = Pools::Shared(Pool::from(["a", "b", "c"]));
        assert_eq!(config.validate(&slots(3), &pools), Ok(()));
        assert_eq!(
            config.validate(&slots(4), &pools),
            Err(InvalidConfiguration::TooManySlots {
                slots: 4,
                capacity: 3,
            })
        );
    }

    /// unlimited mode never trips the capacity check
    #[test]
    fn unlimited_mode_uncapped() {
        let config = DrawConfig {
            mode: DrawMode::Unlimited,
            allow_duplicates: false,
        };
        let pools = Pools::Shared(Pool::from(["a"]));
        assert_eq!(config.validate(&slots(9), &pools), Ok(()));
    }

    /// individual mode requires one pool per slot
    #[test]
    fn individual_mode_pool_per_slot() {
        let config = DrawConfig {
            mode: DrawMode::Unlimited,
            allow_duplicates: true,
        };
        let pools = Pools::Individual(vec![Pool::from(["a"])]);
        assert_eq!(config.validate(&slots(1), &pools), Ok(()));
        assert_eq!(
            config.validate(&slots(2), &pools),
            Err(InvalidConfiguration::MissingPool { slot: 2 })
        );
    }
}
