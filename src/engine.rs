use crate::DrawConfig;
use crate::DrawMode;
use crate::InvalidConfiguration;
use crate::Pools;
use crate::Slot;
use crate::SlotId;
use rand::Rng;
use std::collections::HashMap;
use std::collections::HashSet;

/// The sentinel shown when a draw has nothing left to pick.
pub const EXHAUSTED: &str = "?";

/// Result of a single slot draw.
///
/// Exhaustion is a first-class display state, not an error: a session that
/// has consumed its whole pool keeps answering draws with the sentinel
/// until it is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A value picked from the slot's pool.
    Hit(String),
    /// Nothing left to pick; rendered as `"?"`.
    Exhausted,
}

impl Outcome {
    pub fn hit(&self) -> Option<&str> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Exhausted => None,
        }
    }
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hit(value) => write!(f, "{}", value),
            Self::Exhausted => write!(f, "{}", EXHAUSTED),
        }
    }
}

/// How many further picks a session can sustain before exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// Draw-with-replacement never runs out.
    Unbounded,
    /// Picks left under draw-without-replacement.
    Exact(usize),
}

impl Capacity {
    pub fn exact(&self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Exact(n) => Some(*n),
        }
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(f, "∞"),
            Self::Exact(n) => write!(f, "{}", n),
        }
    }
}

/// One lottery draw session.
///
/// Owns the settings, the slots, the pools, and all cross-draw state:
///
/// - `used` — values consumed under draw-without-replacement
/// - `round` — values already shown by other slots in the current round,
///   enforced only when duplicates are disallowed in unlimited mode
/// - `last` — each slot's previous value, to bias away from immediate
///   repeats on consecutive draws of the same slot
///
/// The session belongs to one UI component instance and is discarded when
/// the pool or slot configuration changes. The round boundary is explicit:
/// callers either [`draw`](Self::draw) every slot and then call
/// [`finish_round`](Self::finish_round), or use [`spin`](Self::spin) which
/// does both.
#[derive(Debug, Clone)]
pub struct DrawEngine {
    config: DrawConfig,
    slots: Vec<Slot>,
    pools: Pools,
    used: HashSet<String>,
    round: HashSet<String>,
    last: HashMap<SlotId, String>,
}

impl DrawEngine {
    /// Validates the configuration and opens a fresh session.
    pub fn new(
        config: DrawConfig,
        slots: Vec<Slot>,
        pools: Pools,
    ) -> Result<Self, InvalidConfiguration> {
        config.validate(&slots, &pools)?;
        Ok(Self {
            config,
            slots,
            pools,
            used: HashSet::new(),
            round: HashSet::new(),
            last: HashMap::new(),
        })
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
    pub fn pools(&self) -> &Pools {
        &self.pools
    }
    /// The value the slot produced on its previous draw, if any.
    pub fn last(&self, slot: SlotId) -> Option<&str> {
        self.last.get(&slot).map(String::as_str)
    }
}

/// Drawing.
impl DrawEngine {
    /// Draws one slot using the thread RNG.
    pub fn draw(&mut self, slot: SlotId) -> Outcome {
        self.draw_with(slot, &mut rand::rng())
    }

    /// Draws one slot using the given random source.
    ///
    /// Never fails: exhaustion (and a draw for an unknown slot id) yields
    /// [`Outcome::Exhausted`].
    pub fn draw_with<R: Rng>(&mut self, slot: SlotId, rng: &mut R) -> Outcome {
        let Some(position) = self.slots.iter().position(|s| s.id() == slot) else {
            log::warn!("[draw] unknown slot {}", slot);
            return Outcome::Exhausted;
        };
        let pool = self
            .pools
            .for_slot(position)
            .cloned()
            .unwrap_or_default();
        let mut available = pool.values().to_vec();
        if self.config.mode == DrawMode::Limited {
            // without replacement: consumed values are gone until reset
            available.retain(|v| !self.used.contains(v));
            if available.is_empty() {
                log::debug!("[draw] slot {} found its pool consumed", slot);
                return Outcome::Exhausted;
            }
        } else if !self.config.allow_duplicates {
            // within one round, hide what other slots already showed; once
            // every distinct option has appeared, soft-reset the round
            // constraint instead of starving the remaining slots
            available.retain(|v| !self.round.contains(v));
            if available.is_empty() {
                self.round.clear();
                available = pool.values().to_vec();
            }
        }
        if available.is_empty() {
            return Outcome::Exhausted;
        }
        let value = match available.len() {
            // a lone candidate must be returned even if it just came up
            1 => available.swap_remove(0),
            _ => self.pick(slot, &available, rng),
        };
        self.last.insert(slot, value.clone());
        if self.config.mode == DrawMode::Limited {
            self.used.insert(value.clone());
        }
        if self.config.mode == DrawMode::Unlimited && !self.config.allow_duplicates {
            self.round.insert(value.clone());
        }
        log::debug!("[draw] slot {} drew {}", slot, value);
        Outcome::Hit(value)
    }

    /// Uniform pick, re-picking up to `2 * |available|` times while the
    /// candidate equals the slot's previous value. Biases away from
    /// immediate repeats without forbidding them: when the budget runs out
    /// the last candidate is accepted as-is.
    fn pick<R: Rng>(&self, slot: SlotId, available: &[String], rng: &mut R) -> String {
        let last = self.last.get(&slot);
        let mut candidate = &available[rng.random_range(0..available.len())];
        let mut budget = 2 * available.len();
        while budget > 0 && Some(candidate) == last {
            candidate = &available[rng.random_range(0..available.len())];
            budget -= 1;
        }
        candidate.clone()
    }

    /// One full round: draws every slot once, in slot order, against the
    /// shared round state, then closes the round.
    pub fn spin(&mut self) -> Vec<Outcome> {
        self.spin_with(&mut rand::rng())
    }

    /// [`spin`](Self::spin) with an injected random source.
    pub fn spin_with<R: Rng>(&mut self, rng: &mut R) -> Vec<Outcome> {
        let ids = self.slots.iter().map(Slot::id).collect::<Vec<SlotId>>();
        let outcomes = ids.into_iter().map(|id| self.draw_with(id, rng)).collect();
        self.finish_round();
        outcomes
    }
}

/// Session state.
impl DrawEngine {
    /// Explicit round boundary: clears only the within-round duplicate
    /// constraint. Consumed values and per-slot history survive.
    pub fn finish_round(&mut self) {
        self.round.clear();
    }

    /// Discards all session state, restoring the full pools.
    pub fn reset(&mut self) {
        self.used.clear();
        self.round.clear();
        self.last.clear();
        log::debug!("[draw] session reset");
    }

    /// Picks this session can still sustain.
    ///
    /// Unbounded unless drawing without replacement. Per-slot pools are
    /// bounded by the most constrained slot, since one round consumes one
    /// pick per slot.
    pub fn remaining(&self) -> Capacity {
        match self.config.mode {
            DrawMode::Unlimited => Capacity::Unbounded,
            DrawMode::Limited => match &self.pools {
                Pools::Shared(pool) => Capacity::Exact(pool.len().saturating_sub(self.used.len())),
                Pools::Individual(pools) => Capacity::Exact(
                    pools
                        .iter()
                        .map(|pool| pool.iter().filter(|v| !self.used.contains(*v)).count())
                        .min()
                        .unwrap_or(0),
                ),
            },
        }
    }
}
