use crate::Allocator;
use crate::DrawConfig;
use crate::DrawEngine;
use crate::Group;
use crate::InvalidConfiguration;
use crate::Pools;
use crate::Slot;
use serde::Deserialize;
use serde::Serialize;

/// A stored randomizer project, as exchanged with the storage layer.
///
/// The storage collaborator (local or cloud) persists and fetches this
/// shape; the core only consumes it. A lottery project opens a
/// [`DrawEngine`] session; a grouping project runs an [`Allocator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Project {
    Lottery {
        config: DrawConfig,
        slots: Vec<Slot>,
        pools: Pools,
    },
    Grouping {
        members: Vec<String>,
        groups: usize,
        #[serde(default)]
        names: Vec<String>,
    },
}

impl Project {
    /// Pre-check for the project's own mode; what the settings layer runs
    /// before saving.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        match self {
            Self::Lottery {
                config,
                slots,
                pools,
            } => config.validate(slots, pools),
            Self::Grouping {
                members, groups, ..
            } => Allocator::new(members.clone(), *groups).validate(),
        }
    }

    /// Opens a fresh draw session for a lottery project.
    pub fn engine(&self) -> anyhow::Result<DrawEngine> {
        match self {
            Self::Lottery {
                config,
                slots,
                pools,
            } => Ok(DrawEngine::new(*config, slots.clone(), pools.clone())?),
            Self::Grouping { .. } => Err(anyhow::anyhow!("not a lottery project")),
        }
    }

    /// Runs the allocation for a grouping project.
    pub fn allocate(&self) -> anyhow::Result<Vec<Group>> {
        match self {
            Self::Grouping {
                members,
                groups,
                names,
            } => Ok(Allocator::new(members.clone(), *groups)
                .named(names.clone())
                .allocate()?),
            Self::Lottery { .. } => Err(anyhow::anyhow!("not a grouping project")),
        }
    }
}
