//! Car wheel referenced entity

use crate::domain::error::{check_range, check_text, DomainResult};
use crate::domain::model::{EmptyObject, Entity};
use serde::{Deserialize, Serialize};

/// A wheel referenced by a car
///
/// Entity with its own lifecycle: cars hold wheels by reference and the
/// wheel repository owns them. Equality is by identifier, not by fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarWheel {
    id: u32,
    name: String,
}

impl CarWheel {
    const NAME_MIN: usize = 1;
    const NAME_MAX: usize = 100;

    /// Create a new wheel with a positive identifier and a bounded name
    pub fn new(id: u32, name: impl Into<String>) -> DomainResult<Self> {
        check_range("CarWheel id", id as i64, 1, u32::MAX as i64)?;
        let name = name.into();
        check_text("CarWheel name", &name, Self::NAME_MIN, Self::NAME_MAX)?;
        Ok(Self { id, name })
    }

    /// Sentinel standing in for "no wheel referenced"
    pub fn empty() -> Self {
        Self { id: 0, name: String::new() }
    }

    /// Re-check construction bounds on a rehydrated instance
    pub(crate) fn check_invariants(&self) -> DomainResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        check_text("CarWheel name", &self.name, Self::NAME_MIN, Self::NAME_MAX)
    }

    /// Wheel identifier
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Wheel model name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for CarWheel {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

impl EmptyObject for CarWheel {
    fn is_empty(&self) -> bool {
        // Validated wheels always carry id >= 1.
        self.id == 0
    }
}

// Entity equality: identifier only.
impl PartialEq for CarWheel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CarWheel {}

impl std::hash::Hash for CarWheel {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Default for CarWheel {
    fn default() -> Self {
        Self::empty()
    }
}
