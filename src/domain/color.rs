//! Whole-car color value object

use crate::domain::error::{check_range, check_text, DomainResult};
use crate::domain::model::{EmptyObject, ValueObject};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Color applied to the whole car body
///
/// Immutable value object: all fields are validated at construction and
/// exposed through read accessors only. Two colors are equal when all of
/// their fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WholeColor {
    name: String,
    color_num: u32,
    painted: bool,
}

lazy_static! {
    static ref EMPTY_COLOR: WholeColor =
        WholeColor { name: String::new(), color_num: 0, painted: false };
}

impl WholeColor {
    const NAME_MIN: usize = 1;
    const NAME_MAX: usize = 150;
    const COLOR_NUM_MIN: u32 = 1;
    const COLOR_NUM_MAX: u32 = 100;

    /// Create a new color, validating field bounds
    pub fn new(name: impl Into<String>, color_num: u32, painted: bool) -> DomainResult<Self> {
        let name = name.into();
        check_text("WholeColor name", &name, Self::NAME_MIN, Self::NAME_MAX)?;
        check_range(
            "WholeColor color count",
            color_num as i64,
            Self::COLOR_NUM_MIN as i64,
            Self::COLOR_NUM_MAX as i64,
        )?;
        Ok(Self { name, color_num, painted })
    }

    /// Process-wide sentinel standing in for "no color recorded"
    pub fn empty() -> &'static Self {
        &EMPTY_COLOR
    }

    /// Re-check construction bounds on a rehydrated instance
    pub(crate) fn check_invariants(&self) -> DomainResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        check_text("WholeColor name", &self.name, Self::NAME_MIN, Self::NAME_MAX)?;
        check_range(
            "WholeColor color count",
            self.color_num as i64,
            Self::COLOR_NUM_MIN as i64,
            Self::COLOR_NUM_MAX as i64,
        )
    }

    /// Color name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct colors in the coat
    pub fn color_num(&self) -> u32 {
        self.color_num
    }

    /// Whether the coat has been applied
    pub fn painted(&self) -> bool {
        self.painted
    }
}

impl ValueObject for WholeColor {}

impl EmptyObject for WholeColor {
    fn is_empty(&self) -> bool {
        // A validated color always has a non-empty name and color_num >= 1.
        self.name.is_empty() && self.color_num == 0
    }
}

impl Default for WholeColor {
    fn default() -> Self {
        Self::empty().clone()
    }
}
