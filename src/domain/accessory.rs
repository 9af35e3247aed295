//! Car accessory value object

use crate::domain::error::{check_text, DomainResult};
use crate::domain::model::{EmptyObject, ValueObject};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// An accessory fitted to a car, such as a roof rack or floor mats
///
/// Immutable value object. The setup date is optional: `None` means the
/// accessory has not been fitted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarAccessory {
    name: String,
    quantity: u16,
    setup_date: Option<DateTime<Utc>>,
}

lazy_static! {
    static ref EMPTY_ACCESSORY: CarAccessory =
        CarAccessory { name: String::new(), quantity: 0, setup_date: None };
}

impl CarAccessory {
    const NAME_MIN: usize = 1;
    const NAME_MAX: usize = 150;

    /// Create a new accessory, validating the name bound
    pub fn new(
        name: impl Into<String>,
        quantity: u16,
        setup_date: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        let name = name.into();
        check_text("CarAccessory name", &name, Self::NAME_MIN, Self::NAME_MAX)?;
        Ok(Self { name, quantity, setup_date })
    }

    /// Process-wide sentinel standing in for "no accessory"
    pub fn empty() -> &'static Self {
        &EMPTY_ACCESSORY
    }

    /// Re-check construction bounds on a rehydrated instance
    pub(crate) fn check_invariants(&self) -> DomainResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        check_text("CarAccessory name", &self.name, Self::NAME_MIN, Self::NAME_MAX)
    }

    /// Accessory name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of units fitted
    pub fn quantity(&self) -> u16 {
        self.quantity
    }

    /// When the accessory was fitted, if it has been
    pub fn setup_date(&self) -> Option<DateTime<Utc>> {
        self.setup_date
    }
}

impl ValueObject for CarAccessory {}

impl EmptyObject for CarAccessory {
    fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl Default for CarAccessory {
    fn default() -> Self {
        Self::empty().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn setup_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_construction_retains_values() {
        let accessory = CarAccessory::new("Roof Rack", 1, Some(setup_date())).unwrap();
        assert_eq!(accessory.name(), "Roof Rack");
        assert_eq!(accessory.quantity(), 1);
        assert_eq!(accessory.setup_date(), Some(setup_date()));
    }

    #[test]
    fn test_setup_date_is_optional() {
        let accessory = CarAccessory::new("Floor Mats", 4, None).unwrap();
        assert_eq!(accessory.setup_date(), None);
    }

    #[test]
    fn test_name_bounds() {
        assert!(CarAccessory::new("", 1, None).is_err());
        assert!(CarAccessory::new("x".repeat(151), 1, None).is_err());
        assert!(CarAccessory::new("x".repeat(150), 1, None).is_ok());
    }

    #[test]
    fn test_empty_sentinel() {
        assert!(CarAccessory::empty().is_empty());
        assert!(!CarAccessory::new("Spoiler", 1, None).unwrap().is_empty());
    }

    #[test]
    fn test_structural_equality() {
        let a = CarAccessory::new("Spoiler", 1, Some(setup_date())).unwrap();
        let b = CarAccessory::new("Spoiler", 1, Some(setup_date())).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, CarAccessory::new("Spoiler", 2, Some(setup_date())).unwrap());
    }
}
