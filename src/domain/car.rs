//! Car aggregate root
//!
//! Architecture: Rich Domain Model - the car owns its value objects and
//! collections outright; wheels are referenced entities whose lifecycle
//! belongs to their own repository, the car only holds them by identifier.

use crate::domain::accessory::CarAccessory;
use crate::domain::color::WholeColor;
use crate::domain::error::{check_text, DomainResult};
use crate::domain::model::{AggregateRoot, EmptyObject, Entity};
use crate::domain::wheel::CarWheel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A car on the lot: the aggregate root of the dealership model
///
/// Scalar fields, collections of primitives, a color value object, a
/// collection of accessory value objects, one primary wheel reference, and
/// a collection of wheel references. Every `remove_*` deletes the first
/// matching element and silently no-ops when nothing matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    id: Uuid,
    name: String,
    is_new: bool,
    light_counts: Vec<i32>,
    error_messages: Vec<String>,
    delivery_dates: Vec<Option<DateTime<Utc>>>,
    all_color: WholeColor,
    accessories: Vec<CarAccessory>,
    main_wheel: CarWheel,
    wheels: Vec<CarWheel>,
}

impl Car {
    const NAME_MIN: usize = 1;
    const NAME_MAX: usize = 100;

    /// Create a new car with the given identifier
    pub fn new(id: Uuid) -> Self {
        Self::with_wheels(id, Vec::new())
    }

    /// Create a new car with an initial wheel list
    ///
    /// This is the rehydration constructor the repository uses when loading
    /// a car together with its referenced wheels.
    pub fn with_wheels(id: Uuid, wheels: Vec<CarWheel>) -> Self {
        Self {
            id,
            name: String::new(),
            is_new: false,
            light_counts: Vec::new(),
            error_messages: Vec::new(),
            delivery_dates: Vec::new(),
            all_color: WholeColor::empty().clone(),
            accessories: Vec::new(),
            main_wheel: CarWheel::empty(),
            wheels,
        }
    }

    /// Sentinel standing in for "no car"
    pub fn empty() -> Self {
        Self::new(Uuid::nil())
    }

    /// Re-check domain invariants on a rehydrated aggregate
    ///
    /// An unset name is legal (a new car starts blank); everything else
    /// must satisfy the same bounds the constructors and setters enforce.
    pub(crate) fn check_invariants(&self) -> DomainResult<()> {
        if !self.name.is_empty() {
            check_text("Car name", &self.name, Self::NAME_MIN, Self::NAME_MAX)?;
        }
        self.all_color.check_invariants()?;
        for accessory in &self.accessories {
            accessory.check_invariants()?;
        }
        self.main_wheel.check_invariants()?;
        for wheel in &self.wheels {
            wheel.check_invariants()?;
        }
        Ok(())
    }

    /// Aggregate identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Car name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the car name, enforcing the 1-100 character bound
    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        check_text("Car name", &name, Self::NAME_MIN, Self::NAME_MAX)?;
        self.name = name;
        Ok(())
    }

    /// Whether the car is factory-new
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn set_is_new(&mut self, is_new: bool) {
        self.is_new = is_new;
    }

    // --- light counts -----------------------------------------------------

    /// Ordered light counts recorded for the car
    pub fn light_counts(&self) -> &[i32] {
        &self.light_counts
    }

    pub fn set_light_counts(&mut self, counts: impl IntoIterator<Item = i32>) {
        self.light_counts = counts.into_iter().collect();
    }

    pub fn add_light_count(&mut self, count: i32) {
        self.light_counts.push(count);
    }

    pub fn remove_light_count(&mut self, count: i32) {
        if let Some(pos) = self.light_counts.iter().position(|&c| c == count) {
            self.light_counts.remove(pos);
        }
    }

    // --- error messages ---------------------------------------------------

    /// Diagnostic messages attached to the car
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn set_error_messages<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.error_messages = messages.into_iter().map(Into::into).collect();
    }

    pub fn add_error_message(&mut self, message: impl Into<String>) {
        self.error_messages.push(message.into());
    }

    pub fn remove_error_message(&mut self, message: &str) {
        if let Some(pos) = self.error_messages.iter().position(|m| m == message) {
            self.error_messages.remove(pos);
        }
    }

    // --- delivery dates ---------------------------------------------------

    /// Scheduled delivery dates; `None` marks a slot not yet dated
    pub fn delivery_dates(&self) -> &[Option<DateTime<Utc>>] {
        &self.delivery_dates
    }

    pub fn set_delivery_dates(&mut self, dates: impl IntoIterator<Item = Option<DateTime<Utc>>>) {
        self.delivery_dates = dates.into_iter().collect();
    }

    pub fn add_delivery_date(&mut self, date: Option<DateTime<Utc>>) {
        self.delivery_dates.push(date);
    }

    pub fn remove_delivery_date(&mut self, date: Option<DateTime<Utc>>) {
        if let Some(pos) = self.delivery_dates.iter().position(|d| *d == date) {
            self.delivery_dates.remove(pos);
        }
    }

    // --- whole color ------------------------------------------------------

    /// Color of the whole car body
    pub fn all_color(&self) -> &WholeColor {
        &self.all_color
    }

    pub fn set_all_color(&mut self, color: WholeColor) {
        self.all_color = color;
    }

    // --- accessories ------------------------------------------------------

    /// Accessories fitted to the car
    pub fn accessories(&self) -> &[CarAccessory] {
        &self.accessories
    }

    pub fn set_accessories(&mut self, accessories: impl IntoIterator<Item = CarAccessory>) {
        self.accessories = accessories.into_iter().collect();
    }

    pub fn add_accessory(&mut self, accessory: CarAccessory) {
        self.accessories.push(accessory);
    }

    /// Remove the first accessory structurally equal to the argument
    pub fn remove_accessory(&mut self, accessory: &CarAccessory) {
        if let Some(pos) = self.accessories.iter().position(|a| a == accessory) {
            self.accessories.remove(pos);
        }
    }

    // --- wheels -----------------------------------------------------------

    /// Primary wheel reference; the empty sentinel when none is fitted
    pub fn main_wheel(&self) -> &CarWheel {
        &self.main_wheel
    }

    pub fn set_main_wheel(&mut self, wheel: CarWheel) {
        self.main_wheel = wheel;
    }

    /// Referenced wheels
    pub fn wheels(&self) -> &[CarWheel] {
        &self.wheels
    }

    pub fn add_wheel(&mut self, wheel: CarWheel) {
        self.wheels.push(wheel);
    }

    /// Remove the wheel with the given identifier, returning it if present
    pub fn remove_wheel(&mut self, wheel_id: u32) -> Option<CarWheel> {
        let pos = self.wheels.iter().position(|w| w.id() == wheel_id)?;
        Some(self.wheels.remove(pos))
    }
}

impl Entity for Car {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }
}

impl AggregateRoot for Car {}

impl EmptyObject for Car {
    fn is_empty(&self) -> bool {
        self.id.is_nil()
    }
}

// Entity equality: identifier only.
impl PartialEq for Car {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Car {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn car() -> Car {
        Car::new(Uuid::new_v4())
    }

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_car_starts_blank() {
        let car = car();
        assert_eq!(car.name(), "");
        assert!(!car.is_new());
        assert!(car.light_counts().is_empty());
        assert!(car.error_messages().is_empty());
        assert!(car.delivery_dates().is_empty());
        assert!(car.all_color().is_empty());
        assert!(car.accessories().is_empty());
        assert!(car.main_wheel().is_empty());
        assert!(car.wheels().is_empty());
    }

    #[test]
    fn test_with_wheels_constructor() {
        let wheels = vec![CarWheel::new(1, "Alloy").unwrap(), CarWheel::new(2, "Steel").unwrap()];
        let car = Car::with_wheels(Uuid::new_v4(), wheels);
        assert_eq!(car.wheels().len(), 2);
        assert_eq!(car.wheels()[0].id(), 1);
    }

    #[test]
    fn test_name_validation() {
        let mut car = car();
        assert!(car.set_name("Sedan X").is_ok());
        assert_eq!(car.name(), "Sedan X");

        assert!(car.set_name("").is_err());
        assert!(car.set_name("x".repeat(101)).is_err());
        // Failed assignment leaves the previous value in place.
        assert_eq!(car.name(), "Sedan X");

        assert!(car.set_name("x".repeat(100)).is_ok());
    }

    #[test]
    fn test_light_counts_add_remove_are_inverse() {
        let mut car = car();
        car.set_light_counts([2, 4]);

        car.add_light_count(6);
        car.remove_light_count(6);
        assert_eq!(car.light_counts(), &[2, 4]);

        // Removing an absent element is a silent no-op.
        car.remove_light_count(99);
        assert_eq!(car.light_counts(), &[2, 4]);
    }

    #[test]
    fn test_remove_light_count_deletes_first_match_only() {
        let mut car = car();
        car.set_light_counts([4, 2, 4]);
        car.remove_light_count(4);
        assert_eq!(car.light_counts(), &[2, 4]);
    }

    #[test]
    fn test_error_messages_add_remove() {
        let mut car = car();
        car.add_error_message("low tire pressure");
        car.add_error_message("brake wear");
        car.remove_error_message("low tire pressure");
        assert_eq!(car.error_messages(), &["brake wear".to_string()]);

        car.remove_error_message("not present");
        assert_eq!(car.error_messages().len(), 1);
    }

    #[test]
    fn test_delivery_dates_hold_undated_slots() {
        let mut car = car();
        car.add_delivery_date(Some(date(1)));
        car.add_delivery_date(None);
        assert_eq!(car.delivery_dates(), &[Some(date(1)), None]);

        car.remove_delivery_date(None);
        assert_eq!(car.delivery_dates(), &[Some(date(1))]);

        car.remove_delivery_date(Some(date(1)));
        assert!(car.delivery_dates().is_empty());
    }

    #[test]
    fn test_accessories_add_remove_are_inverse() {
        let mut car = car();
        let mats = CarAccessory::new("Floor Mats", 4, None).unwrap();
        let rack = CarAccessory::new("Roof Rack", 1, Some(date(2))).unwrap();

        car.add_accessory(mats.clone());
        let before = car.accessories().to_vec();

        car.add_accessory(rack.clone());
        car.remove_accessory(&rack);
        assert_eq!(car.accessories(), &before[..]);

        // Structural match: an equal value removes, a different one does not.
        car.remove_accessory(&CarAccessory::new("Floor Mats", 2, None).unwrap());
        assert_eq!(car.accessories().len(), 1);
        car.remove_accessory(&mats);
        assert!(car.accessories().is_empty());
    }

    #[test]
    fn test_color_assignment() {
        let mut car = car();
        let color = WholeColor::new("Pearl White", 2, true).unwrap();
        car.set_all_color(color.clone());
        assert_eq!(car.all_color(), &color);
    }

    #[test]
    fn test_remove_wheel_by_id() {
        let mut car = car();
        car.add_wheel(CarWheel::new(1, "Alloy").unwrap());
        car.add_wheel(CarWheel::new(2, "Steel").unwrap());

        let removed = car.remove_wheel(1);
        assert_eq!(removed.map(|w| w.id()), Some(1));
        assert_eq!(car.wheels().len(), 1);

        // Unknown identifier removes nothing.
        assert!(car.remove_wheel(42).is_none());
        assert_eq!(car.wheels().len(), 1);
    }

    #[test]
    fn test_main_wheel_defaults_to_empty() {
        let mut car = car();
        assert!(car.main_wheel().is_empty());
        car.set_main_wheel(CarWheel::new(3, "Alloy 18in").unwrap());
        assert!(!car.main_wheel().is_empty());
        assert_eq!(car.main_wheel().id(), 3);
    }

    #[test]
    fn test_empty_sentinel() {
        assert!(Car::empty().is_empty());
        assert!(!car().is_empty());
    }

    #[test]
    fn test_identity_equality() {
        let id = Uuid::new_v4();
        let mut a = Car::new(id);
        let b = Car::new(id);
        a.set_is_new(true);
        // Same identity, different state: still the same aggregate.
        assert_eq!(a, b);
        assert_ne!(a, car());
    }
}
