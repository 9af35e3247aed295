//! Fixture loading for seeding repositories
//!
//! Architecture: Anti-Corruption Layer - raw YAML fixture documents are
//! converted into validated domain aggregates. Everything a fixture
//! declares passes through the domain constructors and setters, so an
//! invalid fixture fails with the same `DomainError` an invalid assignment
//! would.

use crate::domain::accessory::CarAccessory;
use crate::domain::car::Car;
use crate::domain::color::WholeColor;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::wheel::CarWheel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// A set of car fixtures loaded from a YAML document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Fixture format version
    pub version: String,
    /// Car fixture declarations
    pub cars: Vec<CarFixture>,
}

/// Declarative description of a single car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarFixture {
    /// Aggregate identifier; a v4 UUID is generated when omitted
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub light_counts: Vec<i32>,
    #[serde(default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub delivery_dates: Vec<Option<DateTime<Utc>>>,
    pub color: Option<ColorFixture>,
    #[serde(default)]
    pub accessories: Vec<AccessoryFixture>,
    pub main_wheel: Option<WheelFixture>,
    #[serde(default)]
    pub wheels: Vec<WheelFixture>,
}

/// Whole-car color declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorFixture {
    pub name: String,
    pub color_num: u32,
    #[serde(default)]
    pub painted: bool,
}

/// Accessory declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessoryFixture {
    pub name: String,
    pub quantity: u16,
    pub setup_date: Option<DateTime<Utc>>,
}

/// Wheel declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelFixture {
    pub id: u32,
    pub name: String,
}

impl FixtureSet {
    /// Load fixtures from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DomainResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            DomainError::fixture(format!(
                "Failed to read fixture file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let fixtures: Self = serde_yaml::from_str(&contents).map_err(|e| {
            DomainError::fixture(format!(
                "Failed to parse fixture file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        fixtures.validate()?;
        Ok(fixtures)
    }

    /// Load fixtures from string content
    pub fn load_from_str(content: &str) -> DomainResult<Self> {
        let fixtures: Self = serde_yaml::from_str(content)
            .map_err(|e| DomainError::fixture(format!("Failed to parse fixtures: {e}")))?;

        fixtures.validate()?;
        Ok(fixtures)
    }

    /// A small embedded sample fleet
    pub fn with_defaults() -> Self {
        Self {
            version: "1.0".to_string(),
            cars: vec![
                CarFixture {
                    id: None,
                    name: "Sedan X".to_string(),
                    is_new: true,
                    light_counts: vec![2, 2],
                    error_messages: Vec::new(),
                    delivery_dates: vec![None],
                    color: Some(ColorFixture {
                        name: "Pearl White".to_string(),
                        color_num: 1,
                        painted: true,
                    }),
                    accessories: vec![AccessoryFixture {
                        name: "Floor Mats".to_string(),
                        quantity: 4,
                        setup_date: None,
                    }],
                    main_wheel: Some(WheelFixture { id: 1, name: "Alloy 17in".to_string() }),
                    wheels: vec![
                        WheelFixture { id: 1, name: "Alloy 17in".to_string() },
                        WheelFixture { id: 2, name: "Alloy 17in".to_string() },
                    ],
                },
                CarFixture {
                    id: None,
                    name: "Coupe Z".to_string(),
                    is_new: false,
                    light_counts: vec![4],
                    error_messages: vec!["brake wear".to_string()],
                    delivery_dates: Vec::new(),
                    color: None,
                    accessories: Vec::new(),
                    main_wheel: None,
                    wheels: Vec::new(),
                },
            ],
        }
    }

    /// Structural validation before any domain objects are built
    pub fn validate(&self) -> DomainResult<()> {
        if self.version.is_empty() {
            return Err(DomainError::fixture("Fixture version cannot be empty"));
        }
        if self.cars.is_empty() {
            return Err(DomainError::fixture("Fixture set declares no cars"));
        }

        // Duplicate explicit ids would be rejected by the repository later;
        // catch them here with a clearer message.
        let mut seen = std::collections::HashSet::new();
        for fixture in &self.cars {
            if let Some(id) = fixture.id {
                if !seen.insert(id) {
                    return Err(DomainError::fixture(format!(
                        "Duplicate car id {} in fixture set",
                        id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Build validated car aggregates from the declarations
    pub fn build(&self) -> DomainResult<Vec<Car>> {
        self.cars.iter().map(CarFixture::build).collect()
    }
}

impl CarFixture {
    /// Build a single validated car aggregate
    pub fn build(&self) -> DomainResult<Car> {
        let id = self.id.unwrap_or_else(Uuid::new_v4);

        let wheels = self
            .wheels
            .iter()
            .map(|w| CarWheel::new(w.id, w.name.clone()))
            .collect::<DomainResult<Vec<_>>>()?;

        let mut car = Car::with_wheels(id, wheels);
        car.set_name(self.name.clone())?;
        car.set_is_new(self.is_new);
        car.set_light_counts(self.light_counts.iter().copied());
        car.set_error_messages(self.error_messages.iter().cloned());
        car.set_delivery_dates(self.delivery_dates.iter().copied());

        if let Some(color) = &self.color {
            car.set_all_color(WholeColor::new(color.name.clone(), color.color_num, color.painted)?);
        }

        for accessory in &self.accessories {
            car.add_accessory(CarAccessory::new(
                accessory.name.clone(),
                accessory.quantity,
                accessory.setup_date,
            )?);
        }

        if let Some(wheel) = &self.main_wheel {
            car.set_main_wheel(CarWheel::new(wheel.id, wheel.name.clone())?);
        }

        tracing::debug!("Built car {} from fixture '{}'", id, self.name);
        Ok(car)
    }
}
