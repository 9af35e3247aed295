//! Car Domain - car dealership domain model for exercising repository persistence
//!
//! Architecture: Clean Architecture - the library interface serves as the application layer
//! - Pure domain logic separated from infrastructure concerns
//! - `domain` holds the aggregate, entities, and value objects
//! - `repository` persists aggregates; `fixtures` seeds them from YAML
//!
//! The model is a deliberately small aggregate: a [`Car`] owning scalar
//! fields, primitive collections, a [`WholeColor`] value object, a
//! collection of [`CarAccessory`] value objects, and referenced
//! [`CarWheel`] entities. Absence is expressed with typed empty sentinels
//! rather than nulls.

pub mod domain;
pub mod fixtures;
pub mod repository;

// Re-export main types for convenient access
pub use domain::{
    AggregateRoot, Car, CarAccessory, CarWheel, DomainError, DomainResult, EmptyObject, Entity,
    ValueObject, WholeColor,
};

pub use fixtures::{AccessoryFixture, CarFixture, ColorFixture, FixtureSet, WheelFixture};

pub use repository::{CarRepository, CarStore, MemoryCarRepository, StoreStatistics};

use std::path::Path;

/// Load and build all cars declared in a YAML fixture file
pub fn load_fixture_file<P: AsRef<Path>>(path: P) -> DomainResult<Vec<Car>> {
    FixtureSet::load_from_file(path)?.build()
}

/// Seed a repository with the given cars, returning how many were added
pub fn seed<R, I>(repo: &mut R, cars: I) -> DomainResult<usize>
where
    R: CarRepository,
    I: IntoIterator<Item = Car>,
{
    let mut added = 0;
    for car in cars {
        repo.add(car)?;
        added += 1;
    }
    tracing::debug!("Seeded repository with {} cars", added);
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_seed_from_defaults() {
        let mut repo = MemoryCarRepository::new();
        let cars = FixtureSet::with_defaults().build().unwrap();

        let added = seed(&mut repo, cars).unwrap();
        assert_eq!(added, 2);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_seed_stops_on_duplicate() {
        let mut repo = MemoryCarRepository::new();
        let cars = FixtureSet::with_defaults().build().unwrap();
        let first = cars[0].clone();

        seed(&mut repo, cars).unwrap();
        assert!(seed(&mut repo, [first]).is_err());
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_load_fixture_file_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let fixture_path = temp_dir.path().join("fleet.yaml");
        fs::write(
            &fixture_path,
            r#"
version: "1.0"
cars:
  - name: Sedan X
    is_new: true
    wheels:
      - id: 1
        name: Alloy 17in
"#,
        )
        .unwrap();

        let cars = load_fixture_file(&fixture_path).unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].name(), "Sedan X");
        assert_eq!(cars[0].wheels().len(), 1);
    }

    #[test]
    fn test_fixture_to_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("cars.json");

        let cars = FixtureSet::with_defaults().build().unwrap();
        let ids: Vec<_> = cars.iter().map(|c| c.id()).collect();

        {
            let mut store = CarStore::new(&store_path);
            store.load().unwrap();
            seed(&mut store, cars).unwrap();
            store.save().unwrap();
        }

        let mut store = CarStore::new(&store_path);
        store.load().unwrap();
        for id in ids {
            assert!(store.find(id).is_some());
        }
    }
}
