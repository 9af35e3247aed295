//! Repository layer for car aggregates
//!
//! Infrastructure layer: repositories persist aggregates without leaking
//! into the domain. The `CarRepository` trait is the seam the domain
//! exercises; `MemoryCarRepository` backs tests and `CarStore` adds a
//! JSON-file-backed implementation with a versioned on-disk format.

use crate::domain::car::Car;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::model::EmptyObject;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Persistence seam for car aggregates
///
/// The empty sentinel is never persistable: `add` and `update` reject it.
pub trait CarRepository {
    /// Register a new car; fails on a duplicate identifier
    fn add(&mut self, car: Car) -> DomainResult<()>;

    /// Replace the stored state of an existing car; fails when unknown
    fn update(&mut self, car: Car) -> DomainResult<()>;

    /// Look up a car by identifier
    fn find(&self, id: Uuid) -> Option<&Car>;

    /// Remove and return a car; fails when unknown
    fn remove(&mut self, id: Uuid) -> DomainResult<Car>;

    /// Identifiers of all stored cars
    fn ids(&self) -> Vec<Uuid>;

    /// Number of stored cars
    fn len(&self) -> usize;

    /// Whether the repository holds no cars
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn reject_sentinel(car: &Car) -> DomainResult<()> {
    if car.is_empty() {
        return Err(DomainError::EmptySentinel);
    }
    Ok(())
}

/// In-process map-backed repository
#[derive(Debug, Default)]
pub struct MemoryCarRepository {
    cars: HashMap<Uuid, Car>,
}

impl MemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarRepository for MemoryCarRepository {
    fn add(&mut self, car: Car) -> DomainResult<()> {
        reject_sentinel(&car)?;
        let id = car.id();
        if self.cars.contains_key(&id) {
            tracing::warn!("Rejected duplicate car {}", id);
            return Err(DomainError::Duplicate { id });
        }
        tracing::debug!("Added car {}", id);
        self.cars.insert(id, car);
        Ok(())
    }

    fn update(&mut self, car: Car) -> DomainResult<()> {
        reject_sentinel(&car)?;
        let id = car.id();
        if !self.cars.contains_key(&id) {
            return Err(DomainError::NotFound { id });
        }
        self.cars.insert(id, car);
        Ok(())
    }

    fn find(&self, id: Uuid) -> Option<&Car> {
        self.cars.get(&id)
    }

    fn remove(&mut self, id: Uuid) -> DomainResult<Car> {
        self.cars.remove(&id).ok_or(DomainError::NotFound { id })
    }

    fn ids(&self) -> Vec<Uuid> {
        self.cars.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.cars.len()
    }
}

/// JSON-file-backed car repository
///
/// Loads the whole store into memory, tracks modifications with a dirty
/// flag, and writes back only when something changed.
#[derive(Debug)]
pub struct CarStore {
    /// Path to the store file
    store_path: PathBuf,
    /// In-memory store data
    data: StoreData,
    /// Whether the store has been modified since the last save
    dirty: bool,
}

/// Serializable store data structure
///
/// Older store files may predate the metadata counters, so every field
/// falls back to its default when missing and migration fills in the rest.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
struct StoreData {
    /// Store format version for migration support
    version: u32,
    /// Stored cars keyed by identifier
    cars: HashMap<Uuid, Car>,
    /// Store metadata
    metadata: StoreMetadata,
}

/// Metadata about the store itself
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreMetadata {
    /// When the store was created
    created_at: u64,
    /// When the store was last updated
    updated_at: u64,
    /// Number of cars written since creation
    writes: u64,
    /// Number of cars removed since creation
    removals: u64,
}

impl Default for StoreMetadata {
    fn default() -> Self {
        let now = current_timestamp();
        Self { created_at: now, updated_at: now, writes: 0, removals: 0 }
    }
}

impl CarStore {
    const CURRENT_VERSION: u32 = 1;

    /// Create a new store with the given file path
    pub fn new<P: AsRef<Path>>(store_path: P) -> Self {
        Self {
            store_path: store_path.as_ref().to_path_buf(),
            data: StoreData::default(),
            dirty: false,
        }
    }

    /// Load the store from disk, creating it if it doesn't exist
    pub fn load(&mut self) -> DomainResult<()> {
        if self.store_path.exists() {
            let content = fs::read_to_string(&self.store_path)
                .map_err(|e| DomainError::store(format!("Failed to read store file: {}", e)))?;

            self.data = serde_json::from_str(&content)
                .map_err(|e| DomainError::store(format!("Failed to parse store file: {}", e)))?;

            self.migrate_if_needed()?;
            self.check_loaded_cars()?;
            tracing::debug!(
                "Loaded {} cars from {}",
                self.data.cars.len(),
                self.store_path.display()
            );
        } else {
            self.data = StoreData {
                version: Self::CURRENT_VERSION,
                cars: HashMap::new(),
                metadata: StoreMetadata::default(),
            };
            self.dirty = true;
        }

        Ok(())
    }

    /// Save the store to disk if it has been modified
    pub fn save(&mut self) -> DomainResult<()> {
        if !self.dirty {
            return Ok(());
        }

        self.data.metadata.updated_at = current_timestamp();

        // Ensure store directory exists
        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DomainError::store(format!("Failed to create store directory: {}", e))
            })?;
        }

        let content = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DomainError::store(format!("Failed to serialize store: {}", e)))?;

        fs::write(&self.store_path, content)
            .map_err(|e| DomainError::store(format!("Failed to write store file: {}", e)))?;

        tracing::debug!(
            "Saved {} cars to {}",
            self.data.cars.len(),
            self.store_path.display()
        );
        self.dirty = false;
        Ok(())
    }

    /// Remove every car and delete the store file
    pub fn clear(&mut self) -> DomainResult<()> {
        self.data.cars.clear();
        self.data.metadata.updated_at = current_timestamp();
        self.dirty = true;

        if self.store_path.exists() {
            fs::remove_file(&self.store_path)
                .map_err(|e| DomainError::store(format!("Failed to remove store file: {}", e)))?;
        }

        Ok(())
    }

    /// Get store statistics
    pub fn statistics(&self) -> StoreStatistics {
        StoreStatistics {
            total_cars: self.data.cars.len(),
            writes: self.data.metadata.writes,
            removals: self.data.metadata.removals,
            created_at: self.data.metadata.created_at,
            updated_at: self.data.metadata.updated_at,
        }
    }

    /// Re-check domain invariants on rehydrated cars
    ///
    /// Deserialization bypasses the constructors, so a hand-edited store
    /// file could otherwise smuggle in out-of-bounds field values.
    fn check_loaded_cars(&self) -> DomainResult<()> {
        for (id, car) in &self.data.cars {
            car.check_invariants().map_err(|e| {
                DomainError::store(format!("Invalid car {} in store file: {}", id, e))
            })?;
        }
        Ok(())
    }

    /// Migrate the store format if needed
    fn migrate_if_needed(&mut self) -> DomainResult<()> {
        if self.data.version > Self::CURRENT_VERSION {
            return Err(DomainError::store(format!(
                "Unsupported store version: {}. Please delete the store file.",
                self.data.version
            )));
        }

        if self.data.version < Self::CURRENT_VERSION {
            tracing::info!(
                "Migrating store from version {} to {}",
                self.data.version,
                Self::CURRENT_VERSION
            );

            // Version 0 predates the metadata counters; defaults suffice.
            self.data.version = Self::CURRENT_VERSION;
            self.dirty = true;
        }

        Ok(())
    }
}

impl CarRepository for CarStore {
    fn add(&mut self, car: Car) -> DomainResult<()> {
        reject_sentinel(&car)?;
        let id = car.id();
        if self.data.cars.contains_key(&id) {
            tracing::warn!("Rejected duplicate car {}", id);
            return Err(DomainError::Duplicate { id });
        }
        self.data.cars.insert(id, car);
        self.data.metadata.writes += 1;
        self.dirty = true;
        Ok(())
    }

    fn update(&mut self, car: Car) -> DomainResult<()> {
        reject_sentinel(&car)?;
        let id = car.id();
        if !self.data.cars.contains_key(&id) {
            return Err(DomainError::NotFound { id });
        }
        self.data.cars.insert(id, car);
        self.data.metadata.writes += 1;
        self.dirty = true;
        Ok(())
    }

    fn find(&self, id: Uuid) -> Option<&Car> {
        self.data.cars.get(&id)
    }

    fn remove(&mut self, id: Uuid) -> DomainResult<Car> {
        let car = self.data.cars.remove(&id).ok_or(DomainError::NotFound { id })?;
        self.data.metadata.removals += 1;
        self.dirty = true;
        Ok(car)
    }

    fn ids(&self) -> Vec<Uuid> {
        self.data.cars.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.data.cars.len()
    }
}

/// Store usage statistics
#[derive(Debug, Clone)]
pub struct StoreStatistics {
    pub total_cars: usize,
    pub writes: u64,
    pub removals: u64,
    pub created_at: u64,
    pub updated_at: u64,
}

impl StoreStatistics {
    /// Format statistics for display
    pub fn format_display(&self) -> String {
        format!(
            "Store: {} cars ({} writes, {} removals)",
            self.total_cars, self.writes, self.removals
        )
    }
}

/// Get current timestamp as seconds since Unix epoch
fn current_timestamp() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs()
}
