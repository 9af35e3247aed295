//! Domain layer for the car dealership model
//!
//! Pure domain logic: aggregate roots, entities, and value objects with
//! their validation rules. Independent of how (or whether) they are
//! persisted; the repository layer builds on top of these types.

pub mod accessory;
pub mod car;
pub mod color;
pub mod error;
pub mod model;
pub mod wheel;

// Re-export main domain types for convenience
pub use accessory::CarAccessory;
pub use car::Car;
pub use color::WholeColor;
pub use error::{DomainError, DomainResult};
pub use model::{AggregateRoot, EmptyObject, Entity, ValueObject};
pub use wheel::CarWheel;
