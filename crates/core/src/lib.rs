//! `catalog-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the shared error model and the side-effecting capabilities (wall clock,
//! identifier generation) that use cases receive by injection.

pub mod clock;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use id::{IdGenerator, SequentialIdGenerator, UuidGenerator};
