//! Test utilities: in-memory repository implementations, a mock mail sender
//! and a builder for assembling an `AppState` with test dependencies.

mod builder;
mod factories;
mod mocks;

pub use builder::*;
pub use factories::*;
pub use mocks::*;
