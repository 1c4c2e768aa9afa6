// src/domain/mod.rs
pub mod bids;
pub mod catalog;
pub mod core;
pub mod listings;

pub use self::bids::*;
pub use self::catalog::*;
pub use self::core::*;
pub use self::listings::*;
