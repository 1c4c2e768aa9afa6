// src/lib.rs
pub mod config;
pub mod domain;
pub mod format;
pub mod money;
pub mod web;

pub use domain::*;
pub use money::*;
