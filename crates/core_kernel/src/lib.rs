//! Core Kernel - Foundational types for the quoting system
//!
//! This crate provides the building blocks shared by the domain modules:
//! - Money types with precise decimal arithmetic
//! - Percentage rates for interest and discount calculations

pub mod money;

pub use money::{Currency, Money, MoneyError, Rate};
