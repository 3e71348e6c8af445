//! postaddr Common - Shared types and utilities
//!
//! This crate provides the address model shared by every postaddr
//! component: the fixed set of address fields, the immutable address
//! record, the hierarchical lookup key used to name metadata nodes, and
//! the common error and configuration types.

pub mod address;
pub mod config;
pub mod error;
pub mod field;
pub mod key;
pub mod language;

pub use address::{AddressData, AddressDataBuilder};
pub use config::{Config, FormOptions};
pub use error::{Error, Result};
pub use field::{AddressField, AddressProblemType, ScriptType};
pub use key::{KeyType, LookupKey};
