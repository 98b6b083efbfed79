//! Domain types shared by the database and API layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod organization;
pub mod status;
pub mod types;
pub mod validation;
pub mod versioning;
