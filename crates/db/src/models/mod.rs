//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - For versioned entities, the snapshot row and the edit DTO

pub mod bid;
pub mod employee;
pub mod organization;
pub mod tender;
