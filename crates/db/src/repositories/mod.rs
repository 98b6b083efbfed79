//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Versioned mutations of
//! tenders and bids live in [`crate::versioning`].

pub mod bid_repo;
pub mod employee_repo;
pub mod organization_repo;
pub mod tender_repo;

pub use bid_repo::BidRepo;
pub use employee_repo::EmployeeRepo;
pub use organization_repo::{OrganizationRepo, OrganizationResponsibleRepo};
pub use tender_repo::TenderRepo;
