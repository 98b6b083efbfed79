pub mod bid;
pub mod employee;
pub mod organization;
pub mod tender;
