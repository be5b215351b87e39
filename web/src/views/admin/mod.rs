pub mod dashboard;
pub mod reports;
pub mod staff;
