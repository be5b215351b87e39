//! View state and the small pipelines behind each page. Nothing in here
//! touches the reactive system, so it is all testable on the host.

pub mod appointments;
pub mod booking;
pub mod calendar;
pub mod gallery;
pub mod reports;
pub mod staff;
pub mod validation;
