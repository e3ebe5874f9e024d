pub mod calculations;
pub mod format;
pub mod input;
pub mod models;
pub mod schedule;

pub use models::*;
pub use schedule::{TaxSchedule, TaxScheduleError};
