pub mod report;

pub use crate::domain::interval::Interval;
pub use crate::domain::period::Period;
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::domain::range::DateRange;
pub use crate::utils::error::Result;
