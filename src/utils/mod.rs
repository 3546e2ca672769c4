// Utils compartidos

pub mod constants;
pub mod format;
pub mod storage;

pub use constants::*;
pub use format::format_date;
pub mod scheduler;

pub use scheduler::{Scheduler, TimeoutScheduler};
