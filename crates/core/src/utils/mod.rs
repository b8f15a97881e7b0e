pub mod format_utils;
pub mod time_utils;

pub use format_utils::format_currency;
pub use time_utils::{millis_to_utc, Clock, SystemClock};
