pub mod time_utils;

pub use time_utils::format_utc_day;
