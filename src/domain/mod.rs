// Domain types and value objects
pub mod calendar;
pub mod period;

pub use calendar::{month_key, week_key};
pub use period::{MIN_POSITIVE_PRICE, PricePeriod};
