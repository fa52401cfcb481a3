// Price data loading for the binary
pub mod csv_loader;

pub use csv_loader::load_price_series;
