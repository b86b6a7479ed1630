pub mod city;
pub mod dataset;
pub mod filter;
pub mod trip;

pub use city::City;
pub use dataset::{Dataset, Schema};
pub use filter::{DayFilter, FilterSelection, MonthFilter};
pub use trip::Trip;
