// src/cleaning/mod.rs

pub mod date;
pub mod height;
pub mod location;

pub use date::normalize_date;
pub use height::normalize_height;
pub use location::normalize_location;
