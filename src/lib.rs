pub mod credits;
pub mod data;
pub mod error;
pub mod grouping;
pub mod ordering;
pub mod ranking;
pub mod report;
pub mod titles;

pub use data::Catalog;
pub use error::{Error, Result};
