pub mod builder;
pub mod data;

pub use builder::ChartBuilder;
pub use data::{BirthData, Chart};
