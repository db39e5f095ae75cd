pub mod dataset;
pub mod logic;

pub use dataset::Dataset;
pub use logic::LogicTable;
