pub mod get;

pub use get::GetBimObjectQuery;
