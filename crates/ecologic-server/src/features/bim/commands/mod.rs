pub mod update;

pub use update::{BimUpdate, UpdateBimObjectCommand, UpdateBimObjectResponse};
