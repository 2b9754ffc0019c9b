pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{BimUpdate, UpdateBimObjectCommand, UpdateBimObjectResponse};
pub use queries::GetBimObjectQuery;
pub use routes::bim_routes;
