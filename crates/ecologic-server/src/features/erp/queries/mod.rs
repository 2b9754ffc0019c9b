pub mod get_material;
pub mod list_serial_numbers;

pub use get_material::GetMaterialQuery;
pub use list_serial_numbers::{ListSerialNumbersError, ListSerialNumbersQuery};
