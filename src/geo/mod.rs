pub mod catalog;
pub mod countries;
pub mod distance;
pub mod projection;

pub use catalog::{Country, CountryCatalog, DataError, NotFound};
pub use distance::{haversine_km, ColorHint, Coordinate};
pub use projection::Orthographic;
