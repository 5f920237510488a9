pub mod error;
pub mod types;
pub mod validation;
pub mod wire;

pub use error::{Bound, DocstoreError, ValidationError};
pub use types::GeoPoint;
pub use validation::NumberRange;
pub use wire::{LatLng, WireGeoPointValue};
