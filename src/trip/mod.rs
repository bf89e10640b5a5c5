//! Trip details collected from the user before planning.

mod types;

pub use types::{Budget, FormError, FormField, TripDuration, TripRequest};
