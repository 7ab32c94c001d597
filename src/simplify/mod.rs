//! Point-sequence simplification.

mod rdp;

pub use rdp::{douglas_peucker, douglas_peucker_indices};
