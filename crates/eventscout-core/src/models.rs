pub mod coordinates;
pub mod event;
pub mod filters;

pub use coordinates::Coordinates;
pub use event::Event;
pub use filters::{AccessTier, Category, FilterState, ProximityZone, TimeSlot};
