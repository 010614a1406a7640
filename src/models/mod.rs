//! Placement domain models.
//!
//! Value types passed between the caller and the engine. The engine
//! owns none of them across calls.
//!
//! # Domain Mappings
//!
//! | u-placement | Field service | Home care | Delivery |
//! |-------------|---------------|-----------|----------|
//! | Assignment | Job visit | Patient visit | Drop-off |
//! | Crew | Field crew | Caregiver | Driver |
//! | Home base | Yard/shop | Agency office | Depot |
//! | Travel buffer | Drive time | Commute | Leg |

mod assignment;
mod block;
mod window;
mod workday;

pub use assignment::{Assignment, AssignmentStatus};
pub use block::{OccupiedBlock, Stop, TravelBuffer};
pub use window::PlacementWindow;
pub use workday::{Workday, DEFAULT_WORKDAY_END_MINUTES};
