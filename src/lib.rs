//! Crew-day timeline and placement engine for the U-Engine ecosystem.
//!
//! Given a crew's existing commitments for a day, computes the occupied
//! regions (jobs plus derived travel buffers) and where a new or moved
//! job of a given length can legally go, snapped to a fixed time grid.
//! Every operation is a pure function of its inputs.
//!
//! # Modules
//!
//! - **`daykey`**: Organization-local calendar-day keys
//! - **`grid`**: 15-minute grid snapping (starts floor, ends ceil)
//! - **`travel`**: Travel lookups and travel-buffer synthesis
//! - **`timeline`**: Occupied-timeline construction, crew-day index, summaries
//! - **`placement`**: Placement window search and window queries
//! - **`models`**: Domain types — `Assignment`, `OccupiedBlock`, `PlacementWindow`, `Workday`
//! - **`validation`**: Boundary checks (intervals, duplicates, overlaps, requests)
//! - **`config`**: Organization placement settings
//!
//! # Data Flow
//!
//! assignments → day keys → travel buffers → occupied timeline → placement windows
//!
//! # Non-goals
//!
//! No ranking of placements, no travel-time computation, no persistence,
//! no authorization.

pub mod config;
pub mod daykey;
pub mod error;
pub mod grid;
pub mod models;
pub mod placement;
pub mod timeline;
pub mod travel;
pub mod validation;

pub use error::{PlacementError, Result};
