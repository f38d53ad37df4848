//! Draft Registry - reference tables for the draft analytics pipeline
//!
//! Team names and colours, the college -> conference table and the
//! position grouping used by every dashboard view.

pub mod conferences;
pub mod positions;
pub mod registry;
pub mod teams;
pub mod types;

pub use conferences::ConferenceMap;
pub use positions::PositionGroups;
pub use registry::ReferenceRegistry;
pub use teams::TeamTable;
pub use types::{RegistryError, TeamInfo, FALLBACK_TEAM_COLOR, NON_POWER_CONFERENCE};
