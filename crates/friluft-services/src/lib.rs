//! Recommendation logic composing the remote providers with the local
//! store.
//!
//! The pure pieces live at the top level: the suitability checks, the
//! ranking composer, the catalog-to-personal conversion and the location
//! resolver. One reactive state model per user-facing surface sits under
//! [`models`].

pub mod convert;
pub mod location;
pub mod models;
pub mod recommend;
pub mod suitability;

pub use convert::to_user_activity;
pub use location::{DeviceLocator, LocationError, LocationResolver};
pub use models::LoadPhase;
pub use recommend::{recommend_now, MAX_DAILY_RECOMMENDATIONS};
pub use suitability::is_suitable;
