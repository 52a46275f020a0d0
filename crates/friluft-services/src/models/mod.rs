//! Reactive state models, one per user-facing surface.
//!
//! Each model owns its surface's state behind a watch channel and exposes
//! the operations that surface performs. Models never panic on provider
//! failures; they degrade into an error phase or an empty collection and
//! log what went wrong.

pub mod activities;
pub mod daily;
pub mod explore;
pub mod home;
pub mod profile;
pub mod schedule;
pub mod settings;
pub mod setup;

pub use activities::ActivitiesModel;
pub use daily::{DailyModel, DailyState};
pub use explore::ExploreModel;
pub use home::{HomeModel, HomeState};
pub use profile::ProfileModel;
pub use schedule::ScheduleModel;
pub use settings::{SettingsModel, SUPPORTED_LANGUAGES};
pub use setup::{SetupModel, SETUP_CATALOG_LIMIT};

/// Where a surface's data load currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
    Error,
}
