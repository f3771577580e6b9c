pub mod browser;
pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod portfolio;
pub mod state;

pub use error::ViewError;
pub use state::{Language, SectionId, Theme, ViewCoordinator, ViewEvent, ViewSnapshot};
