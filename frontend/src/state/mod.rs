//! Display state for the landing page, independent of the browser.

pub mod coordinator;
pub mod preferences;
pub mod progress;
pub mod step_cycle;
pub mod visibility;

pub use coordinator::{ViewCoordinator, ViewEvent, ViewSnapshot};
pub use preferences::{
    Language, MemoryStorage, Preference, PreferenceBackend, PreferenceChange, PreferenceStore, SubscriptionId,
    Theme,
};
pub use progress::Progress;
pub use step_cycle::{CyclePhase, StepCycler};
pub use visibility::{intersection_ratio, Rect, SectionId, SectionVisibility, VisibilityObserver};
