use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info, warn};
use serde::Serialize;

use super::preferences::{
    Language, Preference, PreferenceBackend, PreferenceChange, PreferenceStore, SubscriptionId, Theme,
};
use super::step_cycle::StepCycler;
use super::visibility::{SectionId, SectionVisibility, VisibilityObserver};
use crate::config::SiteConfig;
use crate::error::ViewError;

/// Inputs from observers and timers. Presentation code never sends these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// Latest on-screen ratio of a section, as reported by the browser.
    Intersection { section: SectionId, ratio: f64 },
    /// The step interval fired.
    Tick,
    /// The section's element was removed and its observer released.
    Detached(SectionId),
    /// No element could be found to observe.
    AttachFailed(SectionId),
}

/// Everything the renderer needs, captured at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub language: Language,
    pub theme: Theme,
    pub section_visible: BTreeMap<SectionId, bool>,
    pub animated: BTreeSet<SectionId>,
    pub active_step: usize,
    /// Interval for the step timer, present only while the cycle should run.
    pub step_timer_ms: Option<u32>,
}

impl ViewSnapshot {
    pub fn is_visible(&self, section: SectionId) -> bool {
        self.section_visible.get(&section).copied().unwrap_or(false)
    }

    pub fn has_animated(&self, section: SectionId) -> bool {
        self.animated.contains(&section)
    }

    /// Steps up to and including the active one are highlighted.
    pub fn step_reached(&self, step: usize) -> bool {
        step <= self.active_step
    }
}

#[derive(Debug)]
struct TrackedSection {
    observer: VisibilityObserver,
    visibility: SectionVisibility,
}

/// Single owner of display state for the page.
///
/// Built once by the root component with [`ViewCoordinator::init`] and torn
/// down with [`ViewCoordinator::teardown`]. Language and theme change only
/// through the two toggles; everything else arrives as a [`ViewEvent`].
pub struct ViewCoordinator<B> {
    preferences: PreferenceStore<B>,
    language: Language,
    theme: Theme,
    sections: BTreeMap<SectionId, TrackedSection>,
    unobservable: BTreeSet<SectionId>,
    cycle: StepCycler,
    cycle_owner: SectionId,
    config: SiteConfig,
}

impl<B: PreferenceBackend> ViewCoordinator<B> {
    /// Loads persisted preferences. Never fails; bad storage yields defaults.
    pub fn init(backend: B, config: SiteConfig) -> Self {
        let preferences = PreferenceStore::new(backend);
        let language = preferences.get::<Language>();
        let theme = preferences.get::<Theme>();
        info!("Loaded preferences: language={}, theme={}", language.as_str(), theme.as_str());

        Self {
            preferences,
            language,
            theme,
            sections: BTreeMap::new(),
            unobservable: BTreeSet::new(),
            cycle: StepCycler::new(config.step_count),
            cycle_owner: SectionId::Process,
            config,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.preferences.set(self.language);
        self.log_snapshot();
        self.language
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.preferences.set(self.theme);
        self.log_snapshot();
        self.theme
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(PreferenceChange) + 'static) -> SubscriptionId {
        self.preferences.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.preferences.unsubscribe(id)
    }

    /// Applies one event. Returns true if the snapshot changed.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        let changed = match event {
            ViewEvent::Intersection { section, ratio } => self.on_intersection(section, ratio),
            ViewEvent::Tick => self.cycle.tick(),
            ViewEvent::Detached(section) => self.forget(section),
            ViewEvent::AttachFailed(section) => {
                warn!("{}", ViewError::ObserverAttachFailure(section));
                self.unobservable.insert(section);
                self.forget(section);
                true
            }
        };
        if changed {
            self.log_snapshot();
        }
        changed
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            language: self.language,
            theme: self.theme,
            section_visible: self
                .sections
                .iter()
                .map(|(id, tracked)| (*id, tracked.visibility.intersecting))
                .collect(),
            animated: self
                .sections
                .iter()
                .filter(|(_, tracked)| tracked.visibility.has_animated)
                .map(|(id, _)| *id)
                .collect(),
            active_step: self.cycle.index(),
            step_timer_ms: self.cycle.interval_ms(),
        }
    }

    /// Drops all section state and stops the step timer.
    pub fn teardown(&mut self) {
        self.cycle.stop();
        self.sections.clear();
        debug!("View coordinator torn down");
    }

    pub fn into_backend(self) -> B {
        self.preferences.into_backend()
    }

    fn on_intersection(&mut self, section: SectionId, ratio: f64) -> bool {
        if self.unobservable.contains(&section) {
            return false;
        }
        let threshold = self.config.visibility_threshold;
        let tracked = self.sections.entry(section).or_insert_with(|| TrackedSection {
            observer: VisibilityObserver::new(threshold),
            visibility: SectionVisibility::default(),
        });

        match tracked.observer.observe(ratio) {
            None => false,
            Some(true) => {
                if tracked.visibility.enter() {
                    debug!("Section {} entered view", section);
                }
                if section == self.cycle_owner {
                    // Re-entry always replays the cycle from the first step.
                    self.cycle.reset();
                    self.cycle.start(self.config.step_interval_ms);
                }
                true
            }
            Some(false) => {
                tracked.visibility.leave();
                if section == self.cycle_owner {
                    self.cycle.stop();
                }
                true
            }
        }
    }

    fn forget(&mut self, section: SectionId) -> bool {
        if section == self.cycle_owner {
            self.cycle.stop();
        }
        self.sections.remove(&section).is_some()
    }

    #[cfg(debug_assertions)]
    fn log_snapshot(&self) {
        match serde_json::to_string(&self.snapshot()) {
            Ok(json) => debug!("View state: {}", json),
            Err(err) => debug!("View state not serializable: {}", err),
        }
    }

    #[cfg(not(debug_assertions))]
    fn log_snapshot(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::preferences::MemoryStorage;

    fn coordinator() -> ViewCoordinator<MemoryStorage> {
        ViewCoordinator::init(MemoryStorage::default(), SiteConfig::default())
    }

    fn show(section: SectionId) -> ViewEvent {
        ViewEvent::Intersection { section, ratio: 0.8 }
    }

    fn hide(section: SectionId) -> ViewEvent {
        ViewEvent::Intersection { section, ratio: 0.0 }
    }

    #[test]
    fn test_empty_storage_snapshot() {
        let snapshot = coordinator().snapshot();
        assert_eq!(snapshot.language, Language::En);
        assert_eq!(snapshot.theme, Theme::Dark);
        assert_eq!(snapshot.active_step, 0);
        assert_eq!(snapshot.step_timer_ms, None);
        assert!(snapshot.section_visible.is_empty());
    }

    #[test]
    fn test_toggles_persist() {
        let mut view = coordinator();
        assert_eq!(view.toggle_language(), Language::Ko);
        assert_eq!(view.toggle_theme(), Theme::Light);

        let backend = view.into_backend();
        assert_eq!(backend.entry("lang"), Some("ko"));
        assert_eq!(backend.entry("theme"), Some("light"));
    }

    #[test]
    fn test_process_entry_starts_timer() {
        let mut view = coordinator();
        assert!(view.apply(show(SectionId::Process)));

        let snapshot = view.snapshot();
        assert!(snapshot.is_visible(SectionId::Process));
        assert!(snapshot.has_animated(SectionId::Process));
        assert_eq!(snapshot.step_timer_ms, Some(2000));
    }

    #[test]
    fn test_other_sections_do_not_drive_cycle() {
        let mut view = coordinator();
        assert!(view.apply(show(SectionId::Features)));
        assert!(!view.apply(ViewEvent::Tick));
        assert_eq!(view.snapshot().step_timer_ms, None);
        assert!(view.snapshot().is_visible(SectionId::Features));
    }

    #[test]
    fn test_redundant_readings_are_not_changes() {
        let mut view = coordinator();
        assert!(view.apply(show(SectionId::Portfolio)));
        assert!(!view.apply(ViewEvent::Intersection { section: SectionId::Portfolio, ratio: 0.95 }));
        assert!(!view.apply(hide(SectionId::Hero)));
    }

    #[test]
    fn test_leave_freezes_and_rearms() {
        let mut view = coordinator();
        view.apply(show(SectionId::Process));
        view.apply(ViewEvent::Tick);
        view.apply(ViewEvent::Tick);
        view.apply(hide(SectionId::Process));

        let snapshot = view.snapshot();
        assert_eq!(snapshot.active_step, 2);
        assert_eq!(snapshot.step_timer_ms, None);
        assert!(!snapshot.has_animated(SectionId::Process));

        assert!(!view.apply(ViewEvent::Tick));
        assert_eq!(view.snapshot().active_step, 2);
    }

    #[test]
    fn test_detached_section_stops_timer() {
        let mut view = coordinator();
        view.apply(show(SectionId::Process));
        assert!(view.apply(ViewEvent::Detached(SectionId::Process)));
        assert!(!view.apply(ViewEvent::Detached(SectionId::Process)));

        let snapshot = view.snapshot();
        assert_eq!(snapshot.step_timer_ms, None);
        assert!(!snapshot.is_visible(SectionId::Process));
    }

    #[test]
    fn test_attach_failure_is_permanently_hidden() {
        let mut view = coordinator();
        assert!(view.apply(ViewEvent::AttachFailed(SectionId::Process)));
        assert!(!view.apply(show(SectionId::Process)));
        assert!(!view.snapshot().is_visible(SectionId::Process));
        assert_eq!(view.snapshot().step_timer_ms, None);
    }

    #[test]
    fn test_teardown_releases_everything() {
        let mut view = coordinator();
        view.apply(show(SectionId::Process));
        view.apply(show(SectionId::Hero));
        view.teardown();

        let snapshot = view.snapshot();
        assert!(snapshot.section_visible.is_empty());
        assert_eq!(snapshot.step_timer_ms, None);
    }

    #[test]
    fn test_step_reached() {
        let mut view = coordinator();
        view.apply(show(SectionId::Process));
        view.apply(ViewEvent::Tick);
        let snapshot = view.snapshot();
        assert!(snapshot.step_reached(0));
        assert!(snapshot.step_reached(1));
        assert!(!snapshot.step_reached(2));
    }

    #[test]
    fn test_snapshot_serializes_lowercase() {
        let mut view = coordinator();
        view.apply(show(SectionId::Process));
        let json = serde_json::to_value(view.snapshot()).unwrap();
        assert_eq!(json["language"], "en");
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["section_visible"]["process"], true);
    }
}
