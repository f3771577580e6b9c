//! Section visibility tracking.
//!
//! The browser reports how much of a section is on screen; this module turns
//! that stream of ratios into enter/leave transitions and keeps the
//! "already animated" flag that stops entrance effects replaying on every
//! scroll tick.

use std::fmt;

use serde::Serialize;

/// Scrollable regions of the landing page. `as_str` doubles as the DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Process,
    Features,
    Portfolio,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Process,
        SectionId::Features,
        SectionId::Portfolio,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::Process => "vibecoding",
            SectionId::Features => "features",
            SectionId::Portfolio => "portfolio",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned rectangle in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);

        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Share of `region` inside `viewport`, in `[0, 1]`. Empty regions count as hidden.
pub fn intersection_ratio(region: &Rect, viewport: &Rect) -> f64 {
    let area = region.area();
    if area <= 0.0 {
        return 0.0;
    }
    region
        .intersection(viewport)
        .map(|overlap| (overlap.area() / area).min(1.0))
        .unwrap_or(0.0)
}

/// Reduces visibility readings to transitions. Starts out hidden, so a
/// section that never reaches the threshold never produces an event.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    threshold: f64,
    visible: bool,
}

impl VisibilityObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the new state if this reading changes it.
    pub fn observe(&mut self, ratio: f64) -> Option<bool> {
        let visible = ratio >= self.threshold;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }

    pub fn observe_region(&mut self, region: &Rect, viewport: &Rect) -> Option<bool> {
        self.observe(intersection_ratio(region, viewport))
    }

    /// Forget the last reported state.
    pub fn restart(&mut self) {
        self.visible = false;
    }

    /// Lazily maps a sequence of ratios to the transitions they cause.
    pub fn transitions<I>(&mut self, ratios: I) -> Transitions<'_, I::IntoIter>
    where
        I: IntoIterator<Item = f64>,
    {
        Transitions {
            observer: self,
            ratios: ratios.into_iter(),
        }
    }
}

pub struct Transitions<'a, I> {
    observer: &'a mut VisibilityObserver,
    ratios: I,
}

impl<I: Iterator<Item = f64>> Iterator for Transitions<'_, I> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.ratios.by_ref().find_map(|ratio| self.observer.observe(ratio))
    }
}

/// Per-section state shown to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionVisibility {
    pub intersecting: bool,
    pub has_animated: bool,
}

impl SectionVisibility {
    /// Returns true when this entry arms the entrance animation.
    pub fn enter(&mut self) -> bool {
        self.intersecting = true;
        let first = !self.has_animated;
        self.has_animated = true;
        first
    }

    /// Leaving view re-arms the animation for the next entry.
    pub fn leave(&mut self) {
        self.intersecting = false;
        self.has_animated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn test_ratio_fully_inside() {
        let region = Rect::new(0.0, 100.0, 1000.0, 200.0);
        assert_eq!(intersection_ratio(&region, &viewport()), 1.0);
    }

    #[test]
    fn test_ratio_partially_inside() {
        // 300 of 1000px tall section on screen
        let region = Rect::new(0.0, 500.0, 1000.0, 1000.0);
        assert!((intersection_ratio(&region, &viewport()) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_outside_and_empty() {
        let below = Rect::new(0.0, 900.0, 1000.0, 400.0);
        assert_eq!(intersection_ratio(&below, &viewport()), 0.0);

        let touching = Rect::new(0.0, 800.0, 1000.0, 400.0);
        assert_eq!(intersection_ratio(&touching, &viewport()), 0.0);

        let empty = Rect::new(0.0, 100.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(&empty, &viewport()), 0.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut observer = VisibilityObserver::new(0.3);
        assert_eq!(observer.observe(0.29), None);
        assert_eq!(observer.observe(0.3), Some(true));
        assert_eq!(observer.observe(0.1), Some(false));
    }

    #[test]
    fn test_only_transitions_reported() {
        let mut observer = VisibilityObserver::new(0.3);
        let events: Vec<bool> = observer
            .transitions([0.0, 0.1, 0.5, 0.6, 0.9, 0.31, 0.2, 0.0, 0.29, 0.4])
            .collect();
        assert_eq!(events, vec![true, false, true]);
        assert!(observer.is_visible());
    }

    #[test]
    fn test_transitions_are_lazy() {
        let mut observer = VisibilityObserver::new(0.3);
        let mut events = observer.transitions([0.5, 0.0, 0.5, 0.0]);
        assert_eq!(events.next(), Some(true));
        drop(events);
        // Only the first reading has been consumed.
        assert!(observer.is_visible());
    }

    #[test]
    fn test_restart_forgets_state() {
        let mut observer = VisibilityObserver::new(0.3);
        assert_eq!(observer.observe(1.0), Some(true));
        observer.restart();
        assert_eq!(observer.observe(1.0), Some(true));
    }

    #[test]
    fn test_scrolling_region_through_viewport() {
        let mut observer = VisibilityObserver::new(0.3);
        let events: Vec<bool> = (0..=20)
            .map(|step| Rect::new(0.0, 1200.0 - step as f64 * 100.0, 1000.0, 400.0))
            .filter_map(|region| observer.observe_region(&region, &viewport()))
            .collect();
        assert_eq!(events, vec![true, false]);
    }

    #[test]
    fn test_section_rearms_on_leave() {
        let mut section = SectionVisibility::default();
        assert!(section.enter());
        assert!(!section.enter());
        section.leave();
        assert!(!section.intersecting);
        assert!(!section.has_animated);
        assert!(section.enter());
    }

    #[test]
    fn test_section_ids_match_anchors() {
        let anchors: Vec<String> = SectionId::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(anchors, ["home", "vibecoding", "features", "portfolio", "contact"]);
    }
}
