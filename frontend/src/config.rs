use log::Level;
use serde::Serialize;

/// localStorage key holding the selected language.
pub const LANGUAGE_KEY: &str = "lang";
/// localStorage key holding the selected theme.
pub const THEME_KEY: &str = "theme";

/// Tunables for the scroll and timer driven parts of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    /// Fraction of a section that must be on screen before it counts as visible.
    pub visibility_threshold: f64,
    /// Number of stages in the process comparison.
    pub step_count: usize,
    pub step_interval_ms: u32,
    /// Delay before the process progress bars start filling.
    pub progress_delay_ms: u32,
    /// Scroll offset (px) after which the nav bar switches to its solid style.
    pub nav_scroll_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.3,
            step_count: 5,
            step_interval_ms: 2000,
            progress_delay_ms: 500,
            nav_scroll_threshold: 50.0,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state logging while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.visibility_threshold, 0.3);
        assert_eq!(config.step_count, 5);
        assert_eq!(config.step_interval_ms, 2000);
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_value(SiteConfig::default()).unwrap();
        assert_eq!(json["progress_delay_ms"], 500);
        assert_eq!(json["nav_scroll_threshold"], 50.0);
    }
}
