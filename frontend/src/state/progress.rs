/// Fill level of the process comparison bars, in percent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f64);

impl Progress {
    pub const EMPTY: Progress = Progress(0.0);
    pub const FULL: Progress = Progress(100.0);

    /// Share of the traditional timeline the accelerated bar covers.
    const ACCELERATED_SHARE: f64 = 0.2;

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Width of the accelerated bar for the same elapsed progress.
    pub fn accelerated(self) -> Progress {
        Progress((self.0 * Self::ACCELERATED_SHARE).min(100.0))
    }

    pub fn css_width(self) -> String {
        format!("width: {}%;", self.0)
    }
}
