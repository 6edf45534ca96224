//! Transient message overlay state
//!
//! Every show schedules its own hide. Scheduled hides are never cancelled, so
//! a hide left over from an earlier show can end a newer message early.

use crate::consts::MESSAGE_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Hidden,
    Visible,
}

#[derive(Debug, Clone)]
pub struct MessageBanner {
    text: Option<String>,
    state: BannerState,
    /// Pending hide deadlines (ms, same clock as `now_ms`)
    pending_hides: Vec<f64>,
    duration_ms: f64,
    clear_text_on_hide: bool,
    /// Bumped on every visible change of text or state
    revision: u64,
}

impl Default for MessageBanner {
    fn default() -> Self {
        Self::new(MESSAGE_DURATION_MS, false)
    }
}

impl MessageBanner {
    pub fn new(duration_ms: f64, clear_text_on_hide: bool) -> Self {
        Self {
            text: None,
            state: BannerState::Hidden,
            pending_hides: Vec::new(),
            duration_ms,
            clear_text_on_hide,
            revision: 0,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn state(&self) -> BannerState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == BannerState::Visible
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of scheduled hides not yet fired
    pub fn pending_hides(&self) -> usize {
        self.pending_hides.len()
    }

    /// Show `text` now and schedule a hide after the configured duration
    pub fn show_next(&mut self, text: &str, now_ms: f64) {
        self.show_for(text, now_ms, self.duration_ms);
    }

    /// Show `text` now and schedule a hide after `duration_ms`.
    /// Hides already due fire first so they cannot end this message.
    pub fn show_for(&mut self, text: &str, now_ms: f64, duration_ms: f64) {
        self.poll(now_ms);
        self.text = Some(text.to_string());
        self.state = BannerState::Visible;
        self.pending_hides.push(now_ms + duration_ms);
        self.revision += 1;
    }

    pub fn hide(&mut self) {
        let had_text = self.text.is_some();
        if self.clear_text_on_hide {
            self.text = None;
        }
        if self.state == BannerState::Visible || (self.clear_text_on_hide && had_text) {
            self.revision += 1;
        }
        self.state = BannerState::Hidden;
    }

    /// Fire every scheduled hide that is due. Returns true when any fired.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let before = self.pending_hides.len();
        self.pending_hides.retain(|&deadline| deadline > now_ms);
        let fired = before - self.pending_hides.len();
        for _ in 0..fired {
            self.hide();
        }
        fired > 0
    }
}
