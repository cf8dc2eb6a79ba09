use std::time::{Duration, Instant};

use crate::models::Layer;

/// Minimum gap between two boundary notices
pub const NOTICE_COOLDOWN: Duration = Duration::from_millis(5000);

pub const FIRST_LAYER_NOTICE: &str = "This is the input layer!";
pub const LAST_LAYER_NOTICE: &str = "This is the output layer!";

/// Result of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The selection moved to this index
    Moved(usize),
    /// Already at the first/last layer; carries a notice unless throttled
    Boundary(Option<&'static str>),
}

/// Suppresses repeated notices shown within a cooldown window
#[derive(Debug, Clone)]
pub struct NoticeThrottle {
    cooldown: Duration,
    last_shown: Option<Instant>,
}

impl NoticeThrottle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_shown: None,
        }
    }

    /// Returns the notice if it may be shown at `now`, recording the time
    pub fn offer(&mut self, notice: &'static str, now: Instant) -> Option<&'static str> {
        if let Some(last) = self.last_shown {
            if now.saturating_duration_since(last) < self.cooldown {
                return None;
            }
        }
        self.last_shown = Some(now);
        Some(notice)
    }
}

impl Default for NoticeThrottle {
    fn default() -> Self {
        Self::new(NOTICE_COOLDOWN)
    }
}

/// View-state over a produced layer sequence.
///
/// Holds the layers and a selection index; moving the selection never
/// regenerates the layers.
#[derive(Debug, Clone)]
pub struct LayerBrowser {
    layers: Vec<Layer>,
    index: usize,
    notices: NoticeThrottle,
}

impl LayerBrowser {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self {
            layers,
            index: 0,
            notices: NoticeThrottle::default(),
        }
    }

    pub fn with_throttle(mut self, notices: NoticeThrottle) -> Self {
        self.notices = notices;
        self
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Layer> {
        self.layers.get(self.index)
    }

    /// Position indicator, e.g. "2 / 4"
    pub fn indicator(&self) -> String {
        if self.layers.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.layers.len())
    }

    pub fn next(&mut self, now: Instant) -> Navigation {
        if self.layers.is_empty() {
            return Navigation::Boundary(None);
        }
        if self.index + 1 < self.layers.len() {
            self.index += 1;
            Navigation::Moved(self.index)
        } else {
            Navigation::Boundary(self.notices.offer(LAST_LAYER_NOTICE, now))
        }
    }

    pub fn previous(&mut self, now: Instant) -> Navigation {
        if self.layers.is_empty() {
            return Navigation::Boundary(None);
        }
        if self.index > 0 {
            self.index -= 1;
            Navigation::Moved(self.index)
        } else {
            Navigation::Boundary(self.notices.offer(FIRST_LAYER_NOTICE, now))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_suppresses_within_cooldown() {
        let start = Instant::now();
        let mut throttle = NoticeThrottle::new(Duration::from_secs(5));

        assert_eq!(throttle.offer("a", start), Some("a"));
        assert_eq!(throttle.offer("b", start + Duration::from_secs(4)), None);
        assert_eq!(throttle.offer("c", start + Duration::from_secs(5)), Some("c"));
    }

    #[test]
    fn suppressed_offer_does_not_extend_cooldown() {
        let start = Instant::now();
        let mut throttle = NoticeThrottle::new(Duration::from_secs(5));

        throttle.offer("a", start);
        throttle.offer("a", start + Duration::from_secs(3));
        assert!(throttle.offer("a", start + Duration::from_secs(5)).is_some());
    }

    #[test]
    fn empty_browser_stays_put() {
        let mut browser = LayerBrowser::new(Vec::new());
        let now = Instant::now();

        assert!(browser.current().is_none());
        assert_eq!(browser.next(now), Navigation::Boundary(None));
        assert_eq!(browser.previous(now), Navigation::Boundary(None));
        assert_eq!(browser.indicator(), "0 / 0");
    }
}
