//! Page view state that does not depend on the browser: the reveal latch, the
//! active-section tracker, the nav scroll threshold and the skill bar styles.
//! The components in `app` feed these from observer and listener callbacks.

use crate::content::SectionId;

/// Share of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;
/// Share of a section that must be visible before it can become active.
pub const ACTIVE_THRESHOLD: f64 = 0.4;
/// Vertical scroll offset, in pixels, past which the nav bar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 60.0;
pub const STAGGER_MS: u32 = 80;
pub const BAR_DURATION_SECS: f64 = 1.2;

/// One-way flag: false until the element is seen, then true for good.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one observation. Returns true only on the call that latches.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.revealed || !is_intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Picks the section to highlight in the navigation.
///
/// The tracker keeps the last reported visible ratio of every section. The
/// active section is the one with the highest ratio among those at or above
/// [`ACTIVE_THRESHOLD`], with ties going to the topmost section. When nothing
/// qualifies the previous choice stands.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTracker {
    ratios: [f64; SectionId::ALL.len()],
    active: SectionId,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(SectionId::default())
    }
}

impl SectionTracker {
    pub fn new(initial: SectionId) -> Self {
        Self {
            ratios: [0.0; SectionId::ALL.len()],
            active: initial,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Records a visibility report. Returns true when the active section changed.
    pub fn record(&mut self, id: SectionId, is_intersecting: bool, ratio: f64) -> bool {
        self.ratios[id.index()] = if is_intersecting { ratio } else { 0.0 };

        let best = SectionId::ALL
            .into_iter()
            .map(|id| (id, self.ratios[id.index()]))
            .filter(|(_, ratio)| *ratio >= ACTIVE_THRESHOLD)
            .fold(None::<(SectionId, f64)>, |best, (id, ratio)| match best {
                Some((_, best_ratio)) if best_ratio >= ratio => best,
                _ => Some((id, ratio)),
            });

        match best {
            Some((id, _)) if id != self.active => {
                self.active = id;
                true
            }
            _ => false,
        }
    }
}

pub fn nav_is_scrolled(offset_y: f64) -> bool {
    offset_y > NAV_SCROLL_THRESHOLD
}

/// Nav bar and mobile menu flags.
///
/// Both start false so the first client render matches the server markup;
/// the scroll offset is only fed in after hydration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A navigation entry was clicked.
    pub fn on_navigate(&mut self) {
        self.menu_open = false;
    }

    /// Feeds the vertical scroll offset. Returns true when the backdrop flips.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = nav_is_scrolled(offset_y);
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }
}

/// Pointer position in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPos {
    pub x: f64,
    pub y: f64,
}

impl Default for CursorPos {
    // off-screen until the pointer first moves
    fn default() -> Self {
        Self { x: -200.0, y: -200.0 }
    }
}

impl CursorPos {
    pub fn glow_style(&self) -> String {
        format!("left: {}px; top: {}px;", self.x, self.y)
    }
}

pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_MS)
}

pub fn bar_fill_width(level: u8, revealed: bool) -> String {
    if revealed {
        format!("{}%", level.min(100))
    } else {
        "0%".to_string()
    }
}

/// Inline style for a bar fill. `--level` carries the target width so the
/// no-script stylesheet can show the bar without the animation.
pub fn bar_fill_style(level: u8, revealed: bool, delay_ms: u32) -> String {
    format!(
        "--level: {}; width: {}; transition: width {}s ease {}ms;",
        bar_fill_width(level, true),
        bar_fill_width(level, revealed),
        BAR_DURATION_SECS,
        delay_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_latch_is_monotonic() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_revealed());

        // below threshold or not intersecting never latches
        assert!(!latch.observe(true, 0.1));
        assert!(!latch.observe(false, 0.5));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true, 0.15));
        assert!(latch.is_revealed());

        // later exits and re-entries change nothing
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 1.0));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_reveal_latch_transitions_once() {
        let mut latch = RevealLatch::default();
        let reports = [(true, 0.0), (true, 0.2), (false, 0.0), (true, 0.9), (true, 0.3)];
        let transitions = reports
            .iter()
            .filter(|(hit, ratio)| latch.observe(*hit, *ratio))
            .count();
        assert_eq!(transitions, 1);
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_tracker_starts_on_about() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_tracker_threshold() {
        let mut tracker = SectionTracker::default();
        assert!(!tracker.record(SectionId::Contact, true, 0.39));
        assert_eq!(tracker.active(), SectionId::About);

        assert!(tracker.record(SectionId::Contact, true, 0.4));
        assert_eq!(tracker.active(), SectionId::Contact);

        // leaving every section keeps the last choice
        assert!(!tracker.record(SectionId::Contact, false, 0.0));
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn test_tracker_prefers_highest_ratio() {
        let mut tracker = SectionTracker::default();
        tracker.record(SectionId::Skills, true, 0.6);
        tracker.record(SectionId::Projects, true, 0.8);
        assert_eq!(tracker.active(), SectionId::Projects);

        // a weaker report for another section does not steal focus
        assert!(!tracker.record(SectionId::Design, true, 0.5));
        assert_eq!(tracker.active(), SectionId::Projects);

        tracker.record(SectionId::Projects, true, 0.4);
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn test_tracker_ties_go_to_topmost() {
        let mut tracker = SectionTracker::new(SectionId::Contact);
        tracker.record(SectionId::Social, true, 0.5);
        tracker.record(SectionId::Design, true, 0.5);
        assert_eq!(tracker.active(), SectionId::Design);

        // report order does not matter
        let mut tracker = SectionTracker::new(SectionId::Contact);
        tracker.record(SectionId::Design, true, 0.5);
        tracker.record(SectionId::Social, true, 0.5);
        assert_eq!(tracker.active(), SectionId::Design);
    }

    #[test]
    fn test_nav_scroll_threshold() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(60.0));
        assert!(nav_is_scrolled(60.5));
        assert!(nav_is_scrolled(80.0));
    }

    #[test]
    fn test_nav_flips_once_while_scrolling_down() {
        let flips = (0..=80)
            .map(|y| nav_is_scrolled(f64::from(y)))
            .collect::<Vec<_>>()
            .windows(2)
            .filter(|w| w[0] != w[1])
            .count();
        assert_eq!(flips, 1);
    }

    #[test]
    fn test_cursor_starts_off_screen() {
        let pos = CursorPos::default();
        assert!(pos.x < 0.0 && pos.y < 0.0);
        assert_eq!(pos.glow_style(), "left: -200px; top: -200px;");
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 80);
        assert_eq!(stagger_delay(9), 720);
    }

    #[test]
    fn test_bar_fill() {
        assert_eq!(bar_fill_width(70, false), "0%");
        assert_eq!(bar_fill_width(70, true), "70%");
        assert_eq!(bar_fill_width(130, true), "100%");
        assert_eq!(
            bar_fill_style(70, true, 80),
            "--level: 70%; width: 70%; transition: width 1.2s ease 80ms;"
        );
        // the target stays available before the reveal
        assert_eq!(
            bar_fill_style(70, false, 0),
            "--level: 70%; width: 0%; transition: width 1.2s ease 0ms;"
        );
    }

    #[test]
    fn test_nav_state_starts_closed_and_transparent() {
        let nav = NavState::default();
        assert!(!nav.menu_open());
        assert!(!nav.scrolled());
    }

    #[test]
    fn test_navigate_closes_open_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.on_navigate();
        assert!(!nav.menu_open());

        // navigating with the menu already closed keeps it closed
        nav.on_navigate();
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_toggle_twice_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_nav_state_follows_scroll_offset() {
        let mut nav = NavState::default();

        // a page restored mid-scroll flips on the first report
        assert!(nav.on_scroll(80.0));
        assert!(nav.scrolled());
        assert!(!nav.on_scroll(500.0));

        assert!(nav.on_scroll(60.0));
        assert!(!nav.scrolled());

        let flips = (0..=80)
            .filter(|y| nav.on_scroll(f64::from(*y)))
            .count();
        assert_eq!(flips, 1);
        assert!(nav.scrolled());

        // scrolling leaves the menu alone
        assert!(!nav.menu_open());
    }
}
