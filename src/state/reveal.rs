//! Scroll and reveal animation state
//!
//! `PageScroll` drives eased anchor jumps (the site's smooth scrolling);
//! `RevealState` tracks which elements have entered the viewport and how
//! far along their fade-in is. Reveals are sticky.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Rows reserved by the fixed nav bar, compensated when jumping to an anchor
pub const HEADER_OFFSET: u16 = 4;

/// Rows an element must clear inside the viewport before it reveals
pub const REVEAL_MARGIN: u16 = 2;

/// One eased scroll from a starting offset to a target offset
#[derive(Debug)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
}

impl ScrollAnimation {
    const DURATION: Duration = Duration::from_millis(450);

    fn offset_at(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.started);
        if elapsed >= Self::DURATION {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        self.from + (self.to - self.from) * eased
    }

    fn is_complete(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= Self::DURATION
    }
}

/// Vertical scroll position of one page, with optional eased animation
#[derive(Debug, Default)]
pub struct PageScroll {
    offset: u16,
    animation: Option<ScrollAnimation>,
}

impl PageScroll {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Animate towards an anchor row, compensating for the fixed header
    pub fn scroll_to_anchor(&mut self, anchor_row: u16) {
        let target = anchor_row.saturating_sub(HEADER_OFFSET);
        self.animation = Some(ScrollAnimation {
            from: self.offset as f32,
            to: target as f32,
            started: Instant::now(),
        });
    }

    /// Land on an anchor immediately, for reduced-motion mode
    pub fn jump_to_anchor(&mut self, anchor_row: u16) {
        self.animation = None;
        self.offset = anchor_row.saturating_sub(HEADER_OFFSET);
    }

    /// Manual scrolling cancels any running animation
    pub fn scroll_down(&mut self, max: u16) {
        self.animation = None;
        self.offset = (self.offset + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.animation = None;
        self.offset = self.offset.saturating_sub(1);
    }

    /// Advance the animation; returns true while one is running
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = &self.animation else {
            return false;
        };
        self.offset = animation.offset_at(now).round() as u16;
        if animation.is_complete(now) {
            self.animation = None;
            return false;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

/// Sticky per-element reveal tracking with a short fade-in
#[derive(Debug, Default)]
pub struct RevealState {
    revealed: HashMap<usize, Instant>,
}

impl RevealState {
    /// Length of the fade once an element has entered the viewport
    pub const FADE_DURATION: Duration = Duration::from_millis(400);

    /// Record visibility for one element. The first `visible = true`
    /// starts the fade; later observations never undo it.
    pub fn observe(&mut self, index: usize, visible: bool, now: Instant) {
        if visible {
            self.revealed.entry(index).or_insert(now);
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains_key(&index)
    }

    /// Fade progress in 0.0..=1.0 (eased); 0.0 while unrevealed
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        let Some(revealed_at) = self.revealed.get(&index) else {
            return 0.0;
        };
        let elapsed = now.duration_since(*revealed_at);
        if elapsed >= Self::FADE_DURATION {
            return 1.0;
        }
        let linear = elapsed.as_secs_f32() / Self::FADE_DURATION.as_secs_f32();
        simple_easing::quad_out(linear)
    }

    /// True while any fade is still short of completion
    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.revealed
            .values()
            .any(|t| now.duration_since(*t) < Self::FADE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod page_scroll {
        use super::*;

        #[test]
        fn test_anchor_jump_compensates_for_header() {
            let mut scroll = PageScroll::default();
            scroll.scroll_to_anchor(20);
            assert!(scroll.is_animating());

            // run the animation to completion
            let done = Instant::now() + ScrollAnimation::DURATION + Duration::from_millis(10);
            scroll.tick(done);
            assert!(!scroll.is_animating());
            assert_eq!(scroll.offset(), 20 - HEADER_OFFSET);
        }

        #[test]
        fn test_anchor_above_header_clamps_to_top() {
            let mut scroll = PageScroll::default();
            scroll.scroll_to_anchor(2);
            let done = Instant::now() + ScrollAnimation::DURATION + Duration::from_millis(10);
            scroll.tick(done);
            assert_eq!(scroll.offset(), 0);
        }

        #[test]
        fn test_jump_lands_without_animation() {
            let mut scroll = PageScroll::default();
            scroll.jump_to_anchor(20);
            assert!(!scroll.is_animating());
            assert_eq!(scroll.offset(), 20 - HEADER_OFFSET);
        }

        #[test]
        fn test_manual_scroll_cancels_animation() {
            let mut scroll = PageScroll::default();
            scroll.scroll_to_anchor(30);
            scroll.scroll_down(40);
            assert!(!scroll.is_animating());
            assert_eq!(scroll.offset(), 1);
        }

        #[test]
        fn test_scroll_bounds() {
            let mut scroll = PageScroll::default();
            scroll.scroll_up();
            assert_eq!(scroll.offset(), 0);
            scroll.scroll_down(0);
            assert_eq!(scroll.offset(), 0);
        }
    }

    mod reveal_state {
        use super::*;

        #[test]
        fn test_unobserved_element_has_zero_progress() {
            let reveal = RevealState::default();
            assert_eq!(reveal.progress(0, Instant::now()), 0.0);
            assert!(!reveal.is_revealed(0));
        }

        #[test]
        fn test_reveal_completes_after_fade_duration() {
            let mut reveal = RevealState::default();
            let t0 = Instant::now();
            reveal.observe(0, true, t0);
            assert!(reveal.is_revealed(0));
            assert_eq!(reveal.progress(0, t0 + RevealState::FADE_DURATION), 1.0);
        }

        #[test]
        fn test_reveal_is_sticky() {
            let mut reveal = RevealState::default();
            let t0 = Instant::now();
            reveal.observe(3, true, t0);
            reveal.observe(3, false, t0 + Duration::from_millis(50));
            assert!(reveal.is_revealed(3));
        }

        #[test]
        fn test_repeated_observation_keeps_original_start() {
            let mut reveal = RevealState::default();
            let t0 = Instant::now();
            reveal.observe(1, true, t0);
            reveal.observe(1, true, t0 + Duration::from_millis(300));
            assert_eq!(reveal.progress(1, t0 + RevealState::FADE_DURATION), 1.0);
        }

        #[test]
        fn test_transitioning_window() {
            let mut reveal = RevealState::default();
            let t0 = Instant::now();
            reveal.observe(0, true, t0);
            assert!(reveal.is_transitioning(t0 + Duration::from_millis(100)));
            assert!(!reveal.is_transitioning(t0 + RevealState::FADE_DURATION));
        }
    }
}
