//! Testimonial carousel state

use std::time::{Duration, Instant};

/// Auto-advancing carousel over a fixed number of slides.
/// Manual interaction pauses the auto-advance; `cycle` resumes it.
#[derive(Debug)]
pub struct TestimonialCarousel {
    len: usize,
    index: usize,
    interval: Duration,
    last_advance: Instant,
    paused: bool,
}

impl TestimonialCarousel {
    /// Default auto-advance interval (matches the site carousel)
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

    pub fn new(len: usize) -> Self {
        Self::with_interval(len, Self::DEFAULT_INTERVAL)
    }

    pub fn with_interval(len: usize, interval: Duration) -> Self {
        Self {
            len,
            index: 0,
            interval,
            last_advance: Instant::now(),
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop auto-advancing (hover/interaction analog)
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume auto-advancing from a fresh interval
    pub fn cycle(&mut self) {
        self.paused = false;
        self.last_advance = Instant::now();
    }

    /// Manual step forward; pauses auto-advance
    pub fn next(&mut self) {
        self.step_forward();
        self.pause();
    }

    /// Manual step backward; pauses auto-advance
    pub fn prev(&mut self) {
        if self.len > 1 {
            self.index = if self.index == 0 {
                self.len - 1
            } else {
                self.index - 1
            };
        }
        self.pause();
    }

    /// Advance when the interval has elapsed. Returns true if a slide
    /// change happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.paused || self.len < 2 {
            return false;
        }
        if now.duration_since(self.last_advance) >= self.interval {
            self.step_forward();
            self.last_advance = now;
            return true;
        }
        false
    }

    fn step_forward(&mut self) {
        if self.len > 1 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_after_interval() {
        let mut carousel = TestimonialCarousel::with_interval(3, Duration::ZERO);
        assert!(carousel.tick(Instant::now()));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_tick_does_not_advance_before_interval() {
        let mut carousel = TestimonialCarousel::new(3);
        assert!(!carousel.tick(Instant::now()));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_pause_stops_auto_advance() {
        let mut carousel = TestimonialCarousel::with_interval(3, Duration::ZERO);
        carousel.pause();
        assert!(!carousel.tick(Instant::now()));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_cycle_resumes_after_pause() {
        let mut carousel = TestimonialCarousel::with_interval(3, Duration::ZERO);
        carousel.pause();
        carousel.cycle();
        assert!(carousel.tick(Instant::now()));
    }

    #[test]
    fn test_manual_navigation_pauses_and_wraps() {
        let mut carousel = TestimonialCarousel::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        assert!(carousel.is_paused());
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_single_slide_never_advances() {
        let mut carousel = TestimonialCarousel::with_interval(1, Duration::ZERO);
        assert!(!carousel.tick(Instant::now()));
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_auto_advance_wraps_around() {
        let mut carousel = TestimonialCarousel::with_interval(2, Duration::ZERO);
        carousel.tick(Instant::now());
        carousel.tick(Instant::now());
        assert_eq!(carousel.index(), 0);
    }
}
