//! Hero screen entrance animation state

use std::time::{Duration, Instant};

/// Animation phase for the hero headline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    /// Short pause before anything moves
    Waiting,
    /// Headline sliding into place
    SlideIn,
    /// Animation finished
    Settled,
}

/// Hero headline slide-in state
#[derive(Debug)]
pub struct HeroIntro {
    /// When the intro started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: IntroPhase,
    /// Rows the headline is still below its final position
    pub offset: f32,
}

impl HeroIntro {
    /// Pause before the slide starts
    const WAIT_DURATION: Duration = Duration::from_millis(150);
    /// Duration of the slide
    const SLIDE_DURATION: Duration = Duration::from_millis(600);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: IntroPhase::Waiting,
            offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time.
    ///
    /// `distance` is how many rows below its resting place the headline starts.
    pub fn update(&mut self, distance: u16) {
        let elapsed = self.start_time.elapsed();

        if elapsed < Self::WAIT_DURATION {
            self.phase = IntroPhase::Waiting;
            self.offset = distance as f32;
        } else if elapsed < Self::WAIT_DURATION + Self::SLIDE_DURATION {
            self.phase = IntroPhase::SlideIn;
            let slide_elapsed = elapsed - Self::WAIT_DURATION;
            let progress = slide_elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
            // Cubic ease-out decelerates into the resting position
            let eased = simple_easing::cubic_out(progress);
            self.offset = (1.0 - eased) * distance as f32;
        } else {
            self.settle();
        }
    }

    /// Skip to the end (user pressed a key)
    pub fn settle(&mut self) {
        self.phase = IntroPhase::Settled;
        self.offset = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.phase == IntroPhase::Settled
    }

    /// Whole rows of offset for layout
    pub fn row_offset(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }
}

impl Default for HeroIntro {
    fn default() -> Self {
        Self::new()
    }
}
