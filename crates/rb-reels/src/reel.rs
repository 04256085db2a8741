//! Per-reel animation state
//!
//! A reel is one vertical column. While in motion its window is cosmetic:
//! every step scrolls the column down one cell and feeds a freshly drawn
//! symbol in at the top. The window only becomes authoritative at the step
//! its travel counter reaches the target, so the 3 settled symbols are
//! always the 3 most recent independent uniform draws.

use rand::Rng;

use rb_stage::{GRID_ROWS, Symbol};

/// Draw one symbol uniformly at random.
pub(crate) fn draw_symbol(rng: &mut impl Rng) -> Symbol {
    Symbol::ALL[rng.random_range(0..Symbol::ALL.len())]
}

/// One reel column and its travel state.
#[derive(Debug, Clone)]
pub struct Reel {
    /// Reel index (0 = leftmost)
    index: u8,
    /// Visible symbols, top to bottom
    window: [Symbol; GRID_ROWS],
    /// Steps advanced in the current spin
    steps_done: u32,
    /// Steps to travel before settling
    target_steps: u32,
    in_motion: bool,
}

impl Reel {
    /// Create a settled reel with a random initial window.
    pub fn new(index: u8, rng: &mut impl Rng) -> Self {
        Self {
            index,
            window: std::array::from_fn(|_| draw_symbol(rng)),
            steps_done: 0,
            target_steps: 0,
            in_motion: false,
        }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// Visible window, top to bottom. Cosmetic while `is_spinning`.
    pub fn window(&self) -> &[Symbol; GRID_ROWS] {
        &self.window
    }

    pub fn is_spinning(&self) -> bool {
        self.in_motion
    }

    /// Travel progress in steps.
    pub fn steps_done(&self) -> u32 {
        self.steps_done
    }

    /// Begin a spin with the given travel target.
    pub fn start(&mut self, target_steps: u32) {
        debug_assert!(target_steps >= GRID_ROWS as u32);
        self.steps_done = 0;
        self.target_steps = target_steps;
        self.in_motion = true;
    }

    /// Advance one animation step. The bottom cell scrolls out, the rest
    /// shift down, and a fresh draw enters at the top. Returns `true` if the
    /// reel settled on this step.
    pub fn step(&mut self, rng: &mut impl Rng) -> bool {
        if !self.in_motion {
            return false;
        }

        self.window = [draw_symbol(rng), self.window[0], self.window[1]];
        self.steps_done += 1;

        if self.steps_done >= self.target_steps {
            self.in_motion = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_reel_settles_at_target() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut reel = Reel::new(0, &mut rng);

        reel.start(5);
        assert!(reel.is_spinning());

        for step in 1..=5u32 {
            let settled = reel.step(&mut rng);
            assert_eq!(settled, step == 5);
        }
        assert!(!reel.is_spinning());
        assert_eq!(reel.steps_done(), 5);
    }

    #[test]
    fn test_step_after_settle_is_inert() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut reel = Reel::new(0, &mut rng);
        reel.start(3);
        while reel.is_spinning() {
            reel.step(&mut rng);
        }

        let frozen = *reel.window();
        assert!(!reel.step(&mut rng));
        assert_eq!(*reel.window(), frozen);
    }

    #[test]
    fn test_window_scrolls_down() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut reel = Reel::new(0, &mut rng);
        let before = *reel.window();

        reel.start(4);
        reel.step(&mut rng);
        let after = *reel.window();

        // Old top and middle cells moved down one row
        assert_eq!(after[1], before[0]);
        assert_eq!(after[2], before[1]);
    }
}
