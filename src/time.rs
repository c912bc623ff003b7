//! Fixed-timestep clock
//!
//! Demo logic is written in pixels per tick, so it must run at a steady
//! rate no matter how fast the display refreshes. Each frame reports its
//! real duration and gets back the number of ticks to simulate.

pub struct FixedStep {
    step: f64,
    /// Longest frame we are willing to catch up on
    max_frame: f64,
    accumulator: f64,
    pub total_ticks: u64,
}

impl FixedStep {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: 1.0 / ticks_per_second.max(1) as f64,
            max_frame: 0.25,
            accumulator: 0.0,
            total_ticks: 0,
        }
    }

    /// Feed one frame's duration, returns how many ticks to run
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        let mut dt = frame_dt.max(0.0);
        // Spiral-of-death cap
        if dt > self.max_frame {
            log::debug!(
                "Frame took {:.1}ms, capping to {:.0}ms",
                dt * 1000.0,
                self.max_frame * 1000.0
            );
            dt = self.max_frame;
        }

        self.accumulator += dt;
        let mut ticks = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            ticks += 1;
        }
        self.total_ticks += ticks as u64;
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedStep::new(4);
        assert_eq!(clock.advance(0.125), 0);
        assert_eq!(clock.advance(0.125), 1);
        assert_eq!(clock.total_ticks, 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FixedStep::new(8);
        // 0.25s cap at 8 ticks per second
        assert_eq!(clock.advance(10.0), 2);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = FixedStep::new(60);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.total_ticks, 0);
    }
}
