/// Game loop timing control
///
/// Fixed timestep accumulator: movement and physics always advance in
/// 1/60 s increments regardless of how fast the host loop spins.
use std::time::{Duration, Instant};

/// Target update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of updates per frame to prevent spiral of death
const MAX_UPDATES_PER_FRAME: u32 = 5;

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Current frame number
    frame_count: u64,

    /// Total updates executed
    update_count: u64,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Begin a new frame, returns the number of fixed updates to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_UPDATES_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }

        // Fully drained or capped; if capped, drop the backlog so a long
        // stall doesn't cascade into the next frames
        if updates == MAX_UPDATES_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        self.update_count += updates as u64;
        updates
    }

    /// Get the fixed timestep for updates (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get the current frame number
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the total number of updates executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loop_has_no_updates() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.update_count(), 0);
    }

    #[test]
    fn test_updates_capped_after_stall() {
        let mut game_loop = GameLoop::new();
        // Simulate a long stall; the loop must not try to catch up forever
        std::thread::sleep(Duration::from_millis(150));
        let updates = game_loop.begin_frame();
        assert_eq!(updates, MAX_UPDATES_PER_FRAME);
        assert_eq!(game_loop.update_count(), MAX_UPDATES_PER_FRAME as u64);
    }

    #[test]
    fn test_frame_count_increments() {
        let mut game_loop = GameLoop::new();
        game_loop.begin_frame();
        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 2);
    }
}
