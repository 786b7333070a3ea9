// Frame and turn timing
//
// Rendering runs once per display refresh while the game state advances in
// discrete turns. Each frame reports how many turns fell due since the last
// one, so the caller can feed that many snapshots before rendering.

use std::time::{Duration, Instant};

/// Default turn length, also used as the hero interpolation time
pub const DEFAULT_TURN_DURATION: Duration = Duration::from_millis(200);

/// Maximum number of turns dispatched in one frame after a stall
const MAX_TURNS_PER_FRAME: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Game loop timing state
pub struct GameLoop {
    /// Length of one game turn
    turn_duration: Duration,

    /// Time accumulated toward the next turn
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time when game loop started
    start_time: Instant,

    /// Whether turns are paused (frames keep rendering)
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total turns dispatched
    turn_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop advancing one turn every `turn_duration`
    pub fn new(turn_duration: Duration) -> Self {
        let now = Instant::now();
        Self {
            turn_duration: turn_duration.max(Duration::from_millis(1)),
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            turn_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of turns to dispatch
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut turns = 0;
        while self.accumulator >= self.turn_duration && turns < MAX_TURNS_PER_FRAME {
            self.accumulator -= self.turn_duration;
            turns += 1;
        }
        // Drop the backlog rather than replaying it on later frames
        if turns == MAX_TURNS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        self.turn_count += turns as u64;
        turns
    }

    /// Get the length of one turn
    pub fn turn_duration(&self) -> Duration {
        self.turn_duration
    }

    /// Fraction of the current turn already elapsed
    pub fn turn_progress(&self) -> f32 {
        self.accumulator.as_secs_f32() / self.turn_duration.as_secs_f32()
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of frames rendered
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of turns dispatched
    pub fn turn_count(&self) -> u64 {
        self.turn_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop dispatching turns
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Turns paused");
        }
    }

    /// Resume dispatching turns
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a turn burst
            self.accumulator = Duration::ZERO;
            log::info!("Turns resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_DURATION)
    }
}
