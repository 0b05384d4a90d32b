//! Rolling frame-rate and generation-time statistics.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frames kept in the rolling window
const WINDOW: usize = 60;

pub struct FrameStats {
    frame_times: VecDeque<Duration>,
    generation_times: VecDeque<Duration>,
    last_frame: Instant,
    last_report: Instant,
    report_interval: Duration,
}

impl FrameStats {
    pub fn new(report_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            frame_times: VecDeque::with_capacity(WINDOW),
            generation_times: VecDeque::with_capacity(WINDOW),
            last_frame: now,
            last_report: now,
            report_interval,
        }
    }

    /// Record a presented frame and, if due, log a summary
    pub fn record_frame(&mut self, generation_time: Option<Duration>) {
        let now = Instant::now();
        let frame_time = now - self.last_frame;
        self.last_frame = now;
        self.push_frame(frame_time, generation_time);

        if now - self.last_report >= self.report_interval {
            log::debug!(
                "FPS: {:.1}, generation: {:.2}ms",
                self.fps(),
                self.average_generation_ms()
            );
            self.last_report = now;
        }
    }

    fn push_frame(&mut self, frame_time: Duration, generation_time: Option<Duration>) {
        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > WINDOW {
            self.frame_times.pop_front();
        }

        if let Some(generation_time) = generation_time {
            self.generation_times.push_back(generation_time);
            if self.generation_times.len() > WINDOW {
                self.generation_times.pop_front();
            }
        }
    }

    /// Average frames per second over the window
    pub fn fps(&self) -> f32 {
        let total: Duration = self.frame_times.iter().sum();
        if self.frame_times.is_empty() || total.is_zero() {
            return 0.0;
        }
        self.frame_times.len() as f32 / total.as_secs_f32()
    }

    pub fn average_generation_ms(&self) -> f32 {
        if self.generation_times.is_empty() {
            return 0.0;
        }
        let total: Duration = self.generation_times.iter().sum();
        total.as_secs_f32() * 1000.0 / self.generation_times.len() as f32
    }
}
