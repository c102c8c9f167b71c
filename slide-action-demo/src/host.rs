use std::time::{Duration, Instant};

use slide_action::{AnimationRequest, SlideAction, SlideHost, Tweens};
use tracing::debug;

/// Drives the reference tween engine on a simulated clock.
pub struct DemoHost {
    tweens: Tweens,
    now: Instant,
    frame: Duration,
    layout_pending: bool,
    exclusive: bool,
    frames_applied: usize,
}

impl DemoHost {
    pub fn new(frame: Duration) -> Self {
        Self {
            tweens: Tweens::new(),
            now: Instant::now(),
            frame,
            layout_pending: false,
            exclusive: false,
            frames_applied: 0,
        }
    }

    pub fn exclusive(&self) -> bool {
        self.exclusive
    }

    /// Takes the pending layout request, if any.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_pending)
    }

    /// Plays every running tween to the end. Returns the simulated time spent.
    pub fn settle(&mut self, widget: &mut SlideAction) -> Duration {
        let started = self.now;
        while !self.tweens.is_idle() {
            self.now += self.frame;
            for frame in self.tweens.sample(self.now) {
                widget.apply_frame(frame, self);
                self.frames_applied += 1;
            }
        }
        self.now - started
    }

    pub fn frames_applied(&self) -> usize {
        self.frames_applied
    }
}

impl SlideHost for DemoHost {
    fn request_layout(&mut self) {
        self.layout_pending = true;
    }

    fn request_redraw(&mut self) {}

    fn set_exclusive_input(&mut self, exclusive: bool) {
        debug!(exclusive, "input capture");
        self.exclusive = exclusive;
    }

    fn animate(&mut self, request: AnimationRequest) {
        debug!(element = ?request.element, duration = ?request.duration, "animate");
        self.tweens.start(request, self.now);
    }
}
