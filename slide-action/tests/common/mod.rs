//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use slide_action::{
    AnimationRequest, ImageContent, Px, PxRect, PxSize, SlideAction, SlideActionArgs, SlideHost,
    SliderSide, Tweens,
};

/// A host that records every request and can play animations to the end.
pub struct RecordingHost {
    pub layouts: usize,
    pub redraws: usize,
    pub exclusive: Vec<bool>,
    pub animations: Vec<AnimationRequest>,
    pub tweens: Tweens,
    pub now: Instant,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            layouts: 0,
            redraws: 0,
            exclusive: Vec::new(),
            animations: Vec::new(),
            tweens: Tweens::new(),
            now: Instant::now(),
        }
    }
}

impl RecordingHost {
    /// Advances the simulated clock by `step` until every tween has finished,
    /// feeding the frames back into `widget`.
    pub fn run_animations(&mut self, widget: &mut SlideAction, step: Duration) {
        while !self.tweens.is_idle() {
            self.now += step;
            for frame in self.tweens.sample(self.now) {
                widget.apply_frame(frame, self);
            }
        }
    }
}

impl SlideHost for RecordingHost {
    fn request_layout(&mut self) {
        self.layouts += 1;
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn set_exclusive_input(&mut self, exclusive: bool) {
        self.exclusive.push(exclusive);
    }

    fn animate(&mut self, request: AnimationRequest) {
        self.animations.push(request);
        self.tweens.start(request, self.now);
    }
}

/// Completion callbacks in the order they fired.
pub type CompletionLog = Arc<Mutex<Vec<SliderSide>>>;

pub fn rect(l: i32, t: i32, r: i32, b: i32) -> PxRect {
    PxRect::new(Px(l), Px(t), Px(r), Px(b))
}

/// A 300x100 track with 50x50 sliders and all three captions, logging
/// completions into the returned log.
pub fn phone_track() -> (SlideAction, CompletionLog) {
    let log = CompletionLog::default();
    let left_log = log.clone();
    let right_log = log.clone();
    let knob = ImageContent::new("knob").with_intrinsic_size(Px(50), Px(50));
    let args = SlideActionArgs::default()
        .background(ImageContent::new("track"))
        .left_slider(knob.clone())
        .right_slider(knob)
        .description("slide to answer")
        .left_description("answer")
        .right_description("decline")
        .on_left_complete(move || left_log.lock().push(SliderSide::Left))
        .on_right_complete(move || right_log.lock().push(SliderSide::Right));
    let mut widget = SlideAction::new(args).expect("valid configuration");
    widget.layout(PxSize::new(Px(300), Px(100)));
    (widget, log)
}
