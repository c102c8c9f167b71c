//! Animation requests and a reference tween engine.
//!
//! The widget never interpolates on its own. On every state transition it
//! produces declarative [`AnimationRequest`]s ("move this element to that
//! rectangle over 500 ms") and hands them to the host through
//! [`SlideHost::animate`](crate::SlideHost::animate). A host without its own
//! tween system can feed the requests into [`Tweens`] and push the sampled
//! [`Frame`]s back with [`SlideAction::apply_frame`](crate::SlideAction::apply_frame).
//!
//! A new request for the same element and property replaces the one in
//! flight; nothing is queued.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{Px, PxRect, SliderSide};

/// Fade-in time of a slider returning to the resting state.
pub const DURATION_SHOW: Duration = Duration::from_millis(200);
/// Fade-out time of the slider opposite to the one being dragged.
pub const DURATION_HIDE: Duration = Duration::from_millis(100);
/// Travel time back to the resting layout.
pub const DURATION_MOVE: Duration = Duration::from_millis(500);
/// Travel time to the completed layout.
pub const DURATION_COMPLETE: Duration = Duration::from_millis(1000);

/// Fully opaque alpha.
pub const ALPHA_OPAQUE: u8 = u8::MAX;
/// Fully transparent alpha.
pub const ALPHA_TRANSPARENT: u8 = 0;

/// Elements that can be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    /// The track background.
    Background,
    /// The left slider.
    LeftSlider,
    /// The right slider.
    RightSlider,
}

impl ElementKind {
    /// The slider on `side`.
    pub fn slider(side: SliderSide) -> Self {
        match side {
            SliderSide::Left => ElementKind::LeftSlider,
            SliderSide::Right => ElementKind::RightSlider,
        }
    }
}

/// The animatable properties of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimatedProperty {
    /// The element's rectangle.
    Bounds,
    /// The element's opacity.
    Alpha,
}

/// Start and end values of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    /// Move the element's rectangle.
    Move {
        /// Rectangle at the start of the animation.
        from: PxRect,
        /// Rectangle at the end of the animation.
        to: PxRect,
    },
    /// Fade the element's opacity.
    Fade {
        /// Alpha at the start of the animation.
        from: u8,
        /// Alpha at the end of the animation.
        to: u8,
    },
}

impl Animation {
    /// The property this animation drives.
    pub fn property(&self) -> AnimatedProperty {
        match self {
            Animation::Move { .. } => AnimatedProperty::Bounds,
            Animation::Fade { .. } => AnimatedProperty::Alpha,
        }
    }

    /// The value reached at eased progress `t` in `0.0..=1.0`.
    pub fn value_at(&self, t: f32) -> FrameValue {
        match *self {
            Animation::Move { from, to } => FrameValue::Bounds(PxRect::new(
                lerp_px(from.left, to.left, t),
                lerp_px(from.top, to.top, t),
                lerp_px(from.right, to.right, t),
                lerp_px(from.bottom, to.bottom, t),
            )),
            Animation::Fade { from, to } => {
                let value = from as f32 + (to as f32 - from as f32) * t;
                FrameValue::Alpha(value.round().clamp(0.0, 255.0) as u8)
            }
        }
    }
}

/// A request to animate one property of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRequest {
    /// Which element to animate.
    pub element: ElementKind,
    /// What to animate and between which values.
    pub animation: Animation,
    /// How long the animation runs.
    pub duration: Duration,
}

impl AnimationRequest {
    /// A bounds animation.
    pub fn move_to(element: ElementKind, from: PxRect, to: PxRect, duration: Duration) -> Self {
        Self {
            element,
            animation: Animation::Move { from, to },
            duration,
        }
    }

    /// An alpha animation.
    pub fn fade_to(element: ElementKind, from: u8, to: u8, duration: Duration) -> Self {
        Self {
            element,
            animation: Animation::Fade { from, to },
            duration,
        }
    }

    /// The property this request drives.
    pub fn property(&self) -> AnimatedProperty {
        self.animation.property()
    }
}

/// An interpolated value for one element property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameValue {
    /// New rectangle.
    Bounds(PxRect),
    /// New alpha.
    Alpha(u8),
}

/// One sampled animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Element the value applies to.
    pub element: ElementKind,
    /// The interpolated value.
    pub value: FrameValue,
}

/// Cubic ease-in-out mapping.
/// Input: linear progress in [0.0, 1.0].
/// Output: eased progress in [0.0, 1.0].
pub fn easing(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn lerp_px(from: Px, to: Px, t: f32) -> Px {
    Px::round_from_f32(from.to_f32() + (to.to_f32() - from.to_f32()) * t)
}

#[derive(Debug, Clone, Copy)]
struct ActiveTween {
    animation: Animation,
    started_at: Instant,
    duration: Duration,
}

impl ActiveTween {
    fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// A minimal tween engine with auto-cancel semantics.
///
/// ```
/// use std::time::{Duration, Instant};
/// use slide_action::animation::{AnimationRequest, ElementKind, FrameValue, Tweens};
///
/// let mut tweens = Tweens::new();
/// let start = Instant::now();
/// tweens.start(
///     AnimationRequest::fade_to(ElementKind::LeftSlider, 0, 255, Duration::from_millis(200)),
///     start,
/// );
/// let frames = tweens.sample(start + Duration::from_millis(200));
/// assert_eq!(frames[0].value, FrameValue::Alpha(255));
/// assert!(tweens.is_idle());
/// ```
#[derive(Debug, Default)]
pub struct Tweens {
    active: FxHashMap<(ElementKind, AnimatedProperty), ActiveTween>,
}

impl Tweens {
    /// Creates an idle engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a tween, replacing any tween already running on the same
    /// element and property.
    pub fn start(&mut self, request: AnimationRequest, now: Instant) {
        let key = (request.element, request.property());
        let tween = ActiveTween {
            animation: request.animation,
            started_at: now,
            duration: request.duration,
        };
        if self.active.insert(key, tween).is_some() {
            trace!(element = ?request.element, property = ?key.1, "superseded running tween");
        }
    }

    /// Samples every running tween at `now`.
    ///
    /// Finished tweens emit their final value once and are then dropped.
    /// Frames are ordered by element, then property.
    pub fn sample(&mut self, now: Instant) -> Vec<Frame> {
        let mut frames: Vec<(ElementKind, AnimatedProperty, Frame)> = self
            .active
            .iter()
            .map(|(&(element, property), tween)| {
                let value = tween.animation.value_at(easing(tween.fraction(now)));
                (element, property, Frame { element, value })
            })
            .collect();
        self.active.retain(|_, tween| tween.fraction(now) < 1.0);
        frames.sort_by_key(|(element, property, _)| (*element, *property));
        frames.into_iter().map(|(_, _, frame)| frame).collect()
    }

    /// Returns `true` when no tween is running.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of running tweens.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` when no tween is running.
    pub fn is_empty(&self) -> bool {
        self.is_idle()
    }
}
