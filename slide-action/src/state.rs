//! Gesture state and touch input types.

use std::fmt;

use crate::{Px, PxPosition};

/// Which of the two sliders an operation refers to.
///
/// The left slider rests at the left edge and completes at the right edge;
/// the right slider is its mirror image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SliderSide {
    /// Slider resting on the left edge of the track.
    Left,
    /// Slider resting on the right edge of the track.
    Right,
}

impl SliderSide {
    /// Both sides, left first. This is also the hit-test priority on press.
    pub const ALL: [SliderSide; 2] = [SliderSide::Left, SliderSide::Right];
}

impl fmt::Display for SliderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderSide::Left => f.write_str("left"),
            SliderSide::Right => f.write_str("right"),
        }
    }
}

/// The single scalar that coordinates every element of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    /// Both sliders at rest.
    #[default]
    Normal,
    /// A slider is being dragged.
    Dragging(SliderSide),
    /// A slider was released past its target. Only [`reset`] leaves this
    /// state.
    ///
    /// [`reset`]: crate::SlideAction::reset
    Completed(SliderSide),
}

impl GestureState {
    /// The slider being dragged, if any.
    pub fn dragging(self) -> Option<SliderSide> {
        match self {
            GestureState::Dragging(side) => Some(side),
            _ => None,
        }
    }

    /// The slider that completed, if any.
    pub fn completed(self) -> Option<SliderSide> {
        match self {
            GestureState::Completed(side) => Some(side),
            _ => None,
        }
    }
}

/// Kind of touch input delivered to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    /// First finger went down.
    Down,
    /// Finger moved while down.
    Move,
    /// Finger lifted.
    Up,
}

/// A single touch event, in widget-local physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    /// What happened.
    pub action: TouchAction,
    /// Where it happened.
    pub position: PxPosition,
}

impl TouchEvent {
    /// A touch-down event at `(x, y)`.
    pub fn down(x: i32, y: i32) -> Self {
        Self::new(TouchAction::Down, x, y)
    }

    /// A touch-move event at `(x, y)`.
    pub fn moved(x: i32, y: i32) -> Self {
        Self::new(TouchAction::Move, x, y)
    }

    /// A touch-up event at `(x, y)`.
    pub fn up(x: i32, y: i32) -> Self {
        Self::new(TouchAction::Up, x, y)
    }

    fn new(action: TouchAction, x: i32, y: i32) -> Self {
        Self {
            action,
            position: PxPosition::new(Px(x), Px(y)),
        }
    }
}

/// Per-gesture scratch data, created on press and dropped on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TouchSession {
    pub side: SliderSide,
    /// Distance between the finger and the slider center that keeps the
    /// slider anchored under the finger while dragging.
    pub touch_gap: Px,
}
