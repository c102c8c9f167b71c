//! A two-sided slide-to-confirm track.
//!
//! The track holds a background, two draggable sliders and up to three text
//! captions. Dragging the left slider all the way to the right (or the right
//! slider all the way to the left) and releasing it confirms that side's
//! action. A short drag springs back.
//!
//! The crate is platform-agnostic. The embedding view system feeds
//! [`TouchEvent`]s into [`SlideAction::handle_touch`], receives layout,
//! redraw, input-capture and animation requests through [`SlideHost`], and
//! paints the [`DrawCommand`]s returned by [`SlideAction::draw_commands`].
//!
//! # Example
//!
//! ```
//! use slide_action::{
//!     AnimationRequest, ImageContent, Px, PxSize, SlideAction, SlideActionArgs, SlideHost,
//!     TouchEvent,
//! };
//!
//! #[derive(Default)]
//! struct Host;
//!
//! impl SlideHost for Host {
//!     fn request_layout(&mut self) {}
//!     fn request_redraw(&mut self) {}
//!     fn set_exclusive_input(&mut self, _exclusive: bool) {}
//!     fn animate(&mut self, _request: AnimationRequest) {}
//! }
//!
//! let knob = ImageContent::new("knob").with_intrinsic_size(Px(50), Px(50));
//! let args = SlideActionArgs::default()
//!     .left_slider(knob.clone())
//!     .right_slider(knob)
//!     .description("slide to answer");
//! let mut widget = SlideAction::new(args).unwrap();
//! widget.layout(PxSize::new(Px(300), Px(100)));
//!
//! let mut host = Host;
//! assert!(widget.handle_touch(TouchEvent::down(29, 50), &mut host));
//! widget.handle_touch(TouchEvent::moved(290, 50), &mut host);
//! widget.handle_touch(TouchEvent::up(290, 50), &mut host);
//! assert!(widget.state().completed().is_some());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

/// Emits a `debug` event only when the widget's debug flag is set.
macro_rules! slide_debug {
    ($enabled:expr, $($arg:tt)+) => {
        if $enabled {
            tracing::debug!($($arg)+);
        }
    };
}

pub mod animation;
pub mod content;
pub mod dp;
pub mod element;
pub mod error;
pub mod host;
pub mod layout;
mod observer;
pub mod prop;
pub mod px;
pub mod render;
pub mod slide_action;
pub mod state;

pub use crate::{
    animation::{
        AnimatedProperty, Animation, AnimationRequest, ElementKind, Frame, FrameValue, Tweens,
    },
    content::{Color, Content, ImageContent, TextLabel},
    dp::{Density, Dp},
    element::{Background, Caption, CaptionKind, Element, Slider},
    error::SlideActionError,
    host::SlideHost,
    layout::{ContentArea, Padding, SizingPolicy},
    prop::Callback,
    px::{Px, PxPosition, PxRect, PxSize},
    render::{DrawCommand, DrawLayer, DrawList},
    slide_action::{SlideAction, SlideActionArgs},
    state::{GestureState, SliderSide, TouchAction, TouchEvent},
};
