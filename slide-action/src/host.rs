//! The boundary between the widget and its host environment.

use crate::AnimationRequest;

/// Services the widget needs from the view system that embeds it.
///
/// Every call happens synchronously on the thread that delivers input, from
/// inside [`SlideAction`](crate::SlideAction) operations. Implementations
/// should only record or schedule work; the widget is borrowed mutably while
/// these methods run.
pub trait SlideHost {
    /// Content or configuration changed; the host should call
    /// [`SlideAction::layout`](crate::SlideAction::layout) again before the
    /// next draw.
    fn request_layout(&mut self);

    /// The draw list changed; the host should repaint.
    fn request_redraw(&mut self);

    /// While `true`, ancestors (scroll containers and the like) must not
    /// intercept the touch stream. Set on drag start, cleared on release.
    fn set_exclusive_input(&mut self, exclusive: bool);

    /// Start an animation, replacing any running animation of the same
    /// element and property.
    fn animate(&mut self, request: AnimationRequest);
}
