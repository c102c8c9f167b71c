//! State-change fan-out.
//!
//! Each animatable element reacts to a [`GestureState`] transition by pushing
//! the animations it needs. Reactions only read the transition, never each
//! other, so the order the widget visits them in does not affect the result.

use smallvec::SmallVec;

use crate::{
    GestureState, SliderSide,
    animation::{
        ALPHA_OPAQUE, ALPHA_TRANSPARENT, AnimationRequest, DURATION_COMPLETE, DURATION_HIDE,
        DURATION_MOVE, DURATION_SHOW, ElementKind,
    },
    element::{Background, Slider},
    layout::ContentArea,
};

/// Requests produced by one transition. Two sliders with two properties each
/// plus the background fit inline.
pub(crate) type Requests = SmallVec<[AnimationRequest; 6]>;

/// Snapshot of the widget handed to every observer.
pub(crate) struct Transition<'a> {
    pub to: GestureState,
    pub area: &'a ContentArea,
    pub left: &'a Slider,
    pub right: &'a Slider,
    pub complete_to_center: bool,
}

impl Transition<'_> {
    fn slider(&self, side: SliderSide) -> &Slider {
        match side {
            SliderSide::Left => self.left,
            SliderSide::Right => self.right,
        }
    }
}

pub(crate) trait StateObserver {
    fn on_state_changed(&self, transition: &Transition<'_>, requests: &mut Requests);
}

impl StateObserver for Slider {
    fn on_state_changed(&self, transition: &Transition<'_>, requests: &mut Requests) {
        if !self.element().has_content() {
            return;
        }
        let kind = ElementKind::slider(self.side());
        match transition.to {
            GestureState::Normal => {
                requests.push(AnimationRequest::move_to(
                    kind,
                    self.bounds(),
                    self.rest(),
                    DURATION_MOVE,
                ));
                requests.push(AnimationRequest::fade_to(
                    kind,
                    self.alpha(),
                    ALPHA_OPAQUE,
                    DURATION_SHOW,
                ));
            }
            GestureState::Completed(side) if side == self.side() => {
                requests.push(AnimationRequest::move_to(
                    kind,
                    self.bounds(),
                    self.completion_rect(transition.area, transition.complete_to_center),
                    DURATION_COMPLETE,
                ));
            }
            GestureState::Dragging(side) if side != self.side() => {
                requests.push(AnimationRequest::fade_to(
                    kind,
                    self.alpha(),
                    ALPHA_TRANSPARENT,
                    DURATION_HIDE,
                ));
            }
            _ => {}
        }
    }
}

impl StateObserver for Background {
    fn on_state_changed(&self, transition: &Transition<'_>, requests: &mut Requests) {
        if !self.element().has_content() {
            return;
        }
        let to = match transition.to {
            GestureState::Normal => (self.element().rest(), DURATION_MOVE),
            GestureState::Completed(side) => (
                self.completion_rect(
                    transition.area,
                    transition.slider(side),
                    transition.complete_to_center,
                ),
                DURATION_COMPLETE,
            ),
            GestureState::Dragging(_) => return,
        };
        requests.push(AnimationRequest::move_to(
            ElementKind::Background,
            self.bounds(),
            to.0,
            to.1,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Px, PxRect,
        animation::Animation,
        content::ImageContent,
        layout::SliderMargins,
    };

    fn rect(l: i32, t: i32, r: i32, b: i32) -> PxRect {
        PxRect::new(Px(l), Px(t), Px(r), Px(b))
    }

    fn slider(side: SliderSide, rest: PxRect, target: PxRect) -> Slider {
        let mut slider = Slider::new(
            side,
            SliderMargins {
                horizontal: Px(4),
                vertical: Px(4),
            },
        );
        slider
            .element_mut()
            .set_content(Some(ImageContent::new("knob").into()));
        slider.place(rest, target);
        slider
    }

    fn fixture() -> (ContentArea, Slider, Slider) {
        (
            ContentArea::new(rect(0, 0, 300, 100)),
            slider(SliderSide::Left, rect(4, 25, 54, 75), rect(246, 25, 296, 75)),
            slider(SliderSide::Right, rect(246, 25, 296, 75), rect(4, 25, 54, 75)),
        )
    }

    fn collect(observer: &dyn StateObserver, to: GestureState) -> Requests {
        let (area, left, right) = fixture();
        let transition = Transition {
            to,
            area: &area,
            left: &left,
            right: &right,
            complete_to_center: true,
        };
        let mut requests = Requests::new();
        observer.on_state_changed(&transition, &mut requests);
        requests
    }

    #[test]
    fn test_opposite_slider_fades_out_on_drag() {
        let (_, _, right) = fixture();
        let requests = collect(&right, GestureState::Dragging(SliderSide::Left));
        assert_eq!(
            requests.as_slice(),
            &[AnimationRequest::fade_to(
                ElementKind::RightSlider,
                ALPHA_OPAQUE,
                ALPHA_TRANSPARENT,
                DURATION_HIDE
            )]
        );

        let (_, left, _) = fixture();
        assert!(collect(&left, GestureState::Dragging(SliderSide::Left)).is_empty());
    }

    #[test]
    fn test_slider_returns_to_rest_on_normal() {
        let (_, left, _) = fixture();
        let requests = collect(&left, GestureState::Normal);
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[0].animation,
            Animation::Move {
                from: rect(4, 25, 54, 75),
                to: rect(4, 25, 54, 75)
            }
        );
        assert_eq!(requests[0].duration, DURATION_MOVE);
        assert_eq!(requests[1].duration, DURATION_SHOW);
    }

    #[test]
    fn test_only_completing_slider_moves() {
        let (_, left, right) = fixture();
        let completed = GestureState::Completed(SliderSide::Left);
        let requests = collect(&left, completed);
        assert_eq!(
            requests.as_slice(),
            &[AnimationRequest::move_to(
                ElementKind::LeftSlider,
                rect(4, 25, 54, 75),
                rect(125, 25, 175, 75),
                DURATION_COMPLETE
            )]
        );
        assert!(collect(&right, completed).is_empty());
    }

    #[test]
    fn test_background_wraps_completed_slider() {
        let mut background = Background::default();
        background.element_mut().set_content(Some(ImageContent::new("track").into()));
        background.element_mut().place(rect(0, 0, 300, 100));

        let requests = collect(&background, GestureState::Completed(SliderSide::Left));
        assert_eq!(
            requests[0].animation,
            Animation::Move {
                from: rect(0, 0, 300, 100),
                to: rect(121, 21, 179, 79)
            }
        );
        assert!(collect(&background, GestureState::Dragging(SliderSide::Right)).is_empty());
    }

    #[test]
    fn test_elements_without_content_stay_silent() {
        let background = Background::default();
        assert!(collect(&background, GestureState::Normal).is_empty());
        let bare = Slider::new(SliderSide::Left, SliderMargins::default());
        assert!(collect(&bare, GestureState::Normal).is_empty());
    }
}
