//! End-to-end gestures against a 300x100 track.

mod common;

use std::time::Duration;

use common::{RecordingHost, phone_track, rect};
use slide_action::{
    Animation, CaptionKind, DrawLayer, ElementKind, GestureState, ImageContent, Px, PxSize,
    SlideAction, SlideActionArgs, SliderSide, TouchEvent,
};

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn left_slide_to_far_edge_completes() {
    let (mut widget, log) = phone_track();
    let mut host = RecordingHost::default();
    let area = widget.content_area().rect();
    assert_eq!(
        widget.slider(SliderSide::Left).rest().left,
        area.left + Px(4)
    );

    assert!(widget.handle_touch(TouchEvent::down(29, 50), &mut host));
    assert!(widget.handle_touch(TouchEvent::moved(290, 50), &mut host));
    assert!(widget.handle_touch(TouchEvent::up(290, 50), &mut host));

    assert_eq!(widget.state(), GestureState::Completed(SliderSide::Left));
    assert_eq!(*log.lock(), vec![SliderSide::Left]);
    assert_eq!(host.exclusive, vec![true, false]);

    host.run_animations(&mut widget, FRAME);
    assert_eq!(widget.slider(SliderSide::Left).bounds(), rect(125, 25, 175, 75));
    assert_eq!(widget.background().bounds(), rect(121, 21, 179, 79));
    assert_eq!(widget.slider(SliderSide::Right).alpha(), 0);
}

#[test]
fn right_slide_to_far_edge_completes() {
    let (mut widget, log) = phone_track();
    let mut host = RecordingHost::default();

    widget.handle_touch(TouchEvent::down(271, 50), &mut host);
    widget.handle_touch(TouchEvent::moved(120, 50), &mut host);
    assert_eq!(widget.slider(SliderSide::Right).bounds().center_x(), Px(120));
    widget.handle_touch(TouchEvent::moved(10, 50), &mut host);
    widget.handle_touch(TouchEvent::up(10, 50), &mut host);

    assert_eq!(widget.state(), GestureState::Completed(SliderSide::Right));
    assert_eq!(*log.lock(), vec![SliderSide::Right]);
}

#[test]
fn short_drag_springs_back_without_callback() {
    for release_x in [24, 34] {
        let (mut widget, log) = phone_track();
        let mut host = RecordingHost::default();

        widget.handle_touch(TouchEvent::down(29, 50), &mut host);
        widget.handle_touch(TouchEvent::moved(release_x, 50), &mut host);
        widget.handle_touch(TouchEvent::up(release_x, 50), &mut host);

        assert_eq!(widget.state(), GestureState::Normal);
        assert!(log.lock().is_empty());

        host.run_animations(&mut widget, FRAME);
        let left = widget.slider(SliderSide::Left);
        assert_eq!(left.bounds(), left.rest());
        assert_eq!(widget.slider(SliderSide::Right).alpha(), 255);
        assert_eq!(widget.background().bounds(), rect(0, 0, 300, 100));
    }
}

#[test]
fn flinging_far_behind_rest_does_not_complete() {
    let (mut widget, log) = phone_track();
    let mut host = RecordingHost::default();

    widget.handle_touch(TouchEvent::down(29, 50), &mut host);
    widget.handle_touch(TouchEvent::moved(i32::MIN, 50), &mut host);
    assert_eq!(widget.slider(SliderSide::Left).bounds(), rect(4, 25, 54, 75));
    widget.handle_touch(TouchEvent::up(i32::MIN, 50), &mut host);

    assert_eq!(widget.state(), GestureState::Normal);
    assert!(log.lock().is_empty());

    widget.handle_touch(TouchEvent::down(271, 50), &mut host);
    widget.handle_touch(TouchEvent::moved(i32::MAX, 50), &mut host);
    assert_eq!(widget.slider(SliderSide::Right).bounds(), rect(246, 25, 296, 75));
    widget.handle_touch(TouchEvent::up(i32::MAX, 50), &mut host);
    assert_eq!(widget.state(), GestureState::Normal);
    assert!(log.lock().is_empty());
}

#[test]
fn press_outside_sliders_never_leaves_normal() {
    let (mut widget, log) = phone_track();
    let mut host = RecordingHost::default();

    for (x, y) in [(150, 50), (0, 0), (299, 99), (29, 10), (60, 50)] {
        assert!(!widget.handle_touch(TouchEvent::down(x, y), &mut host));
        assert!(!widget.handle_touch(TouchEvent::moved(x + 100, y), &mut host));
        assert!(!widget.handle_touch(TouchEvent::up(x + 100, y), &mut host));
        assert_eq!(widget.state(), GestureState::Normal);
    }
    assert!(log.lock().is_empty());
    assert!(host.animations.is_empty());
    assert!(host.exclusive.is_empty());
}

#[test]
fn reset_from_completed_animates_back_to_rest() {
    let (mut widget, log) = phone_track();
    let mut host = RecordingHost::default();
    widget.handle_touch(TouchEvent::down(29, 50), &mut host);
    widget.handle_touch(TouchEvent::moved(290, 50), &mut host);
    widget.handle_touch(TouchEvent::up(290, 50), &mut host);
    host.run_animations(&mut widget, FRAME);
    host.animations.clear();

    widget.reset(&mut host);
    assert_eq!(widget.state(), GestureState::Normal);
    assert!(host.animations.iter().any(|request| {
        request.element == ElementKind::LeftSlider
            && request.animation
                == Animation::Move {
                    from: rect(125, 25, 175, 75),
                    to: rect(4, 25, 54, 75),
                }
    }));
    assert!(host.animations.iter().any(|request| {
        request.element == ElementKind::RightSlider
            && request.animation == Animation::Fade { from: 0, to: 255 }
    }));

    host.run_animations(&mut widget, FRAME);
    assert_eq!(widget.slider(SliderSide::Left).bounds(), rect(4, 25, 54, 75));
    assert_eq!(widget.slider(SliderSide::Right).alpha(), 255);
    assert_eq!(widget.background().bounds(), rect(0, 0, 300, 100));

    // The track is usable again and fires once more.
    widget.handle_touch(TouchEvent::down(29, 50), &mut host);
    widget.handle_touch(TouchEvent::moved(290, 50), &mut host);
    widget.handle_touch(TouchEvent::up(290, 50), &mut host);
    assert_eq!(*log.lock(), vec![SliderSide::Left, SliderSide::Left]);
}

#[test]
fn reset_while_normal_dispatches_nothing() {
    let (mut widget, _) = phone_track();
    let mut host = RecordingHost::default();
    widget.reset(&mut host);
    widget.reset(&mut host);
    assert!(host.animations.is_empty());
    assert_eq!(host.redraws, 0);
}

#[test]
fn captions_follow_state_and_slider_position() {
    let (mut widget, _) = phone_track();
    let mut host = RecordingHost::default();
    assert!(widget.is_caption_visible(CaptionKind::Center));
    assert!(!widget.is_caption_visible(CaptionKind::Left));
    assert!(!widget.is_caption_visible(CaptionKind::Right));

    widget.handle_touch(TouchEvent::down(29, 50), &mut host);
    widget.handle_touch(TouchEvent::moved(40, 50), &mut host);
    assert!(!widget.is_caption_visible(CaptionKind::Center));
    assert!(widget.is_caption_visible(CaptionKind::Left));
    assert!(!widget.is_caption_visible(CaptionKind::Right));

    // The slider now overlaps the caption area.
    widget.handle_touch(TouchEvent::moved(60, 50), &mut host);
    assert!(!widget.is_caption_visible(CaptionKind::Left));
    let layers: Vec<DrawLayer> = widget
        .draw_commands()
        .iter()
        .map(|command| command.layer)
        .collect();
    assert!(!layers.iter().any(|layer| matches!(layer, DrawLayer::Caption(_))));
}

#[test]
fn background_tracks_drag() {
    let (mut widget, _) = phone_track();
    let mut host = RecordingHost::default();
    widget.handle_touch(TouchEvent::down(271, 50), &mut host);
    widget.handle_touch(TouchEvent::moved(171, 50), &mut host);
    assert_eq!(widget.slider(SliderSide::Right).bounds(), rect(146, 25, 196, 75));
    assert_eq!(widget.background().bounds(), rect(0, 0, 200, 100));

    // Running tweens never pull the dragged parts away from the finger.
    host.run_animations(&mut widget, FRAME);
    assert_eq!(widget.slider(SliderSide::Right).bounds(), rect(146, 25, 196, 75));
    assert_eq!(widget.background().bounds(), rect(0, 0, 200, 100));
    assert_eq!(widget.slider(SliderSide::Left).alpha(), 0);
}

#[test]
fn completion_at_edge_when_not_centering() {
    let knob = ImageContent::new("knob").with_intrinsic_size(Px(50), Px(50));
    let args = SlideActionArgs::default()
        .background(ImageContent::new("track"))
        .left_slider(knob.clone())
        .right_slider(knob)
        .complete_to_center(false);
    let mut widget = SlideAction::new(args).expect("valid configuration");
    widget.layout(PxSize::new(Px(300), Px(100)));
    let mut host = RecordingHost::default();

    widget.handle_touch(TouchEvent::down(29, 50), &mut host);
    widget.handle_touch(TouchEvent::moved(200, 50), &mut host);
    widget.handle_touch(TouchEvent::moved(290, 50), &mut host);
    widget.handle_touch(TouchEvent::up(290, 50), &mut host);
    host.run_animations(&mut widget, FRAME);

    assert_eq!(widget.slider(SliderSide::Left).bounds(), rect(246, 25, 296, 75));
    assert_eq!(widget.background().bounds(), rect(242, 21, 300, 79));
}

#[test]
fn runtime_content_changes_request_layout() {
    let (mut widget, _) = phone_track();
    let mut host = RecordingHost::default();
    widget.set_left_slider(
        Some(ImageContent::new("tall").with_intrinsic_size(Px(60), Px(120))),
        &mut host,
    );
    widget.set_background(None, &mut host);
    widget.set_left_description(Some("pick up".into()), &mut host);
    assert_eq!(host.layouts, 3);

    widget.layout(PxSize::new(Px(300), Px(100)));
    // Too tall for the track: fills 100 - 2 * 4 keeping its 1:2 aspect.
    assert_eq!(widget.slider(SliderSide::Left).rest(), rect(4, 4, 50, 96));
    assert!(
        !widget
            .draw_commands()
            .iter()
            .any(|command| command.layer == DrawLayer::Background)
    );
}
