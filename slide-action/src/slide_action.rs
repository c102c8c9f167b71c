//! The slide-to-confirm widget controller.
//!
//! [`SlideAction`] owns the gesture state machine. Touch input moves the
//! sliders directly; everything else (springing back, fading, settling after
//! a completed slide) is requested from the host as animations and comes
//! back through [`SlideAction::apply_frame`].
//!
//! ## Usage
//!
//! Confirm destructive or irreversible actions, such as answering or
//! rejecting a call, where a plain tap would be too easy to trigger.

use derive_setters::Setters;

use crate::{
    Callback, Content, Density, Dp, GestureState, ImageContent, Px, PxPosition, PxSize,
    SlideActionError, SlideHost, SliderSide, TextLabel, TouchAction, TouchEvent,
    animation::{ElementKind, Frame, FrameValue},
    element::{Background, Caption, CaptionKind, Element, Slider},
    error::validate_padding_factors,
    layout::{ContentArea, LayoutInput, Padding, SliderMargins, compute_layout},
    observer::{Requests, StateObserver, Transition},
    render::{DrawList, Scene},
    state::TouchSession,
};

/// Default margin around each slider.
pub const DEFAULT_SLIDER_MARGIN: Dp = Dp(4.0);
/// Default horizontal gap between the captions and the resting sliders.
pub const DEFAULT_CAPTION_MARGIN: Dp = Dp(16.0);

/// Configuration for [`SlideAction`].
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct SlideActionArgs {
    /// Track image drawn behind everything else.
    #[setters(strip_option, into)]
    pub background: Option<ImageContent>,
    /// Image of the slider resting on the left edge.
    #[setters(strip_option, into)]
    pub left_slider: Option<ImageContent>,
    /// Image of the slider resting on the right edge.
    #[setters(strip_option, into)]
    pub right_slider: Option<ImageContent>,
    /// Caption shown while nothing is dragged.
    #[setters(strip_option, into)]
    pub description: Option<String>,
    /// Caption shown while the left slider is dragged.
    #[setters(strip_option, into)]
    pub left_description: Option<String>,
    /// Caption shown while the right slider is dragged.
    #[setters(strip_option, into)]
    pub right_description: Option<String>,
    /// Absolute insets around the track.
    #[setters(into)]
    pub padding: Padding,
    /// Left inset as a fraction of the widget width. Overrides
    /// `padding.left`.
    #[setters(strip_option)]
    pub padding_left_factor: Option<f32>,
    /// Position of the track's right edge as a fraction of the widget width.
    /// Overrides `padding.right`.
    #[setters(strip_option)]
    pub padding_right_factor: Option<f32>,
    /// Whether a completed slider settles in the middle of the track instead
    /// of staying at the far edge.
    pub complete_to_center: bool,
    /// Margin kept around each slider, on both axes.
    #[setters(into)]
    pub slider_margin: Dp,
    /// Horizontal gap between the captions and the resting sliders.
    #[setters(into)]
    pub caption_margin: Dp,
    /// Physical pixels per dp.
    #[setters(into)]
    pub density: Density,
    /// Emit diagnostic `debug` events.
    pub debug: bool,
    /// Called once when the left slider completes.
    #[setters(skip)]
    pub on_left_complete: Option<Callback>,
    /// Called once when the right slider completes.
    #[setters(skip)]
    pub on_right_complete: Option<Callback>,
}

impl Default for SlideActionArgs {
    fn default() -> Self {
        Self {
            background: None,
            left_slider: None,
            right_slider: None,
            description: None,
            left_description: None,
            right_description: None,
            padding: Padding::ZERO,
            padding_left_factor: None,
            padding_right_factor: None,
            complete_to_center: true,
            slider_margin: DEFAULT_SLIDER_MARGIN,
            caption_margin: DEFAULT_CAPTION_MARGIN,
            density: Density::STANDARD,
            debug: false,
            on_left_complete: None,
            on_right_complete: None,
        }
    }
}

impl SlideActionArgs {
    /// Sets the callback fired when the left slider completes.
    pub fn on_left_complete<F>(mut self, on_complete: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_left_complete = Some(Callback::new(on_complete));
        self
    }

    /// Sets the callback fired when the right slider completes.
    pub fn on_right_complete<F>(mut self, on_complete: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_right_complete = Some(Callback::new(on_complete));
        self
    }
}

const DEFAULT_OBSERVERS: [ElementKind; 3] = [
    ElementKind::Background,
    ElementKind::LeftSlider,
    ElementKind::RightSlider,
];

/// A two-sided slide-to-confirm track.
#[derive(Debug)]
pub struct SlideAction {
    padding: Padding,
    padding_left_factor: Option<f32>,
    padding_right_factor: Option<f32>,
    complete_to_center: bool,
    slider_margin: Dp,
    caption_margin: Dp,
    density: Density,
    debug: bool,
    size: PxSize,
    area: ContentArea,
    state: GestureState,
    session: Option<TouchSession>,
    background: Background,
    left: Slider,
    right: Slider,
    captions: [Caption; 3],
    observers: [ElementKind; 3],
}

impl SlideAction {
    /// Creates the widget. Nothing is placed until the first
    /// [`layout`](Self::layout).
    pub fn new(args: SlideActionArgs) -> Result<Self, SlideActionError> {
        validate_padding_factors(args.padding_left_factor, args.padding_right_factor)?;
        validate_density(args.density)?;

        let margins = slider_margins(args.slider_margin, args.density);
        let mut widget = Self {
            padding: args.padding,
            padding_left_factor: args.padding_left_factor,
            padding_right_factor: args.padding_right_factor,
            complete_to_center: args.complete_to_center,
            slider_margin: args.slider_margin,
            caption_margin: args.caption_margin,
            density: args.density,
            debug: args.debug,
            size: PxSize::ZERO,
            area: ContentArea::default(),
            state: GestureState::Normal,
            session: None,
            background: Background::default(),
            left: Slider::new(SliderSide::Left, margins),
            right: Slider::new(SliderSide::Right, margins),
            captions: [
                Caption::new(CaptionKind::Center),
                Caption::new(CaptionKind::Left),
                Caption::new(CaptionKind::Right),
            ],
            observers: DEFAULT_OBSERVERS,
        };
        widget
            .background
            .element_mut()
            .set_content(args.background.map(Content::from));
        widget
            .left
            .element_mut()
            .set_content(args.left_slider.map(Content::from));
        widget
            .right
            .element_mut()
            .set_content(args.right_slider.map(Content::from));
        widget.left.set_listener(args.on_left_complete);
        widget.right.set_listener(args.on_right_complete);
        for (kind, text) in [
            (CaptionKind::Center, args.description),
            (CaptionKind::Left, args.left_description),
            (CaptionKind::Right, args.right_description),
        ] {
            widget.caption_mut(kind).element_mut().set_content(caption_content(text));
        }
        Ok(widget)
    }

    /// Current gesture state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Outer size from the last layout.
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// Track interior from the last layout.
    pub fn content_area(&self) -> ContentArea {
        self.area
    }

    /// The track background.
    pub fn background(&self) -> &Background {
        &self.background
    }

    /// The slider on `side`.
    pub fn slider(&self, side: SliderSide) -> &Slider {
        match side {
            SliderSide::Left => &self.left,
            SliderSide::Right => &self.right,
        }
    }

    /// One of the captions.
    pub fn caption(&self, kind: CaptionKind) -> &Caption {
        &self.captions[kind as usize]
    }

    /// Whether `kind` would be drawn right now.
    pub fn is_caption_visible(&self, kind: CaptionKind) -> bool {
        self.caption(kind).is_visible(self.state, &self.left, &self.right)
    }

    /// Whether a completed slider settles in the middle of the track.
    pub fn complete_to_center(&self) -> bool {
        self.complete_to_center
    }

    /// Whether diagnostic logging is on.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Turns diagnostic logging on or off.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    fn slider_mut(&mut self, side: SliderSide) -> &mut Slider {
        match side {
            SliderSide::Left => &mut self.left,
            SliderSide::Right => &mut self.right,
        }
    }

    fn caption_mut(&mut self, kind: CaptionKind) -> &mut Caption {
        &mut self.captions[kind as usize]
    }

    fn element_mut(&mut self, kind: ElementKind) -> &mut Element {
        match kind {
            ElementKind::Background => self.background.element_mut(),
            ElementKind::LeftSlider => self.left.element_mut(),
            ElementKind::RightSlider => self.right.element_mut(),
        }
    }

    fn observer(&self, kind: ElementKind) -> &dyn StateObserver {
        match kind {
            ElementKind::Background => &self.background,
            ElementKind::LeftSlider => &self.left,
            ElementKind::RightSlider => &self.right,
        }
    }

    /// Recomputes every rectangle for a widget of `size`.
    ///
    /// Current bounds snap to the new resting rectangles, except while a
    /// slide is completed: the completed slider and the background stay at
    /// their settled rectangles, recomputed for the new size.
    pub fn layout(&mut self, size: PxSize) {
        let margins = slider_margins(self.slider_margin, self.density);
        let layout = compute_layout(&LayoutInput {
            size,
            padding: self.padding,
            padding_left_factor: self.padding_left_factor,
            padding_right_factor: self.padding_right_factor,
            left_slider: self.left.element().content(),
            right_slider: self.right.element().content(),
            slider_margins: margins,
            caption_margin: self.caption_margin.to_px(self.density),
        });

        self.size = size;
        self.area = layout.area;
        self.background.element_mut().place(layout.background);
        for side in SliderSide::ALL {
            let placement = *layout.slider(side);
            let slider = self.slider_mut(side);
            slider.set_margins(margins);
            slider.place(placement.rest, placement.target);
        }
        for caption in &mut self.captions {
            caption.element_mut().place(layout.captions);
        }

        match self.state {
            GestureState::Completed(side) => self.settle_completed(side),
            GestureState::Dragging(_) => self.sync_background_to_drag(),
            GestureState::Normal => {}
        }

        slide_debug!(
            self.debug,
            width = size.width.0,
            height = size.height.0,
            content = ?layout.area.rect(),
            left = ?layout.left.policy,
            right = ?layout.right.policy,
            "layout"
        );
    }

    fn settle_completed(&mut self, side: SliderSide) {
        let slider = self.slider(side).completion_rect(&self.area, self.complete_to_center);
        let background = self.background.completion_rect(
            &self.area,
            self.slider(side),
            self.complete_to_center,
        );
        self.slider_mut(side).element_mut().set_bounds(slider);
        self.background.element_mut().set_bounds(background);
    }

    fn sync_background_to_drag(&mut self) {
        let rect = self.background.drag_rect(&self.area, &self.left, &self.right);
        self.background.element_mut().set_bounds(rect);
    }

    /// Feeds one touch event to the widget.
    ///
    /// Returns `true` if the widget claimed the event. A press claims the
    /// gesture only when it lands on a resting slider; moves and the release
    /// are claimed only while that drag is active.
    pub fn handle_touch(&mut self, event: TouchEvent, host: &mut impl SlideHost) -> bool {
        match event.action {
            TouchAction::Down => self.on_press(event.position, host),
            TouchAction::Move => self.on_drag(event.position.x, host),
            TouchAction::Up => self.on_release(host),
        }
    }

    fn on_press(&mut self, point: PxPosition, host: &mut impl SlideHost) -> bool {
        if self.state != GestureState::Normal {
            return false;
        }
        let Some(side) = SliderSide::ALL
            .into_iter()
            .find(|side| self.slider(*side).check_slide_start(point))
        else {
            return false;
        };

        let touch_gap = self.slider(side).initial_touch_gap(point.x);
        self.session = Some(TouchSession { side, touch_gap });
        host.set_exclusive_input(true);
        slide_debug!(self.debug, %side, touch_gap = touch_gap.0, "slide start");
        self.set_state(GestureState::Dragging(side), host);
        self.sync_background_to_drag();
        true
    }

    fn on_drag(&mut self, touch_x: Px, host: &mut impl SlideHost) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let slider = match session.side {
            SliderSide::Left => &mut self.left,
            SliderSide::Right => &mut self.right,
        };
        slider.drag(touch_x, &mut session.touch_gap);
        self.sync_background_to_drag();
        host.request_redraw();
        true
    }

    fn on_release(&mut self, host: &mut impl SlideHost) -> bool {
        let Some(TouchSession { side, .. }) = self.session.take() else {
            return false;
        };
        host.set_exclusive_input(false);

        if self.slider(side).check_slide_complete() {
            slide_debug!(self.debug, %side, "slide complete");
            self.set_state(GestureState::Completed(side), host);
            if let Some(listener) = self.slider(side).listener() {
                listener.call();
            }
        } else {
            self.set_state(GestureState::Normal, host);
        }
        true
    }

    /// Returns the widget to [`GestureState::Normal`], animating every
    /// element back to rest. An active drag is abandoned and its input
    /// capture released. Does nothing if the widget is already at rest.
    pub fn reset(&mut self, host: &mut impl SlideHost) {
        if self.session.take().is_some() {
            host.set_exclusive_input(false);
        }
        self.set_state(GestureState::Normal, host);
    }

    fn set_state(&mut self, next: GestureState, host: &mut impl SlideHost) {
        slide_debug!(self.debug, from = ?self.state, to = ?next, "set state");
        if self.state == next {
            return;
        }
        self.state = next;
        for request in self.transition_requests(next) {
            host.animate(request);
        }
        host.request_redraw();
    }

    fn transition_requests(&self, to: GestureState) -> Requests {
        let transition = Transition {
            to,
            area: &self.area,
            left: &self.left,
            right: &self.right,
            complete_to_center: self.complete_to_center,
        };
        let mut requests = Requests::new();
        for kind in self.observers {
            self.observer(kind).on_state_changed(&transition, &mut requests);
        }
        requests
    }

    /// Applies one interpolated animation value and requests a redraw.
    ///
    /// Rectangles for the slider under the finger, and for the background
    /// while it follows that slider, are ignored: the drag owns them.
    pub fn apply_frame(&mut self, frame: Frame, host: &mut impl SlideHost) {
        match frame.value {
            FrameValue::Bounds(rect) => {
                if self.is_drag_driven(frame.element) {
                    return;
                }
                self.element_mut(frame.element).set_bounds(rect);
            }
            FrameValue::Alpha(alpha) => self.element_mut(frame.element).set_alpha(alpha),
        }
        host.request_redraw();
    }

    fn is_drag_driven(&self, kind: ElementKind) -> bool {
        self.state.dragging().is_some_and(|side| {
            kind == ElementKind::Background || kind == ElementKind::slider(side)
        })
    }

    /// What to paint this frame, back to front.
    pub fn draw_commands(&self) -> DrawList<'_> {
        Scene {
            state: self.state,
            background: &self.background,
            captions: &self.captions,
            left: &self.left,
            right: &self.right,
        }
        .draw_list()
    }

    /// Replaces the track image.
    pub fn set_background(&mut self, background: Option<ImageContent>, host: &mut impl SlideHost) {
        self.background
            .element_mut()
            .set_content(background.map(Content::from));
        host.request_layout();
    }

    /// Replaces the left slider image.
    pub fn set_left_slider(&mut self, slider: Option<ImageContent>, host: &mut impl SlideHost) {
        self.set_slider_content(SliderSide::Left, slider, host);
    }

    /// Replaces the right slider image.
    pub fn set_right_slider(&mut self, slider: Option<ImageContent>, host: &mut impl SlideHost) {
        self.set_slider_content(SliderSide::Right, slider, host);
    }

    fn set_slider_content(
        &mut self,
        side: SliderSide,
        content: Option<ImageContent>,
        host: &mut impl SlideHost,
    ) {
        self.slider_mut(side)
            .element_mut()
            .set_content(content.map(Content::from));
        host.request_layout();
    }

    /// Replaces the caption shown at rest.
    pub fn set_description(&mut self, text: Option<String>, host: &mut impl SlideHost) {
        self.set_caption_text(CaptionKind::Center, text, host);
    }

    /// Replaces the caption shown while the left slider is dragged.
    pub fn set_left_description(&mut self, text: Option<String>, host: &mut impl SlideHost) {
        self.set_caption_text(CaptionKind::Left, text, host);
    }

    /// Replaces the caption shown while the right slider is dragged.
    pub fn set_right_description(&mut self, text: Option<String>, host: &mut impl SlideHost) {
        self.set_caption_text(CaptionKind::Right, text, host);
    }

    fn set_caption_text(
        &mut self,
        kind: CaptionKind,
        text: Option<String>,
        host: &mut impl SlideHost,
    ) {
        self.caption_mut(kind)
            .element_mut()
            .set_content(caption_content(text));
        host.request_layout();
    }

    /// Sets the left inset as a fraction of the width, or `None` to fall
    /// back to the absolute padding. Invalid values leave the configuration
    /// unchanged.
    pub fn set_padding_left_factor(
        &mut self,
        factor: Option<f32>,
        host: &mut impl SlideHost,
    ) -> Result<(), SlideActionError> {
        validate_padding_factors(factor, self.padding_right_factor)?;
        self.padding_left_factor = factor;
        host.request_layout();
        Ok(())
    }

    /// Sets the right edge position as a fraction of the width, or `None` to
    /// fall back to the absolute padding. Invalid values leave the configuration
    /// unchanged.
    pub fn set_padding_right_factor(
        &mut self,
        factor: Option<f32>,
        host: &mut impl SlideHost,
    ) -> Result<(), SlideActionError> {
        validate_padding_factors(self.padding_left_factor, factor)?;
        self.padding_right_factor = factor;
        host.request_layout();
        Ok(())
    }

    /// Sets the absolute insets.
    pub fn set_padding(&mut self, padding: Padding, host: &mut impl SlideHost) {
        self.padding = padding;
        host.request_layout();
    }

    /// Changes the dp to pixel scale.
    pub fn set_density(
        &mut self,
        density: Density,
        host: &mut impl SlideHost,
    ) -> Result<(), SlideActionError> {
        validate_density(density)?;
        self.density = density;
        host.request_layout();
        Ok(())
    }

    /// Chooses where a completed slider settles.
    pub fn set_complete_to_center(&mut self, complete_to_center: bool, host: &mut impl SlideHost) {
        self.complete_to_center = complete_to_center;
        host.request_layout();
    }

    /// Replaces the callback fired when the left slider completes.
    pub fn set_left_listener(&mut self, listener: Option<Callback>) {
        self.left.set_listener(listener);
    }

    /// Replaces the callback fired when the right slider completes.
    pub fn set_right_listener(&mut self, listener: Option<Callback>) {
        self.right.set_listener(listener);
    }

    #[cfg(test)]
    fn set_observer_order(&mut self, order: [ElementKind; 3]) {
        self.observers = order;
    }
}

fn slider_margins(margin: Dp, density: Density) -> SliderMargins {
    let margin = margin.to_px(density);
    SliderMargins {
        horizontal: margin,
        vertical: margin,
    }
}

fn caption_content(text: Option<String>) -> Option<Content> {
    text.map(|text| TextLabel::new(text).into())
}

fn validate_density(density: Density) -> Result<(), SlideActionError> {
    if density.is_valid() {
        Ok(())
    } else {
        Err(SlideActionError::InvalidDensity(density.0))
    }
}
