//! Track elements: the drawable holder, the two sliders, the background and
//! the captions.
//!
//! Sliders differ only by side. Everything side-specific (where the slider
//! rests, where it completes, how it keeps its grip under the finger) lives
//! in a two-entry rule table indexed by [`SliderSide`], so a single
//! [`Slider`] type serves both.

use crate::{
    Callback, GestureState, Px, PxPosition, PxRect, SliderSide,
    animation::ALPHA_OPAQUE,
    content::Content,
    layout::{ContentArea, SliderMargins},
};

/// A holder for paintable content plus its rectangles.
///
/// `rest` is the rectangle computed by layout. `bounds` is the rectangle the
/// element is currently drawn at; animations and drags move it away from
/// `rest`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    content: Option<Content>,
    rest: PxRect,
    bounds: PxRect,
    alpha: u8,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            content: None,
            rest: PxRect::ZERO,
            bounds: PxRect::ZERO,
            alpha: ALPHA_OPAQUE,
        }
    }
}

impl Element {
    /// The configured content, if any.
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Whether there is something to draw. Elements without content are
    /// inert: they are not hit-tested, drawn or animated.
    pub fn has_content(&self) -> bool {
        self.content.as_ref().is_some_and(Content::is_paintable)
    }

    /// Rectangle assigned by the last layout pass.
    pub fn rest(&self) -> PxRect {
        self.rest
    }

    /// Rectangle the element is currently drawn at. Elements without
    /// content report their rest rectangle.
    pub fn bounds(&self) -> PxRect {
        if self.has_content() {
            self.bounds
        } else {
            self.rest
        }
    }

    /// Current opacity.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub(crate) fn set_content(&mut self, content: Option<Content>) {
        self.content = content;
    }

    pub(crate) fn place(&mut self, rest: PxRect) {
        self.rest = rest;
        self.bounds = rest;
    }

    pub(crate) fn set_bounds(&mut self, bounds: PxRect) {
        self.bounds = bounds;
    }

    pub(crate) fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }
}

/// Which way a slider travels from rest to target.
#[derive(Clone, Copy)]
enum Direction {
    Rightward,
    Leftward,
}

/// Side-specific geometry and completion rules.
pub(crate) struct SideRules {
    direction: Direction,
    rest_left: fn(&PxRect, Px, Px) -> Px,
    target_left: fn(&PxRect, Px, Px) -> Px,
    initial_gap: fn(Px) -> Px,
    grip_edge: fn(Px, &PxRect) -> Px,
    is_complete: fn(&PxRect, &PxRect) -> bool,
}

fn near_left_edge(area: &PxRect, _width: Px, margin: Px) -> Px {
    area.left + margin
}

fn near_right_edge(area: &PxRect, width: Px, margin: Px) -> Px {
    area.right - margin - width
}

static SIDE_RULES: [SideRules; 2] = [
    // Left
    SideRules {
        direction: Direction::Rightward,
        rest_left: near_left_edge,
        target_left: near_right_edge,
        initial_gap: |offset| offset.max(Px::ZERO),
        grip_edge: |touch_x, rest| touch_x.max(rest.left),
        is_complete: |current, target| current.left >= target.left,
    },
    // Right
    SideRules {
        direction: Direction::Leftward,
        rest_left: near_right_edge,
        target_left: near_left_edge,
        initial_gap: |offset| offset.min(Px::ZERO),
        grip_edge: |touch_x, rest| touch_x.min(rest.right),
        is_complete: |current, target| current.right <= target.right,
    },
];

impl SliderSide {
    pub(crate) fn rules(self) -> &'static SideRules {
        &SIDE_RULES[self as usize]
    }

    /// Whether `a` lies strictly further along this side's travel direction
    /// than `b`.
    pub(crate) fn is_ahead(self, a: Px, b: Px) -> bool {
        match self.rules().direction {
            Direction::Rightward => a > b,
            Direction::Leftward => a < b,
        }
    }

    /// Left edge of a slider of `width` resting on this side of `area`.
    pub(crate) fn rest_left(self, area: &PxRect, width: Px, margin: Px) -> Px {
        (self.rules().rest_left)(area, width, margin)
    }

    /// Left edge of a slider of `width` that has completed from this side.
    pub(crate) fn target_left(self, area: &PxRect, width: Px, margin: Px) -> Px {
        (self.rules().target_left)(area, width, margin)
    }
}

/// One draggable handle.
#[derive(Debug, Clone)]
pub struct Slider {
    side: SliderSide,
    element: Element,
    target: PxRect,
    margins: SliderMargins,
    listener: Option<Callback>,
}

impl Slider {
    pub(crate) fn new(side: SliderSide, margins: SliderMargins) -> Self {
        Self {
            side,
            element: Element::default(),
            target: PxRect::ZERO,
            margins,
            listener: None,
        }
    }

    /// Which side this slider belongs to.
    pub fn side(&self) -> SliderSide {
        self.side
    }

    /// The underlying drawable holder.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Resting rectangle.
    pub fn rest(&self) -> PxRect {
        self.element.rest()
    }

    /// Rectangle the slider has to reach for the slide to complete.
    pub fn target(&self) -> PxRect {
        self.target
    }

    /// Current rectangle.
    pub fn bounds(&self) -> PxRect {
        self.element.bounds()
    }

    /// Current opacity.
    pub fn alpha(&self) -> u8 {
        self.element.alpha()
    }

    /// Margins in physical pixels.
    pub fn margins(&self) -> SliderMargins {
        self.margins
    }

    pub(crate) fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    pub(crate) fn set_margins(&mut self, margins: SliderMargins) {
        self.margins = margins;
    }

    pub(crate) fn set_listener(&mut self, listener: Option<Callback>) {
        self.listener = listener;
    }

    pub(crate) fn listener(&self) -> Option<&Callback> {
        self.listener.as_ref()
    }

    pub(crate) fn place(&mut self, rest: PxRect, target: PxRect) {
        self.element.place(rest);
        self.target = target;
    }

    /// Whether a press at `point` grabs this slider.
    pub(crate) fn check_slide_start(&self, point: PxPosition) -> bool {
        self.element.has_content() && self.element.rest().contains(point)
    }

    /// Whether the slider's current rectangle has reached its target. A
    /// slider pinned on a track too narrow for travel never completes.
    pub(crate) fn check_slide_complete(&self) -> bool {
        self.element.has_content()
            && self.has_travel()
            && (self.side.rules().is_complete)(&self.bounds(), &self.target)
    }

    /// Whether the target center lies strictly ahead of the rest center.
    fn has_travel(&self) -> bool {
        self.side.is_ahead(self.target.center_x(), self.rest().center_x())
    }

    /// Grip offset for a press at `touch_x`. The offset only ever points
    /// toward the target, so grabbing the slider behind its center never makes
    /// it jump backwards.
    pub(crate) fn initial_touch_gap(&self, touch_x: Px) -> Px {
        (self.side.rules().initial_gap)(touch_x.saturating_sub(self.rest().center_x()))
    }

    /// Moves the slider under a finger at `touch_x`, clamped between the rest
    /// and target centers. `touch_gap` is updated when the finger leaves the
    /// travel range so the grip is reacquired on the way back.
    pub(crate) fn drag(&mut self, touch_x: Px, touch_gap: &mut Px) {
        let side = self.side;
        let rest = self.rest();
        let rest_center = rest.center_x();
        // A track too narrow for travel pins the slider at rest.
        let target_center = if self.has_travel() {
            self.target.center_x()
        } else {
            rest_center
        };

        let mut center = touch_x.saturating_sub(*touch_gap);
        if side.is_ahead(rest_center, center) {
            center = rest_center;
            if side.is_ahead(*touch_gap, Px::ZERO) {
                *touch_gap = (side.rules().grip_edge)(touch_x, &rest).saturating_sub(center);
            }
        } else if side.is_ahead(center, target_center) {
            center = target_center;
            *touch_gap = Px::ZERO;
        }
        self.element.set_bounds(rest.with_center_x(center));
    }

    /// Rectangle the slider settles at once its slide has completed.
    pub(crate) fn completion_rect(&self, area: &ContentArea, complete_to_center: bool) -> PxRect {
        if complete_to_center {
            let rest = self.rest();
            rest.offset_to(area.rect().center_x() - rest.width() / 2, rest.top)
        } else {
            self.target
        }
    }
}

/// The track behind the sliders.
#[derive(Debug, Clone, Default)]
pub struct Background {
    element: Element,
}

impl Background {
    /// The underlying drawable holder.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Current rectangle.
    pub fn bounds(&self) -> PxRect {
        self.element.bounds()
    }

    pub(crate) fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    /// The track shrinks with the dragged slider: it spans from the left
    /// slider's current left edge to the right slider's current right edge,
    /// each extended by that slider's margin.
    pub(crate) fn drag_rect(&self, area: &ContentArea, left: &Slider, right: &Slider) -> PxRect {
        let rest = self.element.rest();
        let start = if left.element().has_content() {
            left.bounds().left - left.margins().horizontal
        } else {
            rest.left
        };
        let end = if right.element().has_content() {
            right.bounds().right + right.margins().horizontal
        } else {
            rest.right
        };
        PxRect::new(start, area.rect().top, end, area.rect().bottom)
    }

    /// Rectangle enclosing the completed slider, extended by its margins.
    pub(crate) fn completion_rect(
        &self,
        area: &ContentArea,
        slider: &Slider,
        complete_to_center: bool,
    ) -> PxRect {
        let settled = if complete_to_center {
            let rest = slider.rest();
            let area = area.rect();
            rest.offset_to(
                area.center_x() - rest.width() / 2,
                area.center_y() - rest.height() / 2,
            )
        } else {
            slider.target()
        };
        let margins = slider.margins();
        settled.inset(-margins.horizontal, -margins.vertical)
    }
}

/// Which caption a [`Caption`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionKind {
    /// Shown while nothing is dragged.
    Center,
    /// Shown while the left slider is dragged.
    Left,
    /// Shown while the right slider is dragged.
    Right,
}

impl CaptionKind {
    /// The state in which this caption may be shown.
    pub fn state(self) -> GestureState {
        match self {
            CaptionKind::Center => GestureState::Normal,
            CaptionKind::Left => GestureState::Dragging(SliderSide::Left),
            CaptionKind::Right => GestureState::Dragging(SliderSide::Right),
        }
    }
}

/// A text caption laid out between the two resting sliders.
#[derive(Debug, Clone)]
pub struct Caption {
    kind: CaptionKind,
    element: Element,
}

impl Caption {
    pub(crate) fn new(kind: CaptionKind) -> Self {
        Self {
            kind,
            element: Element::default(),
        }
    }

    /// Which caption this is.
    pub fn kind(&self) -> CaptionKind {
        self.kind
    }

    /// The underlying drawable holder.
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub(crate) fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    /// A caption shows only in its own state, only with text, and only while
    /// neither slider has slid over it.
    pub(crate) fn is_visible(&self, state: GestureState, left: &Slider, right: &Slider) -> bool {
        let bounds = self.element.bounds();
        state == self.kind.state()
            && self.element.has_content()
            && bounds.left >= left.bounds().right
            && bounds.right <= right.bounds().left
    }
}
