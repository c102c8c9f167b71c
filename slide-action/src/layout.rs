//! Geometry layout for the slide track.
//!
//! [`compute_layout`] is a pure function of the widget size and the
//! configuration: calling it twice with the same input yields the same
//! [`TrackLayout`].

use crate::{Px, PxRect, PxSize, SliderSide, content::Content};

/// Absolute padding insets around the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Left inset
    pub left: Px,
    /// Top inset
    pub top: Px,
    /// Right inset
    pub right: Px,
    /// Bottom inset
    pub bottom: Px,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self::all(Px::ZERO);

    /// Creates padding from four insets.
    pub const fn new(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same inset on every side.
    pub const fn all(inset: Px) -> Self {
        Self::new(inset, inset, inset, inset)
    }
}

/// The widget's interior after padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentArea(PxRect);

impl ContentArea {
    /// Wraps a rectangle.
    pub const fn new(rect: PxRect) -> Self {
        Self(rect)
    }

    /// The content rectangle.
    pub fn rect(&self) -> PxRect {
        self.0
    }
}

/// Margins kept around a slider, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderMargins {
    /// Gap between the slider and the left/right content edges.
    pub horizontal: Px,
    /// Gap between the slider and the top/bottom content edges.
    pub vertical: Px,
}

/// How a slider's size was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingPolicy {
    /// No content; the slider is empty and inert.
    Empty,
    /// The content's intrinsic size fits and is used as-is.
    Intrinsic,
    /// The slider fills the content height, keeping the content's aspect
    /// ratio (square when unknown).
    FillHeight,
}

/// Placement of one slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderPlacement {
    /// Resting rectangle.
    pub rest: PxRect,
    /// Rectangle that must be reached to complete.
    pub target: PxRect,
    /// How the size was chosen.
    pub policy: SizingPolicy,
}

/// Everything [`compute_layout`] needs.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    /// Outer size of the widget.
    pub size: PxSize,
    /// Absolute padding.
    pub padding: Padding,
    /// Left padding as a fraction of the width; overrides `padding.left`.
    pub padding_left_factor: Option<f32>,
    /// Position of the content's right edge as a fraction of the width;
    /// overrides `padding.right`.
    pub padding_right_factor: Option<f32>,
    /// Content of the left slider.
    pub left_slider: Option<&'a Content>,
    /// Content of the right slider.
    pub right_slider: Option<&'a Content>,
    /// Margins around each slider.
    pub slider_margins: SliderMargins,
    /// Horizontal gap between captions and the resting sliders.
    pub caption_margin: Px,
}

/// Resting geometry of every element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackLayout {
    /// Interior of the widget.
    pub area: ContentArea,
    /// Background rectangle at rest.
    pub background: PxRect,
    /// Left slider placement.
    pub left: SliderPlacement,
    /// Right slider placement.
    pub right: SliderPlacement,
    /// Rectangle shared by the three captions.
    pub captions: PxRect,
}

impl TrackLayout {
    /// Placement of the slider on `side`.
    pub fn slider(&self, side: SliderSide) -> &SliderPlacement {
        match side {
            SliderSide::Left => &self.left,
            SliderSide::Right => &self.right,
        }
    }
}

/// Computes the content area from the widget size and padding.
///
/// Fractional padding overrides the absolute left/right insets. Both factors
/// give an edge position as a fraction of the width: `0.1` and `0.9` keep the
/// content between 10% and 90% of the widget. The content
/// width never goes negative; the content height collapses to zero when the
/// vertical padding exceeds the height.
pub fn content_area(
    size: PxSize,
    padding: Padding,
    padding_left_factor: Option<f32>,
    padding_right_factor: Option<f32>,
) -> ContentArea {
    let width = size.width;
    let padding_left = padding_left_factor.map_or(padding.left, |factor| width.mul_f32(factor));
    let padding_right = padding_right_factor
        .map_or(padding.right, |factor| width - width.mul_f32(factor));
    let content_width = (width - padding_left - padding_right).max(Px::ZERO);
    let top = padding.top;
    let bottom = (size.height - padding.bottom).max(top);
    ContentArea(PxRect::new(
        padding_left,
        top,
        padding_left + content_width,
        bottom,
    ))
}

/// Chooses a slider's size.
///
/// The intrinsic size is used when it is known and fits the content height
/// with one vertical margin to spare. Otherwise the slider fills the content
/// height minus both vertical margins, and its width follows the content's
/// aspect ratio.
pub fn slider_size(
    area: &ContentArea,
    content: Option<&Content>,
    margins: SliderMargins,
) -> (PxSize, SizingPolicy) {
    let Some(content) = content.filter(|content| content.is_paintable()) else {
        return (PxSize::ZERO, SizingPolicy::Empty);
    };
    let available = area.rect().height();
    match content.intrinsic_size() {
        Some(intrinsic)
            if intrinsic.height > Px::ZERO
                && intrinsic.width >= Px::ZERO
                && intrinsic.height + margins.vertical <= available =>
        {
            (intrinsic, SizingPolicy::Intrinsic)
        }
        intrinsic => {
            let aspect_ratio = intrinsic
                .filter(|size| size.width > Px::ZERO && size.height > Px::ZERO)
                .map_or(1.0, |size| size.width.to_f32() / size.height.to_f32());
            let height = (available - margins.vertical * 2).max(Px::ZERO);
            let width = Px::round_from_f32(height.to_f32() * aspect_ratio);
            (PxSize::new(width, height), SizingPolicy::FillHeight)
        }
    }
}

fn place_slider(
    side: SliderSide,
    area: &ContentArea,
    content: Option<&Content>,
    margins: SliderMargins,
) -> SliderPlacement {
    let (size, policy) = slider_size(area, content, margins);
    let rect = area.rect();
    let top = rect.center_y() - size.height / 2;
    let at = |left: Px| PxRect::new(left, top, left + size.width, top + size.height);
    SliderPlacement {
        rest: at(side.rest_left(&rect, size.width, margins.horizontal)),
        target: at(side.target_left(&rect, size.width, margins.horizontal)),
        policy,
    }
}

/// Computes the resting geometry of every element.
pub fn compute_layout(input: &LayoutInput<'_>) -> TrackLayout {
    let area = content_area(
        input.size,
        input.padding,
        input.padding_left_factor,
        input.padding_right_factor,
    );
    let left = place_slider(
        SliderSide::Left,
        &area,
        input.left_slider,
        input.slider_margins,
    );
    let right = place_slider(
        SliderSide::Right,
        &area,
        input.right_slider,
        input.slider_margins,
    );
    let rect = area.rect();
    let captions = PxRect::new(
        left.rest.right + input.caption_margin,
        rect.top,
        right.rest.left - input.caption_margin,
        rect.bottom,
    );
    TrackLayout {
        area,
        background: rect,
        left,
        right,
        captions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ImageContent, TextLabel};

    fn rect(l: i32, t: i32, r: i32, b: i32) -> PxRect {
        PxRect::new(Px(l), Px(t), Px(r), Px(b))
    }

    const MARGINS: SliderMargins = SliderMargins {
        horizontal: Px(4),
        vertical: Px(4),
    };

    fn knob(width: i32, height: i32) -> Content {
        ImageContent::new("knob")
            .with_intrinsic_size(Px(width), Px(height))
            .into()
    }

    fn input<'a>(left: Option<&'a Content>, right: Option<&'a Content>) -> LayoutInput<'a> {
        LayoutInput {
            size: PxSize::new(Px(300), Px(100)),
            padding: Padding::ZERO,
            padding_left_factor: None,
            padding_right_factor: None,
            left_slider: left,
            right_slider: right,
            slider_margins: MARGINS,
            caption_margin: Px(16),
        }
    }

    #[test]
    fn test_content_area_absolute_padding() {
        let area = content_area(
            PxSize::new(Px(300), Px(100)),
            Padding::new(Px(10), Px(5), Px(20), Px(15)),
            None,
            None,
        );
        assert_eq!(area.rect(), rect(10, 5, 280, 85));
    }

    #[test]
    fn test_content_area_fractional_padding_overrides() {
        let area = content_area(
            PxSize::new(Px(400), Px(100)),
            Padding::all(Px(10)),
            Some(0.25),
            Some(0.9),
        );
        assert_eq!(area.rect(), rect(100, 10, 360, 90));
    }

    #[test]
    fn test_right_factor_is_an_edge_position() {
        let size = PxSize::new(Px(300), Px(100));
        let area = content_area(size, Padding::ZERO, Some(0.1), Some(0.9));
        assert_eq!(area.rect(), rect(30, 0, 270, 100));

        let area = content_area(size, Padding::all(Px(8)), None, Some(0.9));
        assert_eq!(area.rect(), rect(8, 8, 270, 92));
    }

    #[test]
    fn test_content_area_never_negative() {
        let area = content_area(
            PxSize::new(Px(30), Px(10)),
            Padding::all(Px(20)),
            None,
            None,
        );
        assert_eq!(area.rect().width(), Px(0));
        assert_eq!(area.rect().height(), Px(0));
    }

    #[test]
    fn test_intrinsic_size_is_kept_when_it_fits() {
        let area = ContentArea::new(rect(0, 0, 300, 100));
        let content = knob(50, 50);
        let (size, policy) = slider_size(&area, Some(&content), MARGINS);
        assert_eq!(size, PxSize::new(Px(50), Px(50)));
        assert_eq!(policy, SizingPolicy::Intrinsic);
    }

    #[test]
    fn test_tall_content_fills_height_keeping_aspect() {
        let area = ContentArea::new(rect(0, 0, 300, 100));
        let content = knob(100, 200);
        let (size, policy) = slider_size(&area, Some(&content), MARGINS);
        assert_eq!(size, PxSize::new(Px(46), Px(92)));
        assert_eq!(policy, SizingPolicy::FillHeight);
    }

    #[test]
    fn test_unknown_height_falls_back_to_square_fill() {
        let area = ContentArea::new(rect(0, 0, 300, 100));
        let unknown: Content = ImageContent::new("knob").into();
        let (size, policy) = slider_size(&area, Some(&unknown), MARGINS);
        assert_eq!(size, PxSize::new(Px(92), Px(92)));
        assert_eq!(policy, SizingPolicy::FillHeight);

        let zero_height = knob(40, 0);
        let (size, _) = slider_size(&area, Some(&zero_height), MARGINS);
        assert_eq!(size, PxSize::new(Px(92), Px(92)));
    }

    #[test]
    fn test_absent_content_is_empty() {
        let area = ContentArea::new(rect(0, 0, 300, 100));
        assert_eq!(
            slider_size(&area, None, MARGINS),
            (PxSize::ZERO, SizingPolicy::Empty)
        );
        let blank: Content = TextLabel::new("").into();
        assert_eq!(
            slider_size(&area, Some(&blank), MARGINS).1,
            SizingPolicy::Empty
        );
    }

    #[test]
    fn test_full_layout() {
        let left = knob(50, 50);
        let right = knob(50, 50);
        let layout = compute_layout(&input(Some(&left), Some(&right)));

        assert_eq!(layout.background, rect(0, 0, 300, 100));
        assert_eq!(layout.left.rest, rect(4, 25, 54, 75));
        assert_eq!(layout.left.target, rect(246, 25, 296, 75));
        assert_eq!(layout.right.rest, rect(246, 25, 296, 75));
        assert_eq!(layout.right.target, rect(4, 25, 54, 75));
        assert_eq!(layout.captions, rect(70, 0, 230, 100));
        assert_eq!(layout.slider(SliderSide::Right), &layout.right);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let left = knob(50, 50);
        let first = compute_layout(&input(Some(&left), None));
        let second = compute_layout(&input(Some(&left), None));
        assert_eq!(first, second);
        assert_eq!(first.right.policy, SizingPolicy::Empty);
        assert_eq!(first.right.rest, rect(296, 50, 296, 50));
    }
}
