//! Draw list generation.
//!
//! The widget does not paint. [`SlideAction::draw_commands`] returns what a
//! renderer should paint this frame, back to front.
//!
//! [`SlideAction::draw_commands`]: crate::SlideAction::draw_commands

use smallvec::SmallVec;

use crate::{
    GestureState, PxRect, SliderSide,
    content::Content,
    element::{Background, Caption, CaptionKind, Slider},
};

/// Which part of the widget a [`DrawCommand`] paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawLayer {
    /// The track.
    Background,
    /// One of the captions.
    Caption(CaptionKind),
    /// One of the sliders.
    Slider(SliderSide),
}

/// One paint operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand<'a> {
    /// What is being painted.
    pub layer: DrawLayer,
    /// The content to paint.
    pub content: &'a Content,
    /// Where to paint it.
    pub bounds: PxRect,
    /// Opacity, `0` transparent to `255` opaque.
    pub alpha: u8,
    /// Whether the element is held under the finger.
    pub pressed: bool,
}

/// A frame's draw commands in paint order.
pub type DrawList<'a> = SmallVec<[DrawCommand<'a>; 6]>;

pub(crate) struct Scene<'a> {
    pub state: GestureState,
    pub background: &'a Background,
    pub captions: &'a [Caption; 3],
    pub left: &'a Slider,
    pub right: &'a Slider,
}

impl<'a> Scene<'a> {
    /// Background, then the captions, then the sliders. Elements without
    /// content and hidden captions are skipped.
    pub(crate) fn draw_list(&self) -> DrawList<'a> {
        let mut list = DrawList::new();
        if let Some(content) = paintable(self.background.element().content()) {
            list.push(DrawCommand {
                layer: DrawLayer::Background,
                content,
                bounds: self.background.bounds(),
                alpha: self.background.element().alpha(),
                pressed: false,
            });
        }
        for caption in self.captions {
            if !caption.is_visible(self.state, self.left, self.right) {
                continue;
            }
            if let Some(content) = caption.element().content() {
                list.push(DrawCommand {
                    layer: DrawLayer::Caption(caption.kind()),
                    content,
                    bounds: caption.element().bounds(),
                    alpha: caption.element().alpha(),
                    pressed: false,
                });
            }
        }
        for slider in [self.left, self.right] {
            if let Some(content) = paintable(slider.element().content()) {
                list.push(DrawCommand {
                    layer: DrawLayer::Slider(slider.side()),
                    content,
                    bounds: slider.bounds(),
                    alpha: slider.alpha(),
                    pressed: self.state.dragging() == Some(slider.side()),
                });
            }
        }
        list
    }
}

fn paintable(content: Option<&Content>) -> Option<&Content> {
    content.filter(|content| content.is_paintable())
}
