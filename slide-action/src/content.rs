//! Paintable content held by the track elements.
//!
//! The widget never rasterizes anything itself. Each element carries a
//! [`Content`] value describing *what* to paint; the renderer decides how,
//! using the rectangle and alpha reported in the draw list.

use crate::{Px, PxSize};

/// A straight RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a color from its components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// An image-like drawable (bitmap, vector, nine-patch...).
///
/// `source` is an opaque key the renderer resolves to an actual image. The
/// intrinsic size is optional; when it is unknown the slider fills the track
/// height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageContent {
    source: String,
    intrinsic_size: Option<PxSize>,
}

impl ImageContent {
    /// Creates image content without an intrinsic size.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            intrinsic_size: None,
        }
    }

    /// Sets the intrinsic width and height of the image.
    pub fn with_intrinsic_size(mut self, width: Px, height: Px) -> Self {
        self.intrinsic_size = Some(PxSize::new(width, height));
        self
    }

    /// The renderer-specific key for this image.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Intrinsic size, if known.
    pub fn intrinsic_size(&self) -> Option<PxSize> {
        self.intrinsic_size
    }
}

/// A caption drawn centered inside its bounds, scaled to the bounds' width.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    text: String,
    text_color: Color,
    shadow_color: Color,
}

impl TextLabel {
    /// Creates a white label with a black shadow.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_color: Color::WHITE,
            shadow_color: Color::BLACK,
        }
    }

    /// Sets the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the shadow color.
    pub fn with_shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = color;
        self
    }

    /// The caption text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Shadow color.
    pub fn shadow_color(&self) -> Color {
        self.shadow_color
    }
}

/// Content of a single track element.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Image-like drawable.
    Image(ImageContent),
    /// Text caption.
    Text(TextLabel),
}

impl Content {
    /// Intrinsic size of the content. Text is measured by the renderer, so
    /// labels report `None`.
    pub fn intrinsic_size(&self) -> Option<PxSize> {
        match self {
            Content::Image(image) => image.intrinsic_size(),
            Content::Text(_) => None,
        }
    }

    /// Returns `true` if there is anything to paint.
    ///
    /// Labels with empty text paint nothing.
    pub fn is_paintable(&self) -> bool {
        match self {
            Content::Image(_) => true,
            Content::Text(label) => !label.text().is_empty(),
        }
    }
}

impl From<ImageContent> for Content {
    fn from(image: ImageContent) -> Self {
        Content::Image(image)
    }
}

impl From<TextLabel> for Content {
    fn from(label: TextLabel) -> Self {
        Content::Text(label)
    }
}
