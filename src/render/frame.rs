use crate::core::Viewport;
use crate::error::{SelectorError, SelectorResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one selector draw pass.
///
/// Backends paint `background` first, then lines, underlay texts, rects and
/// texts in that order, so the ruler stays under the interval body.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub lines: Vec<LinePrimitive>,
    /// Texts painted before any rect.
    pub underlay_texts: Vec<TextPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            lines: Vec::new(),
            underlay_texts: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> SelectorResult<()> {
        if !self.viewport.is_valid() {
            return Err(SelectorError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.background.validate()?;
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in self.underlay_texts.iter().chain(&self.texts) {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.underlay_texts.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
    }

    /// Number of texts across both text layers.
    #[must_use]
    pub fn text_count(&self) -> usize {
        self.underlay_texts.len() + self.texts.len()
    }
}
