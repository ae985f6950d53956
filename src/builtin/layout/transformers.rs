//! Built-in layout transformers.
use crate::{
    core::layout::{Layout, LayoutTransformer},
    pure::geometry::Rect,
    WinId,
};

/// Flip the orientation of the wrapped [Layout] by transposing the screen
/// rectangle it is given and transposing every position it produces back
/// again.
///
/// A vertical split layout becomes the equivalent horizontal split and vice
/// versa. Wrapping a layout in [Mirror] twice produces positions identical
/// to the unwrapped layout.
#[derive(Debug, Clone)]
pub struct Mirror {
    layout: Box<dyn Layout>,
}

impl Mirror {
    /// Wrap the given [Layout] to flip its orientation.
    pub fn wrap(layout: Box<dyn Layout>) -> Box<dyn Layout> {
        Box::new(Self { layout })
    }
}

impl LayoutTransformer for Mirror {
    fn transformed_name(&self) -> String {
        format!("Mirror<{}>", self.layout.name())
    }

    fn inner_mut(&mut self) -> &mut Box<dyn Layout> {
        &mut self.layout
    }

    fn clone_transformer(&self) -> Box<dyn Layout> {
        Box::new(self.clone())
    }

    fn transform_initial(&self, r: Rect) -> Rect {
        r.transposed()
    }

    fn transform_positions(&mut self, _: Rect, positions: Vec<(WinId, Rect)>) -> Vec<(WinId, Rect)> {
        positions
            .into_iter()
            .map(|(id, r)| (id, r.transposed()))
            .collect()
    }
}

fn shrink(r: Rect, px: u32) -> Rect {
    if r.w <= 2 * px || r.h <= 2 * px {
        return r;
    }

    Rect {
        x: r.x + px,
        y: r.y + px,
        w: r.w - 2 * px,
        h: r.h - 2 * px,
    }
}

/// Simple gaps around the window placement of the enclosed [Layout].
///
/// `outer_px` controls the width of the gap around the edge of the screen
/// and `inner_px` controls the gap around each individual window. Set both
/// equal to one another to have a consistent gap size in all places.
#[derive(Debug, Clone)]
pub struct Gaps {
    /// The wrapped layout
    pub layout: Box<dyn Layout>,
    /// Gap around the edge of the screen in pixels
    pub outer_px: u32,
    /// Gap around each window in pixels
    pub inner_px: u32,
}

impl Gaps {
    /// Wrap the given [Layout] with gaps of the requested sizes.
    pub fn wrap(layout: Box<dyn Layout>, outer_px: u32, inner_px: u32) -> Box<dyn Layout> {
        Box::new(Self {
            layout,
            outer_px,
            inner_px,
        })
    }
}

impl LayoutTransformer for Gaps {
    fn transformed_name(&self) -> String {
        self.layout.name()
    }

    fn inner_mut(&mut self) -> &mut Box<dyn Layout> {
        &mut self.layout
    }

    fn clone_transformer(&self) -> Box<dyn Layout> {
        Box::new(self.clone())
    }

    fn transform_initial(&self, r: Rect) -> Rect {
        shrink(r, self.outer_px)
    }

    fn transform_positions(&mut self, _: Rect, positions: Vec<(WinId, Rect)>) -> Vec<(WinId, Rect)> {
        positions
            .into_iter()
            .map(|(id, r)| (id, shrink(r, self.inner_px)))
            .collect()
    }
}

/// Reserve `px` pixels at the top of the screen.
///
/// Typically used for providing space for a status bar.
#[derive(Debug, Clone)]
pub struct ReserveTop {
    /// The wrapped layout
    pub layout: Box<dyn Layout>,
    /// Number of pixels to reserve at the top of the screen
    pub px: u32,
}

impl ReserveTop {
    /// Wrap the given [Layout] and reserve `px` pixels at the top of the
    /// screen.
    pub fn wrap(layout: Box<dyn Layout>, px: u32) -> Box<dyn Layout> {
        Box::new(Self { layout, px })
    }
}

impl LayoutTransformer for ReserveTop {
    fn transformed_name(&self) -> String {
        self.layout.name()
    }

    fn inner_mut(&mut self) -> &mut Box<dyn Layout> {
        &mut self.layout
    }

    fn clone_transformer(&self) -> Box<dyn Layout> {
        Box::new(self.clone())
    }

    fn transform_initial(&self, mut r: Rect) -> Rect {
        if r.h <= self.px {
            return r;
        }

        r.y += self.px;
        r.h -= self.px;

        r
    }
}
