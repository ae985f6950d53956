//! Client requested hints about window geometry.
use crate::pure::geometry::Rect;
use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// The fields of a [SizeHints] that the client has actually set.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SizeHintsFlags: u32 {
        /// Program-specified minimum size
        const P_MIN_SIZE   = 0b00001;
        /// Program-specified maximum size
        const P_MAX_SIZE   = 0b00010;
        /// Program-specified resize increments
        const P_RESIZE_INC = 0b00100;
        /// Program-specified min and max aspect ratios
        const P_ASPECT     = 0b01000;
        /// Program-specified base size
        const P_BASE_SIZE  = 0b10000;
    }
}

/// Size constraints requested by a client window: minimum and maximum
/// extents, resize increments and aspect ratio bounds.
///
/// The window manager honours these when positioning a client so that, for
/// example, a terminal is always sized to a whole number of character cells.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeHints {
    pub(crate) flags: SizeHintsFlags,
    pub(crate) base: Option<(u32, u32)>,
    pub(crate) min: Option<(u32, u32)>,
    pub(crate) max: Option<(u32, u32)>,
    pub(crate) inc: Option<(u32, u32)>,
    /// (min, max) aspect ratios as (numerator, denominator) pairs
    pub(crate) aspect: Option<((u32, u32), (u32, u32))>,
}

impl SizeHints {
    /// Create a new set of size hints from component parts.
    ///
    /// Fields not covered by `flags` are ignored when the hints are applied.
    pub fn new(
        flags: SizeHintsFlags,
        base: Option<(u32, u32)>,
        min: Option<(u32, u32)>,
        max: Option<(u32, u32)>,
        inc: Option<(u32, u32)>,
        aspect: Option<((u32, u32), (u32, u32))>,
    ) -> Self {
        Self {
            flags,
            base,
            min,
            max,
            inc,
            aspect,
        }
    }

    /// Adjust a requested content rectangle to the nearest size satisfying
    /// these hints, keeping its position.
    ///
    /// The adjustments follow the conventional order: aspect ratio bounds
    /// first, then rounding down to the resize increment grid (relative to
    /// the base size) and finally clamping between the minimum and maximum
    /// extents. The rectangle passed in and returned is the client content
    /// area, excluding any window border.
    pub fn apply_to(&self, r: Rect) -> Rect {
        let Rect { x, y, mut w, mut h } = r;

        if self.flags.contains(SizeHintsFlags::P_ASPECT) {
            if let Some(((min_n, min_d), (max_n, max_d))) = self.aspect {
                // width / height must lie between min and max ratios
                if min_d > 0 && w as u64 * (min_d as u64) < h as u64 * min_n as u64 {
                    h = (w as u64 * min_d as u64 / min_n.max(1) as u64) as u32;
                }
                if max_n > 0 && w as u64 * max_d as u64 > h as u64 * max_n as u64 {
                    w = (h as u64 * max_n as u64 / max_d.max(1) as u64) as u32;
                }
            }
        }

        let (base_w, base_h) = self.base.unwrap_or((0, 0));

        if self.flags.contains(SizeHintsFlags::P_RESIZE_INC) {
            if let Some((inc_w, inc_h)) = self.inc {
                if inc_w > 0 && w > base_w {
                    w -= (w - base_w) % inc_w;
                }
                if inc_h > 0 && h > base_h {
                    h -= (h - base_h) % inc_h;
                }
            }
        }

        if self.flags.contains(SizeHintsFlags::P_MIN_SIZE) {
            if let Some((min_w, min_h)) = self.min {
                w = w.max(min_w);
                h = h.max(min_h);
            }
        }

        if self.flags.contains(SizeHintsFlags::P_MAX_SIZE) {
            if let Some((max_w, max_h)) = self.max {
                w = w.min(max_w);
                h = h.min(max_h);
            }
        }

        Rect { x, y, w, h }
    }
}
