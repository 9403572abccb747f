//! Integer screen rectangles.

use glam::IVec2;

/// Axis-aligned screen rectangle; `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScreenRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenRect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle whose bottom-left corner sits at `pos`.
    pub fn from_bottom_left(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y - size.y, size.x, size.y)
    }

    /// Rectangle whose bottom edge is centered on `pos`.
    pub fn from_mid_bottom(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x - size.x / 2, pos.y - size.y, size.x, size.y)
    }

    /// Top-left corner.
    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// One past the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// One past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Size as a vector.
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    /// Returns `true` if `p` lies inside.
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Moves the rectangle inside `bounds`. A rectangle larger than `bounds`
    /// on an axis is centered on that axis instead.
    pub fn clamped_within(&self, bounds: &ScreenRect) -> ScreenRect {
        let clamp_axis = |pos: i32, len: i32, lo: i32, blen: i32| {
            if len >= blen {
                lo + blen / 2 - len / 2
            } else {
                pos.clamp(lo, lo + blen - len)
            }
        };
        ScreenRect::new(
            clamp_axis(self.x, self.w, bounds.x, bounds.w),
            clamp_axis(self.y, self.h, bounds.y, bounds.h),
            self.w,
            self.h,
        )
    }
}
