use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the top
    /// and bottom. Sizes never go below zero.
    #[inline]
    pub fn shrink(self, dx: f32, dy: f32) -> Self {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            (self.size.x - 2.0 * dx).max(0.0),
            (self.size.y - 2.0 * dy).max(0.0),
        )
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn normalized_flips_negative_extent() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
        assert_eq!(r(1.0, 2.0, 3.0, 4.0).normalized(), r(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn contains_is_half_open() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(5.0, 5.0)));
        assert!(!rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(-1.0, 5.0)));
    }

    #[test]
    fn intersect_overlapping_and_disjoint() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersect(r(5.0, 5.0, 10.0, 10.0)), Some(r(5.0, 5.0, 5.0, 5.0)));
        // Shared edge has zero area.
        assert!(a.intersect(r(10.0, 0.0, 10.0, 10.0)).is_none());
        assert!(a.intersect(r(20.0, 20.0, 5.0, 5.0)).is_none());
    }

    #[test]
    fn shrink_saturates_at_zero() {
        assert_eq!(r(0.0, 0.0, 20.0, 10.0).shrink(2.0, 3.0), r(2.0, 3.0, 16.0, 4.0));
        assert!(r(0.0, 0.0, 4.0, 4.0).shrink(3.0, 3.0).is_empty());
    }

    #[test]
    fn center_and_max() {
        let rect = r(2.0, 4.0, 6.0, 8.0);
        assert_eq!(rect.center(), Vec2::new(5.0, 8.0));
        assert_eq!(rect.max(), Vec2::new(8.0, 12.0));
    }
}
