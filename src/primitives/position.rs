//! Position - points, offsets and boxes in CSS pixels
//!
//! A `Point` is a location in some coordinate space (document or viewport,
//! chosen by the caller). An `Offset` is a translation applied on top of an
//! element's laid-out position.

/// Location in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `other` to `self`
    pub fn delta_from(&self, other: &Self) -> Offset {
        Offset::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        self.delta_from(other).length()
    }

    pub fn as_offset(&self) -> Offset {
        Offset::new(self.x, self.y)
    }
}

/// Translation in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn length(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.dx * factor, self.dy * factor)
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// Linear blend toward `to`; `t` is not clamped
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        Self::new(
            self.dx + (to.dx - self.dx) * t,
            self.dy + (to.dy - self.dy) * t,
        )
    }

    /// CSS transform function for this offset
    pub fn to_css(&self) -> String {
        format!("translate({}px, {}px)", self.dx, self.dy)
    }

    /// Transform value with `base` (an existing inline transform) kept in front
    pub fn to_css_with_base(&self, base: &str) -> String {
        let base = base.trim();
        if base.is_empty() || base == "none" {
            self.to_css()
        } else {
            format!("{base} {}", self.to_css())
        }
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding box as reported by the environment, viewport-relative
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Center measured from the box origin using the element's layout size.
    ///
    /// The layout size ignores transforms while the box origin does not, so a
    /// translated element reports a center that moves with its offset.
    pub fn center_with(&self, layout: Size) -> Point {
        Point::new(self.left + layout.width / 2.0, self.top + layout.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let a = Point::new(50.0, 50.0);
        let b = Point::new(90.0, 80.0);
        assert_eq!(a.distance(&b), 50.0);
    }

    #[test]
    fn delta_points_from_other_to_self() {
        let pointer = Point::new(90.0, 50.0);
        let center = Point::new(50.0, 50.0);
        assert_eq!(pointer.delta_from(&center), Offset::new(40.0, 0.0));
    }

    #[test]
    fn offset_css() {
        assert_eq!(Offset::new(20.0, -4.5).to_css(), "translate(20px, -4.5px)");
        assert_eq!(Offset::ZERO.to_css(), "translate(0px, 0px)");
    }

    #[test]
    fn offset_css_keeps_base_transform() {
        let o = Offset::new(10.0, 20.0);
        assert_eq!(
            o.to_css_with_base("translate(-50%,-50%)"),
            "translate(-50%,-50%) translate(10px, 20px)"
        );
        assert_eq!(o.to_css_with_base("none"), "translate(10px, 20px)");
        assert_eq!(o.to_css_with_base("  "), "translate(10px, 20px)");
    }

    #[test]
    fn offset_lerp() {
        let a = Offset::ZERO;
        let b = Offset::new(10.0, -10.0);
        assert_eq!(a.lerp(&b, 0.5), Offset::new(5.0, -5.0));
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn rect_center_uses_layout_size() {
        let r = Rect::new(30.0, 40.0, 44.0, 44.0);
        let c = r.center_with(Size::new(40.0, 20.0));
        assert_eq!(c, Point::new(50.0, 50.0));
    }
}
