/// Side of the square returned by `measure` when neither axis is bounded.
pub const DEFAULT_SIZE: f64 = 1000.0;

/// `hand_overhang = center_radius / HAND_OVERHANG_DIVISOR`
pub const HAND_OVERHANG_DIVISOR: f64 = 6.0;

/// A point in the dial frame: origin at the dial center, `y` grows downwards
/// and positive angles turn clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotates around the origin by `degrees`, clockwise on screen.
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// How the host constrains one axis during measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutConstraint {
    /// The host sets no bound ("wrap content").
    Unconstrained,
    /// The requested size is an upper bound or an exact size; both are
    /// treated the same.
    #[default]
    Bounded,
}

/// Values derived from the surface size. Stale until the next resize.
///
/// Neither field is clamped: a surface smaller than twice the padding yields
/// a negative radius, which still lays out (as inverted or empty geometry).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DialGeometry {
    pub center_radius: f64,
    pub hand_overhang: f64,
}

impl DialGeometry {
    /// Half the shorter side is truncated to whole layout units.
    pub fn compute(size: Size, padding: f64) -> Self {
        let center_radius = (size.min_side() / 2.0).trunc() - padding;
        Self {
            center_radius,
            hand_overhang: center_radius / HAND_OVERHANG_DIVISOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn test_rotation_is_clockwise_on_screen() {
        let up = Point::new(0.0, -10.0);
        assert!(close(up.rotated(90.0), Point::new(10.0, 0.0)));
        assert!(close(up.rotated(180.0), Point::new(0.0, 10.0)));
        assert!(close(up.rotated(270.0), Point::new(-10.0, 0.0)));
        assert!(close(up.rotated(360.0), up));
    }

    #[test]
    fn test_geometry_from_size() {
        let g = DialGeometry::compute(Size::new(500.0, 800.0), 20.0);
        assert_eq!(g.center_radius, 230.0);
        assert!((g.hand_overhang - 38.333_333).abs() < 1e-5);
    }

    #[test]
    fn test_geometry_allows_negative_radius() {
        let g = DialGeometry::compute(Size::new(10.0, 30.0), 20.0);
        assert_eq!(g.center_radius, -15.0);
        assert_eq!(g.hand_overhang, -2.5);
    }

    #[test]
    fn test_odd_side_truncates_half() {
        let g = DialGeometry::compute(Size::new(501.0, 640.0), 20.0);
        assert_eq!(g.center_radius, 230.0);

        let g = DialGeometry::compute(Size::square(7.0), 0.0);
        assert_eq!(g.center_radius, 3.0);
    }
}
