//! Path builders for the shapes the generators draw.
//!
//! Angles are degrees, clockwise from three o'clock (the y axis points down).
//! Builders return `None` for degenerate input instead of an empty path.

use std::f32::consts::FRAC_PI_2;
use tiny_skia::{Path, PathBuilder, Rect};

/// Control point distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Option<Path> {
    Rect::from_xywh(x, y, width, height).map(PathBuilder::from_rect)
}

/// Rectangle with circular corners; `radius` is clamped to half the shorter side.
pub fn round_rect(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Option<Path> {
    let rect = Rect::from_xywh(x, y, width, height)?;
    let r = radius.clamp(0.0, width.min(height) / 2.0);
    if r == 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }

    let (l, t, rt, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let c = r * (1.0 - KAPPA);
    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - c, t, rt, t + c, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - c, rt - c, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + c, b, l, b - c, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + c, l + c, t, l + r, t);
    pb.close();
    pb.finish()
}

pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32) -> Option<Path> {
    Rect::from_xywh(cx - rx, cy - ry, rx * 2.0, ry * 2.0).and_then(PathBuilder::from_oval)
}

/// Open arc of an axis-aligned ellipse, swept clockwise from `start_deg` to `end_deg`.
///
/// An end angle before the start wraps around once; sweeps are capped at a full turn.
pub fn arc(cx: f32, cy: f32, rx: f32, ry: f32, start_deg: f32, end_deg: f32) -> Option<Path> {
    if rx <= 0.0 || ry <= 0.0 {
        return None;
    }
    let mut end_deg = end_deg;
    while end_deg < start_deg {
        end_deg += 360.0;
    }
    let sweep = (end_deg - start_deg).min(360.0).to_radians();
    if sweep <= 0.0 {
        return None;
    }

    // One cubic per quarter turn or less
    let segments = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / segments as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let mut a = start_deg.to_radians();
    let mut pb = PathBuilder::new();
    pb.move_to(cx + rx * a.cos(), cy + ry * a.sin());
    for _ in 0..segments {
        let b = a + step;
        let (sa, ca) = a.sin_cos();
        let (sb, cb) = b.sin_cos();
        pb.cubic_to(
            cx + rx * (ca - k * sa),
            cy + ry * (sa + k * ca),
            cx + rx * (cb + k * sb),
            cy + ry * (sb - k * cb),
            cx + rx * cb,
            cy + ry * sb,
        );
        a = b;
    }
    pb.finish()
}

/// Straight segments through `points`, optionally closed back to the first one.
pub fn polyline(points: &[(f32, f32)], closed: bool) -> Option<Path> {
    let ((x0, y0), rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(*x0, *y0);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 0.01, "{a} != {b}");
    }

    #[test]
    fn test_quarter_arc_ends_on_the_axes() {
        let path = arc(50.0, 50.0, 20.0, 10.0, 0.0, 90.0).unwrap();
        let bounds = path.bounds();
        assert_close(bounds.right(), 70.0);
        assert_close(bounds.bottom(), 60.0);
        assert_close(bounds.left(), 50.0);
        assert_close(bounds.top(), 50.0);
    }

    #[test]
    fn test_wrapped_arc_covers_the_top() {
        // 180 -> 0 wraps to 180 -> 360: the upper half
        let bounds = arc(0.0, 0.0, 10.0, 10.0, 180.0, 0.0).unwrap().bounds();
        assert_close(bounds.top(), -10.0);
        assert_close(bounds.bottom(), 0.0);
    }

    #[test]
    fn test_degenerate_shapes() {
        assert!(arc(0.0, 0.0, 0.0, 5.0, 0.0, 90.0).is_none());
        assert!(arc(0.0, 0.0, 5.0, 5.0, 30.0, 30.0).is_none());
        assert!(polyline(&[(1.0, 1.0)], false).is_none());
        assert!(ellipse(5.0, 5.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_round_rect_radius_is_clamped() {
        let bounds = round_rect(0.0, 0.0, 10.0, 4.0, 50.0).unwrap().bounds();
        assert_close(bounds.width(), 10.0);
        assert_close(bounds.height(), 4.0);
    }
}
