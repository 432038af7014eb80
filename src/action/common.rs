use egui::{Pos2, Rect};

/// How far a pixel center lies from the segment `start..end`.
///
/// Stroke coverage compares this against half the stroke width, which gives
/// segments round caps. A zero-length segment measures to `start`.
pub(crate) fn segment_distance(center: Pos2, start: Pos2, end: Pos2) -> f32 {
    let along = end - start;
    let len_sq = along.length_sq();
    if len_sq == 0.0 {
        return center.distance(start);
    }

    let t = ((center - start).dot(along) / len_sq).clamp(0.0, 1.0);
    center.distance(start + along * t)
}

/// Smallest rect holding every point, grown by `padding` for the stroke
pub(crate) fn padded_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }
    Rect::from_points(points).expand(padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_segment_distance() {
        let a = pos2(0.0, 0.0);
        let b = pos2(10.0, 0.0);
        assert!((segment_distance(pos2(5.0, 3.0), a, b) - 3.0).abs() < 1e-5);
        // Beyond the end the cap is round
        assert!((segment_distance(pos2(13.0, 4.0), a, b) - 5.0).abs() < 1e-5);
        assert!((segment_distance(pos2(3.0, 4.0), a, a) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_padded_bounds() {
        let rect = padded_bounds(&[pos2(10.0, 20.0), pos2(30.0, 5.0)], 2.0);
        assert_eq!(rect.min, pos2(8.0, 3.0));
        assert_eq!(rect.max, pos2(32.0, 22.0));
        assert_eq!(padded_bounds(&[], 1.0), Rect::NOTHING);
    }
}
