use cgmath::{InnerSpace, Vector3};

/// Euclidean distance between two RGB colors, scaled by the diagonal of the
/// unit color cube so the result always lands in `0.0..=1.0`.
pub fn normalized_distance(a: Vector3<f32>, b: Vector3<f32>) -> f32 {
    (a - b).magnitude() / 3.0_f32.sqrt()
}

/// Similarity predicate used by the elimination scan.
pub fn similar(a: Vector3<f32>, b: Vector3<f32>, tolerance: f32) -> bool {
    normalized_distance(a, b) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_equal_colors_is_zero() {
        let c = Vector3::new(0.3, 0.6, 0.9);

        assert_eq!(normalized_distance(c, c), 0.0);
    }

    #[test]
    fn distance_spans_the_unit_interval() {
        let black = Vector3::new(0.0, 0.0, 0.0);
        let white = Vector3::new(1.0, 1.0, 1.0);

        assert!((normalized_distance(black, white) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vector3::new(0.1, 0.2, 0.3);
        let b = Vector3::new(0.9, 0.5, 0.0);

        assert_eq!(normalized_distance(a, b), normalized_distance(b, a));
    }

    #[test]
    fn similar_accepts_the_boundary() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        // A single channel offset of d maps to a normalized distance of
        // d / sqrt(3), so 0.2 * sqrt(3) sits exactly on the threshold.
        let b = Vector3::new(0.2 * 3.0_f32.sqrt(), 0.0, 0.0);

        assert!(similar(a, b, 0.2 + 1e-6));
        assert!(!similar(a, b, 0.2 - 1e-3));
    }
}
