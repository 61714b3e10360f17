//! Small shared numeric helpers.

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_positive() {
        assert!((normalize_360(370.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_exact_360() {
        assert!(normalize_360(360.0).abs() < 1e-12);
    }
}
