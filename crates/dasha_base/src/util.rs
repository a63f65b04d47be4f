//! Shared utility functions for dasha calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // Tiny negative inputs round up to exactly 360.0.
    if r >= 360.0 { 0.0 } else { r }
}

/// Lowercase a name and drop separators, for lenient name lookups.
pub(crate) fn compact_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '.' | '\''))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-15);
        assert!((0.0..360.0).contains(&r), "{r}");
        assert!((normalize_360(-1e-13) - 360.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn compact_strips_separators() {
        assert_eq!(compact_name("Purva Phalguni"), "purvaphalguni");
        assert_eq!(compact_name("uttara-bhadrapada"), "uttarabhadrapada");
        assert_eq!(compact_name(" SUN "), "sun");
    }
}
