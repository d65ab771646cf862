//! Easing curves used by the icon transition. Input progress is clamped to
//! `[0, 1]` and every curve maps 0 to 0 and 1 to 1.

use std::f64::consts::PI;

pub type Ease = fn(f64) -> f64;

fn clamp(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Cubic ease-in-out.
pub fn power2_in_out(t: f64) -> f64 {
    let t = clamp(t);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Quintic ease-in.
pub fn power4_in(t: f64) -> f64 {
    clamp(t).powi(5)
}

/// Quintic ease-out.
pub fn power4_out(t: f64) -> f64 {
    1.0 - (1.0 - clamp(t)).powi(5)
}

/// Elastic ease-out with the given amplitude and period.
pub fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    let t = clamp(t);
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let p1 = amplitude.max(1.0);
    let p3 = period / amplitude.min(1.0);
    let p2 = (p3 / (2.0 * PI)) * (1.0 / p1).asin();
    p1 * (2f64).powf(-10.0 * t) * ((t - p2) * (2.0 * PI / p3)).sin() + 1.0
}

/// The soft settle used when the new icon scales back in.
pub fn settle(t: f64) -> f64 {
    elastic_out(t, 1.0, 0.9)
}

/// Interpolates `from -> to` at eased progress `e`.
pub fn lerp(from: f64, to: f64, e: f64) -> f64 {
    from + (to - from) * e
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_endpoints() {
        let curves: [Ease; 4] = [power2_in_out, power4_in, power4_out, settle];
        for ease in curves {
            assert!(ease(0.0).abs() < EPS);
            assert!((ease(1.0) - 1.0).abs() < EPS);
            assert!(ease(-3.0).abs() < EPS);
            assert!((ease(7.0) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_in_out_is_symmetric() {
        assert!((power2_in_out(0.5) - 0.5).abs() < EPS);
        assert!((power2_in_out(0.25) + power2_in_out(0.75) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_power4_shapes() {
        // Slow start for ease-in, fast start for ease-out.
        assert!(power4_in(0.5) < 0.05);
        assert!(power4_out(0.5) > 0.95);
    }

    #[test]
    fn test_elastic_overshoots() {
        let peak = (1..100).map(|i| settle(i as f64 / 100.0)).fold(0.0, f64::max);
        assert!(peak > 1.0);
        assert!(peak < 1.1);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(1.0, 0.5, 0.0), 1.0);
        assert_eq!(lerp(1.0, 0.5, 1.0), 0.5);
        assert_eq!(lerp(-180.0, 0.0, 0.5), -90.0);
    }
}
