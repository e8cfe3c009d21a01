use std::f64::consts::TAU;

/// Reduce an angle to [0, 2π) before narrowing to `f32`
pub fn wrap_angle(radians: f64) -> f32 {
    let wrapped = radians.rem_euclid(TAU) as f32;
    // values just under 2π round up to it in f32
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// `t × rate` as a wrapped angle, evaluated in `f64`
pub fn wrapped_product(t: f64, rate: f64) -> f32 {
    wrap_angle(t * rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_into_one_turn() {
        assert!((wrap_angle(TAU + 1.0) - 1.0).abs() < 1e-6);
        assert!((wrap_angle(-1.0) - (TAU - 1.0) as f32).abs() < 1e-6);
        assert_eq!(wrap_angle(0.0), 0.0);
    }

    #[test]
    fn narrowing_never_reaches_full_turn() {
        for radians in [TAU - 1e-10, TAU - 1e-12, -1e-20, -TAU * 3.0 - 1e-12] {
            let angle = wrap_angle(radians);
            assert!((0.0..std::f32::consts::TAU).contains(&angle), "{} -> {}", radians, angle);
        }
        assert_eq!(wrap_angle(TAU - 1e-10), 0.0);
    }

    #[test]
    fn long_uptime_keeps_precision() {
        // A month of uptime at 0.5 rad/s
        let t = 30.0 * 24.0 * 3600.0;
        let angle = wrapped_product(t, 0.5);
        assert!((0.0..TAU as f32).contains(&angle));
        let expected = (t * 0.5).rem_euclid(TAU);
        assert!((angle as f64 - expected).abs() < 1e-5);
    }
}
