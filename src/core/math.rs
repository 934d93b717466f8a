// Math utilities and helper functions

/// Move `current` toward `target` by at most `max_delta`, without overshooting
pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + max_delta.copysign(diff)
    }
}

/// Check if two f32 values are approximately equal
#[allow(dead_code)]
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_toward_partial_step() {
        assert_eq!(move_toward(10.0, 0.0, 3.0), 7.0);
        assert_eq!(move_toward(-10.0, 0.0, 3.0), -7.0);
    }

    #[test]
    fn test_move_toward_reaches_target() {
        assert_eq!(move_toward(2.0, 0.0, 3.0), 0.0);
        assert_eq!(move_toward(0.0, 0.0, 3.0), 0.0);
    }

    #[test]
    fn test_move_toward_never_overshoots() {
        let mut v = 100.0;
        for _ in 0..100 {
            v = move_toward(v, 0.0, 1.7);
            assert!(v >= 0.0);
        }
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.00001, 0.0001));
        assert!(!approx_equal(1.0, 1.1, 0.01));
    }
}
