// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Control points of the classic `ease` curve.
const EASE: (f64, f64, f64, f64) = (0.42, 0.0, 1.0, 1.0);

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Decelerating curve: the `ease` bezier mirrored in time, so motion
    /// starts fast and settles gently.
    #[default]
    EaseOut,
    /// CSS-style cubic bezier through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`.
    ///
    /// `x1` and `x2` must lie in `[0, 1]` for the curve to be a function of time.
    CubicBezier {
        /// First control point, x.
        x1: f64,
        /// First control point, y.
        y1: f64,
        /// Second control point, x.
        x2: f64,
        /// Second control point, y.
        y2: f64,
    },
}

impl Easing {
    /// Evaluates the curve at `t`, clamped into `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let (x1, y1, x2, y2) = EASE;
                1.0 - cubic_bezier(x1, y1, x2, y2, 1.0 - t)
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let t = solve_curve_x(x1, x2, x);
    coord(t, y1, y2)
}

fn coord(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

/// Finds the curve parameter whose x coordinate is `x`.
fn solve_curve_x(x1: f64, x2: f64, x: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    // Newton's method converges in a handful of steps for well-formed curves.
    let mut t = x;
    for _ in 0..8 {
        let err = coord(t, x1, x2) - x;
        if abs(err) < EPSILON {
            return t;
        }
        let d = slope(t, x1, x2);
        if abs(d) < 1e-6 {
            break;
        }
        t -= err / d;
    }

    // Fall back to bisection, which always converges on a monotonic x(t).
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    t = x;
    for _ in 0..64 {
        let value = coord(t, x1, x2);
        if abs(value - x) < EPSILON {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn endpoints_are_exact() {
        for e in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::CubicBezier {
                x1: 0.25,
                y1: 0.1,
                x2: 0.25,
                y2: 1.0,
            },
        ] {
            assert_eq!(e.apply(0.0), 0.0, "{e:?} at 0");
            assert_eq!(e.apply(1.0), 1.0, "{e:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
        assert_eq!(Easing::EaseOut.apply(f64::NAN), 0.0);
    }

    #[test]
    fn ease_out_leads_linear_and_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..100 {
            let t = f64::from(i) / 100.0;
            let v = Easing::EaseOut.apply(t);
            assert!(v >= t, "ease-out should run ahead of linear at {t}");
            assert!(v >= prev, "ease-out should not go backwards at {t}");
            prev = v;
        }
    }

    #[test]
    fn linear_bezier_matches_linear() {
        let e = Easing::CubicBezier {
            x1: 1.0 / 3.0,
            y1: 1.0 / 3.0,
            x2: 2.0 / 3.0,
            y2: 2.0 / 3.0,
        };
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert!((e.apply(t) - t).abs() < 1e-6, "mismatch at {t}");
        }
    }
}
