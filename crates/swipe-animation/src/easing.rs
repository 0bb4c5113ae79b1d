/// Easing curves applied to the linear progress of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material "standard" curve.
    FastOutSlowIn,
    /// Gentle deceleration used for snapping swiped rows into place.
    #[default]
    Smooth,
}

impl Easing {
    /// Maps a linear fraction in `[0, 1]` onto the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        let curve = match self {
            Easing::Linear => return fraction.clamp(0.0, 1.0),
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
            Easing::FastOutSlowIn => CubicBezier::new(0.4, 0.0, 0.2, 1.0),
            Easing::Smooth => CubicBezier::new(0.25, 0.1, 0.25, 1.0),
        };
        curve.solve(fraction)
    }
}

/// Unit cubic bezier through (0,0) and (1,1) with two control points,
/// stored in polynomial form.
struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    const EPSILON: f32 = 1e-6;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x_at(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn y_at(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn dx_at(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.y_at(self.parameter_for(x))
    }

    /// Finds `t` with `x_at(t) == x`. Newton first, bisection if the
    /// derivative flattens out.
    fn parameter_for(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let error = self.x_at(t) - x;
            if error.abs() < Self::EPSILON {
                return t;
            }
            let slope = self.dx_at(t);
            if slope.abs() < Self::EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..20 {
            let error = self.x_at(t) - x;
            if error.abs() < Self::EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
        Easing::Smooth,
    ];

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.transform(0.0), 0.0);
        assert_eq!(Easing::Linear.transform(0.25), 0.25);
        assert_eq!(Easing::Linear.transform(1.0), 1.0);
    }

    #[test]
    fn curves_pin_their_endpoints() {
        for easing in ALL {
            assert!(easing.transform(0.0).abs() < 0.01, "start of {easing:?}");
            assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "end of {easing:?}");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 1..=20 {
                let value = easing.transform(step as f32 / 20.0);
                assert!(value + 1e-4 >= previous, "{easing:?} went backwards at {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn ease_out_leads_linear_at_midpoint() {
        assert!(Easing::EaseOut.transform(0.5) > 0.5);
        assert!(Easing::EaseIn.transform(0.5) < 0.5);
    }
}
