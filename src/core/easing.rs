// Cubic bezier easing curves
//
// A curve is defined by two control points (x1, y1) and (x2, y2), with the
// endpoints fixed at (0, 0) and (1, 1). Evaluating it means solving x(t) = x
// for the curve parameter t and returning y(t).

const NEWTON_ITERATIONS: usize = 4;
const NEWTON_MIN_SLOPE: f32 = 0.001;
const SUBDIVISION_PRECISION: f32 = 0.000_000_1;
const SUBDIVISION_MAX_ITERATIONS: usize = 10;

const SPLINE_TABLE_SIZE: usize = 11;
const SAMPLE_STEP_SIZE: f32 = 1.0 / (SPLINE_TABLE_SIZE as f32 - 1.0);

/// Lunge used by attacking heroes: overshoots early then settles
pub const ATTACK: CubicBezier = CubicBezier::new(0.0, 1.33, 0.0, 1.0);

/// Slow start, used when a life bar fills up
pub const LIFE_INCREASE: CubicBezier = CubicBezier::new(1.0, 0.0, 1.0, 1.0);

/// Fast start, used when a life bar drains
pub const LIFE_DECREASE: CubicBezier = CubicBezier::new(0.0, 1.0, 1.0, 1.0);

/// A cubic bezier easing curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// Create a curve from its two control points
    ///
    /// `x1` and `x2` must lie in [0, 1] so that the curve is a function of x.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Whether the curve degenerates to the identity
    pub fn is_linear(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    /// Evaluate the curve at progress `x` in [0, 1]
    pub fn ease(&self, x: f32) -> f32 {
        if self.is_linear() {
            return x;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        calc_bezier(self.t_for_x(x), self.y1, self.y2)
    }

    fn samples(&self) -> [f32; SPLINE_TABLE_SIZE] {
        let mut samples = [0.0; SPLINE_TABLE_SIZE];
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = calc_bezier(i as f32 * SAMPLE_STEP_SIZE, self.x1, self.x2);
        }
        samples
    }

    fn t_for_x(&self, x: f32) -> f32 {
        let samples = self.samples();
        let last_sample = SPLINE_TABLE_SIZE - 1;

        // Find the table interval containing x
        let mut interval_start = 0.0;
        let mut current = 1;
        while current != last_sample && samples[current] <= x {
            interval_start += SAMPLE_STEP_SIZE;
            current += 1;
        }
        current -= 1;

        // Linear guess inside the interval
        let span = samples[current + 1] - samples[current];
        let dist = if span > 0.0 {
            (x - samples[current]) / span
        } else {
            0.0
        };
        let guess = interval_start + dist * SAMPLE_STEP_SIZE;

        let slope = get_slope(guess, self.x1, self.x2);
        if slope >= NEWTON_MIN_SLOPE {
            newton_raphson(x, guess, self.x1, self.x2)
        } else if slope == 0.0 {
            guess
        } else {
            binary_subdivide(
                x,
                interval_start,
                interval_start + SAMPLE_STEP_SIZE,
                self.x1,
                self.x2,
            )
        }
    }
}

fn coeff_a(a1: f32, a2: f32) -> f32 {
    1.0 - 3.0 * a2 + 3.0 * a1
}

fn coeff_b(a1: f32, a2: f32) -> f32 {
    3.0 * a2 - 6.0 * a1
}

fn coeff_c(a1: f32) -> f32 {
    3.0 * a1
}

/// x(t) or y(t) given the matching control point coordinates
fn calc_bezier(t: f32, a1: f32, a2: f32) -> f32 {
    ((coeff_a(a1, a2) * t + coeff_b(a1, a2)) * t + coeff_c(a1)) * t
}

/// dx/dt or dy/dt given the matching control point coordinates
fn get_slope(t: f32, a1: f32, a2: f32) -> f32 {
    3.0 * coeff_a(a1, a2) * t * t + 2.0 * coeff_b(a1, a2) * t + coeff_c(a1)
}

fn newton_raphson(x: f32, mut guess: f32, x1: f32, x2: f32) -> f32 {
    for _ in 0..NEWTON_ITERATIONS {
        let slope = get_slope(guess, x1, x2);
        if slope == 0.0 {
            return guess;
        }
        let current_x = calc_bezier(guess, x1, x2) - x;
        guess -= current_x / slope;
    }
    guess
}

fn binary_subdivide(x: f32, mut a: f32, mut b: f32, x1: f32, x2: f32) -> f32 {
    let mut t = a + (b - a) / 2.0;
    for _ in 0..SUBDIVISION_MAX_ITERATIONS {
        let current_x = calc_bezier(t, x1, x2) - x;
        if current_x.abs() <= SUBDIVISION_PRECISION {
            break;
        }
        if current_x > 0.0 {
            b = t;
        } else {
            a = t;
        }
        t = a + (b - a) / 2.0;
    }
    t
}
