use cohort_core::constants::{FULL_PERIOD_TENURE, MID_PERIOD_TENURE, SIGMOID_HALF_WIDTH};
use cohort_core::{Parameters, RampType};

/// When a cohort's members start work within their hire period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HireTiming {
    /// Hired throughout the period; credited half a period of tenure at age 0.
    MidPeriod,
    /// On board from the start of the period; credited a full period at age 0.
    FullPeriod,
}

impl HireTiming {
    /// Only the first cohort can be on board for the full first period.
    pub fn for_cohort(cohort: usize, first_year_full_hire: bool) -> Self {
        if cohort == 0 && first_year_full_hire {
            Self::FullPeriod
        } else {
            Self::MidPeriod
        }
    }

    /// Tenure in periods at the end of period `age`.
    ///
    /// The full-period credit only applies at age 0; later ages use the
    /// mid-period offset like every other cohort.
    pub fn tenure(self, age: usize) -> f64 {
        match (self, age) {
            (Self::FullPeriod, 0) => FULL_PERIOD_TENURE,
            _ => age as f64 + MID_PERIOD_TENURE,
        }
    }
}

/// Normalized shape of the ramp over progress `p` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RampShape {
    /// `shape(p) = p`
    Linear,
    /// Logistic curve rescaled so `shape(0) = 0` and `shape(1) = 1`.
    Sigmoid {
        beta: f64,
        shift: f64,
        /// Raw logistic value at `p = 0`.
        floor: f64,
        /// Raw logistic value at `p = 1` minus `floor`.
        span: f64,
    },
}

impl RampShape {
    pub fn sigmoid(beta: f64, shift: i32) -> Self {
        let shift = f64::from(shift);
        let floor = logistic(beta * (-SIGMOID_HALF_WIDTH - shift));
        let ceiling = logistic(beta * (SIGMOID_HALF_WIDTH - shift));
        Self::Sigmoid {
            beta,
            shift,
            floor,
            span: ceiling - floor,
        }
    }

    /// Evaluate the shape at progress `p`, clamped to `[0, 1]`.
    ///
    /// ```text
    /// x        = -10 + 20 × p
    /// raw(x)   = 1 / (1 + e^(-β × (x - shift)))
    /// shape(p) = (raw(x) - raw(-10)) / (raw(10) - raw(-10))
    /// ```
    ///
    /// A flat logistic (β = 0) has no span to rescale and falls back to `p`,
    /// which is also the limit of the curve as β approaches 0.
    pub fn at(&self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match *self {
            Self::Linear => p,
            Self::Sigmoid {
                beta,
                shift,
                floor,
                span,
            } => {
                if span <= f64::EPSILON {
                    return p;
                }
                let x = -SIGMOID_HALF_WIDTH + 2.0 * SIGMOID_HALF_WIDTH * p;
                ((logistic(beta * (x - shift)) - floor) / span).clamp(0.0, 1.0)
            }
        }
    }
}

fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Productivity ramp-up for new hires.
///
/// A hire's productivity is the ramp shape evaluated at
/// `tenure / n_years`, and exactly 1.0 from age `n_years` onwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampCurve {
    n_years: usize,
    shape: RampShape,
    first_year_full_hire: bool,
}

impl RampCurve {
    /// Linear ramp over `n_years` periods with mid-period hiring.
    pub fn linear(n_years: usize) -> Self {
        Self {
            n_years,
            shape: RampShape::Linear,
            first_year_full_hire: false,
        }
    }

    /// Sigmoid ramp over `n_years` periods with mid-period hiring.
    pub fn sigmoid(n_years: usize, beta: f64, shift: i32) -> Self {
        Self {
            n_years,
            shape: RampShape::sigmoid(beta, shift),
            first_year_full_hire: false,
        }
    }

    /// Build the ramp a parameter set describes. Assumes validated parameters.
    pub fn from_parameters(params: &Parameters) -> Self {
        let curve = match params.ramp_type {
            RampType::Linear => Self::linear(params.n_years),
            RampType::Sigmoid => Self::sigmoid(params.n_years, params.beta, params.shift),
        };
        curve.with_first_year_full_hire(params.first_year_full_hire)
    }

    pub fn with_first_year_full_hire(mut self, enabled: bool) -> Self {
        self.first_year_full_hire = enabled;
        self
    }

    pub fn n_years(&self) -> usize {
        self.n_years
    }

    pub fn shape(&self) -> RampShape {
        self.shape
    }

    /// Productivity fraction in `[0, 1]` at `age` for a hire with `timing`.
    pub fn productivity(&self, age: usize, timing: HireTiming) -> f64 {
        if age >= self.n_years {
            return 1.0;
        }
        let progress = timing.tenure(age) / self.n_years as f64;
        self.shape.at(progress)
    }

    /// Productivity of cohort `cohort` at `age`, honouring first-year full hire.
    pub fn productivity_for(&self, cohort: usize, age: usize) -> f64 {
        let timing = HireTiming::for_cohort(cohort, self.first_year_full_hire);
        self.productivity(age, timing)
    }

    /// `points` evenly spaced `(progress, productivity)` pairs across `[0, 1]`,
    /// for plotting the curve's shape.
    pub fn sample(&self, points: usize) -> Vec<(f64, f64)> {
        match points {
            0 => Vec::new(),
            1 => vec![(0.0, self.shape.at(0.0))],
            _ => {
                let step = 1.0 / (points - 1) as f64;
                (0..points)
                    .map(|i| {
                        let p = i as f64 * step;
                        (p, self.shape.at(p))
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_period_credit_only_at_age_zero() {
        assert_eq!(HireTiming::FullPeriod.tenure(0), 1.0);
        assert_eq!(HireTiming::FullPeriod.tenure(1), 1.5);
        assert_eq!(HireTiming::MidPeriod.tenure(0), 0.5);
    }

    #[test]
    fn only_first_cohort_gets_full_period() {
        assert_eq!(HireTiming::for_cohort(0, true), HireTiming::FullPeriod);
        assert_eq!(HireTiming::for_cohort(1, true), HireTiming::MidPeriod);
        assert_eq!(HireTiming::for_cohort(0, false), HireTiming::MidPeriod);
    }

    #[test]
    fn sigmoid_shape_hits_both_endpoints() {
        let shape = RampShape::sigmoid(0.3, 3);
        assert!(shape.at(0.0).abs() < 1e-12);
        assert!((shape.at(1.0) - 1.0).abs() < 1e-12);
    }
}
