use crate::errors::ConfigError;
use crate::impl_structural_eq;

/// Motor thrust as a time-ordered lookup table.
#[derive(Debug, Clone, Default)]
pub struct ThrustCurve {
    name: String,
    time: Vec<f64>,  // s
    force: Vec<f64>, // N
}

impl_structural_eq!(ThrustCurve { name, time, force });

impl ThrustCurve {
    pub fn new(
        name: impl Into<String>,
        time: Vec<f64>,
        force: Vec<f64>,
    ) -> Result<Self, ConfigError> {
        if time.len() != force.len() {
            return Err(ConfigError::ThrustCurveLengthMismatch {
                times: time.len(),
                forces: force.len(),
            });
        }
        if let Some(index) = time.windows(2).position(|pair| !(pair[0] <= pair[1])) {
            return Err(ConfigError::ThrustCurveNotMonotonic { index: index + 1 });
        }

        Ok(ThrustCurve {
            name: name.into(),
            time,
            force,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn times(&self) -> &[f64] {
        &self.time
    }

    pub fn forces(&self) -> &[f64] {
        &self.force
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn burn_time(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }

    /// Thrust at `t`: the first sample before the curve starts, linear
    /// interpolation inside it, and zero once the motor has burnt out.
    pub fn force_at(&self, t: f64) -> f64 {
        for (i, &sample_time) in self.time.iter().enumerate() {
            if t < sample_time {
                if i == 0 {
                    return self.force[0];
                }

                let (t0, f0) = (self.time[i - 1], self.force[i - 1]);
                let f1 = self.force[i];
                return (t - t0) / (sample_time - t0) * (f1 - f0) + f0;
            }
        }
        0.0
    }

    pub(crate) fn into_parts(self) -> (String, Vec<f64>, Vec<f64>) {
        (self.name, self.time, self.force)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> ThrustCurve {
        ThrustCurve::new("C6", vec![0.0, 1.0, 2.0], vec![0.0, 100.0, 0.0]).unwrap()
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = ThrustCurve::new("bad", vec![0.0, 1.0], vec![0.0]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ThrustCurveLengthMismatch { times: 2, forces: 1 }
        ));
    }

    #[test]
    fn test_rejects_decreasing_time() {
        let err = ThrustCurve::new("bad", vec![0.0, 2.0, 1.0], vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, ConfigError::ThrustCurveNotMonotonic { index: 2 }));

        let err = ThrustCurve::new("bad", vec![0.0, f64::NAN], vec![0.0; 2]).unwrap_err();
        assert!(matches!(err, ConfigError::ThrustCurveNotMonotonic { index: 1 }));
    }

    #[test]
    fn test_accepts_repeated_time() {
        let curve = ThrustCurve::new("step", vec![0.0, 1.0, 1.0, 2.0], vec![10.0, 10.0, 5.0, 5.0]);
        assert!(curve.is_ok());
    }

    #[test]
    fn test_force_lookup() {
        let curve = triangle();
        assert_relative_eq!(curve.force_at(-1.0), 0.0);
        assert_relative_eq!(curve.force_at(0.5), 50.0);
        assert_relative_eq!(curve.force_at(1.0), 100.0);
        assert_relative_eq!(curve.force_at(1.25), 75.0);
        assert_relative_eq!(curve.force_at(2.0), 0.0);
        assert_relative_eq!(curve.force_at(10.0), 0.0);
    }

    #[test]
    fn test_force_before_first_sample() {
        let curve = ThrustCurve::new("late", vec![0.5, 1.0], vec![20.0, 10.0]).unwrap();
        assert_relative_eq!(curve.force_at(0.0), 20.0);
    }

    #[test]
    fn test_burn_time() {
        assert_relative_eq!(triangle().burn_time(), 2.0);
        assert_relative_eq!(ThrustCurve::default().burn_time(), 0.0);
        assert_relative_eq!(ThrustCurve::default().force_at(0.0), 0.0);
    }
}
