//! Time/value sample pairs describing piecewise-linear waveforms.
//!
//! The sample sequence is a shared vocabulary between the simulator and
//! externally compiled device models; it is always owned by whichever side
//! constructs it. Timestamps are expected to be non-decreasing, but nothing
//! here enforces that — [`is_time_ordered`] only reports it.

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// One (time, value) sample of a piecewise-linear waveform.
///
/// Layout is part of the ABI contract with external device models: time
/// first, value second, both IEEE-754 doubles.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeValuePair {
    /// Sample timestamp in seconds.
    pub time: Scalar,
    /// Sample value (volts or amperes, per the owning source).
    pub value: Scalar,
}

impl TimeValuePair {
    /// Creates a sample pair.
    #[must_use]
    pub const fn new(time: Scalar, value: Scalar) -> Self {
        Self { time, value }
    }
}

/// Ordered sequence of samples describing a piecewise-linear waveform.
pub type TimeValueSeries = Vec<TimeValuePair>;

/// Returns `true` when timestamps are non-decreasing across `samples`.
///
/// Advisory only. Callers that receive a series from external code may use
/// this to detect a malformed waveform before evaluating it.
#[must_use]
pub fn is_time_ordered(samples: &[TimeValuePair]) -> bool {
    samples.windows(2).all(|w| w[0].time <= w[1].time)
}

/// Evaluates the piecewise-linear waveform described by `samples` at `t`.
///
/// Holds the first sample's value before the first timestamp and the last
/// sample's value after the last. Coincident timestamps act as a step: the
/// later sample wins. An empty series evaluates to `0.0`.
#[must_use]
pub fn pwl_value(samples: &[TimeValuePair], t: Scalar) -> Scalar {
    let Some(first) = samples.first() else {
        return 0.0;
    };
    if t <= first.time {
        return first.value;
    }
    for w in samples.windows(2) {
        let (a, b) = (w[0], w[1]);
        if t <= b.time {
            let width = b.time - a.time;
            if width <= 0.0 {
                return b.value;
            }
            return a.value + (b.value - a.value) * (t - a.time) / width;
        }
    }
    samples[samples.len() - 1].value
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn ramp() -> TimeValueSeries {
        vec![
            TimeValuePair::new(0.0, 0.0),
            TimeValuePair::new(1.0e-3, 5.0),
            TimeValuePair::new(2.0e-3, 5.0),
            TimeValuePair::new(3.0e-3, 0.0),
        ]
    }

    #[test]
    fn ordered_series_is_detected() {
        assert!(is_time_ordered(&ramp()));
        assert!(is_time_ordered(&[]));
        assert!(is_time_ordered(&[TimeValuePair::new(1.0, 2.0)]));
    }

    #[test]
    fn unordered_series_is_detected() {
        let samples = [TimeValuePair::new(1.0, 0.0), TimeValuePair::new(0.5, 1.0)];
        assert!(!is_time_ordered(&samples));
    }

    #[test]
    fn interpolates_between_samples() {
        let w = ramp();
        assert_relative_eq!(pwl_value(&w, 0.5e-3), 2.5);
        assert_relative_eq!(pwl_value(&w, 1.5e-3), 5.0);
        assert_relative_eq!(pwl_value(&w, 2.5e-3), 2.5);
    }

    #[test]
    fn clamps_outside_sampled_span() {
        let w = ramp();
        assert_relative_eq!(pwl_value(&w, -1.0), 0.0);
        assert_relative_eq!(pwl_value(&w, 10.0), 0.0);
        assert_relative_eq!(pwl_value(&w, 3.0e-3), 0.0);
    }

    #[test]
    fn coincident_timestamps_step_to_later_value() {
        let step = [
            TimeValuePair::new(0.0, 1.0),
            TimeValuePair::new(1.0, 1.0),
            TimeValuePair::new(1.0, 4.0),
            TimeValuePair::new(2.0, 4.0),
        ];
        assert_relative_eq!(pwl_value(&step, 0.5), 1.0);
        assert_relative_eq!(pwl_value(&step, 1.5), 4.0);
    }

    #[test]
    fn empty_series_evaluates_to_zero() {
        assert_relative_eq!(pwl_value(&[], 0.0), 0.0);
    }
}
