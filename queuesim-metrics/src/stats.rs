//! Sample statistics for confidence intervals.

/// Normal quantile for a symmetric 95% interval.
pub const Z_95: f64 = 1.96;

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Unbiased sample variance (`n - 1` denominator); `0.0` when `n < 2`.
pub fn sample_variance(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(samples);
    let ss: f64 = samples.iter().map(|x| (x - m) * (x - m)).sum();
    ss / (n - 1) as f64
}

pub fn sample_stddev(samples: &[f64]) -> f64 {
    sample_variance(samples).sqrt()
}

/// 95% normal-approximation half-width `1.96 * s / sqrt(n)`.
///
/// Zero when fewer than two samples exist.
pub fn confidence_half_width(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    Z_95 * sample_stddev(samples) / (n as f64).sqrt()
}

/// Mean of a sample together with its 95% half-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub mean: f64,
    pub half_width: f64,
    pub count: usize,
}

impl Estimate {
    pub fn from_samples(samples: &[f64]) -> Self {
        Self {
            mean: mean(samples),
            half_width: confidence_half_width(samples),
            count: samples.len(),
        }
    }

    pub fn lower(&self) -> f64 {
        self.mean - self.half_width
    }

    pub fn upper(&self) -> f64 {
        self.mean + self.half_width
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lower()..=self.upper()).contains(&value)
    }
}
