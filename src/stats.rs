//! Numerically stable running mean / standard deviation / max over a stream
//! of arithmetic samples.

use crate::error::LogicError;

/// Mean, sample standard deviation (`N-1` denominator), and sample count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalDistributionParameters {
    pub mean: f64,
    pub standard_deviation: f64,
    pub sample_size: usize,
}

/// A sample type this estimator can accumulate. `std::convert::Into<f64>` is
/// only implemented for the lossless-widening integer types, which excludes
/// the `i64`/`u64`/`usize` samples this estimator is meant for (durations in
/// nanoseconds, for instance); this trait instead uses `as f64`, matching
/// the original estimator's `long double` cast of whatever numeric type it
/// was instantiated with.
pub trait Sample: Copy + PartialOrd {
    fn as_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(impl Sample for $t {
            fn as_f64(self) -> f64 {
                self as f64
            }
        })*
    };
}
impl_sample!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Welford-style running estimator with a reference-value displacement, so
/// a long run of large-magnitude, low-spread samples (e.g. nanosecond
/// timestamps) does not lose precision to catastrophic cancellation.
///
/// The first added value becomes the reference; every later value is folded
/// in as its displacement from that reference, not its raw magnitude.
pub struct OnlineDistributionEstimator<T> {
    sample_size: usize,
    reference_value: f64,
    mean_displacement: f64,
    m2_displacement: f64,
    max_value: Option<T>,
}

impl<T> Default for OnlineDistributionEstimator<T> {
    fn default() -> Self {
        Self {
            sample_size: 0,
            reference_value: 0.0,
            mean_displacement: 0.0,
            m2_displacement: 0.0,
            max_value: None,
        }
    }
}

impl<T> OnlineDistributionEstimator<T>
where
    T: Sample,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: T) {
        let value_f64: f64 = value.as_f64();

        if self.sample_size == 0 {
            self.reference_value = value_f64;
            self.sample_size = 1;
            self.mean_displacement = 0.0;
            self.m2_displacement = 0.0;
            self.max_value = Some(value);
            return;
        }

        self.sample_size += 1;
        let displacement = value_f64 - self.reference_value;
        let delta = displacement - self.mean_displacement;
        self.mean_displacement += delta / self.sample_size as f64;
        let delta2 = displacement - self.mean_displacement;
        self.m2_displacement += delta * delta2;

        let exceeds_current_max = match self.max_value {
            Some(max) => value > max,
            None => true,
        };
        if exceeds_current_max {
            self.max_value = Some(value);
        }
    }

    pub fn distribution(&self) -> Result<NormalDistributionParameters, LogicError> {
        if self.sample_size == 0 {
            return Err(LogicError::NoSamples);
        }
        let mean = self.reference_value + self.mean_displacement;
        let standard_deviation = if self.sample_size > 1 {
            let variance = self.m2_displacement / (self.sample_size - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };
        Ok(NormalDistributionParameters {
            mean,
            standard_deviation,
            sample_size: self.sample_size,
        })
    }

    pub fn max(&self) -> Result<T, LogicError> {
        self.max_value.ok_or(LogicError::NoSamples)
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }
}
