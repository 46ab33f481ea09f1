//! Descriptive kinematic statistics of a CoP recording.
//!
//! Per axis (lateral and antero-posterior) this computes the extrema with
//! their timestamps, the range, the mean velocity and the RMS deviation. For
//! the combined center of pressure it computes the mean velocity, the mean
//! distance from the origin and the mean oscillation frequency.
//!
//! # Divisors
//!
//! Axis mean velocity and RMS both divide by `N - 1`. The oriented ellipse
//! covariance in [`crate::oriented_ellipse`] divides by `N`. Both conventions
//! are kept as-is so that stored study values stay comparable.

use std::f64::consts::PI;

use crate::config::AnalysisConfig;
use crate::error::{Result, SwayError};
use crate::signal::SignalTable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum number of samples for [`compute_signal_statistics`].
pub const MIN_SAMPLES: usize = 2;

const SCALAR_FIELD_COUNT: usize = 17;

/// Statistics of a single displacement axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisStatistics {
    /// Maximum displacement (mm).
    pub max: f64,
    /// Time of the first maximum (s).
    pub time_of_max: f64,
    /// Minimum displacement (mm).
    pub min: f64,
    /// Time of the first minimum (s).
    pub time_of_min: f64,
    /// `max - min` (mm).
    pub range: f64,
    /// Mean absolute sample-to-sample velocity (mm/s).
    pub mean_velocity: f64,
    /// RMS deviation from the mean (mm), divisor `N - 1`.
    pub rms: f64,
}

/// Statistics of the combined center-of-pressure trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CopStatistics {
    /// Path length divided by recording duration (mm/s).
    pub mean_velocity: f64,
    /// Sum of distances from the origin divided by recording duration.
    pub mean_distance: f64,
    /// `mean_velocity / 2pi`.
    pub mean_frequency: f64,
}

/// Full statistics of a recording.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatisticsResult {
    /// Lateral (side-to-side) axis.
    pub lateral: AxisStatistics,
    /// Antero-posterior (front-to-back) axis.
    pub antero_posterior: AxisStatistics,
    /// Combined CoP metrics.
    pub cop: CopStatistics,
    /// Plot time axis, `N` points spanning `[0, N / rate]`.
    pub time: Vec<f64>,
}

impl StatisticsResult {
    /// Number of entries returned by [`Self::scalar_fields`].
    pub const SCALAR_FIELDS: usize = SCALAR_FIELD_COUNT;

    /// Scalar results keyed by their stored study field name.
    #[must_use]
    pub fn scalar_fields(&self) -> [(&'static str, f64); SCALAR_FIELD_COUNT] {
        let lat = &self.lateral;
        let ap = &self.antero_posterior;
        [
            ("lat_max", lat.max),
            ("lat_t_max", lat.time_of_max),
            ("lat_min", lat.min),
            ("lat_t_min", lat.time_of_min),
            ("ap_max", ap.max),
            ("ap_t_max", ap.time_of_max),
            ("ap_min", ap.min),
            ("ap_t_min", ap.time_of_min),
            ("lat_rango", lat.range),
            ("ap_rango", ap.range),
            ("lat_vel", lat.mean_velocity),
            ("lat_rms", lat.rms),
            ("ap_vel", ap.mean_velocity),
            ("ap_rms", ap.rms),
            ("centro_vel", self.cop.mean_velocity),
            ("centro_dist", self.cop.mean_distance),
            ("centro_frec", self.cop.mean_frequency),
        ]
    }
}

/// Compute kinematic statistics for a CoP recording.
///
/// # Errors
///
/// Returns [`SwayError::InsufficientData`] with fewer than 2 samples, or
/// [`SwayError::InvalidConfig`] if `config` does not validate.
///
/// # Example
///
/// ```
/// use sway_analysis::{compute_signal_statistics, AnalysisConfig, SignalTable};
///
/// let table: SignalTable = (0..11).map(|i| [i as f64, 0.0]).collect();
/// let stats = compute_signal_statistics(&table, &AnalysisConfig::default())?;
///
/// assert_eq!(stats.lateral.range, 10.0);
/// assert!((stats.lateral.mean_velocity - 10.0).abs() < 1e-9);
/// # Ok::<(), sway_analysis::SwayError>(())
/// ```
pub fn compute_signal_statistics(
    table: &SignalTable,
    config: &AnalysisConfig,
) -> Result<StatisticsResult> {
    config.validate()?;

    let n = table.len();
    if n < MIN_SAMPLES {
        return Err(SwayError::insufficient_data(MIN_SAMPLES, n));
    }

    let rate = config.sample_rate_hz;
    let duration = table.duration(rate);

    let x = table.lateral_column();
    let y = table.antero_posterior_column();

    let lateral = axis_statistics(&x, rate, duration);
    let antero_posterior = axis_statistics(&y, rate, duration);

    let path_length: f64 = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(wx, wy)| {
            let dx = (wx[1] - wx[0]).abs();
            let dy = (wy[1] - wy[0]).abs();
            (dx * dx + dy * dy).sqrt() / duration
        })
        .sum();

    let mean_distance: f64 = table
        .iter()
        .map(|s| (s[0] * s[0] + s[1] * s[1]).sqrt() / duration)
        .sum();

    let cop = CopStatistics {
        mean_velocity: path_length,
        mean_distance,
        mean_frequency: path_length / (2.0 * PI),
    };

    tracing::debug!(
        samples = n,
        lat_vel = lateral.mean_velocity,
        ap_vel = antero_posterior.mean_velocity,
        centro_vel = cop.mean_velocity,
        "computed signal statistics"
    );

    Ok(StatisticsResult {
        lateral,
        antero_posterior,
        cop,
        time: table.time_axis(rate),
    })
}

/// Statistics of one axis. `values` must hold at least two samples.
fn axis_statistics(values: &[f64], rate: f64, duration: f64) -> AxisStatistics {
    let n = values.len();
    let (argmax, max) = first_extremum(values, |v, best| v > best);
    let (argmin, min) = first_extremum(values, |v, best| v < best);

    let den = duration / n as f64;
    let intervals = (n - 1) as f64;

    let velocity_sum: f64 = values
        .windows(2)
        .map(|w| (w[1] - w[0]).abs() / den)
        .sum();

    let mean = values.iter().sum::<f64>() / n as f64;
    let squared_deviation: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();

    AxisStatistics {
        max,
        time_of_max: argmax.map_or(f64::NAN, |i| SignalTable::sample_time(i, rate)),
        min,
        time_of_min: argmin.map_or(f64::NAN, |i| SignalTable::sample_time(i, rate)),
        range: max - min,
        mean_velocity: velocity_sum / intervals,
        rms: (squared_deviation / intervals).sqrt(),
    }
}

/// Index and value of the first extremum under `better`, skipping NaN.
fn first_extremum(values: &[f64], better: impl Fn(f64, f64) -> bool) -> (Option<usize>, f64) {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold((None, f64::NAN), |(best_i, best), (i, &v)| {
            if best_i.is_none() || better(v, best) {
                (Some(i), v)
            } else {
                (best_i, best)
            }
        })
}
