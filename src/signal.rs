//! Center-of-pressure signal container.
//!
//! A [`SignalTable`] is the single input shared by every analysis component:
//! an ordered sequence of `[lateral, antero_posterior]` displacement samples
//! in millimeters, in chronological order.

use crate::error::{Result, SwayError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered, immutable two-channel CoP recording.
///
/// # Example
///
/// ```
/// use sway_analysis::SignalTable;
///
/// let table = SignalTable::from_columns(&[0.0, 1.0, 2.0], &[0.5, 0.4, 0.3])?;
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.lateral_column(), vec![0.0, 1.0, 2.0]);
/// # Ok::<(), sway_analysis::SwayError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignalTable {
    samples: Vec<[f64; 2]>,
}

impl SignalTable {
    /// Wrap a sequence of `[lateral, antero_posterior]` samples.
    #[must_use]
    pub fn new(samples: Vec<[f64; 2]>) -> Self {
        Self { samples }
    }

    /// Build a table from separate lateral and antero-posterior columns.
    ///
    /// # Errors
    ///
    /// Returns [`SwayError::LengthMismatch`] if the columns differ in length.
    pub fn from_columns(lateral: &[f64], antero_posterior: &[f64]) -> Result<Self> {
        if lateral.len() != antero_posterior.len() {
            return Err(SwayError::length_mismatch(
                lateral.len(),
                antero_posterior.len(),
            ));
        }

        Ok(Self {
            samples: lateral
                .iter()
                .zip(antero_posterior.iter())
                .map(|(&x, &y)| [x, y])
                .collect(),
        })
    }

    /// Build a table from the loader's row-major numeric table.
    ///
    /// # Errors
    ///
    /// Returns [`SwayError::InvalidInput`] if any row does not have exactly
    /// two columns.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let samples = rows
            .iter()
            .enumerate()
            .map(|(i, row)| match row.as_slice() {
                &[x, y] => Ok([x, y]),
                other => Err(SwayError::invalid_input(format!(
                    "row {i} has {} columns, expected 2",
                    other.len()
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { samples })
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the table holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples as `[lateral, antero_posterior]` pairs.
    #[must_use]
    pub fn samples(&self) -> &[[f64; 2]] {
        &self.samples
    }

    /// Iterate over samples in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, [f64; 2]> {
        self.samples.iter()
    }

    /// Lateral (column 0) values.
    pub fn lateral(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s[0])
    }

    /// Antero-posterior (column 1) values.
    pub fn antero_posterior(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s[1])
    }

    /// Owned lateral column, for plotting.
    #[must_use]
    pub fn lateral_column(&self) -> Vec<f64> {
        self.lateral().collect()
    }

    /// Owned antero-posterior column, for plotting.
    #[must_use]
    pub fn antero_posterior_column(&self) -> Vec<f64> {
        self.antero_posterior().collect()
    }

    /// Recording duration `N / rate` in seconds.
    #[must_use]
    pub fn duration(&self, sample_rate_hz: f64) -> f64 {
        self.samples.len() as f64 / sample_rate_hz
    }

    /// Timestamp of the sample at `index`: `index / rate` seconds.
    #[must_use]
    pub fn sample_time(index: usize, sample_rate_hz: f64) -> f64 {
        index as f64 / sample_rate_hz
    }

    /// Time axis for plotting: `N` points evenly spaced over `[0, N / rate]`.
    ///
    /// Both endpoints are included, so the spacing is `(N / rate) / (N - 1)`
    /// rather than `1 / rate`. Extrema timestamps use [`Self::sample_time`]
    /// instead.
    #[must_use]
    pub fn time_axis(&self, sample_rate_hz: f64) -> Vec<f64> {
        linspace(0.0, self.duration(sample_rate_hz), self.samples.len())
    }
}

impl From<Vec<[f64; 2]>> for SignalTable {
    fn from(samples: Vec<[f64; 2]>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<[f64; 2]> for SignalTable {
    fn from_iter<I: IntoIterator<Item = [f64; 2]>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SignalTable {
    type Item = &'a [f64; 2];
    type IntoIter = std::slice::Iter<'a, [f64; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `n` evenly spaced values over `[start, stop]`, endpoints included.
pub(crate) fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + i as f64 * step
                    }
                })
                .collect()
        }
    }
}
