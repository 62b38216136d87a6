//! Statistic metrics - running min/max/average summaries

use serde::{Deserialize, Serialize};

/// Running summary statistics for one execution dimension.
///
/// A statistic exists only once at least one data point has been seen
/// (absence is modelled as `Option<StatisticMetric>` on the owning
/// aggregate), so `minimum <= average <= maximum` holds whenever the data
/// point count is positive.
///
/// The average is weighted by data point count, so folding points one at a
/// time, folding them as one batch, and merging partial aggregates all
/// converge on the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticMetric {
    minimum: f64,
    maximum: f64,
    average: f64,
    number_of_data_points_for_average: u64,
    unit: Option<String>,
}

impl StatisticMetric {
    /// Create a statistic from its first data point.
    #[must_use]
    pub const fn from_point(value: f64) -> Self {
        Self {
            minimum: value,
            maximum: value,
            average: value,
            number_of_data_points_for_average: 1,
            unit: None,
        }
    }

    /// Create a statistic from a non-empty slice of data points.
    ///
    /// Returns `None` for an empty slice: no data points, no statistics.
    #[must_use]
    pub fn from_points(points: &[f64]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut statistic = Self::from_point(first);
        statistic.add_points(rest);
        Some(statistic)
    }

    /// Attach a unit label (e.g. `"s"`, `"GB"`).
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Get the minimum observed value.
    #[must_use]
    pub const fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Get the maximum observed value.
    #[must_use]
    pub const fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Get the weighted average of all observed values.
    #[must_use]
    pub const fn average(&self) -> f64 {
        self.average
    }

    /// Get the number of data points folded into the average.
    #[must_use]
    pub const fn number_of_data_points_for_average(&self) -> u64 {
        self.number_of_data_points_for_average
    }

    /// Get the unit label, if any.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Fold one new data point into the running statistics.
    pub fn add_point(&mut self, value: f64) {
        self.add_points(&[value]);
    }

    /// Fold new data points into the running statistics.
    ///
    /// The new average is
    /// `(old_average * old_count + sum(points)) / (old_count + points.len())`.
    #[allow(clippy::cast_precision_loss)]
    pub fn add_points(&mut self, points: &[f64]) {
        if points.is_empty() {
            return;
        }
        let mut sum = 0.0;
        for &value in points {
            self.minimum = self.minimum.min(value);
            self.maximum = self.maximum.max(value);
            sum += value;
        }
        let old_count = self.number_of_data_points_for_average;
        let new_count = old_count + points.len() as u64;
        self.average = self.average.mul_add(old_count as f64, sum) / new_count as f64;
        self.number_of_data_points_for_average = new_count;
    }

    /// Merge another independently computed statistic into this one.
    ///
    /// Minimum and maximum combine elementwise; the averages combine with
    /// the same count-weighted formula as `add_points`. The receiver's
    /// unit wins (in practice both sides carry the same dimension).
    #[allow(clippy::cast_precision_loss)]
    pub fn merge(&mut self, other: &Self) {
        if other.number_of_data_points_for_average == 0 {
            return;
        }
        if self.number_of_data_points_for_average == 0 {
            let unit = self.unit.take().or_else(|| other.unit.clone());
            *self = Self {
                unit,
                ..other.clone()
            };
            return;
        }
        self.minimum = self.minimum.min(other.minimum);
        self.maximum = self.maximum.max(other.maximum);
        let combined_count =
            self.number_of_data_points_for_average + other.number_of_data_points_for_average;
        let weighted_sum = self.average.mul_add(
            self.number_of_data_points_for_average as f64,
            other.average * other.number_of_data_points_for_average as f64,
        );
        self.average = weighted_sum / combined_count as f64;
        self.number_of_data_points_for_average = combined_count;
    }
}
