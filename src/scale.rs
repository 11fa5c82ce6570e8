//! Scale functions for data-to-pixel mappings.
//!
//! Covers the linear position scale, data extents, automatic axis limits
//! with margins, and "nice" tick placement.

use crate::error::{Error, Result};

/// Fraction of the data span added on each side of an autoscaled axis.
pub const DEFAULT_MARGIN: f64 = 0.05;

/// Upper bound on the number of tick intervals per axis.
pub const DEFAULT_MAX_TICKS: usize = 9;

/// Tick steps outside `[SCIENTIFIC_BELOW, SCIENTIFIC_ABOVE)` get exponent labels.
const SCIENTIFIC_BELOW: f64 = 1e-4;
const SCIENTIFIC_ABOVE: f64 = 1e9;

/// Mantissas allowed for tick steps.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale from data values to pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is degenerate or not finite.
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Result<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(Error::ScaleDomain("Domain must be finite".to_string()));
        }
        if is_singular(domain.0, domain.1) {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Nice tick positions inside the domain.
    #[must_use]
    pub fn ticks(&self, max_ticks: usize) -> Ticks {
        Ticks::within(self.domain_min, self.domain_max, max_ticks)
    }
}

impl Scale<f64, f32> for LinearScale {
    fn scale(&self, value: f64) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        (f64::from(self.range_min) + t * f64::from(self.range_max - self.range_min)) as f32
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Running min/max over finite values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    bounds: Option<(f64, f64)>,
}

impl Extent {
    /// An extent that has seen no values.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bounds: None }
    }

    /// Extent of the finite values in `values`.
    #[must_use]
    pub fn of(values: &[f64]) -> Self {
        let mut extent = Self::empty();
        for &v in values {
            extent.include(v);
        }
        extent
    }

    /// Widen the extent to cover `value`. Non-finite values are ignored.
    pub fn include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.bounds = Some(match self.bounds {
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
            None => (value, value),
        });
    }

    /// Merge another extent into this one.
    pub fn merge(&mut self, other: Self) {
        if let Some((lo, hi)) = other.bounds {
            self.include(lo);
            self.include(hi);
        }
    }

    /// `(min, max)` if any finite value was seen.
    #[must_use]
    pub const fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    /// True when no finite value was seen.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }
}

/// Axis view limits derived from a data extent.
///
/// An empty extent yields `(0, 1)`. A single value is widened by 5% of its
/// magnitude (or to `±0.05` around zero). The result is then padded by
/// `margin` of its span on each side, except that padding never pushes
/// past `sticky` when the data sits on that value.
#[must_use]
pub fn auto_limits(extent: Extent, margin: f64, sticky: Option<f64>) -> (f64, f64) {
    let Some((lo, hi)) = extent.bounds() else {
        return (0.0, 1.0);
    };
    let (lo, hi) = nonsingular(lo, hi);

    let pad = (hi - lo) * margin;
    let mut view = (lo - pad, hi + pad);
    if !(view.0.is_finite() && view.1.is_finite()) {
        view = (lo, hi);
    }
    if let Some(s) = sticky {
        if lo >= s && view.0 < s {
            view.0 = s;
        }
        if hi <= s && view.1 > s {
            view.1 = s;
        }
    }
    view
}

/// True when `lo` and `hi` are equal up to rounding at their own magnitude.
fn is_singular(lo: f64, hi: f64) -> bool {
    (hi - lo).abs() <= f64::EPSILON * lo.abs().max(hi.abs())
}

fn nonsingular(lo: f64, hi: f64) -> (f64, f64) {
    const EXPANDER: f64 = 0.05;
    if !is_singular(lo, hi) {
        return (lo, hi);
    }
    if lo == 0.0 && hi == 0.0 {
        (-EXPANDER, EXPANDER)
    } else {
        (lo - EXPANDER * lo.abs(), hi + EXPANDER * hi.abs())
    }
}

/// Tick positions with a shared step.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    /// Tick values in ascending order.
    pub values: Vec<f64>,
    /// Distance between consecutive ticks.
    pub step: f64,
}

impl Ticks {
    /// Nice ticks covering `[lo, hi]` with at most `max_ticks` intervals.
    #[must_use]
    pub fn within(lo: f64, hi: f64, max_ticks: usize) -> Self {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let step = nice_step(hi - lo, max_ticks.max(1));
        if !step.is_finite() || step <= 0.0 {
            return Self {
                values: vec![lo],
                step: 1.0,
            };
        }

        // Tolerance keeps endpoints that land on a tick despite rounding.
        let tol = step * 1e-9;
        let first = ((lo - tol) / step).ceil() as i64;
        let last = ((hi + tol) / step).floor() as i64;

        let values = (first..=last)
            .map(|k| {
                let v = k as f64 * step;
                if v.abs() < tol {
                    0.0
                } else {
                    v
                }
            })
            .collect();

        Self { values, step }
    }

    /// Format a tick value with just enough decimals for the step.
    #[must_use]
    pub fn label(&self, value: f64) -> String {
        if !(SCIENTIFIC_BELOW..SCIENTIFIC_ABOVE).contains(&self.step) {
            let mantissa = self.step / 10f64.powf(self.step.log10().floor());
            let decimals = decimals_for(mantissa) + 1;
            return format!("{value:.decimals$e}");
        }

        let decimals = decimals_for(self.step);
        let text = format!("{value:.decimals$}");
        // "-0", "-0.0" and friends read as noise on an axis.
        if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
            text[1..].to_string()
        } else {
            text
        }
    }

    /// Labels for every tick.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.values.iter().map(|&v| self.label(v)).collect()
    }
}

fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let raw = span / max_ticks as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    NICE_STEPS
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude)
}

fn decimals_for(step: f64) -> usize {
    (0..=6)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0)
        })
        .unwrap_or(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0)).expect("operation should succeed");
        assert_relative_eq!(scale.scale(0.0), 0.0);
        assert_relative_eq!(scale.scale(50.0), 0.5);
        assert_relative_eq!(scale.scale(100.0), 1.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // Pixel rows grow downwards, so y scales run from bottom to top.
        let scale = LinearScale::new((0.0, 10.0), (500.0, 100.0)).expect("operation should succeed");
        assert_relative_eq!(scale.scale(0.0), 500.0);
        assert_relative_eq!(scale.scale(10.0), 100.0);
        assert_relative_eq!(scale.scale(5.0), 300.0);
    }

    #[test]
    fn test_linear_scale_degenerate() {
        assert!(LinearScale::new((1.0, 1.0), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((0.0, 0.0), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((1e6, 1e6 + 1e-12), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_linear_scale_tiny_domain() {
        let scale = LinearScale::new((0.0, 1e-17), (0.0, 100.0)).expect("tiny span is still a span");
        assert_relative_eq!(scale.scale(5e-18), 50.0, epsilon = 1e-3);

        let scale = LinearScale::new((-1e-17, 1e-17), (0.0, 100.0)).expect("tiny span is still a span");
        assert_relative_eq!(scale.scale(0.0), 50.0, epsilon = 1e-3);
    }

    #[test]
    fn test_auto_limits_stay_finite_near_max() {
        let (lo, hi) = auto_limits(Extent::of(&[-f64::MAX, f64::MAX]), DEFAULT_MARGIN, None);
        assert_eq!((lo, hi), (-f64::MAX, f64::MAX));
    }

    #[test]
    fn test_auto_limits_tiny_values_scale() {
        for extent in [
            Extent::of(&[0.0, 1e-17]),
            Extent::of(&[-1e-17, 1e-17]),
            Extent::of(&[1e-17, 2e-17]),
            Extent::of(&[3e-20]),
        ] {
            let (lo, hi) = auto_limits(extent, DEFAULT_MARGIN, Some(0.0));
            assert!(lo < hi);
            assert!(LinearScale::new((lo, hi), (0.0, 1.0)).is_ok(), "{lo}..{hi}");
        }
    }

    #[test]
    fn test_extent_skips_non_finite() {
        let extent = Extent::of(&[3.0, f64::NAN, -1.0, f64::INFINITY, 7.5]);
        assert_eq!(extent.bounds(), Some((-1.0, 7.5)));
        assert!(Extent::of(&[]).is_empty());
        assert!(Extent::of(&[f64::NAN]).is_empty());
    }

    #[test]
    fn test_auto_limits_margin() {
        let (lo, hi) = auto_limits(Extent::of(&[0.0, 10.0]), DEFAULT_MARGIN, None);
        assert_relative_eq!(lo, -0.5);
        assert_relative_eq!(hi, 10.5);
    }

    #[test]
    fn test_auto_limits_sticky_zero() {
        let (lo, hi) = auto_limits(Extent::of(&[0.0, 25.0]), DEFAULT_MARGIN, Some(0.0));
        assert_relative_eq!(lo, 0.0);
        assert_relative_eq!(hi, 26.25);

        let (lo, hi) = auto_limits(Extent::of(&[-4.0, 0.0]), DEFAULT_MARGIN, Some(0.0));
        assert_relative_eq!(lo, -4.2);
        assert_relative_eq!(hi, 0.0);
    }

    #[test]
    fn test_auto_limits_empty_and_single() {
        assert_eq!(auto_limits(Extent::empty(), DEFAULT_MARGIN, None), (0.0, 1.0));

        let (lo, hi) = auto_limits(Extent::of(&[0.0]), 0.0, None);
        assert_relative_eq!(lo, -0.05);
        assert_relative_eq!(hi, 0.05);

        let (lo, hi) = auto_limits(Extent::of(&[10.0]), 0.0, None);
        assert_relative_eq!(lo, 9.5);
        assert_relative_eq!(hi, 10.5);
    }

    #[test]
    fn test_ticks_unit_interval() {
        let ticks = Ticks::within(0.0, 1.0, DEFAULT_MAX_TICKS);
        assert_relative_eq!(ticks.step, 0.2);
        assert_eq!(ticks.labels(), vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
    }

    #[test]
    fn test_ticks_integers() {
        let ticks = Ticks::within(-0.5, 26.25, DEFAULT_MAX_TICKS);
        assert_relative_eq!(ticks.step, 5.0);
        assert_eq!(ticks.labels(), vec!["0", "5", "10", "15", "20", "25"]);
    }

    #[test]
    fn test_ticks_quarter_step_needs_two_decimals() {
        let ticks = Ticks::within(0.0, 0.2, 8);
        assert_relative_eq!(ticks.step, 0.025);
        assert_eq!(ticks.label(0.05), "0.050");
    }

    #[test]
    fn test_tick_label_negative_zero() {
        let ticks = Ticks::within(-1.0, 1.0, 4);
        assert_eq!(ticks.label(-0.0), "0.0");
        assert_eq!(ticks.label(-0.5), "-0.5");
    }

    #[test]
    fn test_tiny_step_labels_use_exponent() {
        let ticks = Ticks::within(0.0, 1e-17, DEFAULT_MAX_TICKS);
        assert!(ticks.step > 0.0 && ticks.step < 1e-17);
        let labels = ticks.labels();
        assert_eq!(labels[0], "0.0e0");
        assert!(labels.iter().skip(1).all(|l| l.contains("e-1")), "{labels:?}");
        // labels stay distinct
        let mut unique = labels.clone();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn test_scale_ticks_stay_in_domain() {
        let scale = LinearScale::new((-3.7, 12.2), (0.0, 100.0)).expect("operation should succeed");
        let ticks = scale.ticks(DEFAULT_MAX_TICKS);
        assert!(!ticks.values.is_empty());
        assert!(ticks.values.iter().all(|&t| (-3.7..=12.2).contains(&t)));
    }
}
