// File: crates/ghg-core/src/scale.rs
// Summary: Linear value (Y) and calendar time (X) scales with inversion, nicing and tick generation.

use chrono::{Datelike, NaiveDate};

/// Value Y coordinate (e.g. kg CO2e).
pub type Value = f64;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Linear map from a continuous domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: Value,
    pub d1: Value,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (Value, Value) { (self.d0, self.d1) }

    #[inline]
    pub fn to_px(&self, v: Value) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 || !span.is_finite() {
            return (self.r0 + self.r1) * 0.5;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> Value {
        let span = self.r1 - self.r0;
        if span == 0.0 {
            return self.d0;
        }
        self.d0 + (px - self.r0) / span * (self.d1 - self.d0)
    }

    /// Extend the domain outward to round values, as d3's `nice()`.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = (self.d0, self.d1);
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        self.d0 = start;
        self.d1 = stop;
        self
    }

    /// Approximately `count` round tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        let (start, stop) = if self.d0 <= self.d1 { (self.d0, self.d1) } else { (self.d1, self.d0) };
        if !(stop > start) || count == 0 {
            return if start.is_finite() { vec![start] } else { Vec::new() };
        }
        let inc = tick_increment(start, stop, count);
        if inc > 0.0 {
            let lo = (start / inc).ceil() as i64;
            let hi = (stop / inc).floor() as i64;
            (lo..=hi).map(|i| i as f64 * inc).collect()
        } else if inc < 0.0 {
            let lo = (start * -inc).ceil() as i64;
            let hi = (stop * -inc).floor() as i64;
            (lo..=hi).map(|i| i as f64 / -inc).collect()
        } else {
            Vec::new()
        }
    }
}

/// Power-of-ten step (1, 2 or 5 times) that splits `[start, stop]` into about `count`
/// intervals. Negative results encode the reciprocal of a fractional step.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !(step > 0.0) || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Day number used as the continuous time coordinate.
#[inline]
pub fn date_to_days(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

/// Calendar date containing the continuous time coordinate `days`.
pub fn days_to_date(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() {
        return None;
    }
    let whole = days.floor();
    if whole < i32::MIN as f64 || whole > i32::MAX as f64 {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(whole as i32)
}

/// Horizontal calendar scale; dates are mapped through their day number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { inner: LinearScale::new((date_to_days(domain.0), date_to_days(domain.1)), range) }
    }

    #[inline]
    pub fn to_px(&self, d: NaiveDate) -> f64 {
        self.inner.to_px(date_to_days(d))
    }

    /// Continuous time (day number) under pixel `px`.
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        self.inner.from_px(px)
    }

    pub fn domain_dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((days_to_date(self.inner.d0)?, days_to_date(self.inner.d1)?))
    }

    /// January 1st of every year inside the domain.
    pub fn year_ticks(&self) -> Vec<NaiveDate> {
        let Some((a, b)) = self.domain_dates() else { return Vec::new() };
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let first = if lo.ordinal() == 1 { lo.year() } else { lo.year() + 1 };
        (first..=hi.year())
            .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
            .collect()
    }
}
