//! Continuous scales
//!
//! Small equivalents of the linear / square-root / time scales a chart needs.
//! A degenerate domain (`d0 == d1`) never divides by zero: it maps every value
//! to the middle of the range.

use chrono::{DateTime, Duration, DurationRound, Utc};

/// Linear mapping from a numeric domain to a numeric range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Replace the domain, keeping the range
    pub fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (value - r0) / (r1 - r0) * (d1 - d0)
    }
}

/// Square-root scale (linear in `sqrt(value)`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    domain: (f64, f64),
    inner: LinearScale,
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            inner: LinearScale::new((signed_sqrt(domain.0), signed_sqrt(domain.1)), range),
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.inner.range()
    }

    pub fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
        self.inner
            .set_domain((signed_sqrt(domain.0), signed_sqrt(domain.1)));
    }

    pub fn map(&self, value: f64) -> f64 {
        self.inner.map(signed_sqrt(value))
    }
}

fn signed_sqrt(value: f64) -> f64 {
    value.signum() * value.abs().sqrt()
}

/// Linear mapping from instants to a numeric range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (DateTime<Utc>, DateTime<Utc>),
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        Self {
            domain,
            inner: LinearScale::new(millis(domain), range),
        }
    }

    pub fn domain(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.inner.range()
    }

    pub fn set_domain(&mut self, domain: (DateTime<Utc>, DateTime<Utc>)) {
        self.domain = domain;
        self.inner.set_domain(millis(domain));
    }

    /// Extend the domain outward to whole UTC days
    pub fn nice_days(&mut self) {
        let (start, end) = self.domain;
        let day = Duration::days(1);
        let floor = start.duration_trunc(day).unwrap_or(start);
        let mut ceil = end.duration_trunc(day).unwrap_or(end);
        if ceil < end {
            ceil += day;
        }
        self.set_domain((floor, ceil));
    }

    pub fn map(&self, instant: DateTime<Utc>) -> f64 {
        self.inner.map(instant.timestamp_millis() as f64)
    }

    pub fn invert(&self, value: f64) -> DateTime<Utc> {
        let ms = self.inner.invert(value).round() as i64;
        DateTime::from_timestamp_millis(ms).unwrap_or(self.domain.0)
    }

    /// `count` evenly spaced instants across the domain (inclusive)
    pub fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        let (start, end) = self.domain;
        if count < 2 || start == end {
            return vec![start];
        }
        let step = (end - start) / (count as i32 - 1);
        (0..count).map(|i| start + step * i as i32).collect()
    }
}

fn millis(domain: (DateTime<Utc>, DateTime<Utc>)) -> (f64, f64) {
    (
        domain.0.timestamp_millis() as f64,
        domain.1.timestamp_millis() as f64,
    )
}

/// Min and max of `values`, or `None` if empty
pub fn extent<T: PartialOrd + Copy>(values: impl IntoIterator<Item = T>) -> Option<(T, T)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((
            if v < lo { v } else { lo },
            if v > hi { v } else { hi },
        )),
    })
}
