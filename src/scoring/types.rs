use serde::{Serialize, Serializer};
use std::fmt;

/// The three PWA sub-scores: Fast & Reliable, Installable, PWA Optimized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PwaScores<T> {
    pub fnr: T,
    pub ins: T,
    pub po: T,
}

impl<T: Copy> PwaScores<T> {
    pub fn map<U>(self, f: impl Fn(T) -> U) -> PwaScores<U> {
        PwaScores {
            fnr: f(self.fnr),
            ins: f(self.ins),
            po: f(self.po),
        }
    }

    pub fn zip_with<U>(self, other: Self, f: impl Fn(T, T) -> U) -> PwaScores<U> {
        PwaScores {
            fnr: f(self.fnr, other.fnr),
            ins: f(self.ins, other.ins),
            po: f(self.po, other.po),
        }
    }
}

/// One row of Lighthouse category scores plus their composite average.
///
/// `T` is `f64` for fractions in 0..1 (or signed diffs) and [`Percent`]
/// for the formatted form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores<T> {
    pub perf: T,
    pub a11y: T,
    pub bp: T,
    pub seo: T,
    pub pwa: PwaScores<T>,
    pub average: T,
}

impl<T: Copy> Scores<T> {
    pub fn map<U>(self, f: impl Fn(T) -> U) -> Scores<U> {
        Scores {
            perf: f(self.perf),
            a11y: f(self.a11y),
            bp: f(self.bp),
            seo: f(self.seo),
            pwa: self.pwa.map(&f),
            average: f(self.average),
        }
    }

    pub fn zip_with<U>(self, other: Self, f: impl Fn(T, T) -> U) -> Scores<U> {
        Scores {
            perf: f(self.perf, other.perf),
            a11y: f(self.a11y, other.a11y),
            bp: f(self.bp, other.bp),
            seo: f(self.seo, other.seo),
            pwa: self.pwa.zip_with(other.pwa, &f),
            average: f(self.average, other.average),
        }
    }

    /// The seven averaged components: perf, a11y, bp, seo, fnr, ins, po.
    pub fn components(&self) -> [T; 7] {
        [
            self.perf,
            self.a11y,
            self.bp,
            self.seo,
            self.pwa.fnr,
            self.pwa.ins,
            self.pwa.po,
        ]
    }

    /// All eight values in display order, average last.
    pub fn columns(&self) -> [T; 8] {
        let [perf, a11y, bp, seo, fnr, ins, po] = self.components();
        [perf, a11y, bp, seo, fnr, ins, po, self.average]
    }
}

/// Scores as fractions in 0..1.
pub type Metrics = Scores<f64>;

impl Metrics {
    /// Build a row from its seven components, computing the unweighted mean.
    pub fn from_components(perf: f64, a11y: f64, bp: f64, seo: f64, pwa: PwaScores<f64>) -> Self {
        let mut metrics = Scores {
            perf,
            a11y,
            bp,
            seo,
            pwa,
            average: 0.0,
        };
        let components = metrics.components();
        metrics.average = components.iter().sum::<f64>() / components.len() as f64;
        metrics
    }

    /// Absolute per-field difference `self - reference`.
    pub fn diff(&self, reference: &Metrics) -> Metrics {
        self.zip_with(*reference, |value, base| value - base)
    }
}

/// A percentage rounded half-up to two decimal places, shown as `"33.33%"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(f64);

impl Percent {
    /// Convert a fraction: `round(x * 10000) / 100`, ties toward +infinity.
    pub fn from_fraction(fraction: f64) -> Self {
        Percent((fraction * 10_000.0 + 0.5).floor() / 100.0)
    }

    /// The rounded percentage as a number, e.g. `33.33`.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Format a fraction as a percentage string, e.g. `0.14` -> `"14%"`.
pub fn format_percentage(fraction: f64) -> String {
    Percent::from_fraction(fraction).to_string()
}

/// A value that can appear in a score row.
pub trait ScoreValue: Copy + fmt::Display {
    /// Numeric value used for sign checks.
    fn as_f64(self) -> f64;
}

impl ScoreValue for f64 {
    fn as_f64(self) -> f64 {
        self
    }
}

impl ScoreValue for Percent {
    fn as_f64(self) -> f64 {
        self.0
    }
}

/// A computed row, either as raw fractions or formatted percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreReport {
    Numeric(Metrics),
    Percentage(Scores<Percent>),
}

impl ScoreReport {
    pub fn from_metrics(metrics: Metrics, as_percentage: bool) -> Self {
        if as_percentage {
            ScoreReport::Percentage(metrics.map(Percent::from_fraction))
        } else {
            ScoreReport::Numeric(metrics)
        }
    }

    /// Cell text for every column, in [`Scores::columns`] order.
    pub fn column_strings(&self) -> [String; 8] {
        match self {
            ScoreReport::Numeric(scores) => scores.columns().map(|v| v.to_string()),
            ScoreReport::Percentage(scores) => scores.columns().map(|v| v.to_string()),
        }
    }
}
