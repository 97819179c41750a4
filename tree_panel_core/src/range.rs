use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.as_inclusive().contains(&value)
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    pub fn as_inclusive(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.as_inclusive().contains(&value)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn as_inclusive(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }
}

/// Maps a leaf's key to the bounds of the slider that edits it.
///
/// Lookup order is exact name, then the first substring rule that matches,
/// then the per-type default. Every name resolves to some range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangePolicy {
    pub int_exact: Vec<(String, IntRange)>,
    pub int_contains: Vec<(String, IntRange)>,
    pub int_default: IntRange,
    pub float_exact: Vec<(String, FloatRange)>,
    pub float_contains: Vec<(String, FloatRange)>,
    pub float_default: FloatRange,
}

impl Default for RangePolicy {
    fn default() -> Self {
        let ints = [
            ("num_per", IntRange::new(0, 10)),
            ("num_abs", IntRange::new(0, 200)),
            ("num_trials", IntRange::new(1, 200)),
        ];
        let floats = [
            ("max_val", FloatRange::new(0.1, 20.0)),
            ("range", FloatRange::new(0.001, 0.1)),
            ("local_spread", FloatRange::new(0.001, 0.1)),
            ("max_angle", FloatRange::new(0.0, 360.0)),
            ("segment_length", FloatRange::new(0.001, 0.1)),
        ];
        // "eval" wins over "iso" when a name contains both
        let float_substrings = [
            ("eval", FloatRange::new(0.0, 10.0)),
            ("iso", FloatRange::new(0.0, 50.0)),
        ];

        Self {
            int_exact: owned(&ints),
            int_contains: Vec::new(),
            int_default: IntRange::new(0, 10),
            float_exact: owned(&floats),
            float_contains: owned(&float_substrings),
            float_default: FloatRange::new(0.0, 1.0),
        }
    }
}

fn owned<R: Copy>(table: &[(&str, R)]) -> Vec<(String, R)> {
    table
        .iter()
        .map(|(name, range)| (name.to_string(), *range))
        .collect()
}

fn lookup<R: Copy>(exact: &[(String, R)], contains: &[(String, R)], name: &str) -> Option<R> {
    exact
        .iter()
        .find(|(key, _)| key == name)
        .or_else(|| contains.iter().find(|(needle, _)| name.contains(needle.as_str())))
        .map(|(_, range)| *range)
}

impl RangePolicy {
    pub fn int_range(&self, name: &str) -> IntRange {
        lookup(&self.int_exact, &self.int_contains, name).unwrap_or(self.int_default)
    }

    pub fn float_range(&self, name: &str) -> FloatRange {
        lookup(&self.float_exact, &self.float_contains, name).unwrap_or(self.float_default)
    }
}
