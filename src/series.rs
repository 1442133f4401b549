/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EeError;

/// The standardized E-series of preferred values, E3 up to E192.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(clap::ValueEnum)]
pub enum Series {
    E3,
    E6,
    E12,
    E24,
    E48,
    E96,
    E192,
}

pub static SERIES: [Series; 7] = [
    Series::E3,
    Series::E6,
    Series::E12,
    Series::E24,
    Series::E48,
    Series::E96,
    Series::E192,
];

/// Rounding policy when fitting a value to a series.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(clap::ValueEnum)]
pub enum FitMode {
    Round,
    Ceil,
    Floor,
}

/* The historical E24 substitutions. Manufacturers standardized a
 * few rounder numbers in the coarse series instead of the exact
 * geometric values; catalogs still list these. */
static E24_OVERRIDE_INDICES: [i64; 8] = [10, 11, 12, 13, 14, 15, 16, 22];
static E24_OVERRIDE_VALUES: [f64; 8] =
    [2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 8.2];

impl Series {
    /// Number of values per decade.
    pub fn steps(&self) -> u32 {
        match self {
            Series::E3 => 3,
            Series::E6 => 6,
            Series::E12 => 12,
            Series::E24 => 24,
            Series::E48 => 48,
            Series::E96 => 96,
            Series::E192 => 192,
        }
    }

    /// The coarse series (E24 and below) round to one decimal and
    /// carry the historical overrides.
    pub fn is_coarse(&self) -> bool {
        self.steps() <= 24
    }
}

impl TryFrom<u32> for Series {
    type Error = EeError;
    fn try_from(n: u32) -> Result<Self, EeError> {
        SERIES
            .iter()
            .find(|s| s.steps() == n)
            .copied()
            .ok_or(EeError::InvalidSeries(n))
    }
}

impl FromStr for Series {
    type Err = EeError;
    fn from_str(s: &str) -> Result<Self, EeError> {
        let digits = s.strip_prefix(['e', 'E']).unwrap_or(s);
        let n = digits.parse::<u32>().map_err(|_| {
            EeError::ParseError(format!("Not an E-series: {}", s))
        })?;
        Self::try_from(n)
    }
}

impl Display for Series {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "E{}", self.steps())
    }
}

impl FromStr for FitMode {
    type Err = EeError;
    fn from_str(s: &str) -> Result<Self, EeError> {
        match s {
            "round" => Ok(FitMode::Round),
            "ceil" => Ok(FitMode::Ceil),
            "floor" => Ok(FitMode::Floor),
            _ => Err(EeError::InvalidMode(s.to_string())),
        }
    }
}

impl Display for FitMode {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            FitMode::Round => write!(f, "round"),
            FitMode::Ceil => write!(f, "ceil"),
            FitMode::Floor => write!(f, "floor"),
        }
    }
}

/// Theoretical base value of a series at an index: the steps-th
/// root of 10^idx, rounded to one decimal for the coarse series and
/// two for the fine ones. With `legacy` enabled, the historical E24
/// substitutions replace the computed value at the anomalous slots
/// (keyed on the index rescaled to its E24 equivalent). Indices
/// outside [0, steps) extrapolate into the neighbouring decades.
pub fn series_value(series: Series, idx: i64, legacy: bool) -> f64 {
    let steps = series.steps();
    let computed = 10f64.powf(idx as f64 / steps as f64);

    if series.is_coarse() {
        let e24_idx = idx * (24 / steps as i64);
        if legacy {
            if let Some(pos) =
                E24_OVERRIDE_INDICES.iter().position(|i| *i == e24_idx)
            {
                return E24_OVERRIDE_VALUES[pos];
            }
        }
        round_to(computed, 1)
    } else {
        round_to(computed, 2)
    }
}

/// Continuous inverse of `series_value`: the (unrounded) index a
/// base value corresponds to. Callers choose the rounding policy.
pub fn series_index(series: Series, base: f64) -> f64 {
    series.steps() as f64 * base.log10()
}

/// The values of a series in index order, one decade's worth.
pub fn series_values(
    series: Series,
    legacy: bool,
) -> impl Iterator<Item = f64> {
    (0..series.steps() as i64).map(move |idx| series_value(series, idx, legacy))
}

fn round_to(val: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (val * factor).round() / factor
}
