/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// SI magnitude prefixes in steps of three, yocto (10⁻²⁴) up to
/// yotta (10⁺²⁴). This is the full prefix range of the notation
/// codec; magnitudes beyond it are displayed clamped to the
/// boundary prefix.
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
pub enum SiPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Unit,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

pub static SI_PREFIXES: [SiPrefix; 17] = [
    SiPrefix::Yocto,
    SiPrefix::Zepto,
    SiPrefix::Atto,
    SiPrefix::Femto,
    SiPrefix::Pico,
    SiPrefix::Nano,
    SiPrefix::Micro,
    SiPrefix::Milli,
    SiPrefix::Unit,
    SiPrefix::Kilo,
    SiPrefix::Mega,
    SiPrefix::Giga,
    SiPrefix::Tera,
    SiPrefix::Peta,
    SiPrefix::Exa,
    SiPrefix::Zetta,
    SiPrefix::Yotta,
];

impl SiPrefix {
    /// Find the prefix bucket for a power of ten, returning the
    /// residual power left over after the prefix is applied. Powers
    /// beyond ±24 saturate at the boundary prefix, so the residual
    /// absorbs the out-of-range magnitude.
    pub fn from_power(n: i64) -> (i64, Self) {
        match n {
            i64::MIN..=-22 => (n + 24, SiPrefix::Yocto),
            -21..=-19 => (n + 21, SiPrefix::Zepto),
            -18..=-16 => (n + 18, SiPrefix::Atto),
            -15..=-13 => (n + 15, SiPrefix::Femto),
            -12..=-10 => (n + 12, SiPrefix::Pico),
            -9..=-7 => (n + 9, SiPrefix::Nano),
            -6..=-4 => (n + 6, SiPrefix::Micro),
            -3..=-1 => (n + 3, SiPrefix::Milli),
            0..=2 => (n, SiPrefix::Unit),
            3..=5 => (n - 3, SiPrefix::Kilo),
            6..=8 => (n - 6, SiPrefix::Mega),
            9..=11 => (n - 9, SiPrefix::Giga),
            12..=14 => (n - 12, SiPrefix::Tera),
            15..=17 => (n - 15, SiPrefix::Peta),
            18..=20 => (n - 18, SiPrefix::Exa),
            21..=23 => (n - 21, SiPrefix::Zetta),
            24..=i64::MAX => (n - 24, SiPrefix::Yotta),
        }
    }

    pub fn power(&self) -> i64 {
        match self {
            SiPrefix::Yocto => -24,
            SiPrefix::Zepto => -21,
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Unit => 0,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
            SiPrefix::Zetta => 21,
            SiPrefix::Yotta => 24,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SiPrefix::Yocto => "y",
            SiPrefix::Zepto => "z",
            SiPrefix::Atto => "a",
            SiPrefix::Femto => "f",
            SiPrefix::Pico => "p",
            SiPrefix::Nano => "n",
            SiPrefix::Micro => "µ",
            SiPrefix::Milli => "m",
            SiPrefix::Unit => "",
            SiPrefix::Kilo => "k",
            SiPrefix::Mega => "M",
            SiPrefix::Giga => "G",
            SiPrefix::Tera => "T",
            SiPrefix::Peta => "P",
            SiPrefix::Exa => "E",
            SiPrefix::Zetta => "Z",
            SiPrefix::Yotta => "Y",
        }
    }

    pub fn multiplier(&self) -> f64 {
        10f64.powi(self.power() as i32)
    }
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}
