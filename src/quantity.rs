/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Rem, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EeError;
use crate::notation::{format_notation, normalize};
use crate::parser::parse_notation;
use crate::series::{series_index, series_value, FitMode, Series};

pub const DEFAULT_PRECISION: usize = 2;

/// An EE-friendly value: a magnitude plus the display precision it
/// renders with. The normalized form (base in [1,10) and decimal
/// exponent) is derived once at construction; every transforming
/// operation returns a new value, so instances never change after
/// construction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(from = "EeValueRepr", into = "EeValueRepr")]
pub struct EeValue {
    value: f64,
    precision: usize,
    base: f64,
    exponent: i32,
}

impl EeValue {
    pub fn new(value: f64, precision: usize) -> Self {
        let (base, exponent) = normalize(value);
        EeValue {
            value,
            precision,
            base,
            exponent,
        }
    }

    /// Checked constructor for externally supplied precisions.
    pub fn try_new(value: f64, precision: i64) -> Result<Self, EeError> {
        usize::try_from(precision)
            .map(|precision| Self::new(value, precision))
            .map_err(|_| EeError::InvalidPrecision(precision))
    }

    /// Parse EE shorthand notation ("4k7", "4.7k", "100R", "3.1").
    pub fn parse(input: &str, precision: usize) -> Result<Self, EeError> {
        Ok(Self::new(parse_notation(input)?, precision))
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Normalized mantissa in [1,10), taken from the absolute
    /// value; 0 for a zero magnitude.
    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn with_precision(self, precision: usize) -> Self {
        Self::new(self.value, precision)
    }

    /// Snap to the series value nearest the magnitude (or the next
    /// one up/down, per `mode`), keeping the order of magnitude and
    /// the display precision. With `legacy`, the historical E24
    /// substitutions apply in the coarse series.
    pub fn fit(&self, series: Series, mode: FitMode, legacy: bool) -> EeValue {
        if self.value == 0.0 || !self.value.is_finite() {
            return *self;
        }

        let cont = series_index(series, self.base);
        let mut idx = match mode {
            FitMode::Round => cont.round() as i64,
            FitMode::Ceil => cont.ceil() as i64,
            FitMode::Floor => cont.floor() as i64,
        };

        if mode == FitMode::Round && series.is_coarse() {
            /* Rounding the continuous index does not always land on
             * the nearest value once the legacy overrides distort
             * the geometric spacing. Compare against both
             * neighbours; the first minimum wins. */
            let dists = [-1i64, 0, 1].map(|d| {
                (self.base - series_value(series, idx + d, legacy)).abs()
            });
            let mut best = 0;
            for (i, dist) in dists.iter().enumerate() {
                if *dist < dists[best] {
                    best = i;
                }
            }
            idx += best as i64 - 1;
        }

        EeValue::new(
            series_value(series, idx, legacy) * 10f64.powi(self.exponent),
            self.precision,
        )
    }

    /// Render to notation with this value's precision.
    pub fn to_notation(&self) -> String {
        format_notation(self.value, self.precision)
    }

    pub fn floor_div(&self, rhs: EeValue) -> EeValue {
        self.rewrap(Some(&rhs), (self.value / rhs.value).floor())
    }

    /// Floor quotient and the matching remainder, so that
    /// `quot * rhs + rem == self`.
    pub fn div_mod(&self, rhs: EeValue) -> (EeValue, EeValue) {
        let quot = (self.value / rhs.value).floor();
        (
            self.rewrap(Some(&rhs), quot),
            self.rewrap(Some(&rhs), self.value - quot * rhs.value),
        )
    }

    pub fn powf(&self, exp: f64) -> EeValue {
        self.rewrap(None, self.value.powf(exp))
    }

    pub fn pow(&self, exp: EeValue) -> EeValue {
        self.rewrap(Some(&exp), self.value.powf(exp.value))
    }

    /* Wrap an arithmetic result, keeping the larger display
     * precision when both operands carry one. */
    fn rewrap(&self, other: Option<&EeValue>, res: f64) -> EeValue {
        let precision = match other {
            Some(other) => self.precision.max(other.precision),
            None => self.precision,
        };
        EeValue::new(res, precision)
    }
}

impl Display for EeValue {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_notation())
    }
}

impl FromStr for EeValue {
    type Err = EeError;
    fn from_str(s: &str) -> Result<Self, EeError> {
        Self::parse(s, DEFAULT_PRECISION)
    }
}

impl From<f64> for EeValue {
    fn from(value: f64) -> Self {
        Self::new(value, DEFAULT_PRECISION)
    }
}

/* It is a number; display precision does not take part in
 * comparisons. */

impl PartialEq for EeValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<f64> for EeValue {
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl PartialEq<EeValue> for f64 {
    fn eq(&self, other: &EeValue) -> bool {
        *self == other.value
    }
}

impl PartialOrd for EeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl PartialOrd<f64> for EeValue {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl PartialOrd<EeValue> for f64 {
    fn partial_cmp(&self, other: &EeValue) -> Option<Ordering> {
        self.partial_cmp(&other.value)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<EeValue> for EeValue {
            type Output = EeValue;
            fn $method(self, rhs: EeValue) -> EeValue {
                self.rewrap(Some(&rhs), self.value $op rhs.value)
            }
        }

        impl $trait<f64> for EeValue {
            type Output = EeValue;
            fn $method(self, rhs: f64) -> EeValue {
                self.rewrap(None, self.value $op rhs)
            }
        }

        impl $trait<EeValue> for f64 {
            type Output = EeValue;
            fn $method(self, rhs: EeValue) -> EeValue {
                rhs.rewrap(None, self $op rhs.value)
            }
        }
    };
}

impl_binop!(Add, add, +);
impl_binop!(Sub, sub, -);
impl_binop!(Mul, mul, *);
impl_binop!(Div, div, /);
impl_binop!(Rem, rem, %);

/* Serialized form; the normalized fields are derived, not stored. */

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
struct EeValueRepr {
    value: f64,
    precision: usize,
}

impl From<EeValueRepr> for EeValue {
    fn from(repr: EeValueRepr) -> Self {
        EeValue::new(repr.value, repr.precision)
    }
}

impl From<EeValue> for EeValueRepr {
    fn from(val: EeValue) -> Self {
        EeValueRepr {
            value: val.value,
            precision: val.precision,
        }
    }
}
