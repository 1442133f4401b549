/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum EeError {
    #[error("Notation parse error: {0}")]
    ParseError(String),
    #[error("Invalid rounding mode: {0} (expected \"round\", \"ceil\" or \"floor\")")]
    InvalidMode(String),
    #[error("Invalid precision: {0} (must be >= 0)")]
    InvalidPrecision(i64),
    #[error("Invalid E-series: E{0}")]
    InvalidSeries(u32),
}
