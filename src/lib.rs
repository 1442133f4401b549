/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod error;
pub mod notation;
pub mod parser;
pub mod prefix;
pub mod quantity;
pub mod series;

pub use error::EeError;
pub use notation::{format_notation, normalize};
pub use parser::parse_notation;
pub use prefix::{SiPrefix, SI_PREFIXES};
pub use quantity::{EeValue, DEFAULT_PRECISION};
pub use series::{
    series_index, series_value, series_values, FitMode, Series, SERIES,
};
