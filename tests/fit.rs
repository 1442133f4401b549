/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use eevalue::{series_value, series_values, EeValue, FitMode, Series, SERIES};

/* Hand-picked from the actual E-series tables, per mode. */
static ROUND: [f64; 7] = [2.2, 3.3, 3.3, 3.0, 3.16, 3.09, 3.09];
static FLOOR: [f64; 7] = [2.2, 2.2, 2.7, 3.0, 3.01, 3.09, 3.09];
static CEIL: [f64; 7] = [4.7, 3.3, 3.3, 3.3, 3.16, 3.16, 3.12];

#[test]
fn fit_all_series() {
    let val = EeValue::new(3.1, 2);
    for (i, series) in SERIES.iter().enumerate() {
        assert_eq!(val.fit(*series, FitMode::Round, true), ROUND[i]);
        assert_eq!(val.fit(*series, FitMode::Floor, true), FLOOR[i]);
        assert_eq!(val.fit(*series, FitMode::Ceil, true), CEIL[i]);
    }
}

#[test]
fn fit_keeps_magnitude_and_precision() {
    let fitted = EeValue::new(3100.0, 5).fit(Series::E24, FitMode::Round, true);
    assert_eq!(fitted, 3000.0);
    assert_eq!(fitted.precision(), 5);
    assert_eq!(fitted.exponent(), 3);

    let fitted =
        EeValue::new(0.0031, 2).fit(Series::E24, FitMode::Round, true);
    assert!((fitted.value() - 0.003).abs() < 1e-15);
    assert_eq!(fitted.exponent(), -3);
}

#[test]
fn fit_zero() {
    let zero = EeValue::new(0.0, 2);
    assert_eq!(zero.fit(Series::E96, FitMode::Round, true), 0.0);
    assert_eq!(zero.fit(Series::E3, FitMode::Ceil, true), 0.0);
}

#[test]
fn fit_is_idempotent_on_series_values() {
    for series in SERIES {
        for legacy in [true, false] {
            for value in series_values(series, legacy) {
                let fitted = EeValue::new(value, 2)
                    .fit(series, FitMode::Round, legacy);
                assert_eq!(fitted, value, "{} on {}", value, series);
            }
        }
    }
}

#[test]
fn legacy_overrides() {
    assert_eq!(series_value(Series::E24, 10, true), 2.7);
    assert_eq!(series_value(Series::E24, 16, true), 4.7);
    assert_eq!(series_value(Series::E24, 22, true), 8.2);

    /* Without the substitutions, the rounded geometric values. */
    assert_eq!(series_value(Series::E24, 10, false), 2.6);
    assert_eq!(series_value(Series::E24, 16, false), 4.6);
    assert_eq!(series_value(Series::E24, 22, false), 8.3);

    /* The overrides are keyed on the E24-equivalent index, so they
     * apply at the rescaled slots of the lower series too. */
    assert_eq!(series_value(Series::E3, 2, true), 4.7);
    assert_eq!(series_value(Series::E6, 3, true), 3.3);
    assert_eq!(series_value(Series::E12, 5, true), 2.7);
}

#[test]
fn series_tables() {
    assert_eq!(
        series_values(Series::E3, true).collect::<Vec<_>>(),
        vec![1.0, 2.2, 4.7]
    );
    assert_eq!(
        series_values(Series::E12, true).collect::<Vec<_>>(),
        vec![1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2]
    );
    assert_eq!(
        series_values(Series::E24, true).collect::<Vec<_>>(),
        vec![
            1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3,
            3.6, 3.9, 4.3, 4.7, 5.1, 5.6, 6.2, 6.8, 7.5, 8.2, 9.1
        ]
    );
    assert_eq!(series_values(Series::E96, true).count(), 96);
}

#[test]
fn series_boundaries() {
    let mode = FitMode::Round;
    /* Below the first and above the last in-decade value. */
    assert_eq!(EeValue::new(1.01, 2).fit(Series::E24, mode, true), 1.0);
    assert_eq!(EeValue::new(9.9, 2).fit(Series::E24, mode, true), 10.0);
}
