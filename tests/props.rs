/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use proptest::prelude::*;

use eevalue::{
    format_notation, normalize, parse_notation, series_index, series_value,
    EeValue, FitMode, Series, SiPrefix, SERIES,
};

fn any_series() -> impl Strategy<Value = Series> {
    proptest::sample::select(&SERIES[..])
}

proptest! {
    /* Inverse lookup of a non-override series value lands back on
     * the index it came from (the table rounding shifts the
     * continuous index by well under half a step). */
    #[test]
    fn series_value_index_round_trip(
        series in any_series(),
        idx in 0i64..192,
    ) {
        prop_assume!(idx < series.steps() as i64);
        let value = series_value(series, idx, false);
        let cont = series_index(series, value);
        prop_assert!((cont - idx as f64).abs() < 0.5);
        prop_assert_eq!(cont.round() as i64, idx);
    }

    #[test]
    fn encode_decode_encode_is_stable(
        base in 1.0f64..10.0,
        exponent in -26i32..=26,
        precision in 0usize..5,
    ) {
        let value = base * 10f64.powi(exponent);
        let text = format_notation(value, precision);
        let decoded = parse_notation(&text).unwrap();
        prop_assume!(decoded != 0.0);
        /* Display rounding may legitimately carry the value into
         * the next prefix bucket ("1000 m" decodes to "1 ");
         * stability is only promised within a bucket. */
        let bucket = |v: f64| SiPrefix::from_power(normalize(v).1 as i64).1;
        prop_assume!(bucket(value) == bucket(decoded));
        prop_assert_eq!(format_notation(decoded, precision), text);
    }

    /* Fitting snaps onto the series: fitting the result again is a
     * no-op, and ceil/floor bracket the value. */
    #[test]
    fn fit_is_idempotent(
        series in any_series(),
        base in 1.0f64..10.0,
        legacy in any::<bool>(),
    ) {
        let val = EeValue::new(base, 2);
        let fitted = val.fit(series, FitMode::Round, legacy);
        let refitted = fitted.fit(series, FitMode::Round, legacy);
        prop_assert_eq!(fitted, refitted);
    }

    #[test]
    fn ceil_and_floor_bracket(
        series in any_series(),
        base in 1.0f64..10.0,
    ) {
        /* The non-legacy tables are monotonic, so the ceiling fit
         * never lands below the floor fit. */
        let val = EeValue::new(base, 2);
        let lo = val.fit(series, FitMode::Floor, false);
        let hi = val.fit(series, FitMode::Ceil, false);
        prop_assert!(lo <= hi);
    }

    #[test]
    fn precision_propagates_max(
        a in -1e6f64..1e6,
        b in -1e6f64..1e6,
        pa in 0usize..9,
        pb in 0usize..9,
    ) {
        let lhs = EeValue::new(a, pa);
        let rhs = EeValue::new(b, pb);
        prop_assert_eq!((lhs + rhs).precision(), pa.max(pb));
        prop_assert_eq!((lhs * rhs).precision(), pa.max(pb));
        prop_assert_eq!((lhs - rhs).precision(), pa.max(pb));
    }
}
