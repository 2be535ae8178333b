//! Integration tests for the reference market: a rising zero curve and a
//! two-pillar variance curve anchored on a fixed evaluation date.

use approx::assert_relative_eq;
use pricer_core::market_data::curves::{
    CurveEnum, CurveInterpolation, InterpolatedCurve, YieldCurve,
};
use pricer_core::market_data::surfaces::{BlackVarianceCurve, VolatilityEnum, VolatilitySurface};
use pricer_core::market_data::MarketDataError;
use pricer_core::types::{Date, DayCountConvention};

fn evaluation_date() -> Date {
    Date::from_ymd(2022, 2, 24).unwrap()
}

fn zero_curve() -> CurveEnum<f64> {
    let today = evaluation_date();
    InterpolatedCurve::from_dates(
        today,
        &[today, today.add_months(6).unwrap()],
        &[0.01, 0.015],
        DayCountConvention::ActualActual365,
        CurveInterpolation::Linear,
        false,
    )
    .unwrap()
    .into()
}

fn variance_curve() -> VolatilityEnum<f64> {
    let today = evaluation_date();
    BlackVarianceCurve::from_dates(
        today,
        &[today.add_months(3).unwrap(), today.add_months(6).unwrap()],
        &[0.20, 0.25],
        DayCountConvention::ActualActual365,
    )
    .unwrap()
    .into()
}

#[test]
fn test_zero_rate_at_option_maturity() {
    let today = evaluation_date();
    let maturity = Date::from_ymd(2022, 5, 24).unwrap();
    let dc = DayCountConvention::ActualActual365;
    let t = dc.year_fraction_dates(today, maturity);
    let t_6m = dc.year_fraction_dates(today, today.add_months(6).unwrap());

    let r = zero_curve().zero_rate(t).unwrap();
    assert_relative_eq!(r, 0.01 + 0.005 * t / t_6m, epsilon = 1e-12);
}

#[test]
fn test_option_maturity_hits_first_vol_pillar() {
    let today = evaluation_date();
    let maturity = Date::from_ymd(2022, 5, 24).unwrap();
    let t = DayCountConvention::ActualActual365.year_fraction_dates(today, maturity);

    // 2022-05-24 is exactly the 3M pillar.
    let vol = variance_curve().volatility(36.0, t).unwrap();
    assert_relative_eq!(vol, 0.20, epsilon = 1e-12);
}

#[test]
fn test_time_zero_lookups_are_finite() {
    let r = zero_curve().zero_rate(0.0).unwrap();
    let v = variance_curve().volatility(36.0, 0.0).unwrap();
    assert!(r.is_finite() && v.is_finite());
    assert_relative_eq!(r, 0.01, epsilon = 1e-5);
}

#[test]
fn test_past_maturity_is_rejected() {
    assert!(matches!(
        zero_curve().zero_rate(-0.01),
        Err(MarketDataError::InvalidMaturity { .. })
    ));
    assert!(matches!(
        variance_curve().volatility(36.0, -0.01),
        Err(MarketDataError::InvalidExpiry { .. })
    ));
}

#[test]
fn test_forward_rate_between_pillars() {
    let curve = zero_curve();
    let f = curve.forward_rate(0.1, 0.2).unwrap();
    let expected =
        (curve.zero_rate(0.2).unwrap() * 0.2 - curve.zero_rate(0.1).unwrap() * 0.1) / 0.1;
    assert_relative_eq!(f, expected, epsilon = 1e-12);
}
