//! 표준 카탈로그 변환 회귀 테스트. 기대값은 단위 정의에서 직접 계산한다.
use metric_toolbox::catalog::UnitTable;
use metric_toolbox::conversion::{convert, try_convert};
use metric_toolbox::quantity::Length;
use metric_toolbox::units::*;

const RAD_PER_DEG: f64 = std::f64::consts::PI / 180.0;

fn assert_close(label: &str, actual: f64, expected: f64) {
    let tol = 4.0 * f64::EPSILON * (actual.abs() + expected.abs());
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:e} got {actual:e} (diff {diff:e})"
    );
}

#[test]
fn length() {
    // with metre
    assert_close("m->si", convert(METRE, SI, 1.0), 1.0);
    assert_close("m->m", convert(METRE, METRE, 2.0), 2.0);
    assert_close("m->NM", convert(METRE, NAUTICAL_MILE, 3.0), 3.0 / 1852.0);
    assert_close("m->yd", convert(METRE, YARD, 4.0), 4.0 / 0.9144);
    assert_close("m->km", convert(METRE, KILOMETRE, 5.0), 5.0 / 1000.0);
    assert_close("m->kyd", convert(METRE, KILOYARD, 6.0), 6.0 / 914.4);
    assert_close("si->m", convert(SI, METRE, 6.0), 6.0);
    assert_close("NM->m", convert(NAUTICAL_MILE, METRE, 4.0), 4.0 * 1852.0);
    assert_close("yd->m", convert(YARD, METRE, 3.0), 3.0 * 0.9144);
    assert_close("km->m", convert(KILOMETRE, METRE, 2.0), 2.0 * 1000.0);
    assert_close("kyd->m", convert(KILOYARD, METRE, 1.0), 914.4);
    // without metre
    assert_close("NM->yd", convert(NAUTICAL_MILE, YARD, 1.0), 1852.0 / 0.9144);
    assert_close("NM->km", convert(NAUTICAL_MILE, KILOMETRE, 2.0), 2.0 * 1.852);
    assert_close("NM->kyd", convert(NAUTICAL_MILE, KILOYARD, 3.0), 3.0 * 1852.0 / 914.4);
    assert_close("yd->NM", convert(YARD, NAUTICAL_MILE, 3.0), 3.0 * 0.9144 / 1852.0);
    assert_close("yd->kyd", convert(YARD, KILOYARD, 1.0), 0.001);
    assert_close("km->NM", convert(KILOMETRE, NAUTICAL_MILE, 1.0), 1000.0 / 1852.0);
    assert_close("kyd->km", convert(KILOYARD, KILOMETRE, 1.0), 0.9144);
}

#[test]
fn nautical_mile_reference_value() {
    let nm: f64 = convert(METRE, NAUTICAL_MILE, 1000.0);
    assert!((nm - 0.53996).abs() < 1e-5, "got {nm}");
}

#[test]
fn time() {
    assert_close("s->si", convert(SECOND, SI, 1.0), 1.0);
    assert_close("s->min", convert(SECOND, MINUTE, 3.0), 3.0 / 60.0);
    assert_close("s->h", convert(SECOND, HOUR, 4.0), 4.0 / 3600.0);
    assert_close("s->d", convert(SECOND, DAY, 5.0), 5.0 / 86400.0);
    assert_close("s->wk", convert(SECOND, WEEK, 6.0), 6.0 / 604800.0);
    assert_close("min->s", convert(MINUTE, SECOND, 4.0), 240.0);
    assert_close("wk->s", convert(WEEK, SECOND, 1.0), 604800.0);
    assert_close("min->h", convert(MINUTE, HOUR, 1.0), 60.0 / 3600.0);
    assert_close("h->d", convert(HOUR, DAY, 2.0), 2.0 * 3600.0 / 86400.0);
    assert_close("d->wk", convert(DAY, WEEK, 3.0), 3.0 / 7.0);
    assert_close("wk->h", convert(WEEK, HOUR, 2.0), 2.0 * 168.0);
}

#[test]
fn speed() {
    assert_close("mps->si", convert(METRE_PER_SECOND, SI, 1.0), 1.0);
    assert_close(
        "mps->kph",
        convert(METRE_PER_SECOND, KILOMETRE_PER_HOUR, 3.0),
        3.0 / (1000.0 / 3600.0),
    );
    assert_close(
        "mps->kn",
        convert(METRE_PER_SECOND, KNOT, 4.0),
        4.0 / (1852.0 / 3600.0),
    );
    assert_close("kn->mps", convert(KNOT, METRE_PER_SECOND, 1.0), 1852.0 / 3600.0);
    assert_close("kph->kn", convert(KILOMETRE_PER_HOUR, KNOT, 1.0), 1000.0 / 1852.0);
    assert_close("kn->kph", convert(KNOT, KILOMETRE_PER_HOUR, 1.0), 1.852);

    let kn: f64 = convert(METRE_PER_SECOND, KNOT, 1.0);
    assert!((kn - 1.9438).abs() < 1e-4, "got {kn}");
}

#[test]
fn angle() {
    assert_close("rad->si", convert(RADIAN, SI, 1.0), 1.0);
    assert_close("rad->deg", convert(RADIAN, DEGREE, 3.0), 3.0 / RAD_PER_DEG);
    assert_close("deg->rad", convert(DEGREE, RADIAN, 1.0), RAD_PER_DEG);
    assert_close("si->rad", convert(SI, RADIAN, 3.0), 3.0);
}

#[test]
fn rotational_rate() {
    assert_close("rad/s->si", convert(RADIAN_PER_SECOND, SI, 1.0), 1.0);
    assert_close(
        "rad/s->deg/s",
        convert(RADIAN_PER_SECOND, DEGREE_PER_SECOND, 3.0),
        3.0 / RAD_PER_DEG,
    );
    assert_close(
        "rad/s->rad/min",
        convert(RADIAN_PER_SECOND, RADIAN_PER_MINUTE, 4.0),
        4.0 * 60.0,
    );
    assert_close(
        "deg/min->rad/s",
        convert(DEGREE_PER_MINUTE, RADIAN_PER_SECOND, 1.0),
        RAD_PER_DEG / 60.0,
    );
    assert_close(
        "deg/s->deg/min",
        convert(DEGREE_PER_SECOND, DEGREE_PER_MINUTE, 2.0),
        120.0,
    );
    assert_close(
        "rad/min->deg/s",
        convert(RADIAN_PER_MINUTE, DEGREE_PER_SECOND, 2.0),
        2.0 / 60.0 / RAD_PER_DEG,
    );
}

#[test]
fn identity_is_exact_for_every_catalog_unit() {
    let table = UnitTable::standard();
    for v in [1.0 / 3.0, -2.5e-7, 6.02e23] {
        for e in table.entries() {
            let out = try_convert(e.unit, e.unit, v).unwrap();
            assert_eq!(out, v, "{} identity", e.name);
        }
    }
}

#[test]
fn round_trips_stay_within_tolerance() {
    let table = UnitTable::standard();
    let v: f64 = 123.456;
    let mut pairs = 0;
    for a in table.entries() {
        for b in table.entries() {
            if !a.unit.kind().is_compatible_with(b.unit.kind()) {
                continue;
            }
            let there = try_convert(a.unit, b.unit, v).unwrap();
            let back = try_convert(b.unit, a.unit, there).unwrap();
            let diff = (back - v).abs();
            assert!(
                diff <= 1e-12 * v,
                "{}<->{} expected {v:e} got {back:e} (diff {diff:e})",
                a.name,
                b.name
            );
            pairs += 1;
        }
    }
    assert!(pairs > table.entries().len());
}

#[test]
fn user_defined_unit() {
    const CENTIMETRE: Unit<Length> = Unit::from_ratio(1, 100);
    assert_close("cm->m", convert(CENTIMETRE, METRE, 1000), 10.0);
}
