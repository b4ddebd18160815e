use fermi::interpreter::evaluator::interval::Interval;
use proptest::prelude::*;

fn interval() -> impl Strategy<Value = Interval> {
    (-1e3_f64..1e3, -1e3_f64..1e3).prop_map(|(a, b)| Interval::spanning(a, b))
}

fn positive_interval() -> impl Strategy<Value = Interval> {
    (0.5_f64..1e3, 0.5_f64..1e3).prop_map(|(a, b)| Interval::spanning(a, b))
}

fn point_in(i: Interval, t: f64) -> f64 {
    (t * (i.max - i.min) + i.min).clamp(i.min, i.max)
}

fn contains(i: Interval, x: f64) -> bool {
    i.min <= x && x <= i.max
}

proptest! {
    #[test]
    fn arithmetic_bounds_every_point(a in interval(), b in interval(), s in 0.0_f64..=1.0, t in 0.0_f64..=1.0) {
        let (x, y) = (point_in(a, s), point_in(b, t));

        prop_assert!(contains(a.add(b), x + y));
        prop_assert!(contains(a.sub(b), x - y));
        prop_assert!(contains(a.mul(b), x * y));
        prop_assert!(contains(a.negate(), -x));
    }

    #[test]
    fn division_bounds_every_point(a in interval(), b in positive_interval(), s in 0.0_f64..=1.0, t in 0.0_f64..=1.0) {
        let (x, y) = (point_in(a, s), point_in(b, t));
        prop_assert!(contains(a.div(b), x / y));
        prop_assert!(contains(a.div(b.negate()), x / -y));
    }

    #[test]
    fn divisor_straddling_zero_is_unbounded(a in positive_interval(), b in interval()) {
        prop_assume!(b.min < 0.0 && b.max > 0.0);
        prop_assert_eq!(a.div(b), Interval { min: f64::NEG_INFINITY, max: f64::INFINITY });
    }
}

#[test]
fn division_special_cases() {
    let zero = Interval::point(0.0);
    let around_zero = Interval::spanning(-1.0, 1.0);

    assert!(Interval::point(3.0).div(zero).min.is_nan());
    assert_eq!(zero.div(around_zero), zero);
    assert_eq!(Interval::spanning(2.0, 4.0).div(Interval::point(2.0)),
               Interval::spanning(1.0, 2.0));
}

#[test]
fn power_uses_corners() {
    assert_eq!(Interval::spanning(1.0, 2.0).pow(Interval::spanning(2.0, 3.0)),
               Interval::spanning(1.0, 8.0));
}

#[test]
fn nan_corners_poison_bounds() {
    let product = Interval::point(f64::NAN).mul(Interval::spanning(1.0, 2.0));
    assert!(product.min.is_nan() && product.max.is_nan());
}
