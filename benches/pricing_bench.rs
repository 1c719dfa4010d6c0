use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use chrono::NaiveDate;
use opencorridor::instruments::RangeAccrualCoupon;
use opencorridor::pricing::{PricerConfig, RangeAccrualPricer};
use opencorridor::rates::{
    BusinessDayConvention, Calendar, DayCountConvention, IborIndex, ObservationSchedule,
    ZeroCurve,
};
use opencorridor::vol::SmileSection;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("benchmark dates are valid")
}

fn fixture() -> (RangeAccrualCoupon, ZeroCurve, RangeAccrualPricer) {
    let reference = ymd(2017, 3, 6);
    let start = ymd(2018, 3, 6);
    let end = ymd(2018, 9, 6);

    let curve = ZeroCurve::new(
        reference,
        vec![(reference, 0.045), (ymd(2030, 3, 6), 0.045)],
    )
    .expect("benchmark curve should be valid");

    let schedule = ObservationSchedule::daily(
        start,
        end,
        Calendar::Target,
        BusinessDayConvention::ModifiedFollowing,
    )
    .expect("benchmark schedule should be valid");

    let coupon = RangeAccrualCoupon::new(
        end,
        1_000_000.0,
        IborIndex::euribor_6m(),
        start,
        end,
        DayCountConvention::Act360,
        1.0,
        0.0,
        schedule,
        0.02,
        0.07,
    )
    .expect("benchmark coupon should be valid");

    let day_count = DayCountConvention::Act360;
    let smile_on_expiry =
        SmileSection::flat(start, reference, 0.20, day_count).expect("expiry smile");
    let smile_on_payment =
        SmileSection::flat(end, reference, 0.20, day_count).expect("payment smile");
    let pricer = RangeAccrualPricer::new(
        PricerConfig::call_spread(1.0),
        smile_on_expiry,
        smile_on_payment,
    )
    .expect("benchmark pricer should be valid");

    (coupon, curve, pricer)
}

fn bench_range_accrual_price(c: &mut Criterion) {
    let (coupon, curve, pricer) = fixture();

    c.bench_function("range_accrual_call_spread_price", |b| {
        b.iter(|| {
            let price = pricer
                .price(black_box(&coupon), black_box(&curve))
                .expect("pricing should succeed");
            black_box(price)
        })
    });
}

criterion_group!(benches, bench_range_accrual_price);
criterion_main!(benches);
