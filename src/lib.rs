//! OpenCorridor prices range-accrual floating coupons: contracts whose rate
//! accrues only on observation days when a money-market fixing stays inside
//! a strike corridor.
//!
//! The crate spans the full pricing chain for that product family:
//! calendars and day counts, daily observation schedules, a date-anchored
//! zero curve, IBOR index conventions, flat and interpolated volatility
//! smile sections, and the corridor pricer itself. Corridor digitals are
//! replicated either in closed form or by call spreads priced
//! strike-by-strike off the smile, with observation-day variance blended
//! between the expiry-anchored and payment-anchored smile sections under a
//! forward-correlation parameter.
//!
//! References used across modules:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), digital
//!   payoffs and caplet identities.
//! - Brigo and Mercurio, *Interest Rate Models* (2006), forward-measure
//!   corrections for corridor products.
//!
//! Numerical considerations:
//! - Corridor bounds standing in for unbounded ranges stay finite (a tiny
//!   positive lower strike, a 100%+ upper strike); strikes and variances
//!   are floored rather than letting NaN/Inf propagate.
//! - Call-spread half-widths are capped at half the strike so shifted
//!   strikes stay in the lognormal domain.
//!
//! # Quick Start
//! Project an index fixing off a zero curve:
//! ```rust
//! use chrono::NaiveDate;
//! use opencorridor::rates::{IborIndex, ZeroCurve};
//!
//! let reference = NaiveDate::from_ymd_opt(2017, 3, 6).unwrap();
//! let curve = ZeroCurve::new(
//!     reference,
//!     vec![
//!         (reference, 0.045),
//!         (NaiveDate::from_ymd_opt(2027, 3, 6).unwrap(), 0.045),
//!     ],
//! )
//! .unwrap();
//!
//! let index = IborIndex::euribor_6m();
//! let fixing_date = NaiveDate::from_ymd_opt(2018, 3, 2).unwrap();
//! let forward = index.forecast_fixing(fixing_date, &curve).unwrap();
//! assert!(forward > 0.04 && forward < 0.05);
//! ```
//!
//! Price a corridor coupon over flat smiles:
//! ```rust
//! use chrono::NaiveDate;
//! use opencorridor::instruments::RangeAccrualCoupon;
//! use opencorridor::pricing::{PricerConfig, RangeAccrualPricer};
//! use opencorridor::rates::{
//!     BusinessDayConvention, Calendar, DayCountConvention, IborIndex, ObservationSchedule,
//!     ZeroCurve,
//! };
//! use opencorridor::vol::SmileSection;
//!
//! let reference = NaiveDate::from_ymd_opt(2017, 3, 6).unwrap();
//! let start = NaiveDate::from_ymd_opt(2018, 3, 6).unwrap();
//! let end = NaiveDate::from_ymd_opt(2018, 9, 6).unwrap();
//!
//! let curve = ZeroCurve::new(
//!     reference,
//!     vec![
//!         (reference, 0.045),
//!         (NaiveDate::from_ymd_opt(2027, 3, 6).unwrap(), 0.045),
//!     ],
//! )
//! .unwrap();
//! let schedule = ObservationSchedule::daily(
//!     start,
//!     end,
//!     Calendar::Target,
//!     BusinessDayConvention::ModifiedFollowing,
//! )
//! .unwrap();
//! let coupon = RangeAccrualCoupon::new(
//!     end,
//!     1.0,
//!     IborIndex::euribor_6m(),
//!     start,
//!     end,
//!     DayCountConvention::Act360,
//!     1.0,
//!     0.0,
//!     schedule,
//!     0.02,
//!     0.07,
//! )
//! .unwrap();
//!
//! let day_count = DayCountConvention::Act360;
//! let smile_on_expiry = SmileSection::flat(start, reference, 0.20, day_count).unwrap();
//! let smile_on_payment = SmileSection::flat(end, reference, 0.20, day_count).unwrap();
//! let pricer = RangeAccrualPricer::new(
//!     PricerConfig::call_spread(1.0),
//!     smile_on_expiry,
//!     smile_on_payment,
//! )
//! .unwrap();
//!
//! let rate = pricer.rate(&coupon, &curve).unwrap();
//! let price = pricer.price(&coupon, &curve).unwrap();
//! assert!(rate > 0.0 && rate < 0.05);
//! assert!(price > 0.0 && price < rate);
//! ```

pub mod core;
pub mod instruments;
pub mod math;
pub mod pricing;
pub mod rates;
pub mod vol;

pub use crate::core::{OptionType, PricingError};
