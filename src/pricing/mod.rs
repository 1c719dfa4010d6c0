//! Valuation engines for the contract types in [`crate::instruments`].

pub mod black;
pub mod range_accrual;

pub use black::{black_price, lognormal_digital};
pub use range_accrual::{mc_accrual_fraction, McAccrualResult, PricerConfig, RangeAccrualPricer};
