//! Undiscounted Black-76 building blocks quoted in total standard deviation.

use crate::core::OptionType;
use crate::math::normal_cdf;

/// Undiscounted Black-76 option value on a forward.
///
/// `std_dev` is the total standard deviation `vol * sqrt(t)`. Non-positive
/// strikes and degenerate standard deviations collapse to intrinsic value,
/// keeping the formula domain-safe at extreme corridor bounds.
pub fn black_price(option_type: OptionType, forward: f64, strike: f64, std_dev: f64) -> f64 {
    let sign = option_type.sign();
    if strike <= 0.0 || std_dev <= 0.0 {
        return (sign * (forward - strike)).max(0.0);
    }

    let d1 = (forward / strike).ln() / std_dev + 0.5 * std_dev;
    let d2 = d1 - std_dev;
    sign * (forward * normal_cdf(sign * d1) - strike * normal_cdf(sign * d2))
}

/// `P(terminal forward >= strike)` under the lognormal law.
pub fn lognormal_digital(forward: f64, strike: f64, std_dev: f64) -> f64 {
    if strike <= 0.0 {
        return 1.0;
    }
    if std_dev <= 0.0 {
        return if forward >= strike { 1.0 } else { 0.0 };
    }
    normal_cdf((forward / strike).ln() / std_dev - 0.5 * std_dev)
}
