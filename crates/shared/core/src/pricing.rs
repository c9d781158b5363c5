//! Adaptive price discovery
//!
//! Sellers start from a "sell out" price that would let the money they hold
//! buy their whole stock, then move it by a fixed percentage each period:
//! down while unsold production piles up, up once the stock clears.
//!
//! Every quote is rounded to the market's price scale. The rounding direction
//! is chosen so a drop never exceeds the previous price and a rise never
//! falls below it.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::values::{Money, Price, Quantity};

/// Price at which `money` buys exactly `product_qty` units, rounded down
///
/// Returns `None` when there is nothing to price.
pub fn sell_out_price(money: Money, product_qty: Quantity, scale: u32) -> Option<Price> {
    if product_qty <= Decimal::ZERO {
        return None;
    }
    money
        .checked_div(product_qty)
        .map(|price| price.round_dp_with_strategy(scale, RoundingStrategy::ToZero))
}

/// Move `last_price` by `sensitivity` percent
///
/// `surplus` means stock carried over from earlier periods, so the price
/// drops; otherwise it rises. Returns `None` if the raised price does not fit
/// in a `Decimal`.
pub fn adjust_price(
    last_price: Price,
    surplus: bool,
    sensitivity: Decimal,
    scale: u32,
) -> Option<Price> {
    let step = sensitivity / Decimal::ONE_HUNDRED;
    if surplus {
        last_price
            .checked_mul(Decimal::ONE - step)
            .map(|price| price.round_dp_with_strategy(scale, RoundingStrategy::ToZero))
    } else {
        last_price
            .checked_mul(Decimal::ONE + step)
            .map(|price| price.round_dp_with_strategy(scale, RoundingStrategy::AwayFromZero))
    }
}
