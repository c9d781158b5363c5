use rust_decimal::Decimal;

/// Money held by an agent - uses Decimal for precision
pub type Money = Decimal;

/// Price per unit of a good, rounded to the market's price scale
pub type Price = Decimal;

/// Quantity of a good (whole units in practice)
pub type Quantity = Decimal;

/// Simulation period counter; the first period run is 1
pub type Period = u64;

/// Default number of decimal places kept on quoted prices (cents)
pub const DEFAULT_PRICE_SCALE: u32 = 2;
