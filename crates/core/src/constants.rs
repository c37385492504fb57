use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Number of trailing balances averaged for each projected step
pub const MOVING_AVERAGE_WINDOW: usize = 7;

/// Days projected when the caller does not request a horizon
pub const DEFAULT_FORECAST_HORIZON: usize = 14;

/// Smallest day-over-day move the jump damper tolerates
pub const JUMP_DAMPING_FLOOR: Decimal = dec!(50);

/// Fraction of the previous projected balance allowed as a day-over-day move
pub const JUMP_DAMPING_RATIO: Decimal = dec!(0.6);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Category assigned to transactions persisted without one
pub const UNCATEGORIZED: &str = "uncategorized";
