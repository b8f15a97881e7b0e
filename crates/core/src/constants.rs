/// Default key the goal collection is stored under
pub const DEFAULT_STORAGE_KEY: &str = "sparksave-goals";

/// Demonstration goal seeded into an empty store
pub const SEED_GOAL_NAME: &str = "Emergency Fund";
pub const SEED_GOAL_TARGET: i64 = 10_000;
pub const SEED_GOAL_SAVED: i64 = 2_500;
pub const SEED_GOAL_DESCRIPTION: &str = "Saving for a rainy day";

/// Decimal places kept on progress percentages
pub const PERCENT_PRECISION: u32 = 1;

/// Currency symbol used for display
pub const CURRENCY_SYMBOL: &str = "₱";

/// Maximum fraction digits shown when formatting amounts
pub const DISPLAY_MAX_FRACTION_DIGITS: u32 = 3;

/// Upper bound (exclusive) for any goal amount. Together with
/// [`MAX_AMOUNT_SCALE`] this keeps every amount within 15 significant
/// digits, which the float-based stored format reproduces exactly.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Maximum decimal places accepted on an amount
pub const MAX_AMOUNT_SCALE: u32 = 3;
