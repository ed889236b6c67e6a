//! Program-wide constants.

/// Decimals of the vested token mint.
pub const TOKEN_DECIMALS: u8 = 9;

/// Base units per whole token (10^TOKEN_DECIMALS).
pub const BASE_UNITS_PER_TOKEN: u64 = 1_000_000_000;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Cumulative grant cap for the angel investor category (base units).
pub const ANGEL_INVESTOR_CAP: u64 = 400_000 * BASE_UNITS_PER_TOKEN;

/// Cumulative grant cap for the private sale category (base units).
pub const PRIVATE_SALE_CAP: u64 = 300_000 * BASE_UNITS_PER_TOKEN;

/// Cumulative grant cap for the public sale category (base units).
pub const PUBLIC_SALE_CAP: u64 = 300_000 * BASE_UNITS_PER_TOKEN;

/// Default angel investor schedule installed at initialization.
pub const DEFAULT_ANGEL_CLIFF: i64 = 90 * SECONDS_PER_DAY;
pub const DEFAULT_ANGEL_VESTING: i64 = 360 * SECONDS_PER_DAY;

/// Default private sale schedule installed at initialization.
pub const DEFAULT_PRIVATE_CLIFF: i64 = 30 * SECONDS_PER_DAY;
pub const DEFAULT_PRIVATE_VESTING: i64 = 180 * SECONDS_PER_DAY;

/// Max members stored in the role registry PDA.
pub const MAX_ROLE_MEMBERS: usize = 16;

/// Role id: may create grants (sale-distribution callers).
pub const ROLE_GRANTER: u8 = 1;

/// Role id: may burn own tokens.
pub const ROLE_BURNER: u8 = 2;
