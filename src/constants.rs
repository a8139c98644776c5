/// Smallest units (wei) per display unit of the native token.
pub const WEI_CONVERSION: u128 = 1_000_000_000_000_000_000;
