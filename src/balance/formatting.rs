use crate::constants::WEI_CONVERSION;

/// Converts a decimal string of smallest units into a display value.
pub fn smallest_units_to_display(raw: &str) -> anyhow::Result<f64> {
    let units = raw
        .trim()
        .parse::<u128>()
        .map_err(|_| anyhow::anyhow!(format!("Failed to parse balance: {:?}", raw)))?;

    Ok(units as f64 / WEI_CONVERSION as f64)
}

pub fn format_native(balance: f64, symbol: &str) -> String {
    format!("{balance:.4} {symbol}")
}

pub fn format_fiat(balance: f64, price: f64) -> String {
    format!("${:.2}", balance * price)
}
