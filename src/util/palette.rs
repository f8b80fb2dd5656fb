//! Chart colour palette.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Fixed fill palette for categorical bars; cycles past six categories.
pub const BAR_PALETTE: [&str; 6] = [
    "#36a2eb", "#ff6384", "#ffce56", "#4bc0c0", "#9966ff", "#ff9f40",
];

/// Scatter point fill.
pub const SCATTER_FILL: &str = "#4bc0c0";

/// Fill colour for the bar at `index`, cycling the palette.
#[must_use]
pub fn bar_fill(index: usize) -> &'static str {
    BAR_PALETTE[index % BAR_PALETTE.len()]
}
