/// Slice colors, cycled when a chart has more slices than entries
pub const PALETTE: [(u8, u8, u8); 4] = [
    (253, 189, 57),
    (200, 207, 45),
    (13, 207, 218),
    (65, 155, 249),
];

pub fn palette_color(index: usize) -> (u8, u8, u8) {
    PALETTE[index % PALETTE.len()]
}

/// Bar of `width` cells filled in proportion to `count / total`.
///
/// A non-zero count always gets at least one cell so small slices stay
/// visible next to large ones.
pub fn proportional_bar(count: usize, total: usize, width: usize) -> String {
    let filled = filled_cells(count, total, width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn filled_cells(count: usize, total: usize, width: usize) -> usize {
    if total == 0 || count == 0 || width == 0 {
        return 0;
    }
    let exact = count as f64 * width as f64 / total as f64;
    (exact.round() as usize).clamp(1, width)
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}
