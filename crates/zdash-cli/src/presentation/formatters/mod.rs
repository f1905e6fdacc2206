pub mod chart;
pub mod text;

pub use chart::{PALETTE, filled_cells, format_percent, palette_color, proportional_bar};
pub use text::{PLACEHOLDER, or_placeholder, pad, truncate};
