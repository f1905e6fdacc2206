use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{format_percent, pad, palette_color, proportional_bar};
use crate::presentation::view_models::{ChartViewModel, DisplayOptions};

const DEFAULT_BAR_WIDTH: usize = 24;
const MIN_BAR_WIDTH: usize = 8;

// --------------------------------------------------------
// Chart View (pie legend as proportional bars)
// --------------------------------------------------------

pub struct ChartView<'a> {
    data: &'a ChartViewModel,
    options: DisplayOptions,
}

impl<'a> ChartView<'a> {
    pub fn new(data: &'a ChartViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn label_width(&self) -> usize {
        self.data
            .slices
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn count_width(&self) -> usize {
        self.data.total.to_string().len()
    }

    fn bar_width(&self) -> usize {
        let Some(columns) = self.options.width else {
            return DEFAULT_BAR_WIDTH;
        };
        // indent + label + gaps + count + " (100.0%)"
        let fixed = 2 + self.label_width() + 2 + self.count_width() + 10;
        columns
            .saturating_sub(fixed)
            .clamp(MIN_BAR_WIDTH, DEFAULT_BAR_WIDTH)
    }
}

impl<'a> fmt::Display for ChartView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.options.enable_color {
            writeln!(f, "{}", self.data.title.bold())?;
        } else {
            writeln!(f, "{}", self.data.title)?;
        }

        if self.data.total == 0 {
            writeln!(f, "  No data")?;
            return Ok(());
        }

        let label_width = self.label_width();
        let count_width = self.count_width();
        let bar_width = self.bar_width();

        for (index, slice) in self.data.slices.iter().enumerate() {
            let bar = proportional_bar(slice.count, self.data.total, bar_width);
            let bar = if self.options.enable_color {
                let (r, g, b) = palette_color(index);
                bar.truecolor(r, g, b).to_string()
            } else {
                bar
            };

            writeln!(
                f,
                "  {}  {} {:>count_width$} ({})",
                pad(&slice.label, label_width),
                bar,
                slice.count,
                format_percent(slice.percent),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ChartSliceViewModel;

    fn chart(entries: &[(&str, usize)]) -> ChartViewModel {
        let total = entries.iter().map(|(_, c)| c).sum::<usize>();
        ChartViewModel {
            title: "Project Types".to_string(),
            total,
            slices: entries
                .iter()
                .map(|(label, count)| ChartSliceViewModel {
                    label: label.to_string(),
                    count: *count,
                    percent: if total == 0 {
                        0.0
                    } else {
                        *count as f64 * 100.0 / total as f64
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn test_plain_legend() {
        let data = chart(&[("web", 3), ("android", 1)]);
        let text = ChartView::new(&data, DisplayOptions::default()).to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Project Types");
        assert_eq!(
            lines[1],
            format!("  web      {}{} 3 (75.0%)", "█".repeat(18), "░".repeat(6))
        );
        assert_eq!(
            lines[2],
            format!("  android  {}{} 1 (25.0%)", "█".repeat(6), "░".repeat(18))
        );
    }

    #[test]
    fn test_empty_chart() {
        let data = chart(&[("Has Linked Styleguide", 0), ("No Linked Styleguide", 0)]);
        let text = ChartView::new(&data, DisplayOptions::default()).to_string();
        assert!(text.contains("No data"));
        assert!(!text.contains('█'));
    }

    #[test]
    fn test_narrow_terminal_shrinks_bar() {
        let data = chart(&[("web", 1)]);
        let options = DisplayOptions {
            enable_color: false,
            width: Some(20),
        };
        let text = ChartView::new(&data, options).to_string();
        assert!(text.contains(&"█".repeat(MIN_BAR_WIDTH)));
        assert!(!text.contains(&"█".repeat(MIN_BAR_WIDTH + 1)));
    }
}
