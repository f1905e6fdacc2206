use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, OutputFormat,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, options: DisplayOptions) -> Self {
        Self { format, options }
    }

    pub fn format_result<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let color = self.options.enable_color;
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            if color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() {
            if color {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\n💡 Tips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        print!("{}", self.format_result(&result)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{ConfigInitViewModel, Guidance, StatusBadge};

    fn result() -> CommandResultViewModel<ConfigInitViewModel> {
        CommandResultViewModel::new(ConfigInitViewModel {
            config_path: "/tmp/zdash/config.toml".to_string(),
            overwritten: false,
        })
        .with_badge(StatusBadge::success("Config file created"))
        .with_suggestion(Guidance::new("Check the settings").with_command("zdash config show"))
    }

    #[test]
    fn test_text_layout() {
        let renderer = ConsoleRenderer::new(OutputFormat::Text, DisplayOptions::default());
        let text = renderer.format_result(&result()).unwrap();
        assert_eq!(
            text,
            "✅ Config file created\n\nWrote /tmp/zdash/config.toml\n\n💡 Tips:\n  • Check the settings: zdash config show\n"
        );
    }

    #[test]
    fn test_json_layout() {
        let renderer = ConsoleRenderer::new(OutputFormat::Json, DisplayOptions::default());
        let text = renderer.format_result(&result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["badge"]["level"], "success");
        assert_eq!(value["content"]["config_path"], "/tmp/zdash/config.toml");
        assert_eq!(value["suggestions"][0]["command"], "zdash config show");
    }

    #[test]
    fn test_json_omits_empty_suggestions() {
        let renderer = ConsoleRenderer::new(OutputFormat::Json, DisplayOptions::default());
        let result = CommandResultViewModel::new(ConfigInitViewModel {
            config_path: "c.toml".to_string(),
            overwritten: true,
        });
        let value: serde_json::Value =
            serde_json::from_str(&renderer.format_result(&result).unwrap()).unwrap();
        assert!(value.get("suggestions").is_none());
        assert!(value.get("badge").is_none());
    }
}
