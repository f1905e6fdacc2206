//! Dashboard Component (Page-level)
//!
//! Lays out the whole screen for the current session state and turns
//! keys into actions for the renderer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::table::TableComponent;
use crate::presentation::view_models::{DashboardViewModel, SessionViewModel, StatusLevel};
use crate::presentation::views::tui::{ChartPanel, FailedView, HelpBarView, LoadingView};

/// Actions the renderer has to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Quit,
    Reload,
}

pub struct DashboardComponent {
    table: TableComponent,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            table: TableComponent::new(),
        }
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.table.selected()
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        screen: &SessionViewModel<DashboardViewModel>,
    ) -> Option<DashboardAction> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(DashboardAction::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(DashboardAction::Quit);
            }
            // Reloading while a load is in flight would only restart it
            KeyCode::Char('r') if !matches!(screen, SessionViewModel::Loading) => {
                return Some(DashboardAction::Reload);
            }
            _ => {}
        }

        if let Some(dashboard) = screen.ready() {
            self.table.handle_input(key, dashboard.projects.rows.len());
        }
        None
    }

    /// Layout: [Charts side by side | Project table | Help bar]
    pub fn render(
        &mut self,
        f: &mut Frame,
        size: Rect,
        screen: &SessionViewModel<DashboardViewModel>,
    ) {
        let [body, help] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(size);

        match screen {
            SessionViewModel::Loading => {
                f.render_widget(LoadingView, body);
                f.render_widget(HelpBarView::new("Loading", StatusLevel::Info), help);
            }
            SessionViewModel::Failed { error } => {
                f.render_widget(FailedView::new(error), body);
                f.render_widget(HelpBarView::new("Failed", StatusLevel::Error), help);
            }
            SessionViewModel::Ready(dashboard) => {
                self.render_ready(f, body, dashboard);
                let status = format!(
                    "{} active project(s), {} active styleguide(s)",
                    dashboard.summary.active_projects, dashboard.summary.active_styleguides
                );
                let level = if dashboard.summary.unresolved_links > 0 {
                    StatusLevel::Warning
                } else {
                    StatusLevel::Success
                };
                f.render_widget(HelpBarView::new(&status, level), help);
            }
        }
    }

    fn render_ready(&mut self, f: &mut Frame, area: Rect, dashboard: &DashboardViewModel) {
        let slice_rows = dashboard
            .project_types
            .slices
            .len()
            .max(dashboard.linked_styleguides.slices.len())
            .max(1);
        let chart_height = u16::try_from(slice_rows + 2).unwrap_or(u16::MAX);

        let [charts, table] =
            Layout::vertical([Constraint::Length(chart_height), Constraint::Min(4)]).areas(area);
        let [types, links] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(charts);

        f.render_widget(ChartPanel::new(&dashboard.project_types), types);
        f.render_widget(ChartPanel::new(&dashboard.linked_styleguides), links);
        self.table.render(f, table, &dashboard.projects);
    }
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        ChartSliceViewModel, ChartViewModel, ProjectRowViewModel, ProjectTableViewModel,
        SummaryViewModel,
    };
    use crate::presentation::views::tui::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ready() -> SessionViewModel<DashboardViewModel> {
        let row = |name: &str| ProjectRowViewModel {
            id: name.to_lowercase(),
            name: name.to_string(),
            platform: "web".to_string(),
            workflow_status: None,
            number_of_members: 1,
            number_of_screens: 2,
            linked_styleguide_id: None,
            linked_styleguide_name: None,
            linked_styleguide_url: None,
            updated_at: None,
        };
        let chart = |title: &str, label: &str| ChartViewModel {
            title: title.to_string(),
            total: 2,
            slices: vec![ChartSliceViewModel {
                label: label.to_string(),
                count: 2,
                percent: 100.0,
            }],
        };

        SessionViewModel::Ready(DashboardViewModel {
            summary: SummaryViewModel {
                total_projects: 2,
                active_projects: 2,
                total_styleguides: 0,
                active_styleguides: 0,
                unresolved_links: 0,
            },
            project_types: chart("Project Types", "web"),
            linked_styleguides: chart("Projects with Linked Styleguides", "No Linked Styleguide"),
            projects: ProjectTableViewModel {
                platform_filter: None,
                rows: vec![row("Alpha"), row("Beta")],
            },
        })
    }

    fn draw(screen: &SessionViewModel<DashboardViewModel>) -> String {
        let mut component = DashboardComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 16)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                component.render(f, area, screen);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_quit_and_reload_keys() {
        let mut component = DashboardComponent::new();
        let screen = ready();
        assert_eq!(
            component.handle_input(press(KeyCode::Char('q')), &screen),
            Some(DashboardAction::Quit)
        );
        assert_eq!(
            component.handle_input(press(KeyCode::Esc), &screen),
            Some(DashboardAction::Quit)
        );
        assert_eq!(
            component.handle_input(press(KeyCode::Char('r')), &screen),
            Some(DashboardAction::Reload)
        );
    }

    #[test]
    fn test_reload_ignored_while_loading() {
        let mut component = DashboardComponent::new();
        let screen = SessionViewModel::<DashboardViewModel>::Loading;
        assert_eq!(component.handle_input(press(KeyCode::Char('r')), &screen), None);
    }

    #[test]
    fn test_scroll_keys_move_table_selection() {
        let mut component = DashboardComponent::new();
        let screen = ready();
        assert_eq!(component.handle_input(press(KeyCode::Char('j')), &screen), None);
        assert_eq!(component.handle_input(press(KeyCode::Char('j')), &screen), None);
        assert_eq!(component.selected_row(), Some(1));
    }

    #[test]
    fn test_render_ready_screen() {
        let text = draw(&ready());
        assert!(text.contains("Project Types"));
        assert!(text.contains("Projects with Linked Styleguides"));
        assert!(text.contains("Active Projects (2)"));
        assert!(text.contains("Workflow Status"));
        assert!(text.contains("Alpha"));
        assert!(text.contains("2 active project(s)"));
    }

    #[test]
    fn test_render_failed_screen() {
        let text = draw(&SessionViewModel::Failed {
            error: "HTTP 401 Unauthorized".to_string(),
        });
        assert!(text.contains("Failed to load dashboard"));
        assert!(text.contains("HTTP 401 Unauthorized"));
        assert!(!text.contains("Project Types"));
    }

    #[test]
    fn test_render_loading_screen() {
        let text = draw(&SessionViewModel::Loading);
        assert!(text.contains("Loading dashboard..."));
    }
}
