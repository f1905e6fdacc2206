//! Table Component
//!
//! Encapsulates project table selection and scrolling.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::TableState};

use crate::presentation::view_models::ProjectTableViewModel;
use crate::presentation::views::tui::ProjectTableWidget;

const PAGE_SIZE: usize = 10;

pub struct TableComponent {
    state: TableState,
}

impl TableComponent {
    pub fn new() -> Self {
        Self {
            state: TableState::default(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Returns true when the key moved the selection
    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> bool {
        if data_len == 0 {
            return false;
        }
        let last = data_len - 1;
        let current = self.state.selected();
        let next = match key.code {
            KeyCode::Char('j') | KeyCode::Down => current.map_or(0, |i| (i + 1).min(last)),
            KeyCode::Char('k') | KeyCode::Up => current.map_or(0, |i| i.saturating_sub(1)),
            KeyCode::PageDown => current.map_or(0, |i| (i + PAGE_SIZE).min(last)),
            KeyCode::PageUp => current.map_or(0, |i| i.saturating_sub(PAGE_SIZE)),
            KeyCode::Home | KeyCode::Char('g') => 0,
            KeyCode::End | KeyCode::Char('G') => last,
            _ => return false,
        };
        self.state.select(Some(next));
        true
    }

    /// Render table with data
    ///
    /// Clamps the selection to the current rows first; a reload can shrink them.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &ProjectTableViewModel) {
        match self.state.selected() {
            Some(_) if data.rows.is_empty() => self.state.select(None),
            Some(selected) if selected >= data.rows.len() => {
                self.state.select(Some(data.rows.len() - 1))
            }
            _ => {}
        }

        let table = ProjectTableWidget::new(data).build_table();
        f.render_stateful_widget(table, area, &mut self.state);
    }
}

impl Default for TableComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut table = TableComponent::new();
        assert!(table.handle_input(press(KeyCode::Char('k')), 3));
        assert_eq!(table.selected(), Some(0));

        table.handle_input(press(KeyCode::Down), 3);
        table.handle_input(press(KeyCode::Down), 3);
        table.handle_input(press(KeyCode::Down), 3);
        assert_eq!(table.selected(), Some(2));

        table.handle_input(press(KeyCode::PageUp), 3);
        assert_eq!(table.selected(), Some(0));

        table.handle_input(press(KeyCode::End), 3);
        assert_eq!(table.selected(), Some(2));
    }

    #[test]
    fn test_empty_table_ignores_keys() {
        let mut table = TableComponent::new();
        assert!(!table.handle_input(press(KeyCode::Down), 0));
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_unhandled_key() {
        let mut table = TableComponent::new();
        assert!(!table.handle_input(press(KeyCode::Char('x')), 5));
    }
}
