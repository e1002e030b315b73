//! Sidebar panel listing the guide's sections.
//!
//! Renders the filtered section list with icons, keeps a cursor for
//! keyboard navigation and highlights the active section. The section
//! data itself lives in the [`Navigator`]; this panel only owns the
//! cursor state.
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use textwrap::wrap;

use crate::navigator::Navigator;

/// Style of the section most recently jumped to.
const ACTIVE_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

/// Style of the row under the cursor.
const CURSOR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

const BORDER_STYLE: Style = Style::new().fg(Color::Gray);

const CURSOR_SYMBOL: &str = "> ";

/// Panel that displays the searchable table of contents.
#[derive(Default)]
pub struct SidebarPanel
{
    /// Cursor position within the currently visible (filtered) list
    state: ListState,
}

impl SidebarPanel
{
    /// Creates a panel with the cursor on the first entry.
    #[must_use]
    pub fn new() -> Self
    {
        let mut state = ListState::default();
        state.select(Some(0));

        Self { state }
    }

    /// Renders the filtered section list to the given area.
    ///
    /// The cursor is clamped first, since a narrower filter may have
    /// shrunk the list since the last keypress.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, navigator: &Navigator)
    {
        let visible = navigator.visible_sections();
        self.clamp_cursor(visible.len());

        // Long titles wrap within the panel width.
        // 2 for the border, plus the cursor symbol.
        let wrap_width = (area.width as usize)
            .saturating_sub(CURSOR_SYMBOL.len().saturating_add(2));

        let items: Vec<ListItem> = visible
            .iter()
            .map(|section| {
                let label = format!("{} {}", section.icon, section.title);
                let wrapped: Vec<Line> = wrap(&label, wrap_width.max(1))
                    .into_iter()
                    .map(|part| Line::raw(part.into_owned()))
                    .collect();

                let item = ListItem::new(wrapped);
                if section.id == navigator.active_section_id()
                {
                    item.style(ACTIVE_STYLE)
                }
                else
                {
                    item
                }
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::RIGHT)
                    .border_style(BORDER_STYLE)
                    .title("Training Hub")
                    .title_alignment(Alignment::Left)
                    .title_style(
                        Style::new()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .highlight_style(CURSOR_STYLE)
            .highlight_symbol(CURSOR_SYMBOL);

        frame.render_stateful_widget(list, area, &mut self.state);
    }

    /// Moves the cursor to the next visible entry, stopping at the end.
    pub fn next(&mut self, visible_len: usize)
    {
        if let Some(index) = self.state.selected()
        {
            let last = visible_len.saturating_sub(1);
            self.state
                .select(Some(index.saturating_add(1).min(last)));
        }
        else if visible_len > 0
        {
            self.state.select(Some(0));
        }
    }

    /// Moves the cursor to the previous visible entry.
    pub fn previous(&mut self)
    {
        if let Some(index) = self.state.selected()
        {
            self.state
                .select(Some(index.saturating_sub(1)));
        }
    }

    /// Identifier of the section under the cursor, if any.
    ///
    /// Returns `None` when the filter has left the list empty.
    #[must_use]
    pub fn selected_id(&self, navigator: &Navigator) -> Option<&'static str>
    {
        let visible = navigator.visible_sections();
        let index = self.state.selected()?;

        visible
            .get(index.min(visible.len().checked_sub(1)?))
            .map(|section| section.id)
    }

    /// Keeps the cursor inside the visible list after a filter change.
    fn clamp_cursor(&mut self, visible_len: usize)
    {
        if visible_len == 0
        {
            self.state.select(None);
            return;
        }

        match self.state.selected()
        {
            None => self.state.select(Some(0)),
            Some(index) if index >= visible_len =>
            {
                self.state
                    .select(Some(visible_len.saturating_sub(1)));
            }
            Some(_) =>
            {}
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::content::SECTIONS;

    #[test]
    fn cursor_starts_on_first_entry()
    {
        let navigator = Navigator::new(&SECTIONS);
        let panel = SidebarPanel::new();

        assert_eq!(panel.selected_id(&navigator), Some("introduction"));
    }

    #[test]
    fn cursor_stops_at_the_last_entry()
    {
        let navigator = Navigator::new(&SECTIONS);
        let mut panel = SidebarPanel::new();
        let len = navigator.visible_sections().len();

        for _ in 0..(len * 2)
        {
            panel.next(len);
        }

        assert_eq!(panel.selected_id(&navigator), Some("quick-reference"));
    }

    #[test]
    fn cursor_follows_the_filtered_list()
    {
        let mut navigator = Navigator::new(&SECTIONS);
        let mut panel = SidebarPanel::new();

        // Walk down a few rows, then narrow the filter to one entry.
        let len = navigator.visible_sections().len();
        for _ in 0..5
        {
            panel.next(len);
        }

        navigator.set_search_query("dash");

        assert_eq!(panel.selected_id(&navigator), Some("dashboard"));
    }

    #[test]
    fn empty_filter_result_has_no_selection()
    {
        let mut navigator = Navigator::new(&SECTIONS);
        let panel = SidebarPanel::new();

        navigator.set_search_query("zzz-no-match");

        assert_eq!(panel.selected_id(&navigator), None);
    }
}
