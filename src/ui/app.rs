//! Application state and rendering for the guide reader.
//!
//! Owns the [`Navigator`] and the scroll position over the guide body,
//! renders the sidebar/content layout and the help and search overlays,
//! and animates jumps to section headings a few lines per tick instead of
//! teleporting.
use std::path::Path;

use log::{info, warn};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::sidebar::SidebarPanel;
use crate::content::{self, LineNumber};
use crate::export;
use crate::navigator::Navigator;

/// Application mode that determines how user input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode
{
    /// Normal reading mode - default state
    Normal,
    /// Help overlay is displayed
    Help,
    /// Search mode - the filter box is accepting input
    Search,
}

/// Main application state for the guide reader.
pub struct App
{
    /// Sidebar, search and active-section state
    pub navigator: Navigator,
    /// Sidebar cursor and rendering
    pub sidebar: SidebarPanel,
    /// Current scroll position in the guide body
    pub scroll: LineNumber,
    /// Pending target of an animated jump, if one is in flight
    scroll_target: Option<LineNumber>,
    /// Number of lines in the guide body, for clamping
    line_count: usize,
    /// Current application mode
    pub mode: AppMode,
    /// Flag indicating if the application should exit
    pub should_quit: bool,
}

impl App
{
    /// Creates the app over the embedded guide.
    #[must_use]
    pub fn new() -> Self
    {
        Self {
            navigator: Navigator::new(&content::SECTIONS),
            sidebar: SidebarPanel::new(),
            scroll: 0,
            scroll_target: None,
            line_count: content::GUIDE_TEXT.lines().count(),
            mode: AppMode::Normal,
            should_quit: false,
        }
    }

    /// Renders the whole UI to the provided frame.
    pub fn render(&mut self, frame: &mut Frame)
    {
        let size = frame.area();

        let chunks = if self.navigator.sidebar_visible()
        {
            // Sidebar on the left, content on the right
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(28), Constraint::Percentage(72)].as_ref())
                .split(size)
        }
        else
        {
            // Full-width layout for content only
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(100)].as_ref())
                .split(size)
        };

        if self.navigator.sidebar_visible()
        {
            self.sidebar
                .render(frame, chunks[0], &self.navigator);
        }

        let content_area = if self.navigator.sidebar_visible()
        {
            chunks[1]
        }
        else
        {
            chunks[0]
        };

        // Content pane plus a one-line metadata footer.
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(content_area);

        self.render_content(frame, rows[0]);
        Self::render_footer(frame, rows[1]);

        if self.mode == AppMode::Help
        {
            Self::render_help(frame);
        }

        if self.mode == AppMode::Search
        {
            self.render_search(frame);
        }
    }

    /// Renders the scrollable guide body.
    fn render_content(&self, frame: &mut Frame, area: Rect)
    {
        let text = Text::from(content::GUIDE_TEXT);

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Sales Team Guide - Press ? for help"),
            )
            .wrap(Wrap { trim: false })
            .scroll((
                u16::try_from(self.scroll).unwrap_or(u16::MAX),
                0,
            ));

        frame.render_widget(paragraph, area);
    }

    /// Renders the footer line with version, date and the marketing link.
    fn render_footer(frame: &mut Frame, area: Rect)
    {
        let footer = Line::raw(format!(
            " Version {} | Last Updated: {} | {}",
            content::GUIDE_VERSION,
            content::LAST_UPDATED,
            content::MARKETING_URL,
        ))
        .style(Style::new().fg(Color::DarkGray));

        frame.render_widget(Paragraph::new(footer), area);
    }

    /// Renders the help overlay with the key map.
    fn render_help(frame: &mut Frame)
    {
        // Create a centered rectangle.
        let area = centered_rect(60, 60, frame.area());

        // Clear the area first to make it fully opaque
        frame.render_widget(Clear, area);

        let text = Text::from(vec![
            Line::from("Guide Reader Help:"),
            Line::from(""),
            Line::from("Tab/Shift-Tab: Move between sections"),
            Line::from("Enter: Jump to the highlighted section"),
            Line::from("j/k or ↓/↑: Scroll the guide"),
            Line::from("f/b or PgDn/PgUp: Scroll page down/up"),
            Line::from("g/G: Go to start/end of the guide"),
            Line::from("t: Toggle the sidebar"),
            Line::from("/: Filter sections (Enter keeps, Esc clears)"),
            Line::from("p: Save a copy of the guide"),
            Line::from("o: Open ezmedtech.ai"),
            Line::from("q: Quit"),
            Line::from("?: Toggle help"),
        ]);

        let help_box = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help"),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(help_box, area);
    }

    /// Renders the section filter input box.
    fn render_search(&self, frame: &mut Frame)
    {
        let area = Rect::new(
            frame.area().width / 4,
            frame.area().height.saturating_sub(3),
            frame.area().width / 2,
            3,
        );

        // Clear the area first to make it fully opaque
        frame.render_widget(Clear, area);

        let matches = self.navigator.visible_sections().len();
        let text = Text::from(format!(
            "/{}  ({matches} matching)",
            self.navigator.search_query()
        ));

        let search_box = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search sections"),
        );

        frame.render_widget(search_box, area);
    }

    /// Activates the given section and starts an animated jump to its
    /// heading.
    ///
    /// The active marker always updates; if the body carries no heading
    /// for the id, the jump is simply skipped.
    pub fn select_section(&mut self, id: &str)
    {
        self.navigator.select_section(id);
        self.scroll_target = content::anchor_line(id);
    }

    /// Activates the section under the sidebar cursor, if any.
    pub fn select_under_cursor(&mut self)
    {
        if let Some(id) = self
            .sidebar
            .selected_id(&self.navigator)
        {
            self.select_section(id);
        }
    }

    /// Advances the animated jump by one step, if one is in flight.
    ///
    /// Steps a third of the remaining distance per tick, so the scroll
    /// decelerates into the target line.
    pub fn tick(&mut self)
    {
        let Some(target) = self.scroll_target
        else
        {
            return;
        };

        if self.scroll == target
        {
            self.scroll_target = None;
            return;
        }

        let step = self.scroll.abs_diff(target).div_ceil(3);

        if self.scroll < target
        {
            self.scroll = self.scroll.saturating_add(step);
        }
        else
        {
            self.scroll = self.scroll.saturating_sub(step);
        }

        if self.scroll == target
        {
            self.scroll_target = None;
        }
    }

    /// Scrolls the guide up, cancelling any animated jump.
    pub fn scroll_up(&mut self, amount: usize)
    {
        self.scroll_target = None;
        self.scroll = self.scroll.saturating_sub(amount);
    }

    /// Scrolls the guide down, cancelling any animated jump.
    pub fn scroll_down(&mut self, amount: usize)
    {
        self.scroll_target = None;
        self.scroll = self
            .scroll
            .saturating_add(amount)
            .min(self.line_count.saturating_sub(1));
    }

    /// Jumps to the top of the guide.
    pub const fn scroll_to_start(&mut self)
    {
        self.scroll_target = None;
        self.scroll = 0;
    }

    /// Jumps to the bottom of the guide.
    pub const fn scroll_to_end(&mut self)
    {
        self.scroll_target = None;
        self.scroll = self.line_count.saturating_sub(1);
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self)
    {
        self.mode = if self.mode == AppMode::Help
        {
            AppMode::Normal
        }
        else
        {
            AppMode::Help
        };
    }

    /// Shows or hides the sidebar.
    pub fn toggle_sidebar(&mut self)
    {
        let visible = self.navigator.sidebar_visible();
        self.navigator
            .set_sidebar_visible(!visible);
    }

    /// Opens the filter box, keeping whatever query is already set.
    pub const fn enter_search_mode(&mut self)
    {
        self.mode = AppMode::Search;
    }

    /// Closes the filter box.
    ///
    /// When `keep_query` is false the query is cleared, restoring the
    /// full section list.
    pub fn exit_search_mode(&mut self, keep_query: bool)
    {
        if !keep_query
        {
            self.navigator.set_search_query("");
        }
        self.mode = AppMode::Normal;
    }

    /// Appends a character to the filter query. The list narrows live.
    pub fn push_search_char(&mut self, character: char)
    {
        let mut query = self.navigator.search_query().to_owned();
        query.push(character);
        self.navigator.set_search_query(query);
    }

    /// Removes the last character from the filter query.
    pub fn pop_search_char(&mut self)
    {
        let mut query = self.navigator.search_query().to_owned();
        query.pop();
        self.navigator.set_search_query(query);
    }

    /// Moves the sidebar cursor down one visible entry.
    pub fn cursor_next(&mut self)
    {
        let visible_len = self.navigator.visible_sections().len();
        self.sidebar.next(visible_len);
    }

    /// Moves the sidebar cursor up one visible entry.
    pub fn cursor_previous(&mut self)
    {
        self.sidebar.previous();
    }

    /// Writes a copy of the guide into the current directory.
    ///
    /// The outcome only shows up in the log; export is best effort.
    pub fn export_guide(&self)
    {
        match export::export_guide(Path::new("."))
        {
            Ok(path) => info!("Exported the guide to {}", path.display()),
            Err(err) => warn!("Export failed: {err:#}"),
        }
    }
}

impl Default for App
{
    fn default() -> Self
    {
        Self::new()
    }
}

/// Creates a centered rectangle inside the given area.
fn centered_rect(percent_x: u16, percent_y: u16, parent: Rect) -> Rect
{
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(parent);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::content;

    #[test]
    fn selecting_a_section_sets_active_and_target()
    {
        let mut app = App::new();

        app.select_section("pipeline");

        assert_eq!(app.navigator.active_section_id(), "pipeline");
        assert_eq!(app.scroll_target, content::anchor_line("pipeline"));
    }

    #[test]
    fn animated_jump_converges_on_the_anchor()
    {
        let mut app = App::new();
        let target = content::anchor_line("quick-reference").expect("anchor missing");

        app.select_section("quick-reference");

        // A third of the distance per tick reaches any target quickly.
        for _ in 0..64
        {
            app.tick();
        }

        assert_eq!(app.scroll, target);
        assert_eq!(app.scroll_target, None);
    }

    #[test]
    fn jump_also_animates_backwards()
    {
        let mut app = App::new();

        app.select_section("quick-reference");
        for _ in 0..64
        {
            app.tick();
        }

        app.select_section("getting-started");
        for _ in 0..64
        {
            app.tick();
        }

        assert_eq!(
            Some(app.scroll),
            content::anchor_line("getting-started")
        );
    }

    #[test]
    fn selecting_a_missing_anchor_still_activates()
    {
        let mut app = App::new();
        let before = app.scroll;

        app.select_section("no-such-section");
        app.tick();

        assert_eq!(app.navigator.active_section_id(), "no-such-section");
        assert_eq!(app.scroll, before);
    }

    #[test]
    fn manual_scrolling_cancels_the_jump()
    {
        let mut app = App::new();

        app.select_section("quick-reference");
        app.scroll_down(1);
        let position = app.scroll;

        app.tick();

        assert_eq!(app.scroll, position);
    }

    #[test]
    fn scrolling_stays_within_the_guide()
    {
        let mut app = App::new();

        app.scroll_up(10);
        assert_eq!(app.scroll, 0);

        app.scroll_down(usize::MAX);
        assert!(app.scroll < content::GUIDE_TEXT.lines().count());
    }

    #[test]
    fn search_characters_flow_into_the_navigator()
    {
        let mut app = App::new();

        app.enter_search_mode();
        app.push_search_char('g');
        app.push_search_char('e');
        app.push_search_char('t');

        assert_eq!(app.navigator.search_query(), "get");

        app.pop_search_char();
        assert_eq!(app.navigator.search_query(), "ge");

        app.exit_search_mode(false);
        assert_eq!(app.navigator.search_query(), "");
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn enter_keeps_the_query()
    {
        let mut app = App::new();

        app.enter_search_mode();
        app.push_search_char('p');
        app.exit_search_mode(true);

        assert_eq!(app.navigator.search_query(), "p");
    }

    #[test]
    fn selecting_under_cursor_follows_the_filter()
    {
        let mut app = App::new();

        app.navigator.set_search_query("dash");
        app.select_under_cursor();

        assert_eq!(app.navigator.active_section_id(), "dashboard");
    }
}
