// UI module for rendering the TUI.
// Contains the tab bar, record lists, detail panes, status bar, and help overlay.

mod list;
mod tabs;

pub use list::{format_age, format_count, swatch_color};

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the list and detail pane for the active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    match app.active_tab {
        Tab::Repositories => {
            list::render_repositories_list(frame, &mut app.repositories, panes[0]);
            list::render_repository_detail(frame, app.repositories.selected_item(), panes[1]);
        }
        Tab::Developers => {
            list::render_developers_list(frame, &mut app.developers, panes[0]);
            list::render_developer_detail(frame, app.developers.selected_item(), panes[1]);
        }
    }
}

/// Draw the status bar with keybinding hints and cache age.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(input) = &app.language_input {
        let prompt = Line::from(vec![
            Span::styled(" Language: ", Style::default().fg(Color::Yellow)),
            Span::raw(input.as_str()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
            Span::styled(
                "  (Enter apply, Esc cancel, empty = all)",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(prompt), area);
        return;
    }

    let mut hints = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
        Span::raw("  Tab "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
        Span::raw("  s "),
        Span::styled("Since", Style::default().fg(Color::DarkGray)),
        Span::raw("  / "),
        Span::styled("Language", Style::default().fg(Color::DarkGray)),
        Span::raw("  r/R/C "),
        Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    if let Some(age) = app.active_cache_age() {
        hints.push(Span::styled(
            format!("  cached {}", format_age(age)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 52u16.min(area.width);
    let popup_height = 17u16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", k), Style::default().fg(Color::Cyan)),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("↑/↓ or j/k", "Navigate list"),
        key("Tab", "Switch tabs"),
        key("s", "Cycle daily / weekly / monthly"),
        key("/", "Filter by language"),
        key("r", "Reload (cached when fresh)"),
        key("R", "Drop cache and refetch"),
        key("C", "Clear every cached list"),
        key("Esc", "Close help"),
        key("?", "Show/hide this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::backend::TestBackend;

    use crate::config::TrendingConfig;
    use crate::github::{Repository, TrendingClient};
    use crate::state::Filters;

    fn sample_repo() -> Repository {
        Repository {
            author: "rust-lang".to_string(),
            name: "rust".to_string(),
            avatar: "https://github.com/rust-lang.png".to_string(),
            url: "https://github.com/rust-lang/rust".to_string(),
            description: "Empowering everyone".to_string(),
            language: Some("Rust".to_string()),
            language_color: Some("#dea584".to_string()),
            stars: 98_765,
            forks: 12_345,
            current_period_stars: 56,
            built_by: None,
        }
    }

    #[tokio::test]
    async fn test_draw_loaded_repositories() {
        let client = Arc::new(TrendingClient::new(TrendingConfig::default()).unwrap());
        let mut app = App::new(client, Filters::default());
        app.repositories.start_loading("u".to_string());
        app.repositories.finish_loading("u", Ok(vec![sample_repo()]));
        app.show_help = true;

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Repositories"));
        assert!(screen.contains("rust-lang"));
        assert!(screen.contains("Keyboard Shortcuts"));
    }
}
