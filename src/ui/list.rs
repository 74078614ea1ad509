// List and detail rendering for trending records.
// Provides styled list views with loading, error, and empty states.

use std::time::Duration;

use ratatui::{prelude::*, widgets::*};

use crate::github::{Developer, Repository};
use crate::state::{LoadingState, SelectableList};

/// Format an age as relative time (e.g., "2h ago").
pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    if secs >= 86_400 {
        format!("{}d ago", secs / 86_400)
    } else if secs >= 3600 {
        format!("{}h ago", secs / 3600)
    } else if secs >= 60 {
        format!("{}m ago", secs / 60)
    } else {
        "just now".to_string()
    }
}

/// Format a count compactly (e.g., "12.3k").
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

/// Parse a `#rrggbb` swatch into a terminal color.
pub fn swatch_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

fn highlight() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// Render trending repositories list.
pub fn render_repositories_list(
    frame: &mut Frame,
    list: &mut SelectableList<Repository>,
    area: Rect,
) {
    match &list.data {
        LoadingState::Idle => render_empty(frame, area, "Press r to load"),
        LoadingState::Loading => render_loading(frame, area, "Loading trending repositories"),
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(repos) => {
            if repos.is_empty() {
                render_empty(frame, area, "No trending repositories found");
                return;
            }

            let items: Vec<ListItem> = repos
                .iter()
                .enumerate()
                .map(|(rank, repo)| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:>2}. ", rank + 1),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(
                            format!("{} / ", repo.author),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(repo.name.as_str(), Style::default().fg(Color::Cyan)),
                        Span::styled(
                            format!("  ★ {}", format_count(repo.stars)),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::styled(
                            format!("  +{}", format_count(repo.current_period_stars)),
                            Style::default().fg(Color::Green),
                        ),
                    ]))
                })
                .collect();

            let list_widget = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(" Repositories "))
                .highlight_style(highlight())
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, area, &mut list.list_state);
        }
    }
}

/// Render trending developers list.
pub fn render_developers_list(frame: &mut Frame, list: &mut SelectableList<Developer>, area: Rect) {
    match &list.data {
        LoadingState::Idle => render_empty(frame, area, "Press r to load"),
        LoadingState::Loading => render_loading(frame, area, "Loading trending developers"),
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(devs) => {
            if devs.is_empty() {
                render_empty(frame, area, "No trending developers found");
                return;
            }

            let items: Vec<ListItem> = devs
                .iter()
                .enumerate()
                .map(|(rank, dev)| {
                    let type_indicator = match dev.account_type.as_deref() {
                        Some("organization") => "🏢",
                        _ => "👤",
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:>2}. ", rank + 1),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(format!("{} ", type_indicator)),
                        Span::styled(dev.name.as_str(), Style::default().fg(Color::Cyan)),
                        Span::styled(
                            format!("  @{}", dev.username),
                            Style::default().fg(Color::Gray),
                        ),
                    ]))
                })
                .collect();

            let list_widget = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(" Developers "))
                .highlight_style(highlight())
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, area, &mut list.list_state);
        }
    }
}

fn field<'a>(label: &'a str, value: impl Into<Span<'a>>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::DarkGray)),
        value.into(),
    ])
}

/// Render the detail pane for one repository.
pub fn render_repository_detail(frame: &mut Frame, repo: Option<&Repository>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");
    let Some(repo) = repo else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            repo.full_name(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if !repo.description.is_empty() {
        lines.push(Line::from(repo.description.as_str()));
        lines.push(Line::from(""));
    }
    if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
        let swatch = repo
            .language_color
            .as_deref()
            .and_then(swatch_color)
            .unwrap_or(Color::Gray);
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", "Language"), Style::default().fg(Color::DarkGray)),
            Span::styled("● ", Style::default().fg(swatch)),
            Span::raw(language),
        ]));
    }
    lines.push(field("Stars", repo.stars.to_string()));
    lines.push(field("Forks", repo.forks.to_string()));
    lines.push(field("This period", format!("+{}", repo.current_period_stars)));
    lines.push(field("URL", repo.url.as_str()));

    if let Some(built_by) = &repo.built_by {
        let names: Vec<&str> = built_by
            .iter()
            .filter_map(|c| c.username.as_deref())
            .collect();
        lines.push(field("Built by", names.join(", ")));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the detail pane for one developer.
pub fn render_developer_detail(frame: &mut Frame, dev: Option<&Developer>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");
    let Some(dev) = dev else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            dev.name.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Username", dev.username.as_str()),
        field("Profile", dev.url.as_str()),
    ];
    if let Some(account_type) = &dev.account_type {
        lines.push(field("Type", account_type.as_str()));
    }
    if let Some(sponsor) = &dev.sponsor_url {
        lines.push(field(
            "Sponsor",
            Span::styled(sponsor.as_str(), Style::default().fg(Color::Magenta)),
        ));
    }
    if let Some(repo) = &dev.repo {
        lines.push(Line::from(""));
        lines.push(field(
            "Popular",
            Span::styled(repo.name.as_str(), Style::default().fg(Color::Cyan)),
        ));
        if !repo.description.is_empty() {
            lines.push(Line::from(repo.description.as_str()));
        }
        lines.push(field("", repo.url.as_str()));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
