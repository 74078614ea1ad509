// App state and main event loop.
// Manages tabs, filters, background fetches, and keyboard input handling.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, info, warn};

use crate::github::{Developer, Repository, TrendingClient};
use crate::state::{Filters, SelectableList};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Repositories,
    Developers,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Repositories, Tab::Developers];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Repositories => "Repositories",
            Tab::Developers => "Developers",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Repositories => Tab::Developers,
            Tab::Developers => Tab::Repositories,
        }
    }

    pub fn prev(&self) -> Self {
        // Two tabs: previous and next coincide.
        self.next()
    }
}

/// Result of a background fetch, tagged with the URL it answered.
#[derive(Debug)]
pub enum FetchMessage {
    Repositories {
        url: String,
        result: Result<Vec<Repository>, String>,
    },
    Developers {
        url: String,
        result: Result<Vec<Developer>, String>,
    },
}

/// Main application state.
pub struct App {
    /// Currently active tab.
    pub active_tab: Tab,
    /// Filters shared by both tabs.
    pub filters: Filters,
    pub repositories: SelectableList<Repository>,
    pub developers: SelectableList<Developer>,
    /// Language being typed after `/`; `None` when not editing.
    pub language_input: Option<String>,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    pub client: Arc<TrendingClient>,
    runtime: Handle,
    tx: UnboundedSender<FetchMessage>,
    rx: UnboundedReceiver<FetchMessage>,
}

impl App {
    /// Create the app. Must be called from within a tokio runtime.
    pub fn new(client: Arc<TrendingClient>, filters: Filters) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            active_tab: Tab::default(),
            filters,
            repositories: SelectableList::new(),
            developers: SelectableList::new(),
            language_input: None,
            show_help: false,
            should_quit: false,
            client,
            runtime: Handle::current(),
            tx,
            rx,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.load_active(false);

        while !self.should_quit {
            self.drain_fetches();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.language_input.is_some() {
            self.handle_input_key(code);
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.show_help = false,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Tab => {
                self.active_tab = self.active_tab.next();
                self.load_active_if_idle();
            }
            KeyCode::BackTab => {
                self.active_tab = self.active_tab.prev();
                self.load_active_if_idle();
            }
            KeyCode::Down | KeyCode::Char('j') => match self.active_tab {
                Tab::Repositories => self.repositories.select_next(),
                Tab::Developers => self.developers.select_next(),
            },
            KeyCode::Up | KeyCode::Char('k') => match self.active_tab {
                Tab::Repositories => self.repositories.select_prev(),
                Tab::Developers => self.developers.select_prev(),
            },
            KeyCode::Char('s') => {
                self.filters.cycle_since();
                self.reload_all();
            }
            KeyCode::Char('/') => self.language_input = Some(self.filters.language.clone()),
            KeyCode::Char('r') => self.load_active(false),
            KeyCode::Char('R') => self.load_active(true),
            KeyCode::Char('C') => {
                info!("clearing every cached list");
                self.client.clear_cache();
                self.reload_all();
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        let Some(input) = self.language_input.as_mut() else {
            return;
        };

        match code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => {
                let language = input.trim().to_string();
                self.language_input = None;
                if language != self.filters.language {
                    self.filters.language = language;
                    self.reload_all();
                }
            }
            KeyCode::Esc => self.language_input = None,
            _ => {}
        }
    }

    /// Reset both tabs after a filter change and load the visible one.
    fn reload_all(&mut self) {
        self.repositories = SelectableList::new();
        self.developers = SelectableList::new();
        self.load_active(false);
    }

    fn load_active_if_idle(&mut self) {
        let idle = match self.active_tab {
            Tab::Repositories => self.repositories.data.is_idle(),
            Tab::Developers => self.developers.data.is_idle(),
        };
        if idle {
            self.load_active(false);
        }
    }

    /// Fetch the active tab's listing on a background task.
    ///
    /// With `force`, the cached list for the current filters is dropped first.
    fn load_active(&mut self, force: bool) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        match self.active_tab {
            Tab::Repositories => {
                let query = self.filters.repository_query();
                if force {
                    client.invalidate_repositories(&query);
                }
                let url = client.repositories_url(&query);
                self.repositories.start_loading(url.clone());
                debug!(%url, force, "loading repositories");

                self.runtime.spawn(async move {
                    let result = client
                        .fetch_repositories(&query)
                        .await
                        .map_err(|e| e.to_string());
                    let _ = tx.send(FetchMessage::Repositories { url, result });
                });
            }
            Tab::Developers => {
                let query = self.filters.developer_query();
                if force {
                    client.invalidate_developers(&query);
                }
                let url = client.developers_url(&query);
                self.developers.start_loading(url.clone());
                debug!(%url, force, "loading developers");

                self.runtime.spawn(async move {
                    let result = client
                        .fetch_developers(&query)
                        .await
                        .map_err(|e| e.to_string());
                    let _ = tx.send(FetchMessage::Developers { url, result });
                });
            }
        }
    }

    /// Apply any fetch results that arrived since the last frame.
    pub fn drain_fetches(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            self.apply(message);
        }
    }

    fn apply(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Repositories { url, result } => {
                if let Err(e) = &result {
                    warn!(%url, error = %e, "repositories fetch failed");
                }
                if !self.repositories.finish_loading(&url, result) {
                    debug!(%url, "dropping stale repositories result");
                }
            }
            FetchMessage::Developers { url, result } => {
                if let Err(e) = &result {
                    warn!(%url, error = %e, "developers fetch failed");
                }
                if !self.developers.finish_loading(&url, result) {
                    debug!(%url, "dropping stale developers result");
                }
            }
        }
    }

    /// Age of the cached list behind the active tab.
    pub fn active_cache_age(&self) -> Option<Duration> {
        match self.active_tab {
            Tab::Repositories => self
                .client
                .repositories_age(&self.filters.repository_query()),
            Tab::Developers => self.client.developers_age(&self.filters.developer_query()),
        }
    }
}
