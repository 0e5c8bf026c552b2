use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::bell::{BellTarget, TerminalBell};
use crate::io::config_io::{read_config, resolve_data_dir};
use crate::io::kv::FileStore;
use crate::io::persistence::Persistence;
use crate::model::{Config, FilterMode, Priority, Task, TaskId, UiConfig};
use crate::ops::store::{Confirmation, StoreError, TaskStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task
    Add,
    /// Editing the selected task's text
    Edit,
    /// Moving the selected task with j/k
    Move,
    /// Waiting for y/n on a bulk action
    Confirm,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub filter: FilterMode,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub ui: UiConfig,
    /// Cursor index into the projected view
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// Text being typed in Add/Edit mode
    pub edit_buffer: String,
    /// Byte offset of the cursor within `edit_buffer`
    pub edit_cursor: usize,
    /// Task being edited in Edit mode
    pub edit_target: Option<TaskId>,
    /// Priority for the task being added
    pub new_priority: Priority,
    pub default_priority: Priority,
    /// Bulk action awaiting confirmation
    pub confirm: Option<Confirmation>,
    /// One-shot notice shown in the status row
    pub status_message: Option<String>,
    pub show_help: bool,
}

impl App {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        let theme = Theme::from_config(&config.ui, store.preferences().dark_mode);
        App {
            store,
            filter: FilterMode::All,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            ui: config.ui.clone(),
            cursor: 0,
            scroll_offset: 0,
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_target: None,
            new_priority: config.tasks.default_priority,
            default_priority: config.tasks.default_priority,
            confirm: None,
            status_message: None,
            show_help: false,
        }
    }

    /// Tasks visible under the current filter
    pub fn view(&self) -> Vec<&Task> {
        self.store.projected_view(self.filter)
    }

    pub fn view_len(&self) -> usize {
        self.view().len()
    }

    pub fn selected(&self) -> Option<&Task> {
        self.view().get(self.cursor).copied()
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected().map(|t| t.id)
    }

    /// Keep the cursor inside the view after it shrinks
    pub fn clamp_cursor(&mut self) {
        let len = self.view_len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    /// Put the cursor on `id` if it is visible
    pub fn select_id(&mut self, id: TaskId) {
        let found = self.view().iter().position(|t| t.id == id);
        if let Some(idx) = found {
            self.cursor = idx;
        }
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        let selected = self.selected_id();
        self.filter = filter;
        self.cursor = 0;
        self.scroll_offset = 0;
        if let Some(id) = selected {
            self.select_id(id);
        }
    }

    /// Re-read the dark-mode preference into the theme
    pub fn refresh_theme(&mut self) {
        self.theme = Theme::from_config(&self.ui, self.store.preferences().dark_mode);
    }

    /// Surface a store error as a status notice, passing successes through
    pub fn report<T>(&mut self, result: Result<T, StoreError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(StoreError::EmptyText) => {
                self.status_message = Some("Please enter a task!".to_string());
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "store operation failed");
                self.status_message = Some(format!("error: {}", e));
                None
            }
        }
    }

    /// Reset the text input state
    pub fn clear_edit(&mut self) {
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.edit_target = None;
    }
}

/// Run the TUI application
pub fn run(data_dir_override: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = resolve_data_dir(data_dir_override);
    crate::logging::init_file(&data_dir);

    let config = read_config(&data_dir)?;
    let kv = FileStore::open(&data_dir)?;
    let store = TaskStore::open(Persistence::new(Box::new(kv)))
        .with_notifier(Box::new(TerminalBell::new(BellTarget::Stdout)));

    let mut app = App::new(store, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
