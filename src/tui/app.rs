use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{Config, FilterMode, Task, TaskId};
use crate::ops::todo_list::TodoList;

use super::input::{self, LineEdit};
use super::render;
use super::theme::Theme;
use super::toasts::Toasts;

/// How often the list is redrawn without input, so "time since" stays fresh
const REFRESH_INTERVAL: Duration = Duration::from_secs(15);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving the cursor over the list
    Navigate,
    /// Typing into the add box
    Input,
    /// Renaming the task in the edit session
    Edit,
    /// Delete confirmation popup is open
    Confirm,
}

/// Main application state
pub struct App {
    pub list: TodoList,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the visible (filtered, newest-first) tasks
    pub cursor: usize,
    /// The add box
    pub input: LineEdit,
    /// Cursor state for the edit session; its text mirrors the session draft
    pub edit_line: LineEdit,
    pub toasts: Toasts,
    /// Help overlay visible
    pub show_help: bool,
    pub show_key_hints: bool,
    /// Set by the todo list subscriber whenever state changes
    changed: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let changed = Rc::new(Cell::new(true));
        let mut list = TodoList::new();
        let flag = Rc::clone(&changed);
        list.subscribe(Box::new(move |list: &TodoList| {
            debug!(
                tasks = list.len(),
                visible = list.visible_count(),
                filter = %list.filter(),
                "state changed"
            );
            flag.set(true);
        }));
        list.set_filter(config.ui.default_filter);

        App {
            list,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            cursor: 0,
            input: LineEdit::default(),
            edit_line: LineEdit::default(),
            toasts: Toasts::new(config.ui.notice_timeout()),
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            changed,
        }
    }

    /// Whether state changed since the last call
    pub fn take_changed(&self) -> bool {
        self.changed.replace(false)
    }

    /// The task under the cursor
    pub fn cursor_task(&self) -> Option<&Task> {
        self.list.visible().get(self.cursor).copied()
    }

    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.cursor_task().map(|t| t.id)
    }

    /// Keep the cursor inside the visible list
    pub fn clamp_cursor(&mut self) {
        let count = self.list.visible_count();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Put the cursor on `id` if it is visible
    pub fn focus_task(&mut self, id: TaskId) {
        if let Some(pos) = self.list.visible().iter().position(|t| t.id == id) {
            self.cursor = pos;
        }
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        let focused = self.cursor_task_id();
        self.list.set_filter(mode);
        self.cursor = 0;
        if let Some(id) = focused {
            self.focus_task(id);
        }
    }

    /// Move queued notices from the todo list onto the toast stack
    pub fn collect_notices(&mut self, now: Instant) {
        for notice in self.list.drain_notices() {
            self.toasts.push(notice, now);
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);
    info!(tasks = app.list.len(), "tui stopped");

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
    let mut redraw = true;
    let mut last_draw = Instant::now();
    loop {
        let now = Instant::now();
        if app.toasts.expire(now) {
            redraw = true;
        }
        if app.take_changed() || redraw || now.duration_since(last_draw) >= REFRESH_INTERVAL {
            terminal.draw(|frame| render::render(frame, app))?;
            redraw = false;
            last_draw = now;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    redraw = true;
                }
                Event::Resize(..) => redraw = true,
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
