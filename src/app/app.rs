use std::{
    io,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::{info, warn};

use crate::{
    app::{display::DisplayState, timer::RefreshTimer, ui},
    services::QuoteSource,
};

/// Default period of the automatic refresh.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Owns everything the interactive display needs: the quote source, what is
/// on screen and the refresh timer. All of it lives on the event-loop task.
pub struct App<S: QuoteSource> {
    source: S,
    display: DisplayState,
    refresh_timer: RefreshTimer,
    refresh_pending: bool,
    should_quit: bool,
}

impl<S: QuoteSource> App<S> {
    /// Starts in the loading state with the first fetch already requested.
    pub fn new(source: S, refresh_interval: Duration) -> Self {
        Self {
            source,
            display: DisplayState::new(),
            refresh_timer: RefreshTimer::new(refresh_interval, Instant::now()),
            refresh_pending: true,
            should_quit: false,
        }
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn refresh_pending(&self) -> bool {
        self.refresh_pending
    }

    /// Queues a fetch for the next tick, as the refresh button does.
    pub fn request_refresh(&mut self) {
        self.refresh_pending = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter | KeyCode::F(5) => {
                self.request_refresh()
            }
            _ => {}
        }
    }

    /// Earliest moment the loop has work to do.
    pub fn next_deadline(&self, now: Instant) -> Instant {
        if self.refresh_pending {
            return now;
        }

        let refresh_due = self.refresh_timer.next_due();
        match self.display.ack_deadline() {
            Some(ack) => ack.min(refresh_due),
            None => refresh_due,
        }
    }

    /// Runs whatever is due at `now`: the acknowledgement revert, the
    /// refresh timer and any requested fetch. A fetch is awaited inline.
    pub async fn tick(&mut self, now: Instant) {
        self.display.expire_ack(now);

        if self.refresh_timer.is_due(now) {
            self.refresh_timer.fire(now);
            self.refresh_pending = true;
        }

        if self.refresh_pending {
            self.refresh_pending = false;
            self.refresh(now).await;
        }
    }

    async fn refresh(&mut self, now: Instant) {
        let started = Instant::now();
        let result = self.source.fetch_snapshot().await;

        match &result {
            Ok(snapshot) => info!(?snapshot, "Quotes updated"),
            Err(e) => warn!(error = %e, kind = ?e.kind(), "Failed to update quotes"),
        }

        self.display.apply(result, now + started.elapsed());
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| ui::render(frame, &self.display))?;

            if self.should_quit {
                return Ok(());
            }

            let now = Instant::now();
            let timeout = self.next_deadline(now).saturating_duration_since(now);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
                if self.should_quit {
                    return Ok(());
                }
            }

            self.tick(Instant::now()).await;
        }
    }
}
