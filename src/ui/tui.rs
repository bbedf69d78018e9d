use std::{
    ops::{Deref, DerefMut},
    thread,
    time::Duration,
};

use color_eyre::eyre::Result;

use flume::{Receiver, Sender};
use ratatui::crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend as Backend, crossterm};

/// How often the playback clock advances while no input arrives.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Clone, Debug)]
pub enum TuiEvent {
    Init,
    Error,
    Tick,
    FocusGained,
    FocusLost,
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Terminal handle plus the background pump turning crossterm events
/// into [`TuiEvent`]s on a flume channel.
pub struct Tui {
    pub terminal: ratatui::Terminal<Backend<std::io::Stdout>>,
    pub event_rx: Receiver<TuiEvent>,
    pub event_tx: Sender<TuiEvent>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = ratatui::Terminal::new(Backend::new(std::io::stdout()))?;
        let (event_tx, event_rx) = flume::unbounded();
        Ok(Self {
            terminal,
            event_rx,
            event_tx,
        })
    }

    fn start(&mut self) {
        let event_tx = self.event_tx.clone();
        thread::spawn(move || {
            let _ = event_tx.send(TuiEvent::Init);
            loop {
                match event::poll(TICK_INTERVAL) {
                    Ok(false) => {
                        let _ = event_tx.send(TuiEvent::Tick);
                        continue;
                    }
                    Err(_) => {
                        let _ = event_tx.send(TuiEvent::Error);
                        continue;
                    }
                    Ok(true) => {}
                }
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        // Release/repeat kinds only exist on some
                        // platforms; shortcuts act on presses.
                        if key.kind == KeyEventKind::Press {
                            let _ = event_tx.send(TuiEvent::Key(key));
                        }
                    }
                    Ok(CrosstermEvent::Resize(x, y)) => {
                        let _ = event_tx.send(TuiEvent::Resize(x, y));
                    }
                    Ok(CrosstermEvent::FocusGained) => {
                        let _ = event_tx.send(TuiEvent::FocusGained);
                    }
                    Ok(CrosstermEvent::FocusLost) => {
                        let _ = event_tx.send(TuiEvent::FocusLost);
                    }
                    Ok(_) => {}
                    Err(_) => {
                        let _ = event_tx.send(TuiEvent::Error);
                    }
                }
            }
        });
    }

    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            EnterAlternateScreen,
            cursor::Hide
        )?;
        self.start();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.flush()?;
            crossterm::execute!(
                std::io::stdout(),
                LeaveAlternateScreen,
                cursor::Show
            )?;
            crossterm::terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    pub fn restore() -> Result<()> {
        crossterm::execute!(
            std::io::stdout(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        crossterm::terminal::disable_raw_mode()?;
        Ok(())
    }

    #[allow(clippy::should_implement_trait)]
    pub async fn next(&mut self) -> Option<TuiEvent> {
        self.event_rx.recv_async().await.ok()
    }
}

impl Deref for Tui {
    type Target = ratatui::Terminal<Backend<std::io::Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
