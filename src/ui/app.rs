use std::time::Instant;

use flume::Receiver;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    Frame,
};
use tracing::{debug, info};

use crate::{
    input::{
        press::KeyPress,
        shortcuts::{ShortcutConfig, ShortcutDispatcher},
        target::KeyTargets,
    },
    player::{
        rates::{shared, RateCatalog},
        state::PlayerState,
        toast::{Toast, ToastSender},
    },
};

use super::{
    components::transport::TransportWidget,
    tui::{Tui, TuiEvent},
};

/// The hosting player component: owns playback state, the key targets
/// and the shortcut dispatcher, and routes terminal events between them.
pub struct App {
    pub state: PlayerState,
    pub targets: KeyTargets,
    pub dispatcher: ShortcutDispatcher,
    pub toast_rx: Receiver<Toast>,
    pub standalone: bool,
    pub has_focus: bool,
    pub should_quit: bool,
    last_tick: Instant,
}

impl App {
    pub fn new(
        title: impl Into<String>,
        duration: f64,
        standalone: bool,
    ) -> Self {
        let rates = shared(RateCatalog::default());
        let state = PlayerState::new(title, duration, rates.clone());
        let (toast_tx, toast_rx) = flume::unbounded();
        let dispatcher = ShortcutDispatcher::new(
            ToastSender::new(toast_tx),
            Some(rates),
            state.prev_volume.clone(),
        );

        Self {
            state,
            targets: KeyTargets::default(),
            dispatcher,
            toast_rx,
            standalone,
            has_focus: true,
            should_quit: false,
            last_tick: Instant::now(),
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?;

        tui.enter()?;

        loop {
            // The attachment target depends on the configuration, so it
            // is re-evaluated every pass; a settled mode is a no-op.
            self.dispatcher
                .sync_attachment(&mut self.targets, self.standalone);

            tui.draw(|f| {
                self.ui(f);
            })?;

            if let Some(evt) = tui.next().await {
                self.handle_event(evt);
            }

            if self.should_quit {
                break;
            }
        }

        self.dispatcher.detach(&mut self.targets);
        tui.exit()?;

        Ok(())
    }

    fn handle_event(&mut self, evt: TuiEvent) {
        match evt {
            TuiEvent::Init => self.last_tick = Instant::now(),
            TuiEvent::Tick => {
                let elapsed = self.last_tick.elapsed();
                self.last_tick = Instant::now();
                self.state.tick(elapsed);
            }
            TuiEvent::FocusGained => self.has_focus = true,
            TuiEvent::FocusLost => self.has_focus = false,
            TuiEvent::Key(key) => self.route_key(key),
            _ => {}
        }

        self.drain_shortcuts();
        self.drain_toasts();
    }

    fn route_key(&mut self, evt: KeyEvent) {
        match evt.code {
            KeyCode::Char('q') if evt.modifiers == KeyModifiers::NONE => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c')
                if evt.modifiers == KeyModifiers::CONTROL =>
            {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        // The document target sees every press; the container target
        // only while the player pane is focused.
        let press = KeyPress::from(evt);
        self.targets.document.dispatch(press.clone());
        if self.has_focus {
            self.targets.container.dispatch(press);
        }
    }

    fn drain_shortcuts(&mut self) {
        while let Some(press) = self.dispatcher.try_next() {
            let config = self.snapshot();
            let handled =
                self.dispatcher.handle(&press, &config, &mut self.state);
            if !handled {
                debug!(?press.code, "key left unhandled");
            }
        }
    }

    fn drain_toasts(&mut self) {
        // Toast presentation lives elsewhere; the host only records
        // that they happened.
        while let Ok(toast) = self.toast_rx.try_recv() {
            info!(icon = ?toast.icon, label = ?toast.label, "toast");
        }
    }

    fn snapshot(&self) -> ShortcutConfig {
        ShortcutConfig {
            is_playing: self.state.is_playing,
            is_page_full_screen: self.state.is_page_full_screen,
            duration: self.state.duration,
            volume: self.state.volume,
            current_time: self.state.current_time,
            standalone: self.standalone,
        }
    }

    fn ui(&self, frame: &mut Frame) {
        frame.render_widget(TransportWidget::new(&self.state), frame.size());
    }
}
