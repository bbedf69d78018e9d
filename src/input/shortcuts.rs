//! Keyboard shortcut dispatcher for the player transport.
//!
//! Key presses arrive through a [`KeyHub`] subscription, get filtered
//! (already-consumed presses, OS-level modifier combos, text-input
//! focus), then map to a player intent. Recognized intents clamp their
//! values, invoke the [`TransportControl`] callbacks and emit toasts for
//! state changes the viewer should see.

use flume::{Receiver, Sender};

use crate::player::{
    rates::{RateCatalogHandle, RotateDirection},
    state::PrevVolume,
    toast::{Toast, ToastIcon, ToastSender},
    transport::TransportControl,
};

use super::{
    keymap::{intent_for, Intent},
    press::{Focus, KeyPress},
    target::{AttachMode, KeyTargets, SubscriptionId},
};

/// Snapshot of the host's playback state, rebuilt before every dispatch
/// pass. The dispatcher only reads it.
#[derive(Debug, Clone, Copy)]
pub struct ShortcutConfig {
    pub is_playing: bool,
    pub is_page_full_screen: bool,
    pub duration: f64,
    pub volume: f32,
    pub current_time: f64,
    pub standalone: bool,
}

/// Binds key presses to transport intents.
///
/// Holds exactly one hub subscription while attached; re-attachment
/// always tears the old subscription down first, in the same call, so a
/// press is never delivered twice and never leaks a listener.
pub struct ShortcutDispatcher {
    tx: Sender<KeyPress>,
    rx: Receiver<KeyPress>,
    attachment: Option<(AttachMode, SubscriptionId)>,
    toasts: ToastSender,
    rates: Option<RateCatalogHandle>,
    prev_volume: PrevVolume,
}

impl ShortcutDispatcher {
    pub fn new(
        toasts: ToastSender,
        rates: Option<RateCatalogHandle>,
        prev_volume: PrevVolume,
    ) -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            tx,
            rx,
            attachment: None,
            toasts,
            rates,
            prev_volume,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Point the subscription at the target the configuration asks for:
    /// the document hub when standalone, the container hub otherwise.
    /// A no-op when already attached there.
    pub fn sync_attachment(
        &mut self,
        targets: &mut KeyTargets,
        standalone: bool,
    ) {
        let mode = if standalone {
            AttachMode::Standalone
        } else {
            AttachMode::Scoped
        };
        if let Some((current, _)) = self.attachment {
            if current == mode {
                return;
            }
        }
        self.detach(targets);
        let id = targets.hub_mut(mode).subscribe(self.tx.clone());
        self.attachment = Some((mode, id));
    }

    pub fn detach(&mut self, targets: &mut KeyTargets) {
        if let Some((mode, id)) = self.attachment.take() {
            targets.hub_mut(mode).unsubscribe(id);
        }
    }

    /// Next queued key press, if any.
    pub fn try_next(&self) -> Option<KeyPress> {
        self.rx.try_recv().ok()
    }

    /// Run one key press against the current snapshot. Returns whether
    /// the key was recognized; the host uses that to stop recognized
    /// keys from reaching anything else.
    pub fn handle(
        &self,
        press: &KeyPress,
        config: &ShortcutConfig,
        control: &mut dyn TransportControl,
    ) -> bool {
        if press.consumed {
            return false;
        }
        if press.has_blocking_modifier() {
            return false;
        }
        if press.focus == Focus::TextInput {
            return false;
        }
        let Some(intent) = intent_for(press.code) else {
            return false;
        };
        self.dispatch(intent, config, control);
        true
    }

    fn dispatch(
        &self,
        intent: Intent,
        config: &ShortcutConfig,
        control: &mut dyn TransportControl,
    ) {
        match intent {
            Intent::TogglePlay => {
                let icon = if config.is_playing {
                    ToastIcon::Pause
                } else {
                    ToastIcon::Play
                };
                self.toasts.emit(Toast::icon(icon));
                control.toggle_play();
            }
            Intent::ToggleFullScreen => control.toggle_full_screen(),
            Intent::ExitPageFullScreen => {
                if config.is_page_full_screen {
                    control.toggle_page_full_screen();
                }
            }
            Intent::SeekBy(delta) => {
                self.seek_to(config.current_time + delta, config, control);
            }
            Intent::SeekToDecile(digit) => {
                let target = config.duration / 10.0 * f64::from(digit);
                self.seek_to(target, config, control);
            }
            Intent::VolumeBy(delta) => {
                self.change_volume(config.volume + delta, true, control);
            }
            Intent::ToggleMute => {
                let target = if config.volume > 0.0 {
                    0.0
                } else {
                    self.prev_volume.get()
                };
                self.change_volume(target, true, control);
            }
            Intent::RotateRate(direction) => self.rotate_rate(direction),
        }
    }

    /// The single volume path: clamp, toast, callback. Arrow keys and
    /// mute both land here, so they clamp and report identically. Note
    /// that an arrow press while muted goes through the normal path and
    /// therefore un-mutes.
    fn change_volume(
        &self,
        value: f32,
        show_toast: bool,
        control: &mut dyn TransportControl,
    ) {
        let value = value.clamp(0.0, 1.0);
        if show_toast {
            let icon = if value > 0.0 {
                ToastIcon::Volume
            } else {
                ToastIcon::Muted
            };
            let label = format!("{}%", (value * 100.0).round() as u32);
            self.toasts.emit(Toast::labeled(icon, label));
        }
        control.volume_changed(value);
    }

    /// The single seek path: clamp to the timeline, then callback.
    fn seek_to(
        &self,
        time: f64,
        config: &ShortcutConfig,
        control: &mut dyn TransportControl,
    ) {
        control.seek(time.clamp(0.0, config.duration.max(0.0)));
    }

    fn rotate_rate(&self, direction: RotateDirection) {
        let Some(handle) = &self.rates else {
            return;
        };
        let Ok(mut catalog) = handle.write() else {
            return;
        };
        if let Some(shown) = catalog.rotate(direction) {
            self.toasts
                .emit(Toast::labeled(ToastIcon::Play, shown.text));
        }
    }
}
