use std::{
    sync::{Arc, RwLock},
    time::Duration,
};

use tracing::debug;

use super::{rates::RateCatalogHandle, transport::TransportControl};

/// Shared cell remembering the last non-zero volume so un-muting can
/// restore it. The host writes it on every non-mute volume change; the
/// dispatcher only ever reads it.
#[derive(Debug, Clone)]
pub struct PrevVolume(Arc<RwLock<f32>>);

impl PrevVolume {
    pub fn new(volume: f32) -> Self {
        Self(Arc::new(RwLock::new(volume)))
    }

    pub fn get(&self) -> f32 {
        self.0.read().map(|v| *v).unwrap_or(1.0)
    }

    pub fn set(&self, volume: f32) {
        if let Ok(mut v) = self.0.write() {
            *v = volume;
        }
    }
}

impl Default for PrevVolume {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Playback state of the hosting player.
///
/// No media is decoded here; the clock is advanced on ticks while
/// playing, scaled by the active playback rate.
pub struct PlayerState {
    pub title: String,
    pub duration: f64,
    pub current_time: f64,
    pub volume: f32,
    pub is_playing: bool,
    pub is_full_screen: bool,
    pub is_page_full_screen: bool,
    pub prev_volume: PrevVolume,
    pub rates: RateCatalogHandle,
}

impl PlayerState {
    pub fn new(
        title: impl Into<String>,
        duration: f64,
        rates: RateCatalogHandle,
    ) -> Self {
        Self {
            title: title.into(),
            duration: duration.max(0.0),
            current_time: 0.0,
            volume: 1.0,
            is_playing: false,
            is_full_screen: false,
            is_page_full_screen: false,
            prev_volume: PrevVolume::new(1.0),
            rates,
        }
    }

    pub fn playback_rate(&self) -> f64 {
        self.rates
            .read()
            .map(|c| c.current().value)
            .unwrap_or(1.0)
    }

    /// Advance the playback clock by one tick. Pauses at the end of the
    /// timeline.
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.is_playing {
            return;
        }
        self.current_time += elapsed.as_secs_f64() * self.playback_rate();
        if self.current_time >= self.duration {
            self.current_time = self.duration;
            self.is_playing = false;
        }
    }
}

impl TransportControl for PlayerState {
    fn volume_changed(&mut self, value: f32) {
        self.volume = value;
        // Zero means muted; only audible levels are worth restoring.
        if value > 0.0 {
            self.prev_volume.set(value);
        }
        debug!(volume = value, "volume changed");
    }

    fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        debug!(playing = self.is_playing, "toggled playback");
    }

    fn toggle_full_screen(&mut self) {
        self.is_full_screen = !self.is_full_screen;
        debug!(full_screen = self.is_full_screen, "toggled fullscreen");
    }

    fn toggle_page_full_screen(&mut self) {
        self.is_page_full_screen = !self.is_page_full_screen;
        debug!(
            page_full_screen = self.is_page_full_screen,
            "toggled page fullscreen"
        );
    }

    fn seek(&mut self, time: f64) {
        self.current_time = time;
        debug!(time, "seeked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::rates::{shared, RateCatalog};

    fn state() -> PlayerState {
        PlayerState::new("clip", 120.0, shared(RateCatalog::default()))
    }

    #[test]
    fn non_zero_volume_is_recorded_as_previous() {
        let mut state = state();
        state.volume_changed(0.55);
        assert_eq!(state.prev_volume.get(), 0.55);
    }

    #[test]
    fn zero_volume_is_never_recorded() {
        let mut state = state();
        state.volume_changed(0.8);
        state.volume_changed(0.0);
        assert_eq!(state.volume, 0.0);
        assert_eq!(state.prev_volume.get(), 0.8);
    }

    #[test]
    fn tick_advances_while_playing_and_pauses_at_the_end() {
        let mut state = state();
        state.tick(Duration::from_secs(5));
        assert_eq!(state.current_time, 0.0);

        state.is_playing = true;
        state.tick(Duration::from_secs(5));
        assert!((state.current_time - 5.0).abs() < 1e-9);

        state.current_time = 119.0;
        state.tick(Duration::from_secs(5));
        assert_eq!(state.current_time, 120.0);
        assert!(!state.is_playing);
    }

    #[test]
    fn tick_scales_with_the_active_rate() {
        let mut state = state();
        {
            let mut catalog = state.rates.write().unwrap();
            let double = catalog
                .rates()
                .iter()
                .find(|r| r.value == 2.0)
                .cloned()
                .unwrap();
            catalog.set_current(double);
        }
        state.is_playing = true;
        state.tick(Duration::from_secs(4));
        assert!((state.current_time - 8.0).abs() < 1e-9);
    }
}
