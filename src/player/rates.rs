use std::sync::{Arc, RwLock};

/// One selectable speed multiplier together with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackRate {
    pub value: f64,
    pub text: String,
}

impl PlaybackRate {
    pub fn new(value: f64, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Prev,
    Next,
}

/// The ordered list of selectable playback rates plus the active one.
///
/// Rates are expected to be sorted ascending so prev/next navigation
/// is well-defined. Rotation is only defined while the active rate is
/// actually present in the list.
#[derive(Debug, Clone)]
pub struct RateCatalog {
    rates: Vec<PlaybackRate>,
    current: PlaybackRate,
}

impl RateCatalog {
    pub fn new(rates: Vec<PlaybackRate>, current: PlaybackRate) -> Self {
        Self { rates, current }
    }

    pub fn current(&self) -> &PlaybackRate {
        &self.current
    }

    pub fn rates(&self) -> &[PlaybackRate] {
        &self.rates
    }

    pub fn set_current(&mut self, rate: PlaybackRate) {
        self.current = rate;
    }

    fn position(&self) -> Option<usize> {
        self.rates
            .iter()
            .position(|r| r.value == self.current.value)
    }

    /// Move one step through the catalog.
    ///
    /// Returns the rate to surface to the viewer: the newly selected one,
    /// or the unchanged current one when already at the edge. Returns
    /// `None` when the active rate is not in the list, in which case
    /// nothing is surfaced and nothing changes.
    pub fn rotate(&mut self, direction: RotateDirection) -> Option<PlaybackRate> {
        let index = self.position()?;
        let neighbor = match direction {
            RotateDirection::Prev => {
                index.checked_sub(1).and_then(|i| self.rates.get(i))
            }
            RotateDirection::Next => self.rates.get(index + 1),
        };
        match neighbor.cloned() {
            Some(next) => {
                self.current = next.clone();
                Some(next)
            }
            None => Some(self.current.clone()),
        }
    }
}

impl Default for RateCatalog {
    fn default() -> Self {
        let rates: Vec<_> = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0]
            .into_iter()
            .map(|v| PlaybackRate::new(v, format!("{v}x")))
            .collect();
        let current = PlaybackRate::new(1.0, "1x");
        Self::new(rates, current)
    }
}

/// Shared handle to the catalog, injected into whoever needs to read or
/// rotate the active rate.
pub type RateCatalogHandle = Arc<RwLock<RateCatalog>>;

pub fn shared(catalog: RateCatalog) -> RateCatalogHandle {
    Arc::new(RwLock::new(catalog))
}
