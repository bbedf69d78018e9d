use flume::Sender;

use super::press::KeyPress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// A fan-out point for key presses, playing the role of an event target.
///
/// Subscribers hand over a sender and get an id back; dispatching clones
/// the press into every live subscriber. Senders whose receiver is gone
/// are simply skipped.
#[derive(Debug, Default)]
pub struct KeyHub {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<KeyPress>)>,
}

impl KeyHub {
    pub fn subscribe(&mut self, tx: Sender<KeyPress>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, tx));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn dispatch(&self, press: KeyPress) {
        for (_, tx) in &self.subscribers {
            let _ = tx.send(press.clone());
        }
    }
}

/// The two places a shortcut listener can live: the whole document, or
/// the player's own container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachMode {
    Standalone,
    Scoped,
}

/// Both attachment targets, owned by the hosting app. The document hub
/// sees every key press; the container hub only sees presses while the
/// player pane has focus.
#[derive(Debug, Default)]
pub struct KeyTargets {
    pub document: KeyHub,
    pub container: KeyHub,
}

impl KeyTargets {
    pub fn hub_mut(&mut self, mode: AttachMode) -> &mut KeyHub {
        match mode {
            AttachMode::Standalone => &mut self.document,
            AttachMode::Scoped => &mut self.container,
        }
    }
}
