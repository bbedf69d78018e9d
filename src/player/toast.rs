use flume::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIcon {
    Play,
    Pause,
    Volume,
    Muted,
}

/// Transient on-screen feedback for a shortcut that changed state.
/// Display and expiry belong to whoever drains the channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub icon: ToastIcon,
    pub label: Option<String>,
}

impl Toast {
    pub fn icon(icon: ToastIcon) -> Self {
        Self { icon, label: None }
    }

    pub fn labeled(icon: ToastIcon, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: Some(label.into()),
        }
    }
}

/// Fire-and-forget toast sink.
///
/// Holds an optional sender so tests and headless setups can run without
/// a consumer; a dropped receiver is silently tolerated.
#[derive(Debug, Clone, Default)]
pub struct ToastSender {
    sender: Option<Sender<Toast>>,
}

impl ToastSender {
    pub fn new(sender: Sender<Toast>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Sink that drops every toast.
    pub fn dummy() -> Self {
        Self { sender: None }
    }

    pub fn emit(&self, toast: Toast) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(toast);
        }
    }
}
