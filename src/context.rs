//! Application Context
//!
//! Shared values provided via Leptos Context API.

use campaign_core::{ClientConfig, Notice, NoticeBoard, NotificationKind};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Owned copy for moving into async command calls
    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Page notification slot. Each page provides its own with the page's
/// display duration.
#[derive(Clone, Copy)]
pub struct Notifier {
    board: RwSignal<NoticeBoard>,
    hide_after_ms: u32,
}

impl Notifier {
    pub fn new(hide_after_ms: u32) -> Self {
        Self {
            board: RwSignal::new(NoticeBoard::default()),
            hide_after_ms,
        }
    }

    /// Show a message and schedule it to hide. A later call replaces it and
    /// restarts the timer.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        match kind {
            NotificationKind::Error => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }
        let Some(generation) = self.board.try_update(|board| board.show(message, kind)) else {
            return;
        };
        let board = self.board;
        let delay = self.hide_after_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            board.try_update(|b| b.expire(generation));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn current(&self) -> Option<Notice> {
        self.board.with(|board| board.current().cloned())
    }

    pub fn dismiss(&self) {
        self.board.update(|board| board.dismiss());
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier should be provided")
}
