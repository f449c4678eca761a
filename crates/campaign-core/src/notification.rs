//! Notification Bookkeeping
//!
//! One shared notification slot. A new message replaces the current one and
//! restarts its hide timer; the timer of a replaced message must not hide the
//! newer one, so every message carries a generation number.

/// Notification kind, rendered as the `notification <kind>` CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// Visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NotificationKind,
    pub generation: u64,
}

impl Notice {
    pub fn class(&self) -> String {
        format!("notification {}", self.kind.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    generation: u64,
}

impl NoticeBoard {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Show a message, replacing whatever is visible. Returns the generation
    /// the caller's hide timer must pass to [`NoticeBoard::expire`].
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.generation += 1;
        self.current = Some(Notice {
            message: message.into(),
            kind,
            generation: self.generation,
        });
        self.generation
    }

    /// Hide the notice if it is still the one shown at `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(notice) if notice.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_sets_text_and_class() {
        let mut board = NoticeBoard::default();
        board.show("Saved", NotificationKind::Success);
        let notice = board.current().unwrap();
        assert_eq!(notice.message, "Saved");
        assert_eq!(notice.class(), "notification success");
    }

    #[test]
    fn test_last_call_wins() {
        let mut board = NoticeBoard::default();
        let first = board.show("first", NotificationKind::Info);
        let second = board.show("second", NotificationKind::Error);

        // First timer fires: the newer message stays
        assert!(!board.expire(first));
        assert_eq!(board.current().map(|n| n.message.as_str()), Some("second"));

        assert!(board.expire(second));
        assert!(board.current().is_none());
    }

    #[test]
    fn test_expire_after_dismiss_is_noop() {
        let mut board = NoticeBoard::default();
        let generation = board.show("bye", NotificationKind::Info);
        board.dismiss();
        assert!(!board.expire(generation));
    }
}
