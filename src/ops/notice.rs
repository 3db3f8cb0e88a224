/// Message shown when an add or an edit collides with an existing task
pub const DUPLICATE_MESSAGE: &str = "This todo already exists";
/// Message shown after a confirmed deletion
pub const DELETED_MESSAGE: &str = "Todo deleted successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A transient user-facing message. The todo list queues these; the
/// presentation layer decides how long they stay visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn duplicate() -> Self {
        Notice::error(DUPLICATE_MESSAGE)
    }

    pub fn deleted() -> Self {
        Notice::success(DELETED_MESSAGE)
    }
}
