use crate::ui::mvi::Intent;
use crate::ui::notice::state::NoticeKind;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum NoticeIntent {
    Show {
        message: String,
        kind: NoticeKind,
        at: Instant,
    },
    /// Clears the notice if it has been visible for at least `ttl`.
    Expire { now: Instant, ttl: Duration },
    Dismiss,
}

impl Intent for NoticeIntent {}
