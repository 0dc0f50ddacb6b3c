use crate::ui::mvi::Reducer;
use crate::ui::notice::intent::NoticeIntent;
use crate::ui::notice::state::NoticeState;

pub struct NoticeReducer;

impl Reducer for NoticeReducer {
    type State = NoticeState;
    type Intent = NoticeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NoticeIntent::Show { message, kind, at } => NoticeState::Visible {
                message,
                kind,
                shown_at: at,
            },
            NoticeIntent::Expire { now, ttl } => match state {
                NoticeState::Visible { shown_at, .. }
                    if now.saturating_duration_since(shown_at) >= ttl =>
                {
                    NoticeState::Hidden
                }
                other => other,
            },
            NoticeIntent::Dismiss => NoticeState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notice::state::NoticeKind;
    use std::time::{Duration, Instant};

    fn shown(at: Instant) -> NoticeState {
        NoticeReducer::reduce(
            NoticeState::Hidden,
            NoticeIntent::Show {
                message: "Added new to-do item".to_string(),
                kind: NoticeKind::Info,
                at,
            },
        )
    }

    #[test]
    fn show_makes_visible() {
        let state = shown(Instant::now());
        assert_eq!(state.message(), Some("Added new to-do item"));
    }

    #[test]
    fn expire_before_ttl_keeps_notice() {
        let at = Instant::now();
        let state = NoticeReducer::reduce(
            shown(at),
            NoticeIntent::Expire {
                now: at + Duration::from_millis(100),
                ttl: Duration::from_secs(2),
            },
        );
        assert!(state.is_visible());
    }

    #[test]
    fn expire_after_ttl_hides_notice() {
        let at = Instant::now();
        let state = NoticeReducer::reduce(
            shown(at),
            NoticeIntent::Expire {
                now: at + Duration::from_secs(3),
                ttl: Duration::from_secs(2),
            },
        );
        assert!(!state.is_visible());
    }

    #[test]
    fn show_replaces_previous_message() {
        let at = Instant::now();
        let state = NoticeReducer::reduce(
            shown(at),
            NoticeIntent::Show {
                message: "Copied to clipboard".to_string(),
                kind: NoticeKind::Info,
                at,
            },
        );
        assert_eq!(state.message(), Some("Copied to clipboard"));
    }

    #[test]
    fn dismiss_hides() {
        let state = NoticeReducer::reduce(shown(Instant::now()), NoticeIntent::Dismiss);
        assert_eq!(state, NoticeState::Hidden);
    }
}
