//! Transient user-facing notices

use std::time::Duration;

/// How a notice should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short message shown for a fixed duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub duration: Duration,
}

impl Notice {
    /// Guess submitted with fewer than five letters
    #[must_use]
    pub fn invalid_length() -> Self {
        Self {
            kind: NoticeKind::Error,
            text: "Word must be 5 letters long".to_string(),
            duration: Duration::from_millis(2000),
        }
    }

    /// Solution guessed
    #[must_use]
    pub fn won() -> Self {
        Self {
            kind: NoticeKind::Success,
            text: "Congratulations! You won! 🎉".to_string(),
            duration: Duration::from_millis(3000),
        }
    }

    /// Out of guesses; reveals the solution
    #[must_use]
    pub fn lost(solution: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: format!("Game Over! The word was {solution}"),
            duration: Duration::from_millis(4000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_reveals_solution() {
        let notice = Notice::lost("CRANE");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("CRANE"));
        assert_eq!(notice.duration, Duration::from_secs(4));
    }

    #[test]
    fn kinds_and_durations() {
        assert_eq!(Notice::won().kind, NoticeKind::Success);
        assert_eq!(Notice::won().duration, Duration::from_secs(3));
        assert_eq!(Notice::invalid_length().kind, NoticeKind::Error);
        assert_eq!(Notice::invalid_length().duration, Duration::from_secs(2));
    }
}
