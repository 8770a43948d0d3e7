//! Boot splash progress shown before the desktop mounts.

use std::time::Duration;

/// Progress advance per tick, in percent.
pub const STARTUP_STEP_PERCENT: u32 = 2;
pub const STARTUP_TICK: Duration = Duration::from_millis(50);
/// Pause on the finished screen before the desktop replaces it.
pub const STARTUP_COMPLETE_DELAY: Duration = Duration::from_millis(500);

pub const STARTUP_MESSAGES: [&str; 8] = [
    "Initializing desktop session...",
    "Loading kernel modules...",
    "Starting system services...",
    "Mounting filesystems...",
    "Loading installed apps...",
    "Initializing draggable interface...",
    "Loading desktop environment...",
    "Ready!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartupProgress {
    percent: u32,
}

impl StartupProgress {
    pub fn percent(self) -> u32 {
        self.percent
    }

    pub fn is_complete(self) -> bool {
        self.percent >= 100
    }

    /// Advances one tick. Returns `true` only on the tick that reaches 100%.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.percent = (self.percent + STARTUP_STEP_PERCENT).min(100);
        self.is_complete()
    }

    /// Stage message for the current progress; stages are spread evenly over 0..100.
    pub fn message(self) -> &'static str {
        let stages = STARTUP_MESSAGES.len();
        let index = (self.percent as usize * stages / 100).min(stages - 1);
        STARTUP_MESSAGES[index]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn completes_after_fifty_ticks_and_reports_once() {
        let mut progress = StartupProgress::default();
        let completions = (0..60).filter(|_| progress.advance()).count();

        assert_eq!(completions, 1);
        assert_eq!(progress.percent(), 100);
        assert!(progress.is_complete());

        let mut progress = StartupProgress::default();
        let ticks = (1..).find(|_| progress.advance()).expect("completes");
        assert_eq!(ticks, 50);
    }

    #[test]
    fn messages_walk_through_every_stage_in_order() {
        let mut progress = StartupProgress::default();
        let mut seen = vec![progress.message()];
        while !progress.is_complete() {
            progress.advance();
            if seen.last() != Some(&progress.message()) {
                seen.push(progress.message());
            }
        }

        assert_eq!(seen, STARTUP_MESSAGES.to_vec());
        assert_eq!(progress.message(), "Ready!");
    }
}
