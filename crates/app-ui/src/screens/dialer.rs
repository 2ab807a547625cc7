//! Smart dialer screen

use app_state::CallTimer;
use std::time::Duration;

use crate::components::Notice;

/// Keypad labels in grid order
pub const KEYPAD: [char; 12] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '*', '0', '#'];

/// Dial pad with a call-duration timer
///
/// Dropping the screen drops its timer, which stops the tick task.
#[derive(Debug, Default)]
pub struct DialerScreen {
    number: String,
    timer: CallTimer,
}

impl DialerScreen {
    /// Empty dial pad
    pub fn new() -> Self {
        Self::default()
    }

    /// Dial pad whose timer ticks every `tick`
    pub fn with_tick(tick: Duration) -> Self {
        Self {
            number: String::new(),
            timer: CallTimer::with_tick(tick),
        }
    }

    /// Keypad press; keys not on the pad are ignored
    pub fn press(&mut self, key: char) -> bool {
        if !KEYPAD.contains(&key) {
            return false;
        }
        self.number.push(key);
        true
    }

    /// Remove the last digit
    pub fn backspace(&mut self) {
        self.number.pop();
    }

    /// Number entered so far
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Call button
    ///
    /// With a number entered this starts the call-duration timer. Must be
    /// called from within a Tokio runtime.
    pub fn call(&mut self) -> Notice {
        if self.number.is_empty() {
            return Notice::new("Smart Dialer", "Please enter a number first.");
        }
        tracing::info!(number = %self.number, "Placing call");
        self.timer.start();
        Notice::new("Smart Dialer", format!("Calling {}", self.number))
    }

    /// Hang up; returns the call length in seconds, `None` if no call
    pub fn end_call(&mut self) -> Option<u64> {
        if !self.timer.is_running() {
            return None;
        }
        let secs = self.timer.stop();
        tracing::info!(secs, "Call ended");
        Some(secs)
    }

    /// Whether a call is in progress
    pub fn in_call(&self) -> bool {
        self.timer.is_running()
    }

    /// Call length, "MM:SS"
    pub fn call_duration(&self) -> String {
        self.timer.display()
    }

    /// Screen left; any call timer stops
    pub fn unmount(&mut self) {
        self.timer.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_and_backspace() {
        let mut dialer = DialerScreen::new();
        for key in ['5', '5', '*', 'x', '#'] {
            dialer.press(key);
        }
        assert_eq!(dialer.number(), "55*#");
        dialer.backspace();
        assert_eq!(dialer.number(), "55*");
        dialer.backspace();
        dialer.backspace();
        dialer.backspace();
        dialer.backspace();
        assert_eq!(dialer.number(), "");
    }

    #[tokio::test]
    async fn test_call_requires_number() {
        let mut dialer = DialerScreen::new();
        assert_eq!(dialer.call().message, "Please enter a number first.");
        assert!(!dialer.in_call());
        assert_eq!(dialer.end_call(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_runs_timer() {
        let mut dialer = DialerScreen::new();
        dialer.press('4');
        dialer.press('2');
        assert_eq!(dialer.call().message, "Calling 42");
        assert!(dialer.in_call());

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(dialer.call_duration(), "00:03");
        assert_eq!(dialer.end_call(), Some(3));
        assert!(!dialer.in_call());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_stops_timer() {
        let mut dialer = DialerScreen::new();
        dialer.press('1');
        dialer.call();
        let rx = dialer.timer.subscribe();

        tokio::time::sleep(Duration::from_millis(1500)).await;
        dialer.unmount();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(*rx.borrow(), 1);
        assert!(!dialer.in_call());
    }
}
