//! Display-time formatting.
//!
//! All timestamps shown in chat bubbles and chat-title labels are
//! formatted in a fixed UTC offset configured per deployment, so the
//! transcript reads the same regardless of the server's local zone.

use chrono::{DateTime, FixedOffset, Utc};

/// Formats wall-clock display strings in a fixed UTC offset.
#[derive(Clone, Copy, Debug)]
pub struct DisplayClock {
    offset: FixedOffset,
}

impl DisplayClock {
    /// Create a clock at the given offset east of UTC, in minutes.
    ///
    /// Out-of-range offsets fall back to UTC.
    pub fn from_offset_minutes(minutes: i32) -> Self {
        let offset = FixedOffset::east_opt(minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
        Self { offset }
    }

    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    /// Current time as a message timestamp, e.g. "04:23 PM".
    pub fn now_display(&self) -> String {
        self.now().format("%I:%M %p").to_string()
    }

    /// A generated chat-title label, e.g. "Chat - Aug 07, 04:23 PM".
    pub fn chat_label(&self) -> String {
        self.now().format("Chat - %b %d, %I:%M %p").to_string()
    }
}

impl Default for DisplayClock {
    /// UTC+05:30.
    fn default() -> Self {
        Self::from_offset_minutes(330)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format_shape() {
        let s = DisplayClock::default().now_display();
        // "HH:MM AM" / "HH:MM PM"
        assert_eq!(s.len(), 8);
        assert!(s.ends_with("AM") || s.ends_with("PM"));
        assert_eq!(&s[2..3], ":");
    }

    #[test]
    fn test_chat_label_shape() {
        let s = DisplayClock::default().chat_label();
        assert!(s.starts_with("Chat - "));
        assert!(s.ends_with("AM") || s.ends_with("PM"));
    }

    #[test]
    fn test_out_of_range_offset_falls_back_to_utc() {
        let clock = DisplayClock::from_offset_minutes(24 * 60 + 1);
        assert!(!clock.now_display().is_empty());
    }
}
