//! Resend cooldown

/// Seconds a user waits before another code can be requested
pub const RESEND_COOLDOWN_SECS: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CooldownPhase {
    Counting(u32),
    Ready,
}

/// Countdown gating the resend action.
///
/// `can_resend()` is derived from `seconds_remaining`, so the two can never
/// disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResendCooldown {
    initial: u32,
    seconds_remaining: u32,
}

impl ResendCooldown {
    pub fn new(initial: u32) -> Self {
        Self {
            initial,
            seconds_remaining: initial,
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn can_resend(&self) -> bool {
        self.seconds_remaining == 0
    }

    pub fn phase(&self) -> CooldownPhase {
        match self.seconds_remaining {
            0 => CooldownPhase::Ready,
            n => CooldownPhase::Counting(n),
        }
    }

    /// One second elapsed. Returns whether the countdown is still running.
    pub fn tick(&mut self) -> bool {
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        self.seconds_remaining > 0
    }

    /// Back to the initial value, as when a new code is requested
    pub fn restart(&mut self) {
        self.seconds_remaining = self.initial;
    }

    /// Skip the wait and allow a resend right away
    pub fn open(&mut self) {
        self.seconds_remaining = 0;
    }

    /// `mm:ss`
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.seconds_remaining / 60,
            self.seconds_remaining % 60
        )
    }
}

impl Default for ResendCooldown {
    fn default() -> Self {
        Self::new(RESEND_COOLDOWN_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_ready() {
        let mut cooldown = ResendCooldown::new(3);
        assert_eq!(cooldown.phase(), CooldownPhase::Counting(3));

        assert!(cooldown.tick());
        assert!(cooldown.tick());
        assert!(!cooldown.tick());
        assert_eq!(cooldown.phase(), CooldownPhase::Ready);
        assert!(cooldown.can_resend());

        // Extra ticks stay at zero
        assert!(!cooldown.tick());
        assert_eq!(cooldown.seconds_remaining(), 0);
    }

    #[test]
    fn test_restart_and_open() {
        let mut cooldown = ResendCooldown::default();
        cooldown.open();
        assert!(cooldown.can_resend());

        cooldown.restart();
        assert_eq!(cooldown.seconds_remaining(), 30);
        assert!(!cooldown.can_resend());
    }

    #[test]
    fn test_display() {
        assert_eq!(ResendCooldown::new(30).display(), "00:30");
        assert_eq!(ResendCooldown::new(75).display(), "01:15");
        assert_eq!(ResendCooldown::new(0).display(), "00:00");
    }
}
