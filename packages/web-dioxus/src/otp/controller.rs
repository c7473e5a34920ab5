//! Code entry controller
//!
//! All state of the OTP entry screen lives in [`CodeEntry`]: the digit
//! slots, which slot has focus, the resend cooldown, and the in-flight /
//! error flags. Every UI event is a method on it, so the whole screen can
//! be driven and asserted on without a renderer.
//!
//! Network work is never performed here. `submit` and `resend` hand back a
//! command for the caller to execute, and the result is fed back through
//! `on_verify_result` / `on_resend_result`. Commands carry the epoch they
//! were issued in; results from an older epoch, or arriving after
//! `dispose`, are dropped.

use super::cooldown::{ResendCooldown, RESEND_COOLDOWN_SECS};
use crate::types::Channel;

/// Slots on the entry screen
pub const CODE_LENGTH: usize = 4;

/// A single decimal digit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// ASCII `0`-`9` only
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why the last action failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeError {
    InvalidCode,
    ExpiredCode,
    Network,
    ResendFailed,
}

impl CodeError {
    pub fn message(&self) -> &'static str {
        match self {
            CodeError::InvalidCode => "Invalid OTP. Please try again.",
            CodeError::ExpiredCode => "This OTP has expired. Please request a new one.",
            CodeError::Network => "Something went wrong. Please try again.",
            CodeError::ResendFailed => "Failed to resend OTP. Please try again.",
        }
    }
}

/// Result of one verification attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    Approved,
    Rejected(CodeError),
}

/// Check a code with the verification API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyCommand {
    pub epoch: u32,
    pub phone_number: String,
    pub code: String,
}

/// Request a fresh code
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResendCommand {
    pub epoch: u32,
    pub phone_number: String,
    pub channel: Channel,
}

/// Emitted once the code is approved; navigation is the caller's job
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verified {
    pub phone_number: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeEntry<const N: usize = CODE_LENGTH> {
    phone_number: String,
    channel: Channel,
    digits: [Option<Digit>; N],
    focus_index: usize,
    focus_request: u32,
    cooldown: ResendCooldown,
    submitting: bool,
    last_error: Option<CodeError>,
    verified: bool,
    epoch: u32,
    disposed: bool,
}

impl<const N: usize> CodeEntry<N> {
    /// Fresh screen for `phone_number`: empty slots, focus on the first,
    /// cooldown counting from 30.
    pub fn new(phone_number: impl Into<String>, channel: Channel) -> Self {
        Self::with_cooldown(phone_number, channel, RESEND_COOLDOWN_SECS)
    }

    pub fn with_cooldown(phone_number: impl Into<String>, channel: Channel, seconds: u32) -> Self {
        Self {
            phone_number: phone_number.into(),
            channel,
            digits: [None; N],
            focus_index: 0,
            focus_request: 0,
            cooldown: ResendCooldown::new(seconds),
            submitting: false,
            last_error: None,
            verified: false,
            epoch: 0,
            disposed: false,
        }
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn digits(&self) -> &[Option<Digit>; N] {
        &self.digits
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// Bumped whenever the controller moves focus itself, as opposed to
    /// recording where the user put it. The view refocuses only on change.
    pub fn focus_request(&self) -> u32 {
        self.focus_request
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.cooldown.seconds_remaining()
    }

    pub fn can_resend(&self) -> bool {
        self.cooldown.can_resend()
    }

    pub fn cooldown(&self) -> &ResendCooldown {
        &self.cooldown
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_error(&self) -> Option<CodeError> {
        self.last_error
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn filled_count(&self) -> usize {
        self.digits.iter().filter(|d| d.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled_count() == N
    }

    /// The digits joined, once every slot is filled
    pub fn code(&self) -> Option<String> {
        self.digits
            .iter()
            .map(|d| d.map(Digit::as_char))
            .collect::<Option<String>>()
    }

    fn last_index() -> usize {
        N.saturating_sub(1)
    }

    fn first_empty(&self) -> Option<usize> {
        self.digits.iter().position(Option::is_none)
    }

    fn move_focus(&mut self, index: usize) {
        self.focus_index = index;
        self.focus_request = self.focus_request.wrapping_add(1);
    }

    // ------------------------------------------------------------------
    // Input events
    // ------------------------------------------------------------------

    /// A key typed into slot `index`. Non-digits are ignored entirely.
    ///
    /// A digit aimed at an empty slot past the first gap lands in the gap,
    /// so filled slots stay contiguous from the left.
    pub fn on_digit_input(&mut self, index: usize, raw: char) {
        if self.disposed || index >= N {
            return;
        }
        let Some(digit) = Digit::from_char(raw) else {
            return;
        };
        let index = match self.first_empty() {
            Some(empty) if self.digits[index].is_none() && index > empty => empty,
            _ => index,
        };

        self.digits[index] = Some(digit);
        self.last_error = None;
        if index < Self::last_index() {
            self.move_focus(index + 1);
        }
    }

    /// The slot's input value was emptied (delete/cut). Focus stays put.
    pub fn on_clear(&mut self, index: usize) {
        if self.disposed || index >= N {
            return;
        }
        self.digits[index] = None;
        self.last_error = None;
    }

    /// Raw value change from the slot's `<input>`.
    ///
    /// An empty value clears the slot. A single character goes through
    /// [`Self::on_digit_input`]. When the slot already held a digit, the
    /// browser inserts new text beside it, so that digit is stripped from
    /// the front (caret after it) or else the back (caret before it) to
    /// recover what was actually typed or pasted. One recovered character
    /// is an overtype; several (paste, SMS autofill) replace the buffer.
    pub fn on_input(&mut self, index: usize, value: &str) {
        if index >= N {
            return;
        }

        let inserted = match self.digits[index].map(Digit::as_char) {
            Some(existing) if value.chars().count() > 1 => value
                .strip_prefix(existing)
                .or_else(|| value.strip_suffix(existing))
                .unwrap_or(value),
            _ => value,
        };

        let mut chars = inserted.chars();
        match (chars.next(), chars.next()) {
            (None, _) if value.is_empty() => self.on_clear(index),
            (None, _) => {}
            (Some(c), None) => self.on_digit_input(index, c),
            (Some(_), Some(_)) => self.on_paste(inserted),
        }
    }

    /// Backspace on an empty slot steps back one slot without deleting.
    pub fn on_backspace(&mut self, index: usize) {
        if self.disposed || index >= N {
            return;
        }
        if self.digits[index].is_none() && index > 0 {
            self.move_focus(index - 1);
        }
    }

    /// A slot received focus (click or tab).
    ///
    /// Focus cannot land past the first empty slot, which keeps the filled
    /// slots contiguous from the left for forward entry.
    pub fn on_focus(&mut self, index: usize) {
        if self.disposed || index >= N {
            return;
        }
        match self.first_empty() {
            Some(empty) if index > empty => self.move_focus(empty),
            _ => self.focus_index = index,
        }
    }

    /// Replace the whole buffer with the digits of `raw`.
    pub fn on_paste(&mut self, raw: &str) {
        if self.disposed {
            return;
        }

        let mut digits = [None; N];
        for (slot, digit) in digits
            .iter_mut()
            .zip(raw.chars().filter_map(Digit::from_char))
        {
            *slot = Some(digit);
        }

        self.digits = digits;
        self.last_error = None;
        let target = self.first_empty().unwrap_or_else(Self::last_index);
        self.move_focus(target);
    }

    // ------------------------------------------------------------------
    // Timer
    // ------------------------------------------------------------------

    /// One second elapsed. Returns whether the timer should keep ticking.
    pub fn tick(&mut self) -> bool {
        if self.disposed || self.cooldown.can_resend() {
            return false;
        }
        self.cooldown.tick()
    }

    // ------------------------------------------------------------------
    // Verification
    // ------------------------------------------------------------------

    /// Start a verification if the buffer is full and nothing is in flight.
    pub fn submit(&mut self) -> Option<VerifyCommand> {
        if self.disposed || self.submitting || self.verified {
            return None;
        }
        let code = self.code()?;

        self.submitting = true;
        self.last_error = None;
        Some(VerifyCommand {
            epoch: self.epoch,
            phone_number: self.phone_number.clone(),
            code,
        })
    }

    /// Apply the answer to a [`VerifyCommand`]. The buffer is left as-is on
    /// rejection so the user can edit it.
    pub fn on_verify_result(
        &mut self,
        epoch: u32,
        outcome: VerificationOutcome,
    ) -> Option<Verified> {
        if self.disposed || epoch != self.epoch || !self.submitting {
            return None;
        }

        self.submitting = false;
        match outcome {
            VerificationOutcome::Approved => {
                self.verified = true;
                Some(Verified {
                    phone_number: self.phone_number.clone(),
                })
            }
            VerificationOutcome::Rejected(error) => {
                self.last_error = Some(error);
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Resend
    // ------------------------------------------------------------------

    /// Request a new code once the cooldown is over.
    ///
    /// Empties the buffer, restarts the cooldown and focuses the first slot.
    /// Any verification still in flight belongs to the previous code and its
    /// answer will be ignored.
    pub fn resend(&mut self) -> Option<ResendCommand> {
        if self.disposed || self.verified || !self.cooldown.can_resend() {
            return None;
        }

        self.epoch = self.epoch.wrapping_add(1);
        self.digits = [None; N];
        self.move_focus(0);
        self.submitting = false;
        self.last_error = None;
        self.cooldown.restart();

        Some(ResendCommand {
            epoch: self.epoch,
            phone_number: self.phone_number.clone(),
            channel: self.channel,
        })
    }

    /// A failed resend reopens the gate immediately so the user can retry.
    pub fn on_resend_result(&mut self, epoch: u32, result: Result<(), CodeError>) {
        if self.disposed || epoch != self.epoch {
            return;
        }
        if result.is_err() {
            self.last_error = Some(CodeError::ResendFailed);
            self.cooldown.open();
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// The screen is gone; every later event is a no-op.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.submitting = false;
        self.epoch = self.epoch.wrapping_add(1);
    }
}
