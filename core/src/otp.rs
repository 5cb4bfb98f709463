// glucoin/core/src/otp.rs

//! Six-box OTP entry, modeled exactly as the verification screen behaves:
//! digits auto-advance, backspace walks backwards, and a pasted code fills
//! everything at once.

pub const OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpInput {
  boxes: [Option<char>; OTP_LENGTH],
  /// Index of the box that currently has focus.
  focus: usize,
}

impl Default for OtpInput {
  fn default() -> Self {
    Self::new()
  }
}

impl OtpInput {
  pub fn new() -> Self {
    Self {
      boxes: [None; OTP_LENGTH],
      focus: 0,
    }
  }

  pub fn focused_index(&self) -> usize {
    self.focus
  }

  pub fn digit_at(&self, index: usize) -> Option<char> {
    self.boxes.get(index).copied().flatten()
  }

  /// Types one character into the focused box. Non-digits are ignored.
  /// A digit fills the box and advances focus, stopping on the last box.
  pub fn type_char(&mut self, c: char) {
    if !c.is_ascii_digit() {
      return;
    }
    self.boxes[self.focus] = Some(c);
    if self.focus + 1 < OTP_LENGTH {
      self.focus += 1;
    }
  }

  /// Backspace: clears the focused box if it holds a digit; when it is
  /// already empty, moves focus back one box and clears that one instead.
  pub fn backspace(&mut self) {
    if self.boxes[self.focus].is_some() {
      self.boxes[self.focus] = None;
    } else if self.focus > 0 {
      self.focus -= 1;
      self.boxes[self.focus] = None;
    }
  }

  /// Paste handling: only a string of exactly six ASCII digits is accepted.
  /// It populates every box and focuses the last one; anything else is a
  /// no-op. Returns whether the paste was applied.
  pub fn paste(&mut self, text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.len() != OTP_LENGTH || !trimmed.chars().all(|c| c.is_ascii_digit()) {
      return false;
    }
    for (slot, c) in self.boxes.iter_mut().zip(trimmed.chars()) {
      *slot = Some(c);
    }
    self.focus = OTP_LENGTH - 1;
    true
  }

  pub fn is_complete(&self) -> bool {
    self.boxes.iter().all(Option::is_some)
  }

  /// The full code, available only once every box is filled.
  pub fn code(&self) -> Option<String> {
    if self.is_complete() {
      Some(self.boxes.iter().flatten().collect())
    } else {
      None
    }
  }

  pub fn clear(&mut self) {
    *self = Self::new();
  }
}
