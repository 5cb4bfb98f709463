// glucoin/core/src/quantity.rs

//! Quantity stepper for the product detail screen. The value never exceeds
//! the product's available stock and never drops below one; a zero-stock
//! product pins the selector at zero with both buttons disabled.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
  value: u32,
  stock: u32,
}

impl QuantitySelector {
  pub fn new(stock: u32) -> Self {
    Self {
      value: if stock == 0 { 0 } else { 1 },
      stock,
    }
  }

  pub fn value(&self) -> u32 {
    self.value
  }

  pub fn stock(&self) -> u32 {
    self.stock
  }

  pub fn can_increment(&self) -> bool {
    self.value < self.stock
  }

  pub fn can_decrement(&self) -> bool {
    self.value > 1
  }

  /// Increment, saturating at the available stock.
  pub fn increment(&mut self) {
    if self.can_increment() {
      self.value += 1;
    }
  }

  /// Decrement, saturating at one.
  pub fn decrement(&mut self) {
    if self.can_decrement() {
      self.value -= 1;
    }
  }

  /// Direct entry (typed into the field): clamped into `[1, stock]`,
  /// or pinned at zero when there is no stock at all.
  pub fn set(&mut self, requested: u32) {
    self.value = if self.stock == 0 {
      0
    } else {
      requested.clamp(1, self.stock)
    };
  }
}
