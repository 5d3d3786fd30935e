/// Opening and closing marker of a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// State tracking for fenced code blocks in line-oriented transforms.
///
/// Any line whose trimmed content starts with three backticks toggles the
/// state. While inside a fence no other marker is interpreted, so a fence
/// closes on the next backtick line regardless of what follows the backticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FenceTracker {
  in_code_block: bool,
}

impl FenceTracker {
  /// Create a new fence tracker.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      in_code_block: false,
    }
  }

  /// Check if currently inside a code block.
  #[must_use]
  pub const fn in_code_block(&self) -> bool {
    self.in_code_block
  }

  /// Process a line and return the state that applies after it.
  #[must_use]
  pub fn process_line(&self, line: &str) -> Self {
    if is_fence_line(line) {
      Self {
        in_code_block: !self.in_code_block,
      }
    } else {
      *self
    }
  }

  /// Advance over `line`, reporting whether the line must be left alone.
  ///
  /// Fence delimiter lines and every line between them are skipped.
  #[must_use]
  pub fn advance(&mut self, line: &str) -> bool {
    let was_inside = self.in_code_block;
    *self = self.process_line(line);
    was_inside || self.in_code_block || is_fence_line(line)
  }
}

/// Return true if the trimmed line opens or closes a fenced code block.
#[must_use]
pub fn is_fence_line(line: &str) -> bool {
  line.trim().starts_with(FENCE_MARKER)
}
