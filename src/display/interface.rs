use std::error::Error;

pub const LINES: usize = 2;
pub const CHARS_PER_LINE: usize = 24;

pub type Buffer = [[char; CHARS_PER_LINE]; LINES];

pub const BLANK: Buffer = [[' '; CHARS_PER_LINE]; LINES];

/// Two-line text panel showing the current prediction and session progress.
pub trait Display: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Text longer than [`CHARS_PER_LINE`] is truncated.
    /// Fails if `line` is not below [`LINES`].
    fn write_line(&mut self, line: usize, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}

pub fn write_into(
    buffer: &mut Buffer,
    line: usize,
    text: &str,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let row = buffer
        .get_mut(line)
        .ok_or_else(|| format!("Invalid line number {}", line))?;

    *row = [' '; CHARS_PER_LINE];
    for (i, c) in text.chars().take(CHARS_PER_LINE).enumerate() {
        row[i] = c;
    }

    Ok(())
}
