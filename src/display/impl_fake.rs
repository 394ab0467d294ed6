use crate::display::interface::{write_into, Buffer, Display, BLANK};
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Keeps the buffer behind a shared handle so tests can read what was shown.
#[derive(Clone)]
pub struct DisplayFake {
    buffer: Arc<Mutex<Buffer>>,
}

impl DisplayFake {
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(BLANK)),
        }
    }

    pub fn line(&self, line: usize) -> String {
        let buffer = match self.buffer.lock() {
            Ok(buffer) => *buffer,
            Err(poisoned) => *poisoned.into_inner(),
        };
        buffer
            .get(line)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }
}

impl Display for DisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.buffer.lock().map_err(|e| e.to_string())? = BLANK;
        Ok(())
    }

    fn write_line(&mut self, line: usize, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut buffer = self.buffer.lock().map_err(|e| e.to_string())?;
        write_into(&mut buffer, line, text)
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayFake;
    use crate::display::interface::{Display, CHARS_PER_LINE};

    #[test]
    fn test_write_and_truncate() {
        let mut display = DisplayFake::new();

        display.write_line(0, "squat").unwrap();
        display
            .write_line(1, &"x".repeat(CHARS_PER_LINE + 10))
            .unwrap();

        assert_eq!(display.line(0), "squat");
        assert_eq!(display.line(1), "x".repeat(CHARS_PER_LINE));
    }

    #[test]
    fn test_invalid_line() {
        let mut display = DisplayFake::new();

        assert!(display.write_line(2, "squat").is_err());
    }

    #[test]
    fn test_clear() {
        let mut display = DisplayFake::new();
        display.write_line(0, "squat").unwrap();

        display.clear().unwrap();

        assert_eq!(display.line(0), "");
    }
}
