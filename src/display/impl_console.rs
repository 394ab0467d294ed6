use crate::display::interface::{write_into, Buffer, Display, BLANK, CHARS_PER_LINE};
use std::error::Error;

pub struct DisplayConsole {
    buffer: Buffer,
    last_rendered: Option<Buffer>,
}

impl DisplayConsole {
    pub fn new() -> Self {
        Self {
            buffer: BLANK,
            last_rendered: None,
        }
    }

    fn render(&mut self) {
        // Skip identical frames, progress ticks would otherwise flood the terminal
        if self.last_rendered == Some(self.buffer) {
            return;
        }
        self.last_rendered = Some(self.buffer);

        let border = "─".repeat(CHARS_PER_LINE);
        println!("┌{}┐", border);
        for row in &self.buffer {
            println!("│{}│", row.iter().collect::<String>());
        }
        println!("└{}┘", border);
    }
}

impl Display for DisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.buffer = BLANK;
        Ok(())
    }

    fn write_line(&mut self, line: usize, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        write_into(&mut self.buffer, line, text)?;
        self.render();
        Ok(())
    }
}
