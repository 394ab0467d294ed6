use crate::display::interface::{write_into, Buffer, Display, BLANK};
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Window showing whatever was last written to the paired [`DisplayGui`].
#[derive(Clone)]
pub struct PredictionWindow {
    buffer: Arc<Mutex<Buffer>>,
}

impl PredictionWindow {
    fn snapshot(&self) -> Buffer {
        match self.buffer.lock() {
            Ok(buffer) => *buffer,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    #[cfg(test)]
    pub fn rows(&self) -> Vec<String> {
        self.snapshot()
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    /// Opens the window and blocks until it is closed. winit only starts an
    /// event loop on the main thread, so call this from `main`.
    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([420.0, 160.0])
                .with_resizable(false),
            ..Default::default()
        };

        eframe::run_native("Prediction", options, Box::new(|_cc| Box::new(self)))
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

impl eframe::App for PredictionWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let buffer = self.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                let mut rows = buffer.iter().map(|row| row.iter().collect::<String>());

                if let Some(prediction) = rows.next() {
                    ui.label(
                        egui::RichText::new(prediction.trim_end())
                            .monospace()
                            .strong()
                            .size(28.0),
                    );
                }

                for row in rows {
                    ui.label(
                        egui::RichText::new(row.trim_end())
                            .monospace()
                            .color(egui::Color32::GRAY)
                            .size(16.0),
                    );
                }
            });
        });

        // Repaint on a timer, writes come from the session thread
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

pub struct DisplayGui {
    buffer: Arc<Mutex<Buffer>>,
}

impl DisplayGui {
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(BLANK)),
        }
    }

    pub fn window(&self) -> PredictionWindow {
        PredictionWindow {
            buffer: self.buffer.clone(),
        }
    }
}

impl Display for DisplayGui {
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
