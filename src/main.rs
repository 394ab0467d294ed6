use config::{Config, DisplayKind};
use display::impl_console::DisplayConsole;
use display::impl_gui::DisplayGui;
use display::interface::Display;
use image_classifier::impl_fake::ImageClassifierFake;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::{Arc, Mutex};
use video_picker::impl_args::VideoPickerArgs;
use video_prediction::main::VideoPrediction;
use video_source::impl_fake::VideoSourceFake;

mod config;
mod display;
mod image_classifier;
mod library;
mod prediction_smoother;
mod video_picker;
mod video_prediction;
mod video_source;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (config, args) = Config::default().apply_args(std::env::args().skip(1));

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let video_picker = Arc::new(VideoPickerArgs::new(
        logger.clone(),
        args,
        config.default_video_path.clone(),
    ));

    let video_source = Arc::new(VideoSourceFake::new(
        logger.clone(),
        config.fake_video_duration,
    ));

    let image_classifier = Arc::new(ImageClassifierFake::new(logger.clone()));

    let display_gui = DisplayGui::new();
    let window = display_gui.window();

    let display_kind = config.display_kind;
    let display: Arc<Mutex<dyn Display + Send + Sync>> = match display_kind {
        DisplayKind::Console => Arc::new(Mutex::new(DisplayConsole::new())),
        DisplayKind::Gui => Arc::new(Mutex::new(display_gui)),
    };

    let session_logger = logger.clone();

    let video_prediction = VideoPrediction::new(
        config,
        logger,
        video_picker,
        video_source,
        image_classifier,
        display,
    );

    match display_kind {
        DisplayKind::Console => {
            video_prediction.run()?;
        }
        DisplayKind::Gui => {
            // The window owns the main thread, the session runs beside it
            std::thread::spawn(move || {
                if let Err(e) = video_prediction.run() {
                    let _ = session_logger.info(&format!("Session failed: {}", e));
                }
            });
            window.run()?;
        }
    }

    Ok(())
}
