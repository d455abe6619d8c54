#![deny(missing_docs)]

//! Entry point for the vidpredict prediction form.
use eframe::egui;
use vidpredict::config;
use vidpredict::egui_app::controller::EguiController;
use vidpredict::egui_app::ui::EguiApp;
use vidpredict::logging;

const MIN_VIEWPORT_SIZE: [f32; 2] = [560.0, 480.0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let controller = config::load_or_default()
        .and_then(|config| EguiController::new(&config))
        .map_err(|err| format!("Failed to load config: {err}"));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size(MIN_VIEWPORT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "vidpredict",
        native_options,
        Box::new(move |_cc| {
            let app: Box<dyn eframe::App> = match controller {
                Ok(controller) => Box::new(EguiApp::new(controller)),
                Err(message) => {
                    tracing::error!("{message}");
                    Box::new(LaunchError { message })
                }
            };
            Ok(app)
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
