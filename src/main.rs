//! SSS Falloff Editor.
//!
//! Rust-basierter Editor für Subsurface-Scattering-Falloff-Kurven:
//! Gauss- oder Spline-Kurven pro RGB-Kanal, per Drag editierbar, als
//! diskrete Kernel-Gewichte für einen Separable-Blur-Renderer extrahiert.

use eframe::egui;
use glam::Vec2;
use sss_falloff_editor::shared::{PLOT_DOMAIN_Y, PLOT_MARGIN_PX};
use sss_falloff_editor::{ui, EditorIntent, EditorOptions, Plot, PlotViewport};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "SSS Falloff Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 640.0])
                .with_title("SSS Falloff Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "SSS Falloff Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    plot: Plot,
    options: EditorOptions,
}

impl EditorApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        // Start-Viewport; wird pro Frame an die Panel-Geometrie angepasst.
        let viewport = PlotViewport::new(
            Vec2::new(PLOT_MARGIN_PX, 640.0 - PLOT_MARGIN_PX),
            Vec2::new(700.0, 500.0),
            Vec2::new(options.plot_domain_x, PLOT_DOMAIN_Y),
        );
        let plot = Plot::new(viewport, &options)?;

        Ok(Self { plot, options })
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<EditorIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_toolbar(ctx, &self.plot));
        ui::render_weights_panel(ctx, &self.plot);

        egui::CentralPanel::default().show(ctx, |ui| {
            events.extend(ui::render_plot_view(ui, &mut self.plot, &self.options));
        });

        events
    }

    fn process_events(&mut self, events: Vec<EditorIntent>) {
        for event in events {
            if let Err(e) = self.plot.handle_intent(event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }
}
