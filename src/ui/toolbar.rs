//! Toolbar für Modus-Wahl, Konversion und Kernel-Größe.

use crate::app::{EditorIntent, Plot};
use crate::core::CurveKind;
use crate::shared::{KERNEL_SIZE_MAX, KERNEL_SIZE_MIN};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, plot: &Plot) -> Vec<EditorIntent> {
    let mut events = Vec::new();
    let mode = plot.mode();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Kurve:");
            ui.separator();

            let gauss_btn = egui::Button::new("Gauss");
            if ui
                .add(gauss_btn.selected(mode == CurveKind::Gaussian))
                .clicked()
            {
                events.push(EditorIntent::ModeSelected {
                    kind: CurveKind::Gaussian,
                });
            }

            let spline_btn = egui::Button::new("Spline");
            if ui
                .add(spline_btn.selected(mode == CurveKind::Spline))
                .clicked()
            {
                events.push(EditorIntent::ModeSelected {
                    kind: CurveKind::Spline,
                });
            }

            ui.separator();

            // Konversion ersetzt das Spline-Tripel einmalig aus dem Gauss-Tripel.
            let convert_btn = egui::Button::new("Als Spline übernehmen");
            if ui
                .add_enabled(mode == CurveKind::Gaussian, convert_btn)
                .clicked()
            {
                events.push(EditorIntent::ConvertToSplineRequested);
            }

            ui.separator();

            let mut kernel_size = plot.kernel_size();
            let slider = egui::Slider::new(&mut kernel_size, KERNEL_SIZE_MIN..=KERNEL_SIZE_MAX)
                .text("Kernel-Größe");
            if ui.add(slider).changed() {
                events.push(EditorIntent::KernelSizeChanged { size: kernel_size });
            }
        });
    });

    events
}
