//! Gewichts-Panel: zeigt die normalisierten Kernel-Gewichte pro Kanal —
//! exakt den Datenvertrag, den der externe Blur-Renderer konsumiert.

use crate::app::Plot;

/// Rendert das Gewichts-Panel am rechten Rand.
pub fn render_weights_panel(ctx: &egui::Context, plot: &Plot) {
    egui::SidePanel::right("weights_panel")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Kernel-Gewichte");
            ui.label(format!("Größe: {}", plot.kernel_size()));
            ui.separator();

            match plot.weights() {
                Ok(weights) => {
                    let n = weights.normalized();
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.monospace(format!("{:>3}  {:>7}  {:>7}  {:>7}", "i", "R", "G", "B"));
                        for i in 0..n.r.len() {
                            ui.monospace(format!(
                                "{:>3}  {:.5}  {:.5}  {:.5}",
                                i, n.r[i], n.g[i], n.b[i]
                            ));
                        }
                    });
                }
                Err(err) => {
                    // Fehlerhafte Kurve (z.B. nicht-monotone Spline-Abtastung):
                    // anzeigen statt abstürzen, der letzte gültige Zustand bleibt im Plot.
                    ui.colored_label(egui::Color32::RED, format!("Keine Gewichte: {err}"));
                }
            }
        });
}
