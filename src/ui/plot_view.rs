//! Plot-Ansicht: zeichnet Gitter, Kurven und Kontrollpunkte und übersetzt
//! Pointer-Events in Intents.

use crate::app::{EditorIntent, Plot};
use crate::core::Channel;
use crate::shared::{EditorOptions, GRID_UNIT_X, GRID_UNIT_Y, PLOT_DOMAIN_Y, POINT_HALF_SIZE_PX};
use eframe::egui;
use glam::Vec2;

/// Konvertiert eine RGBA-Option in eine egui-Farbe.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

fn channel_color(options: &EditorOptions, channel: Channel) -> egui::Color32 {
    match channel {
        Channel::Red => color32(options.curve_color_red),
        Channel::Green => color32(options.curve_color_green),
        Channel::Blue => color32(options.curve_color_blue),
    }
}

/// Rendert den Plot in das verfügbare Panel und gibt erzeugte Events zurück.
pub fn render_plot_view(
    ui: &mut egui::Ui,
    plot: &mut Plot,
    options: &EditorOptions,
) -> Vec<EditorIntent> {
    let mut events = Vec::new();

    let (rect, response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

    // Viewport pro Frame an die Panel-Geometrie anpassen: Ursprung unten
    // links, mit Rand für Achsen und Beschriftung.
    let margin = options.plot_margin_px;
    let origin = Vec2::new(rect.min.x + margin, rect.max.y - margin);
    let size = Vec2::new(
        (rect.width() - 2.0 * margin).max(1.0),
        (rect.height() - 2.0 * margin).max(1.0),
    );
    plot.set_viewport(origin, size);

    collect_pointer_events(ui, &response, &mut events);

    let painter = ui.painter().with_clip_rect(rect);
    paint_grid(&painter, plot, options);
    paint_curves(&painter, plot, options);

    events
}

/// Übersetzt die egui-Pointer-Interaktion in Editor-Intents.
fn collect_pointer_events(
    ui: &egui::Ui,
    response: &egui::Response,
    events: &mut Vec<EditorIntent>,
) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        // press_origin() liefert die exakte Klickposition vor der
        // Drag-Schwelle; interact_pointer_pos() wäre bereits um einige
        // Pixel verschoben und macht die Hitbox asymmetrisch.
        if let Some(pos) = ui.input(|i| i.pointer.press_origin()) {
            events.push(EditorIntent::PointerPressed {
                pos: Vec2::new(pos.x, pos.y),
            });
        }
    } else if response.clicked() {
        // Klick ohne Drag-Schwelle: selektiert den Punkt unter dem Zeiger.
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(EditorIntent::PointerPressed {
                pos: Vec2::new(pos.x, pos.y),
            });
            events.push(EditorIntent::PointerReleased);
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(EditorIntent::PointerMoved {
                pos: Vec2::new(pos.x, pos.y),
            });
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        events.push(EditorIntent::PointerReleased);
    }

    // Zeiger komplett weg (Fenster/Panel verlassen): Drag lösen.
    if ui.input(|i| i.pointer.latest_pos()).is_none() {
        events.push(EditorIntent::PointerLeft);
    }
}

/// Zeichnet Achsen und Gitterlinien.
fn paint_grid(painter: &egui::Painter, plot: &Plot, options: &EditorOptions) {
    let vp = plot.viewport();
    let stroke = egui::Stroke::new(1.0, color32(options.grid_color));
    let domain_x = options.plot_domain_x;

    let to_pos = |unit: Vec2| {
        let s = vp.to_screen(unit);
        egui::pos2(s.x, s.y)
    };

    // Vertikale Linien je Einheit entlang x.
    let mut x = 0.0;
    while x <= domain_x + 1e-3 {
        painter.line_segment(
            [to_pos(Vec2::new(x, 0.0)), to_pos(Vec2::new(x, PLOT_DOMAIN_Y))],
            stroke,
        );
        x += GRID_UNIT_X;
    }

    // Horizontale Linien je Zehntel entlang y.
    let mut y = 0.0;
    while y <= PLOT_DOMAIN_Y + 1e-3 {
        painter.line_segment(
            [to_pos(Vec2::new(0.0, y)), to_pos(Vec2::new(domain_x, y))],
            stroke,
        );
        y += GRID_UNIT_Y;
    }
}

/// Zeichnet die drei Kanal-Kurven und ihre Kontrollpunkte.
fn paint_curves(painter: &egui::Painter, plot: &Plot, options: &EditorOptions) {
    let vp = plot.viewport();
    let triple = plot.active();

    for channel in Channel::ALL {
        let color = channel_color(options, channel);
        let curve = triple.channel(channel);

        let line: Vec<egui::Pos2> = curve
            .polyline()
            .into_iter()
            .map(|p| {
                let s = vp.to_screen(p);
                egui::pos2(s.x, s.y)
            })
            .collect();
        if line.len() >= 2 {
            painter.add(egui::Shape::line(line, egui::Stroke::new(1.5, color)));
        }

        for point in curve.points().iter() {
            let s = vp.to_screen(point.coord);
            let fill = if point.selected {
                color
            } else {
                color32(options.point_color_default)
            };
            painter.rect_filled(
                egui::Rect::from_center_size(
                    egui::pos2(s.x, s.y),
                    egui::vec2(2.0 * POINT_HALF_SIZE_PX, 2.0 * POINT_HALF_SIZE_PX),
                ),
                0.0,
                fill,
            );
        }
    }
}
