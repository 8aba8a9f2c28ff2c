//! Interaktions-Controller: Viewport-Transformation, Hit-Test und
//! Drag-Zustandsmaschine des Kurven-Plots.

use super::EditorIntent;
use crate::core::{
    Channel, Curve, CurveError, CurveKind, CurveRgb, Gaussian, PointId, RgbWeight,
};
use crate::shared::{EditorOptions, KERNEL_SIZE_MAX, KERNEL_SIZE_MIN, PLOT_DOMAIN_Y};
use anyhow::Context;
use glam::Vec2;

/// Sichtbarer Plot-Bereich.
///
/// `origin` ist der Plot-Ursprung (unten links) in Screen-Pixeln, y wächst
/// im Plot nach oben. `scale` ist Pixel pro Kurven-Einheit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotViewport {
    pub origin: Vec2,
    pub size: Vec2,
    pub scale: Vec2,
}

impl PlotViewport {
    /// Baut den Viewport aus Ursprung, Pixel-Größe und sichtbarer Domäne.
    pub fn new(origin: Vec2, size: Vec2, domain: Vec2) -> Self {
        Self {
            origin,
            size,
            scale: size / domain,
        }
    }

    /// Screen-Pixel → Plot-Pixel (Ursprung unten links, y nach oben).
    pub fn to_plot(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x - self.origin.x, self.origin.y - screen.y)
    }

    /// Kurven-Einheiten → Screen-Pixel.
    pub fn to_screen(&self, unit: Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + unit.x * self.scale.x,
            self.origin.y - unit.y * self.scale.y,
        )
    }

    /// Ob die Screen-Position pro Achse innerhalb des Plots liegt.
    pub fn contains(&self, screen: Vec2) -> (bool, bool) {
        let edge = Vec2::new(self.origin.x + self.size.x, self.origin.y - self.size.y);
        (
            self.origin.x < screen.x && screen.x < edge.x,
            edge.y < screen.y && screen.y < self.origin.y,
        )
    }
}

/// Zustand der Drag-Zustandsmaschine — die einzige Drag-Variable des
/// Controllers, nie in die Kurven-Objekte aliasiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// Kein Drag aktiv
    Idle,
    /// Der adressierte Punkt hängt am Zeiger
    Dragging(PointId),
}

/// Interaktions-Controller des Kurven-Editors.
///
/// Besitzt beide Kanal-Tripel; der Modus entscheidet nur, welches Tripel
/// gezeichnet und adressiert wird. Alle Mutationen laufen synchron durch
/// [`Plot::handle_intent`].
pub struct Plot {
    viewport: PlotViewport,
    mode: CurveKind,
    gaussian: CurveRgb,
    spline: CurveRgb,
    drag: DragState,
    kernel_size: usize,
    /// Sichtbare Domäne in Kurven-Einheiten (bestimmt die Skala).
    domain: Vec2,
}

impl Plot {
    /// Erstellt den Controller mit den Standard-Tripeln aus den Optionen.
    ///
    /// Das Spline-Tripel startet als Konversion des Gauss-Tripels, damit
    /// beide Modi von Anfang an dieselbe Falloff-Form zeigen.
    pub fn new(viewport: PlotViewport, options: &EditorOptions) -> anyhow::Result<Self> {
        let gaussian = CurveRgb::new(
            Curve::Gaussian(Gaussian::from_sd_and_mean(options.default_sigma_red, 0.0)?),
            Curve::Gaussian(Gaussian::from_sd_and_mean(options.default_sigma_green, 0.0)?),
            Curve::Gaussian(Gaussian::from_sd_and_mean(options.default_sigma_blue, 0.0)?),
        )
        .context("Standard-Gauss-Tripel konnte nicht gebaut werden")?;
        let spline = gaussian
            .convert_to_spline()
            .context("Standard-Spline-Tripel konnte nicht gebaut werden")?;

        Ok(Self {
            viewport,
            mode: CurveKind::Gaussian,
            gaussian,
            spline,
            drag: DragState::Idle,
            kernel_size: options.default_kernel_size,
            domain: Vec2::new(options.plot_domain_x, PLOT_DOMAIN_Y),
        })
    }

    /// Aktueller Kurven-Modus.
    pub fn mode(&self) -> CurveKind {
        self.mode
    }

    /// Aktueller Drag-Zustand.
    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Aktuelle Kernel-Größe.
    pub fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    /// Aktueller Viewport.
    pub fn viewport(&self) -> PlotViewport {
        self.viewport
    }

    /// Das im aktuellen Modus aktive Tripel.
    pub fn active(&self) -> &CurveRgb {
        match self.mode {
            CurveKind::Gaussian => &self.gaussian,
            CurveKind::Spline => &self.spline,
        }
    }

    fn active_mut(&mut self) -> &mut CurveRgb {
        match self.mode {
            CurveKind::Gaussian => &mut self.gaussian,
            CurveKind::Spline => &mut self.spline,
        }
    }

    /// Passt den Viewport an die aktuelle Panel-Geometrie an (pro Frame).
    pub fn set_viewport(&mut self, origin: Vec2, size: Vec2) {
        self.viewport = PlotViewport::new(origin, size, self.domain);
    }

    /// Verarbeitet einen Intent.
    ///
    /// Gesten-Fehler (verworfene Drag-Ticks) werden hier behandelt und nur
    /// geloggt; propagiert werden Fehler, die kein Nutzer-Rauschen sind
    /// (z.B. eine fehlgeschlagene Konversion).
    pub fn handle_intent(&mut self, intent: EditorIntent) -> anyhow::Result<()> {
        match intent {
            EditorIntent::PointerPressed { pos } => {
                self.pointer_pressed(pos);
            }
            EditorIntent::PointerMoved { pos } => {
                self.pointer_moved(pos);
            }
            EditorIntent::PointerReleased | EditorIntent::PointerLeft => {
                self.drag = DragState::Idle;
            }
            EditorIntent::ModeSelected { kind } => {
                // Nur Umschalten des adressierten Tripels — keine Punktdaten anfassen.
                self.mode = kind;
                self.drag = DragState::Idle;
            }
            EditorIntent::ConvertToSplineRequested => {
                let converted = self
                    .gaussian
                    .convert_to_spline()
                    .context("Gauss→Spline-Konversion fehlgeschlagen")?;
                self.spline = converted;
                self.mode = CurveKind::Spline;
                self.drag = DragState::Idle;
            }
            EditorIntent::KernelSizeChanged { size } => {
                self.kernel_size = size.clamp(KERNEL_SIZE_MIN, KERNEL_SIZE_MAX);
            }
        }
        Ok(())
    }

    /// Pointer-Down: Hit-Test gegen das aktive Tripel.
    fn pointer_pressed(&mut self, pos: Vec2) {
        self.gaussian.unselect_all();
        self.spline.unselect_all();

        let plot_pos = self.viewport.to_plot(pos);
        let scale = self.viewport.scale;
        let id = self.active_mut().hit_test(plot_pos, scale);

        self.drag = if id.is_none() {
            DragState::Idle
        } else {
            DragState::Dragging(id)
        };
    }

    /// Pointer-Move: den gegriffenen Punkt achsenweise mitführen.
    fn pointer_moved(&mut self, pos: Vec2) {
        let DragState::Dragging(id) = self.drag else {
            return;
        };

        let (in_x, in_y) = self.viewport.contains(pos);
        if !in_x && !in_y {
            return;
        }

        match self.apply_drag_tick(id, pos, in_x, in_y) {
            Ok(new_id) => self.drag = DragState::Dragging(new_id),
            Err(err) => log::warn!("Drag-Tick verworfen: {err}"),
        }
    }

    /// Ein Drag-Tick als Transaktion: Koordinaten schreiben, nachsortieren,
    /// neu berechnen — schlägt die Neuberechnung fehl, wird der Punkt auf
    /// seinen vorherigen Stand zurückgesetzt und die Geste ist ein No-Op.
    fn apply_drag_tick(
        &mut self,
        id: PointId,
        pos: Vec2,
        in_x: bool,
        in_y: bool,
    ) -> Result<PointId, CurveError> {
        let plot_pos = self.viewport.to_plot(pos);
        let scale = self.viewport.scale;

        let active = self.active_mut();
        let prev = active.point(id)?;

        if in_x {
            active.set_x(id, plot_pos.x / scale.x)?;
        }
        if in_y {
            active.set_y(id, plot_pos.y / scale.y)?;
        }
        let new_id = active.sort(id)?;

        if let Err(err) = active.re_calc_all() {
            active.set_x(new_id, prev.x)?;
            active.set_y(new_id, prev.y)?;
            let restored = active.sort(new_id)?;
            debug_assert_eq!(restored, id);
            active.re_calc_all()?;
            return Err(err);
        }

        Ok(new_id)
    }

    /// Pro-Kanal-Gewichte des aktiven Tripels in aktueller Kernel-Größe —
    /// der Datenvertrag zum externen Separable-Blur-Renderer.
    pub fn weights(&self) -> Result<RgbWeight, CurveError> {
        match self.mode {
            CurveKind::Gaussian => self.gaussian.weight(self.kernel_size),
            // Das Spline-Tripel hat keinen aggregierten Pfad — kanalweise extrahieren.
            CurveKind::Spline => Ok(RgbWeight {
                r: self.spline.channel(Channel::Red).weight(self.kernel_size)?,
                g: self
                    .spline
                    .channel(Channel::Green)
                    .weight(self.kernel_size)?,
                b: self.spline.channel(Channel::Blue).weight(self.kernel_size)?,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_viewport() -> PlotViewport {
        // Ursprung (50, 350), 500×300 px, Domäne 5×1 Einheiten → Skala (100, 300).
        PlotViewport::new(
            Vec2::new(50.0, 350.0),
            Vec2::new(500.0, 300.0),
            Vec2::new(5.0, 1.0),
        )
    }

    #[test]
    fn viewport_round_trips_screen_and_unit_space() {
        let vp = test_viewport();
        let unit = Vec2::new(1.0, 0.5);

        let screen = vp.to_screen(unit);
        assert_relative_eq!(screen.x, 150.0);
        assert_relative_eq!(screen.y, 200.0);

        let plot = vp.to_plot(screen);
        assert_relative_eq!(plot.x / vp.scale.x, unit.x);
        assert_relative_eq!(plot.y / vp.scale.y, unit.y);
    }

    #[test]
    fn viewport_contains_checks_each_axis() {
        let vp = test_viewport();

        // Innerhalb beider Achsen.
        assert_eq!(vp.contains(Vec2::new(150.0, 200.0)), (true, true));
        // Links außerhalb, y innerhalb.
        assert_eq!(vp.contains(Vec2::new(10.0, 200.0)), (false, true));
        // x innerhalb, unterhalb des Ursprungs.
        assert_eq!(vp.contains(Vec2::new(150.0, 380.0)), (true, false));
    }

    #[test]
    fn kernel_size_is_clamped_to_bounds() {
        let options = EditorOptions::default();
        let mut plot = Plot::new(test_viewport(), &options).unwrap();

        plot.handle_intent(EditorIntent::KernelSizeChanged { size: 1 })
            .unwrap();
        assert_eq!(plot.kernel_size(), KERNEL_SIZE_MIN);

        plot.handle_intent(EditorIntent::KernelSizeChanged { size: 10_000 })
            .unwrap();
        assert_eq!(plot.kernel_size(), KERNEL_SIZE_MAX);
    }

    #[test]
    fn weights_cover_both_modes() {
        let options = EditorOptions::default();
        let mut plot = Plot::new(test_viewport(), &options).unwrap();

        let w = plot.weights().unwrap();
        assert_eq!(w.r.len(), plot.kernel_size());

        plot.handle_intent(EditorIntent::ModeSelected {
            kind: CurveKind::Spline,
        })
        .unwrap();
        let w = plot.weights().unwrap();
        assert_eq!(w.g.len(), plot.kernel_size());
        assert_eq!(w.r[0], 1.0);
    }
}
