//! Kurven-Abstraktion als geschlossene Variante über Gauss und Spline.
//!
//! Kein offener Polymorphismus: jede Operation dispatcht über genau ein
//! `match`, die Varianten-Menge ist abgeschlossen.

use super::{CurveError, Gaussian, PointSet, Spline2D};
use crate::shared::GAUSSIAN_DRAW_STEP;
use glam::Vec2;

/// Farbkanal eines Kurven-Tripels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Alle Kanäle in fester Reihenfolge (Rot, Grün, Blau).
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// Kanal-qualifizierte Adresse eines Kontrollpunkts.
///
/// `channel = None` ist der explizite "keine Selektion"-Sentinel und nie
/// ein gültiges Ziel für Punkt-Operationen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointId {
    pub channel: Option<Channel>,
    pub index: usize,
}

impl PointId {
    /// Leere Selektion.
    pub const NONE: PointId = PointId {
        channel: None,
        index: 0,
    };

    /// Adresse für einen konkreten Kanal-Punkt.
    pub fn new(channel: Channel, index: usize) -> Self {
        Self {
            channel: Some(channel),
            index,
        }
    }

    /// Ob die Adresse die leere Selektion ist.
    pub fn is_none(&self) -> bool {
        self.channel.is_none()
    }
}

/// Variante einer Kurve bzw. eines Kanal-Tripels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Gaussian,
    Spline,
}

/// Eine Falloff-Kurve über einer Punktmenge.
#[derive(Debug, Clone)]
pub enum Curve {
    Gaussian(Gaussian),
    Spline(Spline2D),
}

impl Curve {
    /// Variante der Kurve.
    pub fn kind(&self) -> CurveKind {
        match self {
            Curve::Gaussian(_) => CurveKind::Gaussian,
            Curve::Spline(_) => CurveKind::Spline,
        }
    }

    /// Die Punktmenge der Kurve.
    pub fn points(&self) -> &PointSet {
        match self {
            Curve::Gaussian(g) => g.points(),
            Curve::Spline(s) => s.points(),
        }
    }

    fn points_mut(&mut self) -> &mut PointSet {
        match self {
            Curve::Gaussian(g) => g.points_mut(),
            Curve::Spline(s) => s.points_mut(),
        }
    }

    /// Setzt die x-Koordinate eines Punkts (ohne Neuberechnung).
    pub fn set_x(&mut self, index: usize, x: f32) -> Result<(), CurveError> {
        self.points_mut().set_x(index, x)
    }

    /// Setzt die y-Koordinate eines Punkts (ohne Neuberechnung).
    pub fn set_y(&mut self, index: usize, y: f32) -> Result<(), CurveError> {
        self.points_mut().set_y(index, y)
    }

    /// Ein Nachbar-Tausch nach einem Drag-Tick, gibt den neuen Index zurück.
    pub fn sort_after_drag(&mut self, index: usize) -> usize {
        self.points_mut().sort_after_drag(index)
    }

    /// Rechnet die abgeleiteten Kurvendaten aus dem Punktstand neu
    /// (Spline-Koeffizienten bzw. Sigma-Fit).
    pub fn re_calc(&mut self) -> Result<(), CurveError> {
        match self {
            Curve::Gaussian(g) => g.re_calc(),
            Curve::Spline(s) => s.re_calc(),
        }
    }

    /// Extrahiert `size` Kernel-Gewichte.
    pub fn weight(&self, size: usize) -> Result<Vec<f32>, CurveError> {
        match self {
            Curve::Gaussian(g) => g.weight(size),
            Curve::Spline(s) => s.weight(size),
        }
    }

    /// Hit-Test gegen die Kontrollpunkte (Plot-Koordinaten).
    pub fn hit_test(&self, plot_pos: Vec2, scale: Vec2) -> Option<usize> {
        self.points().hit_test(plot_pos, scale)
    }

    /// Selektiert einen Punkt.
    pub fn select(&mut self, index: usize) -> Result<(), CurveError> {
        self.points_mut().select(index)
    }

    /// Deselektiert alle Punkte.
    pub fn unselect_all(&mut self) {
        self.points_mut().unselect_all();
    }

    /// Abtastung der Kurve fürs Zeichnen (Plot-Einheiten).
    pub fn polyline(&self) -> Vec<Vec2> {
        match self {
            Curve::Spline(s) => s.sample_curve(),
            Curve::Gaussian(g) => {
                let steps = (1.0 / GAUSSIAN_DRAW_STEP).round() as usize;
                (0..=steps)
                    .map(|i| {
                        let x = i as f32 * GAUSSIAN_DRAW_STEP;
                        Vec2::new(x, g.calc(x))
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControlPoint;

    fn spline_curve() -> Curve {
        let ps = PointSet::from_axes(&[0.0, 0.5, 1.0], &[1.0, 0.5, 0.1]).unwrap();
        Curve::Spline(Spline2D::new(ps).unwrap())
    }

    fn gaussian_curve() -> Curve {
        Curve::Gaussian(Gaussian::new(ControlPoint::new(1.0, 0.6065)).unwrap())
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(gaussian_curve().kind(), CurveKind::Gaussian);
        assert_eq!(spline_curve().kind(), CurveKind::Spline);
    }

    #[test]
    fn weight_length_is_exact_for_both_variants() {
        for curve in [gaussian_curve(), spline_curve()] {
            for size in [1usize, 7, 25] {
                assert_eq!(curve.weight(size).unwrap().len(), size);
            }
        }
    }

    #[test]
    fn polyline_spans_unit_domain() {
        for curve in [gaussian_curve(), spline_curve()] {
            let line = curve.polyline();
            assert!(line.len() > 2);
            assert!(line.first().unwrap().x.abs() < 1e-5);
            assert!(line.last().unwrap().x >= 1.0 - 1e-4);
        }
    }

    #[test]
    fn point_id_none_sentinel() {
        assert!(PointId::NONE.is_none());
        assert!(!PointId::new(Channel::Red, 0).is_none());
    }
}
