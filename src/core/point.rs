//! Kontrollpunkte und die geordnete Punktmenge einer Kurve.

use super::CurveError;
use crate::shared::POINT_HALF_SIZE_PX;
use glam::Vec2;

/// Ein einzelner Kontrollpunkt im Plot (Koordinate in Plot-Einheiten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in Plot-Einheiten (x rechts, y oben)
    pub coord: Vec2,
    /// Ob der Punkt aktuell selektiert ist (Hervorhebung beim Zeichnen)
    pub selected: bool,
}

impl ControlPoint {
    /// Erstellt einen unselektierten Punkt.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            coord: Vec2::new(x, y),
            selected: false,
        }
    }
}

/// Geordnete Menge von Kontrollpunkten.
///
/// Invariante: die Punkte sind aufsteigend nach x sortiert. Nach jedem
/// Drag-Tick stellt [`PointSet::sort_after_drag`] die Ordnung mit höchstens
/// einem Nachbar-Tausch wieder her.
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<ControlPoint>,
    /// Hochwassermarke der y-Werte — wächst monoton, fällt nie.
    max_y: f32,
}

impl PointSet {
    /// Erstellt eine Punktmenge aus fertigen Kontrollpunkten (mindestens einer).
    pub fn new(points: Vec<ControlPoint>) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::InvalidInput("leere Punktmenge".into()));
        }
        let max_y = points
            .iter()
            .map(|p| p.coord.y)
            .fold(f32::NEG_INFINITY, f32::max);
        Ok(Self { points, max_y })
    }

    /// Erstellt eine Punktmenge aus parallelen x- und y-Arrays.
    pub fn from_axes(xs: &[f32], ys: &[f32]) -> Result<Self, CurveError> {
        if xs.len() != ys.len() {
            return Err(CurveError::InvalidInput(format!(
                "Achsen-Laengen verschieden: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        let points = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| ControlPoint::new(x, y))
            .collect();
        Self::new(points)
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Ob die Menge leer ist (nach Konstruktion nie der Fall).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkt per Index.
    pub fn get(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// Alle x-Werte in Punktreihenfolge.
    pub fn xs(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.coord.x).collect()
    }

    /// Alle y-Werte in Punktreihenfolge.
    pub fn ys(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.coord.y).collect()
    }

    /// Hochwassermarke der y-Werte.
    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Iterator über alle Punkte (fürs Zeichnen).
    pub fn iter(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.iter()
    }

    fn point_mut(&mut self, index: usize) -> Result<&mut ControlPoint, CurveError> {
        let len = self.points.len();
        self.points
            .get_mut(index)
            .ok_or_else(|| CurveError::InvalidInput(format!("Index {index} >= Laenge {len}")))
    }

    /// Setzt beide Koordinaten eines Punkts.
    pub fn set(&mut self, index: usize, coord: Vec2) -> Result<(), CurveError> {
        self.point_mut(index)?.coord = coord;
        self.raise_max_y(coord.y);
        Ok(())
    }

    /// Setzt die x-Koordinate eines Punkts.
    pub fn set_x(&mut self, index: usize, x: f32) -> Result<(), CurveError> {
        self.point_mut(index)?.coord.x = x;
        Ok(())
    }

    /// Setzt die y-Koordinate eines Punkts.
    pub fn set_y(&mut self, index: usize, y: f32) -> Result<(), CurveError> {
        self.point_mut(index)?.coord.y = y;
        self.raise_max_y(y);
        Ok(())
    }

    fn raise_max_y(&mut self, y: f32) {
        if y > self.max_y {
            self.max_y = y;
        }
    }

    /// Selektiert einen Punkt.
    pub fn select(&mut self, index: usize) -> Result<(), CurveError> {
        self.point_mut(index)?.selected = true;
        Ok(())
    }

    /// Deselektiert einen Punkt.
    pub fn unselect(&mut self, index: usize) -> Result<(), CurveError> {
        self.point_mut(index)?.selected = false;
        Ok(())
    }

    /// Deselektiert alle Punkte.
    pub fn unselect_all(&mut self) {
        for p in &mut self.points {
            p.selected = false;
        }
    }

    /// Stellt die aufsteigende x-Ordnung nach einem Drag-Tick wieder her.
    ///
    /// Pro Aufruf höchstens ein Nachbar-Tausch: ein Drag kann den Punkt pro
    /// Tick nur an maximal einem Nachbarn vorbeischieben. Gibt den (ggf.
    /// verschobenen) Index des bewegten Punkts zurück — Aufrufer müssen mit
    /// diesem Index weiterarbeiten.
    pub fn sort_after_drag(&mut self, index: usize) -> usize {
        if index > 0 && self.points[index - 1].coord.x > self.points[index].coord.x {
            self.points.swap(index - 1, index);
            index - 1
        } else if index + 1 < self.points.len()
            && self.points[index].coord.x > self.points[index + 1].coord.x
        {
            self.points.swap(index, index + 1);
            index + 1
        } else {
            index
        }
    }

    /// Hit-Test in Plot-Koordinaten (Ursprung unten links, y nach oben).
    ///
    /// Punkt-in-Box-Test gegen die feste Screen-Halbgröße jedes Punkts;
    /// der erste Treffer gewinnt.
    pub fn hit_test(&self, plot_pos: Vec2, scale: Vec2) -> Option<usize> {
        let r = POINT_HALF_SIZE_PX;
        self.points.iter().position(|p| {
            let screen = p.coord * scale;
            (plot_pos.x - screen.x).abs() < r && (plot_pos.y - screen.y).abs() < r
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(xs: &[f32]) -> PointSet {
        let ys: Vec<f32> = xs.iter().map(|_| 0.5).collect();
        PointSet::from_axes(xs, &ys).expect("Punktmenge sollte konstruierbar sein")
    }

    #[test]
    fn from_axes_rejects_length_mismatch() {
        let result = PointSet::from_axes(&[0.0, 1.0], &[0.0]);
        assert!(matches!(result, Err(CurveError::InvalidInput(_))));
    }

    #[test]
    fn new_rejects_empty_set() {
        assert!(matches!(
            PointSet::new(vec![]),
            Err(CurveError::InvalidInput(_))
        ));
    }

    #[test]
    fn sort_after_drag_swaps_left_once() {
        // Szenario: Punkte bei x=[1,2,3], Punkt 2 wird auf x=0.5 gezogen.
        let mut ps = set_of(&[1.0, 2.0, 3.0]);
        ps.set_x(2, 0.5).unwrap();

        let new_index = ps.sort_after_drag(2);

        // Genau ein Tausch mit dem Nachbarn bei x=2 — kein vollständiges Sortieren.
        assert_eq!(new_index, 1);
        assert_eq!(ps.xs(), vec![1.0, 0.5, 3.0]);

        // Ein weiterer Tick setzt den Punkt dann ganz nach links.
        let settled = ps.sort_after_drag(new_index);
        assert_eq!(settled, 0);
        assert_eq!(ps.xs(), vec![0.5, 1.0, 3.0]);
    }

    #[test]
    fn sort_after_drag_swaps_right_once() {
        let mut ps = set_of(&[1.0, 2.0, 3.0]);
        ps.set_x(0, 2.5).unwrap();

        let new_index = ps.sort_after_drag(0);

        assert_eq!(new_index, 1);
        assert_eq!(ps.xs(), vec![2.0, 2.5, 3.0]);
    }

    #[test]
    fn sort_after_drag_is_noop_when_ordered() {
        let mut ps = set_of(&[1.0, 2.0, 3.0]);
        assert_eq!(ps.sort_after_drag(1), 1);
        assert_eq!(ps.xs(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn order_invariant_after_mutation_sequence() {
        let mut ps = set_of(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let moves = [(2usize, 0.2f32), (0, 3.7), (4, 1.1), (3, 0.9)];

        for &(start, target) in &moves {
            // Jede Mutation wird wie im Drag-Loop sofort nachsortiert, bis
            // der Punkt eingerastet ist.
            let mut index = start.min(ps.len() - 1);
            ps.set_x(index, target).unwrap();
            loop {
                let next = ps.sort_after_drag(index);
                if next == index {
                    break;
                }
                index = next;
            }
            let xs = ps.xs();
            assert!(
                xs.windows(2).all(|w| w[0] <= w[1]),
                "x-Ordnung verletzt: {xs:?}"
            );
        }
    }

    #[test]
    fn max_y_never_decreases() {
        let mut ps = PointSet::from_axes(&[0.0, 1.0], &[0.3, 0.8]).unwrap();
        assert_eq!(ps.max_y(), 0.8);

        ps.set_y(1, 0.2).unwrap();
        assert_eq!(ps.max_y(), 0.8);

        ps.set_y(0, 0.95).unwrap();
        assert_eq!(ps.max_y(), 0.95);
    }

    #[test]
    fn hit_test_honors_half_size_box() {
        let ps = PointSet::from_axes(&[0.5], &[0.5]).unwrap();
        let scale = Vec2::new(100.0, 100.0);

        // Mitte des Punkts bei (50, 50) Plot-Pixeln.
        assert_eq!(ps.hit_test(Vec2::new(52.0, 48.0), scale), Some(0));
        assert_eq!(ps.hit_test(Vec2::new(80.0, 50.0), scale), None);
    }

    #[test]
    fn set_rejects_out_of_range_index() {
        let mut ps = set_of(&[0.0, 1.0]);
        assert!(matches!(
            ps.set_x(5, 1.0),
            Err(CurveError::InvalidInput(_))
        ));
    }
}
