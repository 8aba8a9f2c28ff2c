//! Natürlicher kubischer Spline: Achsen-Solver und parametrische 2D-Kurve.

use super::{CurveError, PointSet};
use crate::shared::SPLINE_SAMPLE_STEP;
use glam::Vec2;

/// Kubischer Spline entlang einer Achse.
///
/// Interpoliert `values[i]` exakt am ganzzahligen Parameter `t = i`,
/// C²-stetig an inneren Knoten, zweite Ableitung 0 an beiden Rändern
/// (natürlicher Spline). Segment `i` ist das kubische Polynom
/// `a[i] + b[i]·dt + c[i]·dt² + d[i]·dt³` mit `dt = t − i`.
#[derive(Debug, Clone)]
pub struct SplineAxis {
    a: Vec<f32>,
    b: Vec<f32>,
    c: Vec<f32>,
    d: Vec<f32>,
    /// Segment-Anzahl = Punktanzahl − 1
    num: usize,
}

impl SplineAxis {
    /// Löst die Koeffizienten für die gegebenen Achsenwerte (Länge ≥ 2).
    pub fn new(values: &[f32]) -> Result<Self, CurveError> {
        let mut axis = Self {
            a: Vec::new(),
            b: Vec::new(),
            c: Vec::new(),
            d: Vec::new(),
            num: 0,
        };
        axis.init(values)?;
        Ok(axis)
    }

    /// Rechnet die Koeffizienten neu — vollständige Neulösung, kein
    /// inkrementelles Update.
    ///
    /// Das Gleichungssystem für die 2.-Ableitungs-Koeffizienten `c[1..num-1]`
    /// ist tridiagonal mit konstanter Diagonale 4 (Knotenabstand 1). Die
    /// Elimination ist die darauf zugeschnittene geschlossene Form des
    /// Thomas-Verfahrens, kein allgemeiner Löser.
    pub fn init(&mut self, values: &[f32]) -> Result<(), CurveError> {
        if values.len() < 2 {
            return Err(CurveError::InvalidInput(format!(
                "Spline braucht mindestens 2 Stuetzwerte, erhalten: {}",
                values.len()
            )));
        }
        let n = values.len();
        let num = n - 1;
        self.num = num;

        // 0.-Grad-Koeffizienten sind die Stützwerte selbst.
        self.a = values.to_vec();

        // Rechte Seite des Systems für c, Randbedingung c[0] = c[num] = 0.
        self.c = vec![0.0; n];
        for i in 1..num {
            self.c[i] = 3.0 * (self.a[i - 1] - 2.0 * self.a[i] + self.a[i + 1]);
        }

        // Vorwärts-Elimination (untere Nebendiagonale).
        let mut w = vec![0.0f32; n];
        for i in 1..num {
            let tmp = 4.0 - w[i - 1];
            self.c[i] = (self.c[i] - self.c[i - 1]) / tmp;
            w[i] = 1.0 / tmp;
        }
        // Rücksubstitution (obere Nebendiagonale).
        for i in (1..num).rev() {
            self.c[i] -= self.c[i + 1] * w[i];
        }

        // b und d aus den c-Werten ableiten.
        self.b = vec![0.0; n];
        self.d = vec![0.0; n];
        for i in 0..num {
            self.d[i] = (self.c[i + 1] - self.c[i]) / 3.0;
            self.b[i] = self.a[i + 1] - self.a[i] - self.c[i] - self.d[i];
        }

        Ok(())
    }

    /// Segment-Anzahl.
    pub fn num(&self) -> usize {
        self.num
    }

    /// Wertet den Spline am Parameter `t` aus.
    ///
    /// Der Segment-Index wird auf `[0, num−1]` geklemmt — kleine numerische
    /// Überläufe hinter dem letzten Knoten sind damit tolerierbar.
    pub fn eval(&self, t: f32) -> f32 {
        let j = (t.floor() as isize).clamp(0, self.num as isize - 1) as usize;
        let dt = t - j as f32;
        self.a[j] + (self.b[j] + (self.c[j] + self.d[j] * dt) * dt) * dt
    }
}

/// Parametrische 2D-Spline-Kurve über einer Punktmenge.
///
/// x- und y-Werte werden unabhängig gegen denselben ganzzahligen Parameter
/// `t` interpoliert — das Ergebnis ist eine parametrische Kurve, keine
/// Funktion y(x).
#[derive(Debug, Clone)]
pub struct Spline2D {
    ps: PointSet,
    x: SplineAxis,
    y: SplineAxis,
}

impl Spline2D {
    /// Baut die Kurve über der Punktmenge (mindestens 2 Punkte).
    pub fn new(ps: PointSet) -> Result<Self, CurveError> {
        let x = SplineAxis::new(&ps.xs())?;
        let y = SplineAxis::new(&ps.ys())?;
        Ok(Self { ps, x, y })
    }

    /// Die zugrundeliegende Punktmenge.
    pub fn points(&self) -> &PointSet {
        &self.ps
    }

    /// Mutierbarer Zugriff auf die Punktmenge.
    pub fn points_mut(&mut self) -> &mut PointSet {
        &mut self.ps
    }

    /// Löst beide Achsen-Splines aus dem aktuellen Punktstand neu.
    pub fn re_calc(&mut self) -> Result<(), CurveError> {
        self.x.init(&self.ps.xs())?;
        self.y.init(&self.ps.ys())
    }

    /// Tastet die parametrische Kurve ab.
    ///
    /// Schrittweite [`SPLINE_SAMPLE_STEP`] ab t = 0; gesammelt wird solange
    /// x ≤ 1, der erste Sample rechts von 1 schließt ab. Endet die Kurve
    /// links von x = 1, wird das letzte Segment linear bis x = 1 verlängert.
    pub fn sample_curve(&self) -> Vec<Vec2> {
        let num = self.x.num() as f32;
        let mut data = Vec::new();

        let mut over = false;
        let mut step = 0usize;
        loop {
            let t = step as f32 * SPLINE_SAMPLE_STEP;
            if t > num + 1e-4 {
                break;
            }
            let p = Vec2::new(self.x.eval(t), self.y.eval(t));
            data.push(p);
            if p.x > 1.0 {
                over = true;
                break;
            }
            step += 1;
        }

        if !over {
            if let [.., prev, last] = data[..] {
                let diff = last - prev;
                if last.x < 1.0 && diff.x > f32::EPSILON {
                    let remain = 1.0 - last.x;
                    data.push(Vec2::new(1.0, last.y + remain / diff.x * diff.y));
                }
            }
        }

        data
    }

    /// Extrahiert `size` Gewichte auf gleichverteilten x-Positionen in [0, 1).
    ///
    /// Das erste Gewicht ist fest 1.0 (die Kurve startet im Ursprung mit
    /// vollem Gewicht); reicht die Abtastung nicht bis zur letzten Position,
    /// wird mit 0 aufgefüllt. Beide Regeln können bei kleinen Kernel-Größen
    /// sichtbare Artefakte erzeugen, der externe Renderer normalisiert aber
    /// gegen w[0]. Fallende x-Werte in der Abtastung brechen mit
    /// [`CurveError::NonMonotonicSample`] ab.
    pub fn weight(&self, size: usize) -> Result<Vec<f32>, CurveError> {
        if size == 0 {
            return Err(CurveError::InvalidInput("Kernel-Groesse 0".into()));
        }

        let data = self.sample_curve();
        let mut ys = Vec::with_capacity(size);
        ys.push(1.0);

        for i in 1..data.len() {
            let current = data[i - 1];
            let next = data[i];
            if next.x < current.x {
                return Err(CurveError::NonMonotonicSample { index: i });
            }

            while ys.len() < size {
                let x = ys.len() as f32 / size as f32;
                if x >= next.x {
                    break;
                }
                let dx = next.x - current.x;
                let y = if dx <= f32::EPSILON {
                    current.y
                } else {
                    current.y + (next.y - current.y) * (x - current.x) / dx
                };
                ys.push(y);
            }
            if ys.len() == size {
                break;
            }
        }

        // Kurze Abtastung: Rest mit 0 auffüllen.
        ys.resize(size, 0.0);
        Ok(ys)
    }
}

#[cfg(test)]
mod tests;
