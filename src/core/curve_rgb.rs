//! RGB-Kanal-Tripel: drei gleichartige Kurven plus Punkt-Dispatch.

use super::{Channel, Curve, CurveError, CurveKind, PointId, PointSet, Spline2D};
use crate::shared::GAUSSIAN_TO_SPLINE_OFFSETS;
use glam::Vec2;

/// Pro-Kanal-Gewichtsarrays — der Datenvertrag zum externen Blur-Renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbWeight {
    pub r: Vec<f32>,
    pub g: Vec<f32>,
    pub b: Vec<f32>,
}

impl RgbWeight {
    /// Normalisiert jeden Kanal gegen die gespiegelte Kernel-Summe.
    ///
    /// Der Separable-Blur wendet jedes Gewicht außer `w[0]` auf beide
    /// Seiten an; die Summe ist also `2·Σw − w[0]`.
    pub fn normalized(&self) -> RgbWeight {
        fn normalize(v: &[f32]) -> Vec<f32> {
            let sum = v.iter().sum::<f32>() * 2.0 - v.first().copied().unwrap_or(0.0);
            if sum <= f32::EPSILON {
                return v.to_vec();
            }
            v.iter().map(|w| w / sum).collect()
        }
        RgbWeight {
            r: normalize(&self.r),
            g: normalize(&self.g),
            b: normalize(&self.b),
        }
    }
}

/// Drei Kurven derselben Variante, getaggt als Rot/Grün/Blau.
///
/// Invariante: alle drei Kanäle teilen die Variante; Mischung ist ein
/// Konstruktionsfehler. Die Variante ist als `kind` gecached.
#[derive(Debug, Clone)]
pub struct CurveRgb {
    red: Curve,
    green: Curve,
    blue: Curve,
    kind: CurveKind,
}

impl CurveRgb {
    /// Baut ein Tripel aus drei gleichartigen Kurven.
    pub fn new(red: Curve, green: Curve, blue: Curve) -> Result<Self, CurveError> {
        let kind = red.kind();
        if green.kind() != kind || blue.kind() != kind {
            return Err(CurveError::VariantMismatch);
        }
        Ok(Self {
            red,
            green,
            blue,
            kind,
        })
    }

    /// Variante des Tripels.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Kurve eines Kanals.
    pub fn channel(&self, channel: Channel) -> &Curve {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut Curve {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Löst eine Punkt-Adresse auf; die leere Selektion wird abgewiesen.
    fn resolve(&mut self, id: PointId) -> Result<(&mut Curve, usize), CurveError> {
        let Some(channel) = id.channel else {
            return Err(CurveError::NoSelection);
        };
        Ok((self.channel_mut(channel), id.index))
    }

    /// Setzt die x-Koordinate des adressierten Punkts.
    pub fn set_x(&mut self, id: PointId, x: f32) -> Result<(), CurveError> {
        let (curve, index) = self.resolve(id)?;
        curve.set_x(index, x)
    }

    /// Setzt die y-Koordinate des adressierten Punkts.
    pub fn set_y(&mut self, id: PointId, y: f32) -> Result<(), CurveError> {
        let (curve, index) = self.resolve(id)?;
        curve.set_y(index, y)
    }

    /// Punkt des adressierten Kanals (fürs Rollback im Controller).
    pub fn point(&self, id: PointId) -> Result<Vec2, CurveError> {
        let Some(channel) = id.channel else {
            return Err(CurveError::NoSelection);
        };
        self.channel(channel)
            .points()
            .get(id.index)
            .map(|p| p.coord)
            .ok_or_else(|| CurveError::InvalidInput(format!("Index {} unbekannt", id.index)))
    }

    /// Ein Nachbar-Tausch nach einem Drag-Tick.
    ///
    /// Gibt die (ggf. index-verschobene) Adresse zurück — Aufrufer müssen
    /// mit dieser weiterarbeiten, sonst adressieren sie den falschen Punkt.
    pub fn sort(&mut self, id: PointId) -> Result<PointId, CurveError> {
        let Some(channel) = id.channel else {
            return Err(CurveError::NoSelection);
        };
        let index = self.channel_mut(channel).sort_after_drag(id.index);
        Ok(PointId::new(channel, index))
    }

    /// Rechnet alle drei Kanäle neu.
    pub fn re_calc_all(&mut self) -> Result<(), CurveError> {
        for channel in Channel::ALL {
            self.channel_mut(channel).re_calc()?;
        }
        Ok(())
    }

    /// Deselektiert alle Punkte aller Kanäle.
    pub fn unselect_all(&mut self) {
        for channel in Channel::ALL {
            self.channel_mut(channel).unselect_all();
        }
    }

    /// Hit-Test über alle Kanäle; der erste Treffer wird selektiert.
    ///
    /// Ohne Treffer bleibt die Selektion leer ([`PointId::NONE`]).
    pub fn hit_test(&mut self, plot_pos: Vec2, scale: Vec2) -> PointId {
        for channel in Channel::ALL {
            if let Some(index) = self.channel(channel).hit_test(plot_pos, scale) {
                // Selektieren kann nicht fehlschlagen: der Index kommt aus dem Hit-Test.
                let _ = self.channel_mut(channel).select(index);
                return PointId::new(channel, index);
            }
        }
        PointId::NONE
    }

    /// Konvertiert ein Gauss-Tripel verlustbehaftet in ein Spline-Tripel.
    ///
    /// Pro Kanal wird die Gauss-Kurve an den kanonischen Offsets
    /// [`GAUSSIAN_TO_SPLINE_OFFSETS`] · sigma abgetastet und daraus eine
    /// Fünf-Punkt-Spline gebaut. Es gibt keine Rückrichtung.
    pub fn convert_to_spline(&self) -> Result<CurveRgb, CurveError> {
        if self.kind != CurveKind::Gaussian {
            return Err(CurveError::VariantMismatch);
        }

        let mut splines = Channel::ALL.iter().map(|&channel| {
            let Curve::Gaussian(g) = self.channel(channel) else {
                return Err(CurveError::VariantMismatch);
            };
            let xs: Vec<f32> = GAUSSIAN_TO_SPLINE_OFFSETS
                .iter()
                .map(|offset| offset * g.sigma())
                .collect();
            let ys: Vec<f32> = xs.iter().map(|&x| g.calc(x)).collect();
            let ps = PointSet::from_axes(&xs, &ys)?;
            Ok(Curve::Spline(Spline2D::new(ps)?))
        });

        // Drei Kanäle, Reihenfolge Rot/Grün/Blau.
        let red = splines.next().unwrap()?;
        let green = splines.next().unwrap()?;
        let blue = splines.next().unwrap()?;
        CurveRgb::new(red, green, blue)
    }

    /// Aggregierte Gewichts-Extraktion des Tripels.
    ///
    /// Nur für die Gauss-Variante definiert — das Spline-Tripel hat keinen
    /// aggregierten Gewichtspfad.
    pub fn weight(&self, size: usize) -> Result<RgbWeight, CurveError> {
        if self.kind != CurveKind::Gaussian {
            return Err(CurveError::VariantMismatch);
        }
        Ok(RgbWeight {
            r: self.red.weight(size)?,
            g: self.green.weight(size)?,
            b: self.blue.weight(size)?,
        })
    }
}
