//! Gauss-Falloff-Kurve mit invers gefittetem Sigma.
//!
//! Der Mittelwert mu ist im gesamten Editor fest 0: der Falloff startet im
//! Ursprung mit vollem Gewicht. Sigma ist nie direkt setzbar, sondern wird
//! bei jeder Punktmutation aus dem einzigen Kontrollpunkt zurückgerechnet.

use super::{ControlPoint, CurveError, PointSet};
use crate::shared::GAUSSIAN_REFERENCE_X;

/// Gauss-Kurve über genau einem Kontrollpunkt.
#[derive(Debug, Clone)]
pub struct Gaussian {
    ps: PointSet,
    sigma: f32,
}

impl Gaussian {
    /// Fittet eine Gauss-Kurve durch den Kontrollpunkt.
    ///
    /// Voraussetzung: `y ∈ (0, 1)`, sonst hat `sigma² = −x²/(2·ln y)` keine
    /// reelle positive Lösung.
    pub fn new(point: ControlPoint) -> Result<Self, CurveError> {
        let ps = PointSet::new(vec![point])?;
        let mut gaussian = Self { ps, sigma: 0.0 };
        gaussian.re_calc()?;
        Ok(gaussian)
    }

    /// Baut die Kurve aus Sigma und Mittelwert.
    ///
    /// Erzeugt einen synthetischen Kontrollpunkt an der festen Referenz-x
    /// [`GAUSSIAN_REFERENCE_X`] und läuft dann durch den normalen
    /// Invers-Fit — für `mu = 0` ein exakter Round-Trip.
    pub fn from_sd_and_mean(sigma: f32, mu: f32) -> Result<Self, CurveError> {
        if sigma <= 0.0 || !sigma.is_finite() {
            return Err(CurveError::InvalidInput(format!(
                "sigma muss positiv und endlich sein, erhalten: {sigma}"
            )));
        }
        let x = GAUSSIAN_REFERENCE_X;
        let y = (-(x - mu) * (x - mu) / (2.0 * sigma * sigma)).exp();
        Self::new(ControlPoint::new(x, y))
    }

    /// Das gefittete Sigma.
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Die zugrundeliegende Punktmenge (ein Punkt).
    pub fn points(&self) -> &PointSet {
        &self.ps
    }

    /// Mutierbarer Zugriff auf die Punktmenge.
    pub fn points_mut(&mut self) -> &mut PointSet {
        &mut self.ps
    }

    /// Löst `sigma` aus dem aktuellen Kontrollpunkt neu.
    ///
    /// `y ≤ 0` wird vor dem Fit als Eingabefehler abgewiesen; ein Fit ohne
    /// reelle Lösung (`sigma² ≤ 0` oder nicht endlich) liefert den typisierten
    /// [`CurveError::ImaginaryResult`] statt eines stillen NaN.
    pub fn re_calc(&mut self) -> Result<(), CurveError> {
        let p = self
            .ps
            .get(0)
            .ok_or_else(|| CurveError::InvalidInput("Gauss ohne Kontrollpunkt".into()))?;
        let (x, y) = (p.coord.x, p.coord.y);

        if y <= 0.0 {
            return Err(CurveError::InvalidInput(format!(
                "Kontrollpunkt-y muss positiv sein, erhalten: {y}"
            )));
        }

        let s2 = -(x * x) / (2.0 * y.ln());
        if s2 <= 0.0 || !s2.is_finite() {
            return Err(CurveError::ImaginaryResult { x, y });
        }

        self.sigma = s2.sqrt();
        Ok(())
    }

    /// Wertet die Falloff-Funktion aus: `exp(−x²/(2σ²))`.
    pub fn calc(&self, x: f32) -> f32 {
        (-(x * x) / (2.0 * self.sigma * self.sigma)).exp()
    }

    /// Direkte Gewichts-Abtastung an `size` gleichverteilten x-Positionen.
    pub fn weight(&self, size: usize) -> Result<Vec<f32>, CurveError> {
        if size == 0 {
            return Err(CurveError::InvalidInput("Kernel-Groesse 0".into()));
        }
        Ok((0..size)
            .map(|i| self.calc(i as f32 / size as f32))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fit_round_trips_through_control_point() {
        for y in [0.05f32, 0.2, 0.5, 0.6065, 0.9, 0.99] {
            let g = Gaussian::new(ControlPoint::new(1.3, y)).expect("Fit sollte gelingen");
            assert_relative_eq!(g.calc(1.3), y, epsilon = 1e-5);
        }
    }

    #[test]
    fn control_point_at_one_sigma_fits_unit_sigma() {
        // (1, e^{-1/2}) liegt genau eine Standardabweichung vom Ursprung.
        let g = Gaussian::new(ControlPoint::new(1.0, 0.6065)).unwrap();
        assert_relative_eq!(g.sigma(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn weight_is_direct_evaluation() {
        let g = Gaussian::from_sd_and_mean(0.5, 0.0).unwrap();
        let w = g.weight(8).unwrap();

        assert_eq!(w.len(), 8);
        for (i, &value) in w.iter().enumerate() {
            let x = i as f32 / 8.0;
            assert_relative_eq!(value, (-(x * x) / 0.5).exp(), epsilon = 1e-5);
        }
    }

    #[test]
    fn weight_rejects_zero_size() {
        let g = Gaussian::from_sd_and_mean(1.0, 0.0).unwrap();
        assert!(matches!(g.weight(0), Err(CurveError::InvalidInput(_))));
    }

    #[test]
    fn fit_fails_with_imaginary_result_for_y_at_or_above_one() {
        assert!(matches!(
            Gaussian::new(ControlPoint::new(1.0, 1.0)),
            Err(CurveError::ImaginaryResult { .. })
        ));
        assert!(matches!(
            Gaussian::new(ControlPoint::new(0.5, 1.4)),
            Err(CurveError::ImaginaryResult { .. })
        ));
    }

    #[test]
    fn fit_rejects_non_positive_y_before_fitting() {
        assert!(matches!(
            Gaussian::new(ControlPoint::new(1.0, 0.0)),
            Err(CurveError::InvalidInput(_))
        ));
        assert!(matches!(
            Gaussian::new(ControlPoint::new(1.0, -0.3)),
            Err(CurveError::InvalidInput(_))
        ));
    }

    #[test]
    fn from_sd_and_mean_round_trips_sigma() {
        for sigma in [0.25f32, 0.5, 1.0, 2.0] {
            let g = Gaussian::from_sd_and_mean(sigma, 0.0).unwrap();
            assert_relative_eq!(g.sigma(), sigma, epsilon = 1e-4);
        }
    }

    #[test]
    fn from_sd_and_mean_rejects_degenerate_sigma() {
        assert!(matches!(
            Gaussian::from_sd_and_mean(0.0, 0.0),
            Err(CurveError::InvalidInput(_))
        ));
    }

    #[test]
    fn scenario_gauss_sigma1_values() {
        let g = Gaussian::from_sd_and_mean(1.0, 0.0).unwrap();
        let expected = [1.0f32, 0.6065, 0.1353, 0.0111, 0.0003, 0.0000];
        for (i, &e) in expected.iter().enumerate() {
            assert_relative_eq!(g.calc(i as f32), e, epsilon = 1e-4);
        }
    }
}
