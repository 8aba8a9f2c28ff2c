//! Typisierte Fehler des Kurven-Kerns.
//!
//! Alle Varianten sind lokale, synchrone und vom Aufrufer behandelbare
//! Fehler: der Interaktions-Loop darf an keiner davon abstürzen.

use thiserror::Error;

/// Fehler, die bei Kurven-Operationen auftreten können.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Degenerierte oder inkonsistente Eingabedaten (Array-Längen, leere Punktmengen, Index).
    #[error("ungueltige Eingabe: {0}")]
    InvalidInput(String),

    /// Der Gauss-Fit hat keine reelle Lösung (sigma² ≤ 0).
    #[error("Gauss-Fit ohne reelle Loesung fuer Kontrollpunkt ({x}, {y})")]
    ImaginaryResult { x: f32, y: f32 },

    /// Operation wurde an die leere Punkt-Id (`PointId::NONE`) adressiert.
    #[error("Operation ohne gueltige Punkt-Selektion")]
    NoSelection,

    /// Kanal-Tripel aus gemischten Kurven-Varianten, oder Konversion auf der falschen Variante.
    #[error("Kurven-Varianten stimmen nicht ueberein")]
    VariantMismatch,

    /// Die Spline-Abtastung lieferte fallende x-Werte — die Kurve ist keine gültige Falloff-Funktion.
    #[error("nicht-monotone Spline-Abtastung bei Stuetzstelle {index}")]
    NonMonotonicSample { index: usize },
}
