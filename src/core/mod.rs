//! Core-Domänentypen: Kontrollpunkte, Kurven, Kanal-Tripel, Fehler.
//!
//! Dieses Modul definiert die reinen Datenstrukturen des Editors:
//! - PointSet: geordnete Kontrollpunktmenge mit Drag-Reordering
//! - SplineAxis / Spline2D: natürlicher kubischer Spline
//! - Gaussian: parametrischer Falloff mit Invers-Fit
//! - CurveRgb: drei gleichartige Kurven, eine pro Farbkanal

pub mod curve;
pub mod curve_rgb;
pub mod error;
pub mod gaussian;
pub mod point;
pub mod spline;

pub use curve::{Channel, Curve, CurveKind, PointId};
pub use curve_rgb::{CurveRgb, RgbWeight};
pub use error::CurveError;
pub use gaussian::Gaussian;
pub use point::{ControlPoint, PointSet};
pub use spline::{Spline2D, SplineAxis};
