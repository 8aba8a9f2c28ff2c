//! App-Intent-Events.
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.

use crate::core::CurveKind;
use glam::Vec2;

/// Eingabe-Events des Editors, gesammelt von der UI und pro Frame
/// vom Controller verarbeitet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorIntent {
    /// Primärtaste im Plot gedrückt (Screen-Pixel)
    PointerPressed { pos: Vec2 },
    /// Zeiger bewegt (Screen-Pixel)
    PointerMoved { pos: Vec2 },
    /// Primärtaste losgelassen
    PointerReleased,
    /// Zeiger hat den Plot verlassen
    PointerLeft,
    /// Kurven-Modus gewechselt (zeichnet/adressiert nur das andere Tripel,
    /// mutiert keine Punktdaten)
    ModeSelected { kind: CurveKind },
    /// Gauss-Tripel in Spline-Tripel umwandeln (einmalig, keine Rückrichtung)
    ConvertToSplineRequested,
    /// Kernel-Größe geändert
    KernelSizeChanged { size: usize },
}
