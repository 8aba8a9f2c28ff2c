//! SSS Falloff Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{DragState, EditorIntent, Plot, PlotViewport};
pub use core::{
    Channel, ControlPoint, Curve, CurveError, CurveKind, CurveRgb, Gaussian, PointId, PointSet,
    RgbWeight, Spline2D, SplineAxis,
};
pub use shared::EditorOptions;
