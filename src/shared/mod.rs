//! Geteilte Konstanten und Laufzeit-Optionen für alle Layer.
//!
//! Enthält die Domänen-Konstanten des Kurven-Kerns und die
//! serialisierbaren Editor-Optionen, damit `core`, `app` und `ui`
//! keine direkten Abhängigkeiten aufeinander brauchen.

pub mod options;

pub use options::EditorOptions;
pub use options::{
    DEFAULT_KERNEL_SIZE, GAUSSIAN_DRAW_STEP, GAUSSIAN_REFERENCE_X, GAUSSIAN_TO_SPLINE_OFFSETS,
    GRID_UNIT_X, GRID_UNIT_Y, KERNEL_SIZE_MAX, KERNEL_SIZE_MIN, PLOT_DOMAIN_X, PLOT_DOMAIN_Y,
    PLOT_MARGIN_PX, POINT_HALF_SIZE_PX, SPLINE_SAMPLE_STEP,
};
