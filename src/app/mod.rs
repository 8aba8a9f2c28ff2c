//! Application-Layer: Intents und der Plot-Controller.

pub mod intent;
pub mod plot;

pub use intent::EditorIntent;
pub use plot::{DragState, Plot, PlotViewport};
