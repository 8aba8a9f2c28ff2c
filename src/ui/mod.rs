//! UI-Layer mit egui: Toolbar, Plot-Ansicht und Gewichts-Panel.
//!
//! Alle Render-Funktionen sind zustandslos: sie lesen den Plot-Controller
//! und geben erzeugte Intents zurück, Mutation passiert ausschließlich im
//! Controller.

pub mod plot_view;
pub mod toolbar;
pub mod weights_panel;

pub use plot_view::render_plot_view;
pub use toolbar::render_toolbar;
pub use weights_panel::render_weights_panel;
