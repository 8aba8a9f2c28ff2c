//! Zentrale Konfiguration für den Falloff-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Plot / Viewport ─────────────────────────────────────────────────

/// Abstand des Plot-Ursprungs vom Rand des Viewports in Pixeln.
pub const PLOT_MARGIN_PX: f32 = 50.0;
/// Sichtbare x-Spanne des Plots in Kurven-Einheiten.
pub const PLOT_DOMAIN_X: f32 = 5.0;
/// Sichtbare y-Spanne des Plots in Kurven-Einheiten (Gewichte sind ≤ 1).
pub const PLOT_DOMAIN_Y: f32 = 1.0;
/// Gitterlinien-Abstand entlang x (Kurven-Einheiten).
pub const GRID_UNIT_X: f32 = 1.0;
/// Gitterlinien-Abstand entlang y (Kurven-Einheiten).
pub const GRID_UNIT_Y: f32 = 0.1;

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Halbe Kantenlänge der Punkt-Box auf dem Bildschirm (Hit-Test und Darstellung).
pub const POINT_HALF_SIZE_PX: f32 = 5.0;

// ── Kurven-Abtastung ────────────────────────────────────────────────

/// Parameter-Schrittweite der Spline-Abtastung (1/5 Knoten-Einheit).
pub const SPLINE_SAMPLE_STEP: f32 = 0.2;
/// x-Schrittweite der Gauss-Abtastung fürs Zeichnen.
pub const GAUSSIAN_DRAW_STEP: f32 = 0.02;

// ── Gauss-Fit / Konversion ──────────────────────────────────────────

/// Feste Referenz-x für den synthetischen Kontrollpunkt in `from_sd_and_mean`.
pub const GAUSSIAN_REFERENCE_X: f32 = 0.3;
/// Kanonische Abtast-Offsets (× sigma) der Gauss→Spline-Konversion.
pub const GAUSSIAN_TO_SPLINE_OFFSETS: [f32; 5] = [0.0, 0.6, 1.66, 3.0, 5.0];

// ── Kernel ──────────────────────────────────────────────────────────

/// Standard-Kernel-Größe (Gewichte pro Kanal).
pub const DEFAULT_KERNEL_SIZE: usize = 25;
/// Kleinste anbietbare Kernel-Größe.
pub const KERNEL_SIZE_MIN: usize = 4;
/// Größte anbietbare Kernel-Größe.
pub const KERNEL_SIZE_MAX: usize = 64;

// ── Standard-Kurven ─────────────────────────────────────────────────

/// Standard-Sigma des Rot-Kanals (Haut streut Rot am weitesten).
pub const DEFAULT_SIGMA_RED: f32 = 1.0;
/// Standard-Sigma des Grün-Kanals.
pub const DEFAULT_SIGMA_GREEN: f32 = 0.6;
/// Standard-Sigma des Blau-Kanals.
pub const DEFAULT_SIGMA_BLUE: f32 = 0.4;

// ── Farben ──────────────────────────────────────────────────────────

/// Kurven-/Selektionsfarbe des Rot-Kanals (RGBA).
pub const CURVE_COLOR_RED: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
/// Kurven-/Selektionsfarbe des Grün-Kanals (RGBA).
pub const CURVE_COLOR_GREEN: [f32; 4] = [0.1, 0.75, 0.25, 1.0];
/// Kurven-/Selektionsfarbe des Blau-Kanals (RGBA).
pub const CURVE_COLOR_BLUE: [f32; 4] = [0.2, 0.4, 0.95, 1.0];
/// Farbe unselektierter Kontrollpunkte (RGBA: Schwarz).
pub const POINT_COLOR_DEFAULT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Gitterfarbe (RGBA).
pub const GRID_COLOR: [f32; 4] = [0.45, 0.45, 0.45, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `sss_falloff_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Farbe unselektierter Punkte (RGBA)
    pub point_color_default: [f32; 4],

    // ── Kanäle ──────────────────────────────────────────────────
    /// Kurvenfarbe Rot-Kanal (RGBA)
    pub curve_color_red: [f32; 4],
    /// Kurvenfarbe Grün-Kanal (RGBA)
    pub curve_color_green: [f32; 4],
    /// Kurvenfarbe Blau-Kanal (RGBA)
    pub curve_color_blue: [f32; 4],

    // ── Standard-Kurven ─────────────────────────────────────────
    /// Start-Sigma des Rot-Kanals
    pub default_sigma_red: f32,
    /// Start-Sigma des Grün-Kanals
    pub default_sigma_green: f32,
    /// Start-Sigma des Blau-Kanals
    pub default_sigma_blue: f32,

    // ── Kernel ──────────────────────────────────────────────────
    /// Kernel-Größe beim Start
    pub default_kernel_size: usize,

    // ── Plot ────────────────────────────────────────────────────
    /// Rand zwischen Viewport und Plot-Ursprung in Pixeln
    pub plot_margin_px: f32,
    /// Sichtbare x-Spanne in Kurven-Einheiten
    #[serde(default = "default_plot_domain_x")]
    pub plot_domain_x: f32,
    /// Gitterfarbe (RGBA)
    pub grid_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_color_default: POINT_COLOR_DEFAULT,

            curve_color_red: CURVE_COLOR_RED,
            curve_color_green: CURVE_COLOR_GREEN,
            curve_color_blue: CURVE_COLOR_BLUE,

            default_sigma_red: DEFAULT_SIGMA_RED,
            default_sigma_green: DEFAULT_SIGMA_GREEN,
            default_sigma_blue: DEFAULT_SIGMA_BLUE,

            default_kernel_size: DEFAULT_KERNEL_SIZE,

            plot_margin_px: PLOT_MARGIN_PX,
            plot_domain_x: PLOT_DOMAIN_X,
            grid_color: GRID_COLOR,
        }
    }
}

/// Serde-Default für `plot_domain_x` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_plot_domain_x() -> f32 {
    PLOT_DOMAIN_X
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("sss_falloff_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("sss_falloff_editor.toml")
    }
}
