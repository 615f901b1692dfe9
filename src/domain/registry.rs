//! The fixed catalog of managed scaling variables.
//!
//! Every parse, apply, and reset operation is scoped to this registry —
//! variable names outside it are never read from override text and never
//! offered for editing. Order is the display and apply order.

/// A single environment variable managed by flatsize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagedVariable {
    /// Environment variable name, e.g. `GDK_SCALE`.
    pub name: &'static str,
    /// Human-readable hint shown as an input placeholder.
    pub hint: &'static str,
}

/// The nine DPI/scaling variables in scope, in display order.
pub const SCALING_VARIABLES: [ManagedVariable; 9] = [
    ManagedVariable {
        name: "GDK_SCALE",
        hint: "Integer scale factor (e.g., 2)",
    },
    ManagedVariable {
        name: "GDK_DPI_SCALE",
        hint: "Fractional scale factor (e.g., 0.5)",
    },
    ManagedVariable {
        name: "QT_SCALE_FACTOR",
        hint: "Qt scaling factor (e.g., 1.5)",
    },
    ManagedVariable {
        name: "QT_FONT_DPI",
        hint: "Qt font DPI (e.g., 144)",
    },
    ManagedVariable {
        name: "QT_AUTO_SCREEN_SCALE_FACTOR",
        hint: "Auto screen scale (0 or 1)",
    },
    ManagedVariable {
        name: "QT_ENABLE_HIGHDPI_SCALING",
        hint: "Enable HiDPI (0 or 1)",
    },
    ManagedVariable {
        name: "QT_SCREEN_SCALE_FACTORS",
        hint: "Per-screen factors (e.g., 1;1.5;2)",
    },
    ManagedVariable {
        name: "ELECTRON_SCALE_FACTOR",
        hint: "Electron apps scaling (e.g., 1.5)",
    },
    ManagedVariable {
        name: "GNOME_DESKTOP_SCALE_FACTOR",
        hint: "GNOME scaling (e.g., 2)",
    },
];

/// Look up a managed variable by exact name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ManagedVariable> {
    SCALING_VARIABLES.iter().find(|v| v.name == name)
}

/// Comma-separated list of valid variable names, for error messages.
#[must_use]
pub fn valid_names() -> String {
    SCALING_VARIABLES
        .iter()
        .map(|v| v.name)
        .collect::<Vec<_>>()
        .join(", ")
}
