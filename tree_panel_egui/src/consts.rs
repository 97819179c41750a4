/// Main window
pub mod window {
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 800.0;
    pub const TITLE: &str = "TreePanel (PANEL)";
}

/// Fixed panel text
pub mod text {
    pub const HEADING: &str = "Tree Strands Options Panel.";
    pub const ROOT_SECTION: &str = "Options";
    pub const SAVE_BUTTON: &str = "Write To File";
    pub const USAGE: &str = "Enter options json file as command line argument";
}

/// Form spacing
pub mod layout {
    /// Gap left under the separator that closes an object's section
    pub const SECTION_GAP: f32 = 8.0;
}

/// Log output
pub mod logging {
    /// Dependencies held at warn so the panel's own records stay readable
    pub const QUIET_MODULES: &[&str] = &[
        "naga",
        "wgpu",
        "wgpu_core",
        "wgpu_hal",
        "eframe",
        "egui_wgpu",
        "winit",
    ];
}
