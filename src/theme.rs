//! Theme Module
//! Light/dark mode, its color palette and persistence through eframe storage.

use egui::{Color32, Visuals};
use std::fmt;

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<ThemeMode> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT_PALETTE,
            ThemeMode::Dark => &DARK_PALETTE,
        }
    }

    pub fn egui_theme(self) -> egui::Theme {
        match self {
            ThemeMode::Light => egui::Theme::Light,
            ThemeMode::Dark => egui::Theme::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every color token the view uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub card: Color32,
    pub input_bg: Color32,
    pub input_border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub expenses: Color32,
    pub income: Color32,
    pub savings: Color32,
    pub button: Color32,
    pub button_hover: Color32,
    pub toggle_icon: Color32,
    pub danger: Color32,
}

pub static DARK_PALETTE: Palette = Palette {
    background: Color32::from_rgb(17, 24, 39),    // gray-900
    card: Color32::from_rgb(31, 41, 55),          // gray-800
    input_bg: Color32::from_rgb(55, 65, 81),      // gray-700
    input_border: Color32::from_rgb(75, 85, 99),  // gray-600
    text_primary: Color32::from_rgb(255, 255, 255),
    text_secondary: Color32::from_rgb(204, 204, 204),
    expenses: Color32::from_rgb(248, 113, 113),
    income: Color32::from_rgb(34, 197, 94),
    savings: Color32::from_rgb(96, 165, 250),
    button: Color32::from_rgb(59, 130, 246),
    button_hover: Color32::from_rgb(37, 99, 235),
    toggle_icon: Color32::from_rgb(250, 204, 21), // sun
    danger: Color32::from_rgb(248, 113, 113),
};

pub static LIGHT_PALETTE: Palette = Palette {
    background: Color32::from_rgb(255, 255, 255),
    card: Color32::from_rgb(243, 244, 246),       // gray-100
    input_bg: Color32::from_rgb(255, 255, 255),
    input_border: Color32::from_rgb(209, 213, 219), // gray-300
    text_primary: Color32::from_rgb(51, 51, 51),
    text_secondary: Color32::from_rgb(102, 102, 102),
    expenses: Color32::from_rgb(239, 68, 68),
    income: Color32::from_rgb(22, 163, 74),
    savings: Color32::from_rgb(59, 130, 246),
    button: Color32::from_rgb(37, 99, 235),
    button_hover: Color32::from_rgb(29, 78, 216),
    toggle_icon: Color32::from_rgb(31, 41, 55), // moon
    danger: Color32::from_rgb(220, 38, 38),
};

impl Palette {
    /// Build egui visuals for the whole context from this palette.
    pub fn visuals(&self, mode: ThemeMode) -> Visuals {
        let mut visuals = match mode {
            ThemeMode::Light => Visuals::light(),
            ThemeMode::Dark => Visuals::dark(),
        };
        visuals.override_text_color = Some(self.text_primary);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.card;
        visuals.extreme_bg_color = self.input_bg;
        visuals.widgets.noninteractive.bg_fill = self.card;
        visuals.widgets.inactive.bg_stroke.color = self.input_border;
        visuals.selection.bg_fill = self.button;
        visuals
    }
}

/// Active theme plus its pending-write flag.
#[derive(Debug, Clone)]
pub struct ThemeController {
    mode: ThemeMode,
    dirty: bool,
}

impl ThemeController {
    pub const STORAGE_KEY: &'static str = "theme";

    /// Read the persisted flag; anything missing or unrecognised becomes dark
    /// and is queued for writing.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let Some(storage) = storage else {
            tracing::warn!("no persistent storage available, using dark theme");
            return Self {
                mode: ThemeMode::Dark,
                dirty: true,
            };
        };

        match storage.get_string(Self::STORAGE_KEY) {
            Some(value) => match ThemeMode::parse(&value) {
                Some(mode) => {
                    tracing::info!(theme = %mode, "loaded theme");
                    Self { mode, dirty: false }
                }
                None => {
                    tracing::warn!(value = %value, "unrecognised stored theme, using dark");
                    Self {
                        mode: ThemeMode::Dark,
                        dirty: true,
                    }
                }
            },
            None => {
                tracing::info!("no stored theme, defaulting to dark");
                Self {
                    mode: ThemeMode::Dark,
                    dirty: true,
                }
            }
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> &'static Palette {
        self.mode.palette()
    }

    #[cfg(test)]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        self.dirty = true;
        tracing::info!(theme = %self.mode, "theme toggled");
    }

    /// Write the current mode if it changed since the last write.
    pub fn persist(&mut self, storage: &mut dyn eframe::Storage) {
        if !self.dirty {
            return;
        }
        storage.set_string(Self::STORAGE_KEY, self.mode.as_str().to_string());
        storage.flush();
        self.dirty = false;
    }

    /// Pin the context to this theme and install its visuals, so the OS
    /// theme cannot switch the view to stock visuals.
    pub fn apply(&self, ctx: &egui::Context) {
        let theme = self.mode.egui_theme();
        ctx.set_theme(theme);
        ctx.set_visuals_of(theme, self.palette().visuals(self.mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
        flushes: usize,
    }

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    fn stored(value: &str) -> MemoryStorage {
        let mut storage = MemoryStorage::default();
        storage
            .values
            .insert(ThemeController::STORAGE_KEY.to_string(), value.to_string());
        storage
    }

    #[test]
    fn absent_value_defaults_to_dark_and_is_written() {
        let mut storage = MemoryStorage::default();
        let mut theme = ThemeController::load(Some(&storage));
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert!(theme.is_dirty());

        theme.persist(&mut storage);
        assert_eq!(storage.values.get("theme").map(String::as_str), Some("dark"));
        assert_eq!(storage.flushes, 1);
        assert!(!theme.is_dirty());
    }

    #[test]
    fn stored_value_is_used() {
        let theme = ThemeController::load(Some(&stored("light")));
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert!(!theme.is_dirty());
    }

    #[test]
    fn garbage_value_falls_back_to_dark() {
        let theme = ThemeController::load(Some(&stored("purple")));
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert!(theme.is_dirty());
    }

    #[test]
    fn missing_storage_falls_back_to_dark() {
        let theme = ThemeController::load(None);
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_persists_new_value() {
        let mut storage = stored("dark");
        let mut theme = ThemeController::load(Some(&storage));
        theme.toggle();
        theme.persist(&mut storage);
        assert_eq!(storage.values["theme"], "light");
        assert_eq!(theme.palette(), &LIGHT_PALETTE);
    }

    #[test]
    fn double_toggle_round_trips() {
        let mut storage = stored("light");
        let mut theme = ThemeController::load(Some(&storage));
        let original_palette = theme.palette().clone();

        theme.toggle();
        theme.persist(&mut storage);
        theme.toggle();
        theme.persist(&mut storage);

        assert_eq!(storage.values["theme"], "light");
        assert_eq!(theme.palette(), &original_palette);
        assert_eq!(storage.flushes, 2);
    }

    #[test]
    fn apply_pins_context_theme_across_toggles() {
        let ctx = egui::Context::default();
        let mut storage = MemoryStorage::default();
        let mut theme = ThemeController::load(Some(&storage));
        theme.apply(&ctx);
        theme.persist(&mut storage);

        assert_eq!(ctx.theme(), egui::Theme::Dark);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.panel_fill, DARK_PALETTE.background);
        assert_eq!(
            ctx.options(|o| o.theme_preference),
            egui::ThemePreference::Dark
        );

        theme.toggle();
        theme.apply(&ctx);
        theme.persist(&mut storage);
        assert_eq!(ctx.theme(), egui::Theme::Light);
        assert!(!ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.panel_fill, LIGHT_PALETTE.background);
        assert_eq!(storage.values["theme"], "light");

        theme.toggle();
        theme.apply(&ctx);
        theme.persist(&mut storage);
        assert_eq!(ctx.theme(), egui::Theme::Dark);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.panel_fill, DARK_PALETTE.background);
        assert_eq!(storage.values["theme"], "dark");
    }

    #[test]
    fn clean_controller_does_not_write() {
        let mut storage = stored("dark");
        let mut theme = ThemeController::load(Some(&storage));
        theme.persist(&mut storage);
        assert_eq!(storage.flushes, 0);
    }

    #[test]
    fn series_colors_are_distinct() {
        for palette in [&DARK_PALETTE, &LIGHT_PALETTE] {
            assert_ne!(palette.expenses, palette.income);
            assert_ne!(palette.income, palette.savings);
            assert_ne!(palette.expenses, palette.savings);
        }
    }

    #[test]
    fn visuals_follow_mode() {
        assert!(DARK_PALETTE.visuals(ThemeMode::Dark).dark_mode);
        assert!(!LIGHT_PALETTE.visuals(ThemeMode::Light).dark_mode);
    }
}
