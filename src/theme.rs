use leptos::prelude::*;

/// Local storage key holding the persisted theme preference.
pub const STORAGE_KEY: &str = "theme";

/// Two-valued color scheme preference. The site is dark by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Dark,
    Light,
}

impl ColorMode {
    /// Maps a persisted storage value to a mode. Anything other than
    /// the literal `"light"` (including an absent slot) is dark.
    pub fn from_saved(saved: Option<&str>) -> Self {
        match saved {
            Some("light") => ColorMode::Light,
            _ => ColorMode::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Dark => ColorMode::Light,
            ColorMode::Light => ColorMode::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Dark => "dark",
            ColorMode::Light => "light",
        }
    }
}

/// Applied theme signal pair, provided from `App` and consumed by the
/// toggle button.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: ReadSignal<ColorMode>,
    pub set_mode: WriteSignal<ColorMode>,
}

/// Reads the persisted preference. Storage-less environments yield
/// `None`, which callers treat the same as an absent slot.
#[cfg(target_arch = "wasm32")]
pub fn load_saved() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_saved() -> Option<String> {
    None
}

/// Persists the preference. A missing or blocked storage area makes
/// this a no-op.
#[cfg(target_arch = "wasm32")]
pub fn persist(mode: ColorMode) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if let Some(storage) = storage {
        let _ = storage.set_item(STORAGE_KEY, mode.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn persist(_mode: ColorMode) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_defaults_to_dark() {
        assert_eq!(ColorMode::from_saved(None), ColorMode::Dark);
    }

    #[test]
    fn saved_values_round_trip() {
        assert_eq!(ColorMode::from_saved(Some("dark")), ColorMode::Dark);
        assert_eq!(ColorMode::from_saved(Some("light")), ColorMode::Light);

        for mode in [ColorMode::Dark, ColorMode::Light] {
            assert_eq!(ColorMode::from_saved(Some(mode.as_str())), mode);
        }
    }

    #[test]
    fn unknown_value_defaults_to_dark() {
        assert_eq!(ColorMode::from_saved(Some("sepia")), ColorMode::Dark);
    }

    #[test]
    fn toggle_parity() {
        let start = ColorMode::Dark;

        let mut mode = start;
        for _ in 0..4 {
            mode = mode.toggled();
        }
        assert_eq!(mode, start);

        mode = mode.toggled();
        assert_eq!(mode, start.toggled());
    }
}
