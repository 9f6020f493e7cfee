#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    SystemDefault,
}

/// In-process configuration for the calculator window.
///
/// Nothing is read from disk; `main` builds this and hands it to the window builder.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub theme_mode: ThemeMode,

    /// Font size for the two date entries and the Calculate button
    pub input_font_size: i32,

    /// Font size for the bold result label
    pub result_font_size: i32,

    pub window_width: i32,
    pub window_height: i32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            input_font_size: 12,
            result_font_size: 14,
            window_width: 420,
            window_height: 190,
        }
    }
}

impl AppSettings {
    /// Resolve the theme mode to a concrete dark/light choice
    pub fn is_dark(&self, system_dark: impl FnOnce() -> bool) -> bool {
        match self.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::SystemDefault => system_dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
        assert_eq!(settings.input_font_size, 12);
        assert_eq!(settings.result_font_size, 14);
        assert!(settings.result_font_size > settings.input_font_size);
    }

    #[test]
    fn test_is_dark_explicit_modes_ignore_system() {
        let mut settings = AppSettings::default();
        settings.theme_mode = ThemeMode::Light;
        assert!(!settings.is_dark(|| true));
        settings.theme_mode = ThemeMode::Dark;
        assert!(settings.is_dark(|| false));
    }

    #[test]
    fn test_is_dark_system_default_follows_platform() {
        let settings = AppSettings::default();
        assert!(settings.is_dark(|| true));
        assert!(!settings.is_dark(|| false));
    }
}
