use strsim::jaro_winkler;

use crate::config::error::ConfigError;
use crate::theme::{Palette, RawPalette, RawThemeConfig, RawUiColors, Theme, UiColors};

const BUILTIN_THEMES: &[&str] = &["dark", "light"];
const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Resolve a raw theme config into a fully constructed Theme.
///
/// - `None` → dark theme (default)
/// - `Named("dark")` / `Named("light")` → built-in theme
/// - `Named(unknown)` → error with suggestions
/// - `Custom { base, palette, ui }` → base theme with overrides applied
pub fn resolve_theme(raw: Option<&RawThemeConfig>) -> Result<Theme, ConfigError> {
    let raw = match raw {
        None => return Ok(Theme::dark()),
        Some(r) => r,
    };

    match raw {
        RawThemeConfig::Named(name) => resolve_named(name),
        RawThemeConfig::Custom { base, palette, ui } => {
            let mut theme = match base {
                Some(name) => resolve_named(name)?,
                None => Theme::dark(),
            };

            // Palette changes flow into every derived UI color
            if let Some(raw_palette) = palette {
                apply_palette_overrides(&mut theme.palette, raw_palette);
                theme.ui = theme.palette.derive_ui_colors();
            }

            if let Some(raw_ui) = ui {
                apply_ui_overrides(&mut theme.ui, raw_ui);
            }

            Ok(theme)
        }
    }
}

/// Closest built-in theme name, if any is similar enough.
pub fn suggest_theme(name: &str) -> Option<&'static str> {
    BUILTIN_THEMES
        .iter()
        .filter(|&&known| jaro_winkler(name, known) >= SIMILARITY_THRESHOLD)
        .max_by(|a, b| {
            jaro_winkler(name, a)
                .partial_cmp(&jaro_winkler(name, b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .copied()
}

fn resolve_named(name: &str) -> Result<Theme, ConfigError> {
    match name {
        "dark" => Ok(Theme::dark()),
        "light" => Ok(Theme::light()),
        _ => {
            let mut message = format!(
                "unknown theme '{}'. Available themes: {}",
                name,
                BUILTIN_THEMES.join(", ")
            );
            if let Some(s) = suggest_theme(name) {
                message.push_str(&format!(". Did you mean '{}'?", s));
            }
            Err(ConfigError::Validation {
                path: Default::default(),
                message,
            })
        }
    }
}

macro_rules! override_fields {
    ($target:expr, $raw:expr, [$($field:ident),* $(,)?]) => {
        $(
            if let Some(c) = $raw.$field {
                $target.$field = c.0;
            }
        )*
    };
}

fn apply_palette_overrides(palette: &mut Palette, raw: &RawPalette) {
    override_fields!(
        palette,
        raw,
        [
            foreground, background, accent, border, muted, subtle, positive, bar, bar_text,
            selection,
        ]
    );
}

fn apply_ui_overrides(ui: &mut UiColors, raw: &RawUiColors) {
    override_fields!(
        ui,
        raw,
        [
            fg,
            muted,
            title,
            tab_text,
            tab_active,
            tab_border,
            input_focused,
            placeholder,
            header,
            selection_bg,
            selection_fg,
            help_bg,
            help_fg,
            help_key,
            help_separator,
        ]
    );
}
