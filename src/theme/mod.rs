pub mod loader;

use ratatui::style::Color;
use serde::Deserialize;

/// A named color suitable for YAML config deserialization.
/// Wraps `ratatui::style::Color` with support for named colors, hex, and "default".
#[derive(Debug, Clone, Copy)]
pub struct ThemeColor(pub Color);

impl<'de> Deserialize<'de> for ThemeColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_color(&s)
            .map(ThemeColor)
            .map_err(serde::de::Error::custom)
    }
}

/// Parse a color string into a ratatui `Color`.
///
/// Supports:
/// - Named colors: `red`, `dark_gray`, `light_cyan`, etc.
/// - Hex: `#rrggbb` or `#rgb`
/// - `"default"` → `Color::Reset`
pub fn parse_color(s: &str) -> Result<Color, String> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("default") {
        return Ok(Color::Reset);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    parse_named_color(s)
}

fn parse_hex_color(hex: &str) -> Result<Color, String> {
    let channel = |digits: &str| {
        u8::from_str_radix(digits, 16).map_err(|_| format!("invalid hex color: #{}", hex))
    };
    if !hex.is_ascii() {
        return Err(format!("invalid hex color: #{}", hex));
    }
    match hex.len() {
        6 => Ok(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => Ok(Color::Rgb(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        _ => Err(format!("invalid hex color: #{}", hex)),
    }
}

fn parse_named_color(s: &str) -> Result<Color, String> {
    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "light_red" | "lightred" => Ok(Color::LightRed),
        "light_green" | "lightgreen" => Ok(Color::LightGreen),
        "light_yellow" | "lightyellow" => Ok(Color::LightYellow),
        "light_blue" | "lightblue" => Ok(Color::LightBlue),
        "light_magenta" | "lightmagenta" => Ok(Color::LightMagenta),
        "light_cyan" | "lightcyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        "reset" => Ok(Color::Reset),
        _ => Err(format!("unknown color: '{}'. Valid names: black, red, green, yellow, blue, magenta, cyan, gray, dark_gray, light_red, light_green, light_yellow, light_blue, light_magenta, light_cyan, white, reset, default, or hex (#rrggbb / #rgb)", s)),
    }
}

/// The base color palette the UI colors are derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
    /// Title banner and focused input
    pub accent: Color,
    /// Tab borders
    pub border: Color,
    /// Inactive tabs and placeholders
    pub muted: Color,
    /// Help separators
    pub subtle: Color,
    /// Help key names
    pub positive: Color,
    /// Help footer background
    pub bar: Color,
    pub bar_text: Color,
    pub selection: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            foreground: Color::White,
            background: Color::Black,
            accent: Color::Rgb(0xFF, 0x7C, 0xCB),
            border: Color::Rgb(0x7D, 0x56, 0x74),
            muted: Color::Rgb(0x77, 0x77, 0x77),
            subtle: Color::Rgb(0x88, 0x88, 0x88),
            positive: Color::Rgb(0x00, 0xFF, 0x00),
            bar: Color::Rgb(0x44, 0x44, 0x44),
            bar_text: Color::White,
            selection: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            foreground: Color::Black,
            background: Color::White,
            accent: Color::Rgb(0xC7, 0x15, 0x85),
            border: Color::Rgb(0x7D, 0x56, 0x74),
            muted: Color::Rgb(0x6E, 0x6E, 0x6E),
            subtle: Color::Rgb(0x96, 0x96, 0x96),
            positive: Color::Rgb(0x00, 0x80, 0x00),
            bar: Color::Rgb(0xDC, 0xDC, 0xDC),
            bar_text: Color::Black,
            selection: Color::Rgb(200, 200, 200),
        }
    }

    /// Derive semantic UI colors from this palette.
    pub fn derive_ui_colors(&self) -> UiColors {
        UiColors {
            fg: self.foreground,
            muted: self.muted,
            title: self.accent,
            tab_text: self.muted,
            tab_active: self.foreground,
            tab_border: self.border,
            input_focused: self.accent,
            placeholder: self.muted,
            header: self.accent,
            selection_bg: self.selection,
            selection_fg: self.foreground,
            help_bg: self.bar,
            help_fg: self.bar_text,
            help_key: self.positive,
            help_separator: self.subtle,
        }
    }
}

/// Semantic UI colors derived from a palette (individually overridable).
#[derive(Debug, Clone, PartialEq)]
pub struct UiColors {
    pub fg: Color,
    pub muted: Color,
    pub title: Color,
    pub tab_text: Color,
    pub tab_active: Color,
    pub tab_border: Color,
    pub input_focused: Color,
    pub placeholder: Color,
    pub header: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub help_bg: Color,
    pub help_fg: Color,
    pub help_key: Color,
    pub help_separator: Color,
}

/// A complete theme: palette + derived/overridden UI colors.
///
/// Built once at startup and handed to the renderer; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub ui: UiColors,
}

impl Theme {
    pub fn dark() -> Self {
        let palette = Palette::dark();
        let ui = palette.derive_ui_colors();
        Self { palette, ui }
    }

    pub fn light() -> Self {
        let palette = Palette::light();
        let ui = palette.derive_ui_colors();
        Self { palette, ui }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Raw theme config from YAML: either a named string or a custom struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawThemeConfig {
    Named(String),
    Custom {
        base: Option<String>,
        #[serde(default)]
        palette: Option<RawPalette>,
        #[serde(default)]
        ui: Option<RawUiColors>,
    },
}

/// Raw palette with all optional fields for partial overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawPalette {
    pub foreground: Option<ThemeColor>,
    pub background: Option<ThemeColor>,
    pub accent: Option<ThemeColor>,
    pub border: Option<ThemeColor>,
    pub muted: Option<ThemeColor>,
    pub subtle: Option<ThemeColor>,
    pub positive: Option<ThemeColor>,
    pub bar: Option<ThemeColor>,
    pub bar_text: Option<ThemeColor>,
    pub selection: Option<ThemeColor>,
}

/// Raw UI colors with all optional fields for partial overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawUiColors {
    pub fg: Option<ThemeColor>,
    pub muted: Option<ThemeColor>,
    pub title: Option<ThemeColor>,
    pub tab_text: Option<ThemeColor>,
    pub tab_active: Option<ThemeColor>,
    pub tab_border: Option<ThemeColor>,
    pub input_focused: Option<ThemeColor>,
    pub placeholder: Option<ThemeColor>,
    pub header: Option<ThemeColor>,
    pub selection_bg: Option<ThemeColor>,
    pub selection_fg: Option<ThemeColor>,
    pub help_bg: Option<ThemeColor>,
    pub help_fg: Option<ThemeColor>,
    pub help_key: Option<ThemeColor>,
    pub help_separator: Option<ThemeColor>,
}
