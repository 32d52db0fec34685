use chrono::format::{Item, StrftimeItems};
use phf::phf_map;
use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;
use xdg::BaseDirectories;

use crate::formatting::BoxChars;

/// Calendar date pattern used when none (or an invalid one) is configured
pub const DEFAULT_DATE_FORMAT: &str = "%a %b %-d";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// URL of the JSON week document
    pub data_url: Option<String>,
    /// Local week document; wins over `data_url`
    pub data_file: Option<PathBuf>,
    pub request_timeout_secs: u64,
    /// strftime pattern for calendar dates
    pub date_format: String,
    pub display: DisplayConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub correct_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub incorrect_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            data_url: None,
            data_file: None,
            request_timeout_secs: 10,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            display: DisplayConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    /// HTTP timeout; never zero, which would fail every request
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Replace values that parse but cannot be used
    pub fn sanitized(mut self) -> Self {
        if !is_valid_date_format(&self.date_format) {
            warn!(
                "Ignoring invalid date_format '{}', using '{}'",
                self.date_format, DEFAULT_DATE_FORMAT
            );
            self.date_format = DEFAULT_DATE_FORMAT.to_string();
        }
        if self.request_timeout_secs == 0 {
            warn!("request_timeout_secs must be at least 1, using 1");
            self.request_timeout_secs = 1;
        }
        self
    }
}

/// Whether chrono can render every item of a strftime pattern
pub fn is_valid_date_format(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { use_unicode: true }
    }
}

impl DisplayConfig {
    pub fn box_chars(&self) -> BoxChars {
        BoxChars::from_use_unicode(self.use_unicode)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            correct_fg: Color::Green,
            incorrect_fg: Color::Red,
        }
    }
}

static NAMED_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "black" => Color::Black,
    "red" => Color::Red,
    "green" => Color::Green,
    "yellow" => Color::Yellow,
    "blue" => Color::Blue,
    "magenta" => Color::Magenta,
    "cyan" => Color::Cyan,
    "gray" => Color::Gray,
    "grey" => Color::Gray,
    "darkgray" => Color::DarkGray,
    "darkgrey" => Color::DarkGray,
    "lightred" => Color::LightRed,
    "lightgreen" => Color::LightGreen,
    "lightyellow" => Color::LightYellow,
    "lightblue" => Color::LightBlue,
    "white" => Color::White,
    "orange" => Color::Rgb(255, 165, 0),
};

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

fn parse_hex_channel(hex: &str) -> Option<u8> {
    match hex.len() {
        1 => u8::from_str_radix(&hex.repeat(2), 16).ok(),
        2 => u8::from_str_radix(hex, 16).ok(),
        _ => None,
    }
}

/// Parse a color: a name ("cyan"), hex ("#FF6600" / "#f60") or "r,g,b"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if let Some(color) = NAMED_COLORS.get(s.as_str()) {
        return Some(*color);
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        let width = match hex.len() {
            6 => 2,
            3 => 1,
            _ => return None,
        };
        let r = parse_hex_channel(&hex[0..width])?;
        let g = parse_hex_channel(&hex[width..2 * width])?;
        let b = parse_hex_channel(&hex[2 * width..3 * width])?;
        return Some(Color::Rgb(r, g, b));
    }

    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if let [r, g, b] = parts.as_slice() {
        return Some(Color::Rgb(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?));
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Load a config file, falling back to defaults when it is missing or invalid
pub fn read_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    match toml::from_str::<Config>(&content) {
        Ok(config) => config.sanitized(),
        Err(e) => {
            warn!("Ignoring invalid config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn read() -> Config {
    match get_config_path() {
        Some(path) if path.exists() => read_from(&path),
        _ => Config::default(),
    }
}
