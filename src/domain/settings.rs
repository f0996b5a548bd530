// src/domain/settings.rs
use crate::constants::{
    DEFAULT_ACCENT_COLOR, DEFAULT_AUTO_SAVE, DEFAULT_EDITOR_FONT_SIZE, DEFAULT_EDITOR_HEIGHT,
    DEFAULT_FONT_SIZE, DEFAULT_SHOW_LINE_NUMBERS, DEFAULT_SITE_TITLE, DEFAULT_THEME,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A complete, typed settings record, as supplied by the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    pub site_title: String,
    pub theme: String,
    pub accent_color: String,
    pub editor_height: i64,
    pub font_size: i64,
    pub editor_font_size: i64,
    pub show_line_numbers: bool,
    pub auto_save: bool,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            editor_height: DEFAULT_EDITOR_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            editor_font_size: DEFAULT_EDITOR_FONT_SIZE,
            show_line_numbers: DEFAULT_SHOW_LINE_NUMBERS,
            auto_save: DEFAULT_AUTO_SAVE,
        }
    }
}

/// Process-wide settings as persisted: the defaults overlaid with whatever the
/// settings file contained.
///
/// The overlay is one level deep and unchecked. Unknown keys are carried along and
/// a value of the wrong type is kept as-is; the typed accessors fall back to the
/// default for such a value, [`Settings::get`] returns it raw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    pub fn defaults() -> Self {
        SettingsRecord::default().into()
    }

    /// Start from the defaults and overlay every key of `saved`.
    pub fn merged(saved: Map<String, Value>) -> Self {
        let mut settings = Self::defaults();
        settings.values.extend(saved);
        settings
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn site_title(&self) -> &str {
        self.str_or("site_title", DEFAULT_SITE_TITLE)
    }

    pub fn theme(&self) -> &str {
        self.str_or("theme", DEFAULT_THEME)
    }

    pub fn accent_color(&self) -> &str {
        self.str_or("accent_color", DEFAULT_ACCENT_COLOR)
    }

    pub fn editor_height(&self) -> i64 {
        self.int_or("editor_height", DEFAULT_EDITOR_HEIGHT)
    }

    pub fn font_size(&self) -> i64 {
        self.int_or("font_size", DEFAULT_FONT_SIZE)
    }

    pub fn editor_font_size(&self) -> i64 {
        self.int_or("editor_font_size", DEFAULT_EDITOR_FONT_SIZE)
    }

    pub fn show_line_numbers(&self) -> bool {
        self.bool_or("show_line_numbers", DEFAULT_SHOW_LINE_NUMBERS)
    }

    pub fn auto_save(&self) -> bool {
        self.bool_or("auto_save", DEFAULT_AUTO_SAVE)
    }

    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
    }

    fn int_or(&self, key: &str, default: i64) -> i64 {
        self.values
            .get(key)
            .and_then(Value::as_i64)
            .unwrap_or(default)
    }

    fn bool_or(&self, key: &str, default: bool) -> bool {
        self.values
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults()
    }
}

impl From<SettingsRecord> for Settings {
    fn from(record: SettingsRecord) -> Self {
        let mut values = Map::new();
        values.insert("site_title".into(), Value::from(record.site_title));
        values.insert("theme".into(), Value::from(record.theme));
        values.insert("accent_color".into(), Value::from(record.accent_color));
        values.insert("editor_height".into(), Value::from(record.editor_height));
        values.insert("font_size".into(), Value::from(record.font_size));
        values.insert(
            "editor_font_size".into(),
            Value::from(record.editor_font_size),
        );
        values.insert(
            "show_line_numbers".into(),
            Value::from(record.show_line_numbers),
        );
        values.insert("auto_save".into(), Value::from(record.auto_save));
        Self { values }
    }
}
