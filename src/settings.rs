//! Variant settings
//!
//! The two shipped variants differ only in quote wording, volumes and the
//! autoplay fallback text, so they are presets over one settings struct.
//! Settings are read once at startup and never written back.

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::{HINT_DURATION_MS, MESSAGE_DURATION_MS};
use crate::content::{ENGLISH_AUDIO_HINT, ENGLISH_QUOTES, SPANISH_QUOTES};

/// Shipped variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    English,
    Spanish,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::English => "English",
            Variant::Spanish => "Spanish",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Some(Variant::English),
            "spanish" | "es" => Some(Variant::Spanish),
            _ => None,
        }
    }

    /// Built-in quote set for this variant
    pub fn quotes(&self) -> &'static [&'static str] {
        match self {
            Variant::English => ENGLISH_QUOTES,
            Variant::Spanish => SPANISH_QUOTES,
        }
    }
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub variant: Variant,

    // === Audio ===
    /// Ambient loop volume (0.0 - 1.0)
    pub ambient_volume: f32,
    /// Pop effect volume (0.0 - 1.0)
    pub pop_volume: f32,
    /// Text shown when autoplay is blocked; `None` fails silently
    pub autoplay_hint: Option<String>,
    /// How long the autoplay hint stays visible (ms)
    pub hint_duration_ms: f64,

    // === Banner ===
    /// How long a quote stays visible (ms)
    pub message_duration_ms: f64,
    /// Also clear the banner text when it hides
    pub clear_text_on_hide: bool,
    /// Replaces the variant's built-in quotes when non-empty
    pub quotes: Option<Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(Variant::default())
    }
}

/// Partial settings as authored in the page; unset fields keep preset values
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsOverrides {
    variant: Option<Variant>,
    ambient_volume: Option<f32>,
    pop_volume: Option<f32>,
    #[serde(deserialize_with = "explicit_null")]
    autoplay_hint: Option<Option<String>>,
    hint_duration_ms: Option<f64>,
    message_duration_ms: Option<f64>,
    clear_text_on_hide: Option<bool>,
    quotes: Option<Vec<String>>,
}

/// Distinguishes `"autoplay_hint": null` (disable) from an absent field
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Settings {
    /// Create settings from a variant preset
    pub fn from_preset(variant: Variant) -> Self {
        match variant {
            Variant::English => Self {
                variant,
                ambient_volume: 0.1,
                pop_volume: 0.1,
                autoplay_hint: Some(ENGLISH_AUDIO_HINT.to_string()),
                hint_duration_ms: HINT_DURATION_MS,
                message_duration_ms: MESSAGE_DURATION_MS,
                clear_text_on_hide: false,
                quotes: None,
            },
            Variant::Spanish => Self {
                variant,
                ambient_volume: 0.1,
                pop_volume: 0.05,
                autoplay_hint: None,
                hint_duration_ms: HINT_DURATION_MS,
                message_duration_ms: MESSAGE_DURATION_MS,
                clear_text_on_hide: true,
                quotes: None,
            },
        }
    }

    /// Build settings from optional page JSON and an optional variant override.
    ///
    /// The override (from the query string) wins over the JSON `variant`;
    /// remaining JSON fields are applied on top of the chosen preset.
    /// Malformed JSON is logged and ignored.
    pub fn resolve(json: Option<&str>, variant_override: Option<Variant>) -> Self {
        let overrides = match json {
            Some(text) if !text.trim().is_empty() => {
                match serde_json::from_str::<SettingsOverrides>(text) {
                    Ok(o) => o,
                    Err(e) => {
                        log::warn!("Ignoring malformed settings: {}", e);
                        SettingsOverrides::default()
                    }
                }
            }
            _ => SettingsOverrides::default(),
        };

        let variant = variant_override
            .or(overrides.variant)
            .unwrap_or_default();
        let mut settings = Self::from_preset(variant);

        if let Some(v) = overrides.ambient_volume {
            settings.ambient_volume = v;
        }
        if let Some(v) = overrides.pop_volume {
            settings.pop_volume = v;
        }
        if let Some(hint) = overrides.autoplay_hint {
            settings.autoplay_hint = hint;
        }
        if let Some(ms) = overrides.hint_duration_ms {
            settings.hint_duration_ms = ms;
        }
        if let Some(ms) = overrides.message_duration_ms {
            settings.message_duration_ms = ms;
        }
        if let Some(clear) = overrides.clear_text_on_hide {
            settings.clear_text_on_hide = clear;
        }
        if overrides.quotes.is_some() {
            settings.quotes = overrides.quotes;
        }

        settings.sanitized()
    }

    /// Clamp volumes to [0, 1] and durations to non-negative
    pub fn sanitized(mut self) -> Self {
        self.ambient_volume = clamp_volume(self.ambient_volume);
        self.pop_volume = clamp_volume(self.pop_volume);
        self.hint_duration_ms = self.hint_duration_ms.max(0.0);
        self.message_duration_ms = self.message_duration_ms.max(0.0);
        self
    }

    /// Quotes for the deck: custom list when present and non-empty, else the preset
    pub fn quote_list(&self) -> Vec<String> {
        match &self.quotes {
            Some(custom) if !custom.is_empty() => custom.clone(),
            _ => self
                .variant
                .quotes()
                .iter()
                .map(|q| q.to_string())
                .collect(),
        }
    }

    /// DOM id of the optional JSON settings block (used only in wasm32)
    #[allow(dead_code)]
    const SETTINGS_ELEMENT_ID: &'static str = "settings";
    /// Query parameter selecting the variant (used only in wasm32)
    #[allow(dead_code)]
    const VARIANT_QUERY_KEY: &'static str = "variant";

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = web_sys::window();
        let json = window
            .as_ref()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::SETTINGS_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let variant_override = window
            .as_ref()
            .and_then(|w| w.location().search().ok())
            .and_then(|search| query_value(&search, Self::VARIANT_QUERY_KEY))
            .and_then(|v| Variant::from_str(&v));

        let settings = Self::resolve(json.as_deref(), variant_override);
        log::info!("Loaded settings for variant {}", settings.variant.as_str());
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn clamp_volume(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

/// Value of `key` in a `?a=b&c=d` query string
pub fn query_value(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_only_in_profile_and_text() {
        let en = Settings::from_preset(Variant::English);
        let es = Settings::from_preset(Variant::Spanish);
        assert_eq!(en.message_duration_ms, es.message_duration_ms);
        assert!(en.autoplay_hint.is_some());
        assert!(es.autoplay_hint.is_none());
        assert_eq!(en.quote_list().len(), es.quote_list().len());
        assert_ne!(en.quote_list()[0], es.quote_list()[0]);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(Variant::from_str("ES"), Some(Variant::Spanish));
        assert_eq!(Variant::from_str("english"), Some(Variant::English));
        assert_eq!(Variant::from_str("klingon"), None);
    }

    #[test]
    fn test_resolve_applies_overrides_on_preset() {
        let json = r#"{"variant":"spanish","pop_volume":0.3,"quotes":["A","B"]}"#;
        let s = Settings::resolve(Some(json), None);
        assert_eq!(s.variant, Variant::Spanish);
        assert!((s.pop_volume - 0.3).abs() < 1e-6);
        assert!((s.ambient_volume - 0.1).abs() < 1e-6);
        assert!(s.clear_text_on_hide);
        assert_eq!(s.quote_list(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_query_override_wins() {
        let s = Settings::resolve(Some(r#"{"variant":"spanish"}"#), Some(Variant::English));
        assert_eq!(s.variant, Variant::English);
    }

    #[test]
    fn test_malformed_json_falls_back_to_default() {
        let s = Settings::resolve(Some("{not json"), None);
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_volumes_clamped() {
        let s = Settings::resolve(Some(r#"{"ambient_volume":4.0,"pop_volume":-1.0}"#), None);
        assert_eq!(s.ambient_volume, 1.0);
        assert_eq!(s.pop_volume, 0.0);
    }

    #[test]
    fn test_hint_can_be_disabled() {
        let s = Settings::resolve(Some(r#"{"autoplay_hint":null}"#), None);
        assert!(s.autoplay_hint.is_none());
    }

    #[test]
    fn test_empty_custom_quotes_use_preset() {
        let s = Settings::resolve(Some(r#"{"quotes":[]}"#), None);
        assert_eq!(s.quote_list().len(), ENGLISH_QUOTES.len());
    }

    #[test]
    fn test_query_value() {
        assert_eq!(query_value("?variant=es&x=1", "variant"), Some("es".into()));
        assert_eq!(query_value("?x=1", "variant"), None);
        assert_eq!(query_value("", "variant"), None);
    }
}
