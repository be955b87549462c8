//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// The other locale (for the demo's toggle button)
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("GridView Demo", "表格组件演示"));
    map.insert("journal-heading", ("Journal Entries", "日志条目"));

    // Actions
    map.insert("action-toggle-loading", ("Toggle Loading", "切换加载状态"));
    map.insert("action-remember-view", ("Remember View", "记住视图"));

    // Table columns
    map.insert("col-written", ("Written", "记录时间"));
    map.insert("col-title", ("Title", "标题"));
    map.insert("col-mood", ("Mood", "心情"));
    map.insert("col-words", ("Words", "字数"));
    map.insert("col-tags", ("Tags", "标签"));

    // Table chrome
    map.insert("table-empty", ("No entries yet", "暂无条目"));
    map.insert("table-items", ("entries", "条"));
    map.insert("selected-count", ("selected", "已选择"));

    map
}

/// Translate a key for the given locale. Falls back to the key itself when
/// no translation exists.
pub fn t(locale: Locale, key: &str) -> SharedString {
    let translations = TRANSLATIONS.get_or_init(init_translations);
    match translations.get(key) {
        Some((en, zh)) => match locale {
            Locale::EnUS => SharedString::from(*en),
            Locale::ZhCN => SharedString::from(*zh),
        },
        None => SharedString::from(key.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_lookup() {
        assert_eq!(t(Locale::EnUS, "col-title").as_ref(), "Title");
        assert_eq!(t(Locale::ZhCN, "col-title").as_ref(), "标题");
    }

    #[test]
    fn test_missing_key_falls_back() {
        assert_eq!(t(Locale::EnUS, "no-such-key").as_ref(), "no-such-key");
    }
}
