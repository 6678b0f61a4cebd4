//! Icon palette offered by the settings editor.

/// Glyphs selectable for a task, in selector order.
pub const ICON_PALETTE: [&str; 24] = [
    "🥣", "🅰️", "✏️", "🔍", "🎹", "🌺", "🧹", "⭐", "🏃", "🛀", "💤", "🎮", "📺", "🏫", "🐶", "🐱",
    "🍔", "🎨", "🚲", "🎵", "🎒", "🌞", "📝", "🆕",
];

/// Icon given to newly added tasks.
pub const DEFAULT_ICON: &str = "🆕";

/// Returns `true` if `icon` is one of the palette glyphs.
#[must_use]
pub fn is_palette_icon(icon: &str) -> bool {
    ICON_PALETTE.contains(&icon)
}

/// Selector choices for a task currently showing `current`.
///
/// A glyph outside the palette (written by older versions that allowed free
/// text) is appended so that opening and saving the editor never drops it.
#[must_use]
pub fn icon_choices(current: &str) -> Vec<&str> {
    let mut choices = ICON_PALETTE.to_vec();
    if !is_palette_icon(current) {
        choices.push(current);
    }
    choices
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ICON, ICON_PALETTE, icon_choices, is_palette_icon};

    #[test]
    fn test_default_icon_is_in_palette() {
        assert!(is_palette_icon(DEFAULT_ICON));
    }

    #[test]
    fn test_legacy_icon_is_appended_once() {
        let choices = icon_choices("🦖");
        assert_eq!(choices.len(), ICON_PALETTE.len() + 1);
        assert_eq!(choices.last(), Some(&"🦖"));

        let choices = icon_choices("⭐");
        assert_eq!(choices.len(), ICON_PALETTE.len());
    }
}
