//! Small browser helpers shared across pages.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

/// Native `window.confirm` dialog. Returns `false` outside a browser.
#[must_use]
pub fn confirm(message: &str) -> bool {
    web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
}

/// First letter of a display name, uppercased, for the avatar badge.
#[must_use]
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

/// Clip a description for card previews, appending an ellipsis when cut.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{clipped}...")
}
