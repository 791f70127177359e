//! Icon selection from web manifest icon lists.

use crate::bundler::IconEntry;

/// Purpose assumed when an icon does not declare one.
pub const DEFAULT_PURPOSE: &str = "any";

/// Picks the icon best suited for `purpose`.
///
/// Candidates are icons with a non-empty `src` whose space separated purpose
/// list (absent means `any`) contains `purpose`. The largest declared size
/// wins; on equal sizes the earliest icon is kept.
pub fn find_suitable_icon<'a>(icons: &'a [IconEntry], purpose: &str) -> Option<&'a IconEntry> {
    let mut best: Option<(&IconEntry, u32)> = None;

    for icon in icons {
        if icon.src.trim().is_empty() || !has_purpose(icon, purpose) {
            continue;
        }

        let size = declared_size(icon);
        match best {
            Some((_, best_size)) if best_size >= size => {}
            _ => best = Some((icon, size)),
        }
    }

    best.map(|(icon, _)| icon)
}

fn has_purpose(icon: &IconEntry, purpose: &str) -> bool {
    icon.purpose
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or(DEFAULT_PURPOSE)
        .split_whitespace()
        .any(|p| p == purpose)
}

/// Largest edge declared in `sizes` (`"48x48 192x192"` is 192).
fn declared_size(icon: &IconEntry) -> u32 {
    icon.sizes
        .as_deref()
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|token| {
            let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
            digits.parse::<u32>().ok()
        })
        .max()
        .unwrap_or(0)
}
