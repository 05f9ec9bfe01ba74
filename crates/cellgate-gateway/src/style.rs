//! Image style lookup
//!
//! Read-only mapping from a style name to the natural-language phrase
//! appended to the image prompt. Built once at first use and never
//! mutated, so no synchronization beyond the lazy init is needed.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Known style names and their prompt phrases
static STYLE_PHRASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("Basquiat", "in the style of Basquiat"),
        ("Monet", "in the style of Monet"),
        ("Van Gogh", "in the style of Van Gogh"),
        ("Picasso", "in the style of Picasso"),
        ("Dali", "in the style of Dali"),
        ("Warhol", "in the style of Warhol"),
        ("Rothko", "in the style of Rothko"),
        ("Banksy", "in the style of Banksy"),
        ("Hokusai", "in the style of Hokusai"),
        ("Kandinsky", "in the style of Kandinsky"),
        ("Rembrandt", "in the style of Rembrandt"),
        ("watercolor", "as a watercolor painting"),
        ("oil painting", "as an oil painting"),
        ("pencil sketch", "as a pencil sketch"),
        ("pixel art", "as pixel art"),
        ("3d render", "as a 3d render"),
        ("photograph", "as a studio photograph"),
        ("cartoon", "as a cartoon"),
    ])
});

/// Resolve a style name to its prompt phrase
///
/// Unknown names pass through verbatim as the phrase (fail-open), which
/// makes the lookup total: a caller can supply any free-form style text
/// and it lands in the prompt unchanged.
pub fn style_phrase(style: &str) -> &str {
    STYLE_PHRASES.get(style).copied().unwrap_or(style)
}
