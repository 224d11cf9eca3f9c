//! Category label normalization.
//!
//! Source labels are `snake_case` or `UPPER_SNAKE` tokens (`e_commerce`,
//! `MCP_SERVERS`). Every derived name (display heading, anchor slug, folder
//! name) comes from one [`CategoryLabel`].

use std::sync::LazyLock;

use regex::Regex;

/// Tokens rendered fully upper-case regardless of input case.
const ACRONYMS: [&str; 4] = ["AI", "MCP", "SEO", "API"];

/// Whole-string fixes applied after the tokens are joined.
const DISPLAY_OVERRIDES: [(&str, &str); 3] = [
    ("Ai", "AI"),
    ("Mcp Servers", "MCP Servers"),
    ("Seo Tools", "SEO Tools"),
];

/// A normalized category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    /// Human-readable heading (`Real Estate`).
    pub display: String,
    /// Anchor slug (`real-estate`).
    pub slug: String,
}

impl CategoryLabel {
    /// Normalize a raw source label.
    pub fn parse(raw: &str) -> Self {
        let mut display = raw
            .split('_')
            .map(normalize_token)
            .collect::<Vec<_>>()
            .join(" ");

        if let Some((_, fixed)) = DISPLAY_OVERRIDES.iter().find(|(from, _)| *from == display) {
            display = (*fixed).to_string();
        }

        let slug = slugify(&display);
        Self { display, slug }
    }

    /// Folder holding the category document: `<slug>-apis-<count>`.
    pub fn folder_name(&self, count: usize) -> String {
        format!("{}-apis-{count}", self.slug)
    }
}

/// Lower-case the display name and collapse whitespace runs into hyphens.
pub fn slugify(display: &str) -> String {
    static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

    WS_RE.replace_all(&display.to_lowercase(), "-").into_owned()
}

fn normalize_token(token: &str) -> String {
    let upper = token.to_uppercase();
    if ACRONYMS.contains(&upper.as_str()) {
        return upper;
    }

    let mut chars = token.chars();
    match chars.next() {
        Some(c) => {
            let head: String = c.to_uppercase().collect();
            format!("{head}{}", chars.as_str().to_lowercase())
        }
        None => String::new(),
    }
}
