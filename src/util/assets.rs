use std::sync::OnceLock;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

/// Files bundled from `assets/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Asset {
    MainCss,
    TailwindCss,
    Favicon,
}

impl Asset {
    fn file_name(self) -> &'static str {
        match self {
            Asset::MainCss => "main.css",
            Asset::TailwindCss => "tailwind.css",
            Asset::Favicon => "favicon.svg",
        }
    }

    /// Loads the asset as UTF-8 text; empty when missing or not text.
    fn text(self) -> String {
        let name = self.file_name();
        let Some(file) = EmbeddedAssets::get(name) else {
            tracing::error!(asset = name, "embedded asset missing");
            return String::new();
        };
        String::from_utf8(file.data.into_owned()).unwrap_or_else(|_| {
            tracing::error!(asset = name, "embedded asset is not valid UTF-8");
            String::new()
        })
    }
}

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| Asset::MainCss.text())
}

pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS.get_or_init(|| Asset::TailwindCss.text())
}

/// The favicon as an inline `data:` URI, so no asset server is needed.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI.get_or_init(|| svg_data_uri(&Asset::Favicon.text()))
}

/// Percent-encodes the characters that break an SVG `data:` URI.
fn svg_data_uri(svg: &str) -> String {
    let mut uri = String::from("data:image/svg+xml;utf8,");
    for ch in svg.trim().chars() {
        match ch {
            '"' => uri.push('\''),
            '%' => uri.push_str("%25"),
            '#' => uri.push_str("%23"),
            '<' => uri.push_str("%3C"),
            '>' => uri.push_str("%3E"),
            '\n' | '\r' => uri.push(' '),
            other => uri.push(other),
        }
    }
    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_uri_escapes_reserved_characters() {
        let uri = svg_data_uri("<svg fill=\"#fff\">50%</svg>\n");
        assert_eq!(uri, "data:image/svg+xml;utf8,%3Csvg fill='%23fff'%3E50%25%3C/svg%3E");
    }

    #[test]
    fn bundled_assets_load() {
        assert!(main_css().contains(".risk-pulse"));
        assert!(tailwind_css().contains(".rounded-xl"));
        let favicon = favicon_data_uri();
        assert!(favicon.starts_with("data:image/svg+xml;utf8,%3Csvg"));
        assert!(!favicon.contains('#'));
    }
}
