//! Embedded HTML pages
//!
//! The two pages the game serves are compiled into the binary. A page may
//! carry a single `{{ message }}` slot filled at render time.

use rust_embed::RustEmbed;

use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "pages/"]
struct Page;

/// Render an embedded page, substituting the message slot if given
pub fn render(name: &str, message: Option<&str>) -> Result<String> {
    let file = Page::get(name).ok_or_else(|| Error::PageNotFound(name.to_string()))?;
    let html = String::from_utf8(file.data.into_owned())
        .map_err(|e| Error::Template(format!("page {name} is not valid UTF-8: {e}")))?;

    Ok(match message {
        Some(message) => html.replace("{{ message }}", message),
        None => html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_known_pages() {
        assert!(render("index.html", None).is_ok());
        assert!(render("confession.html", Some("hello")).is_ok());
    }

    #[test]
    fn substitutes_message_slot() {
        let html = render("confession.html", Some("<em>test message</em>")).unwrap();
        assert!(html.contains("<em>test message</em>"));
        assert!(!html.contains("{{ message }}"));
    }

    #[test]
    fn unknown_page_is_an_error() {
        assert!(matches!(
            render("missing.html", None),
            Err(Error::PageNotFound(_))
        ));
    }
}
