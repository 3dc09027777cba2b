//! Rendered HTML fragments.

use std::fmt;

use super::esc_html;

/// An HTML fragment produced by a render function.
///
/// Text only enters a `Markup` through [`Markup::text`] / [`Markup::push_text`],
/// which escape it; [`Markup::raw`] is reserved for template literals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trusted template markup.
    pub fn raw(html: impl Into<String>) -> Self {
        Markup(html.into())
    }

    /// Escaped text.
    pub fn text(text: &str) -> Self {
        Markup(esc_html(text))
    }

    pub fn push_raw(&mut self, html: &str) {
        self.0.push_str(html);
    }

    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&esc_html(text));
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Extend<Markup> for Markup {
    fn extend<I: IntoIterator<Item = Markup>>(&mut self, iter: I) {
        for part in iter {
            self.push(part);
        }
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        out.extend(iter);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped_raw_is_not() {
        let mut m = Markup::raw("<li>");
        m.push_text("<b>");
        m.push_raw("</li>");
        assert_eq!(m.as_str(), "<li>&lt;b&gt;</li>");
    }

    #[test]
    fn test_collect() {
        let m: Markup = ["a", "b"].iter().map(|s| Markup::text(s)).collect();
        assert_eq!(m.into_string(), "ab");
    }
}
