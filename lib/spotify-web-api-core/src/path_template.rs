//! Endpoint path templates.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped when an identifier is interpolated into a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Path of an endpoint with `{name}` placeholders, e.g.
/// `/v1/users/{user_id}/playlists/{playlist_id}`.
///
/// The template is kept on the built [`Request`](crate::Request) so that
/// middleware can log the endpoint rather than the resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    /// Create a new path template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Get the template string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Substitute each placeholder with its percent-encoded value.
    ///
    /// Placeholders without a value render as an empty segment; identifiers
    /// are not validated here.
    #[must_use]
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut rendered = String::with_capacity(self.0.len());
        let mut rest = self.0;

        while let Some(start) = rest.find('{') {
            let (head, tail) = rest.split_at(start);
            rendered.push_str(head);

            let Some(end) = tail.find('}') else {
                rendered.push_str(tail);
                return rendered;
            };

            let name = tail.get(1..end).unwrap_or_default();
            if let Some((_, value)) = values.iter().find(|(key, _)| *key == name) {
                rendered.extend(utf8_percent_encode(value, PATH_SEGMENT));
            }
            rest = tail.get(end + 1..).unwrap_or_default();
        }

        rendered.push_str(rest);
        rendered
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYLIST: PathTemplate = PathTemplate::new("/v1/users/{user_id}/playlists/{playlist_id}");

    #[test]
    fn render_substitutes_every_placeholder() {
        let path = PLAYLIST.render(&[("playlist_id", "3cEYpjA9oz9GiPac4AsH4n"), ("user_id", "jmperezperez")]);
        assert_eq!(path, "/v1/users/jmperezperez/playlists/3cEYpjA9oz9GiPac4AsH4n");
    }

    #[test]
    fn render_leaves_missing_identifiers_empty() {
        assert_eq!(PLAYLIST.render(&[]), "/v1/users//playlists/");
    }

    #[test]
    fn render_escapes_path_separators() {
        let path = PLAYLIST.render(&[("user_id", "a/b c"), ("playlist_id", "x")]);
        assert_eq!(path, "/v1/users/a%2Fb%20c/playlists/x");
    }

    #[test]
    fn render_without_placeholders() {
        let template = PathTemplate::new("/v1/me");
        assert_eq!(template.render(&[("id", "ignored")]), "/v1/me");
    }

    #[test]
    fn render_keeps_unterminated_brace() {
        let template = PathTemplate::new("/v1/{broken");
        assert_eq!(template.render(&[("broken", "x")]), "/v1/{broken");
    }

    #[test]
    fn path_template_as_str() {
        assert_eq!(PLAYLIST.as_str(), "/v1/users/{user_id}/playlists/{playlist_id}");
        assert_eq!(PLAYLIST.to_string(), PLAYLIST.as_ref());
    }
}
