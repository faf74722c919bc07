use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

/// Embedded image markup, `data:image/<type>;base64,<payload>`.
///
/// The type is taken verbatim and not validated against a known image-type
/// set; the payload stays base64 until materialization.
static DATA_URI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:image/(\w+);base64,(.+)$").unwrap());

/// A classified markdown image reference.
///
/// Classification is total: every input maps to exactly one variant.
/// Shapes this system refuses to materialize (remote URLs, unparseable
/// references) get their own variants so callers can leave the original
/// markup untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Inline base64 data URI.
    Embedded { ext: String, payload: String },
    /// `http://` or `https://` reference. Recognized but never fetched.
    Remote,
    /// `file://` reference with the path portion percent-decoded.
    /// Existence is checked at resolution time, not here.
    LocalFile(PathBuf),
    /// Anything else, including malformed data URIs.
    Opaque,
}

impl ImageSource {
    pub fn parse(reference: &str) -> Self {
        if reference.starts_with("data:image") {
            return match DATA_URI_RE.captures(reference) {
                Some(caps) => Self::Embedded {
                    ext: caps[1].to_string(),
                    payload: caps[2].to_string(),
                },
                None => Self::Opaque,
            };
        }

        if reference.starts_with("http://") || reference.starts_with("https://") {
            return Self::Remote;
        }

        if let Some(rest) = reference.strip_prefix("file://") {
            let path = urlencoding::decode(rest)
                .map_or_else(|_| rest.to_string(), |decoded| decoded.into_owned());
            return Self::LocalFile(PathBuf::from(path));
        }

        Self::Opaque
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_embedded_data_uri() {
        let source = ImageSource::parse("data:image/png;base64,aGVsbG8=");
        assert_eq!(
            source,
            ImageSource::Embedded {
                ext: "png".to_string(),
                payload: "aGVsbG8=".to_string(),
            }
        );
    }

    #[test]
    fn truncated_data_uri_is_opaque() {
        assert_eq!(
            ImageSource::parse("data:image/png;base64,"),
            ImageSource::Opaque
        );
    }

    #[test]
    fn non_base64_data_uri_is_opaque() {
        assert_eq!(
            ImageSource::parse("data:image/svg+xml;utf8,<svg/>"),
            ImageSource::Opaque
        );
    }

    #[test]
    fn http_and_https_are_remote() {
        assert_eq!(
            ImageSource::parse("http://example.com/a.png"),
            ImageSource::Remote
        );
        assert_eq!(
            ImageSource::parse("https://example.com/a.png"),
            ImageSource::Remote
        );
    }

    #[test]
    fn file_uri_is_percent_decoded() {
        assert_eq!(
            ImageSource::parse("file:///tmp/my%20image.png"),
            ImageSource::LocalFile(PathBuf::from("/tmp/my image.png"))
        );
    }

    #[test]
    fn bare_paths_are_opaque() {
        assert_eq!(ImageSource::parse("cat.png"), ImageSource::Opaque);
        assert_eq!(ImageSource::parse("./images/cat.png"), ImageSource::Opaque);
    }
}
