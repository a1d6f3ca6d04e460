//! Image resource addressing
//!
//! Every catalog name maps to a resource address `<base>/<percent-encoded
//! name>` and back. Encoding leaves exactly the characters a URI component
//! may carry unescaped (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`).

use crate::catalog::ImageName;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::{Path, PathBuf};

const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Decode a percent-encoded segment; `None` if it is not valid UTF-8
pub fn decode_component(value: &str) -> Option<String> {
    percent_decode_str(value)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// Maps catalog names to resource addresses and files
#[derive(Debug, Clone)]
pub struct ResourceResolver {
    base_path: String,
    root: PathBuf,
}

impl ResourceResolver {
    /// `base_path` is the address prefix (e.g. `/images`), `root` the
    /// directory holding the files
    pub fn new(base_path: &str, root: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resource address of a catalog name
    pub fn src(&self, name: &str) -> String {
        format!("{}/{}", self.base_path, encode_component(name))
    }

    pub fn src_of(&self, image: &ImageName) -> String {
        self.src(image.as_str())
    }

    /// Catalog name behind a resource address
    pub fn name_of(&self, src: &str) -> Option<String> {
        let segment = src
            .strip_prefix(self.base_path.as_str())?
            .strip_prefix('/')?;
        decode_component(segment)
    }

    /// File behind a resource address
    ///
    /// Names that would leave the root directory are rejected.
    pub fn path_of(&self, src: &str) -> Option<PathBuf> {
        let name = self.name_of(src)?;
        if name.is_empty() || name == ".." || name == "." || name.contains(['/', '\\']) {
            tracing::warn!(src, "Rejected resource outside the images directory");
            return None;
        }
        Some(self.root.join(name))
    }

    /// File of a catalog image
    pub fn file_of(&self, image: &ImageName) -> Option<PathBuf> {
        self.path_of(&self.src_of(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ResourceResolver {
        ResourceResolver::new("/images/", "/srv/portfolio/images")
    }

    #[test]
    fn test_src_matches_uri_component_encoding() {
        let r = resolver();
        assert_eq!(r.src("sunset-landsc.jpg"), "/images/sunset-landsc.jpg");
        assert_eq!(r.src("old pier-landsc.jpg"), "/images/old%20pier-landsc.jpg");
        assert_eq!(r.src("a#b-c&d.jpg"), "/images/a%23b-c%26d.jpg");
        assert_eq!(r.src("(x)!~*'-y.jpg"), "/images/(x)!~*'-y.jpg");
        assert_eq!(r.src("Ακρόπολη-archit.jpg"), "/images/%CE%91%CE%BA%CF%81%CF%8C%CF%80%CE%BF%CE%BB%CE%B7-archit.jpg");
    }

    #[test]
    fn test_roundtrip() {
        let r = resolver();
        for name in [
            "sunset-landsc.jpg",
            "old pier-landsc.jpg",
            "100% grey-street.png",
            "a+b=c-int.webp",
            "Ακρόπολη-archit.jpg",
            "café-street.avif",
        ] {
            assert_eq!(r.name_of(&r.src(name)).as_deref(), Some(name));
        }
    }

    #[test]
    fn test_name_of_rejects_foreign_prefix() {
        let r = resolver();
        assert_eq!(r.name_of("/photos/a-b.jpg"), None);
        assert_eq!(r.name_of("/imagesX/a-b.jpg"), None);
        assert_eq!(r.name_of("/images/%FF"), None);
    }

    #[test]
    fn test_path_of() {
        let r = resolver();
        assert_eq!(
            r.path_of("/images/old%20pier-landsc.jpg"),
            Some(PathBuf::from("/srv/portfolio/images/old pier-landsc.jpg"))
        );
        assert_eq!(r.path_of("/images/..%2Fsecret"), None);
        assert_eq!(r.path_of("/images/.."), None);
        assert_eq!(
            r.file_of(&ImageName::from("a-b.jpg")),
            Some(PathBuf::from("/srv/portfolio/images/a-b.jpg"))
        );
    }
}
