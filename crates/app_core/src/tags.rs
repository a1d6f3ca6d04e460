//! Tag extraction from image file names
//!
//! A catalog file name looks like `<title>-<tag1>-...-<tagN>.<ext>`. The
//! first hyphen-separated segment is the title; every following segment is a
//! category tag.

/// Derive the category tags of an image from its file name
///
/// Any directory prefix and the final extension are removed, the base name is
/// split on `-`, the title segment is dropped and each remaining segment is
/// trimmed and lower-cased. Empty segments are discarded. Malformed names
/// simply produce fewer tags.
pub fn extract_tags(name: &str) -> Vec<String> {
    base_name(name)
        .split('-')
        .skip(1)
        .map(|segment| segment.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Check whether `name` carries `tag` (already normalized)
pub fn has_tag(name: &str, tag: &str) -> bool {
    base_name(name)
        .split('-')
        .skip(1)
        .any(|segment| segment.trim().to_lowercase() == tag)
}

/// File name without directory prefix and without the final extension
fn base_name(name: &str) -> &str {
    let file_name = name.rsplit('/').next().unwrap_or("");
    match file_name.rfind('.') {
        // A trailing dot has no extension to strip
        Some(dot) if dot + 1 < file_name.len() => &file_name[..dot],
        _ => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_then_tags() {
        assert_eq!(extract_tags("sunset-landsc.jpg"), vec!["landsc"]);
        assert_eq!(extract_tags("cafe-street-int.jpg"), vec!["street", "int"]);
    }

    #[test]
    fn test_tags_are_lowercased_and_trimmed() {
        assert_eq!(extract_tags("Title-TagA-TagB.JPG"), vec!["taga", "tagb"]);
        assert_eq!(extract_tags("x- Street -INT .png"), vec!["street", "int"]);
    }

    #[test]
    fn test_no_hyphen_gives_no_tags() {
        assert!(extract_tags("hero.jpg").is_empty());
        assert!(extract_tags("hero").is_empty());
        assert!(extract_tags("").is_empty());
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert_eq!(extract_tags("a--b-.jpg"), vec!["b"]);
        assert_eq!(extract_tags("a- -b.jpg"), vec!["b"]);
    }

    #[test]
    fn test_path_prefix_and_only_last_extension_stripped() {
        assert_eq!(extract_tags("images/2024/dock-archit.jpg"), vec!["archit"]);
        assert_eq!(extract_tags("pier-night.v2.webp"), vec!["night.v2"]);
    }

    #[test]
    fn test_missing_extension() {
        assert_eq!(extract_tags("pier-night"), vec!["night"]);
        assert_eq!(extract_tags("pier-night."), vec!["night."]);
    }

    #[test]
    fn test_has_tag_matches_extract() {
        let name = "cafe-Street-int.jpg";
        for tag in extract_tags(name) {
            assert!(has_tag(name, &tag));
        }
        assert!(!has_tag(name, "cafe"));
        assert!(!has_tag(name, "landsc"));
    }
}
