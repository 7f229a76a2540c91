//! Listing image URL normalization
//!
//! Listings store images as a mix of absolute URLs, protocol-relative URLs
//! and bare bucket paths. Everything is turned into something an `<img>` tag
//! can load, or dropped.

/// Schemes passed through untouched
const ABSOLUTE_PREFIXES: [&str; 4] = ["http://", "https://", "data:", "blob:"];

/// Placeholder strings that leak in from serialized JS nulls
const EMPTY_MARKERS: [&str; 2] = ["null", "undefined"];

/// Normalize one stored image reference against `base` (storage bucket URL)
pub fn normalize_image_url(raw: &str, base: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || EMPTY_MARKERS.contains(&trimmed) {
        return None;
    }

    let lower = trimmed.to_ascii_lowercase();
    if ABSOLUTE_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return Some(trimmed.to_string());
    }

    let cleaned = trimmed.replace('\\', "/");
    if let Some(rest) = cleaned.strip_prefix("//") {
        return Some(format!("https://{}", rest));
    }

    let path = cleaned.trim_start_matches('/');
    if path.is_empty() {
        return None;
    }
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return Some(format!("/{}", path));
    }
    Some(format!("{}/{}", base, path))
}

/// Normalize a list, dropping empties and duplicates (first one wins)
pub fn normalize_image_list<I, T>(values: I, base: &str) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if let Some(url) = normalize_image_url(value.as_ref(), base)
            && !out.contains(&url)
        {
            out.push(url);
        }
    }
    out
}

/// First usable image, if any
pub fn primary_image<I, T>(values: I, base: &str) -> Option<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    values
        .into_iter()
        .find_map(|v| normalize_image_url(v.as_ref(), base))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://cdn.cessionpro.example/listings/";

    #[test]
    fn test_absolute_passthrough() {
        assert_eq!(
            normalize_image_url("https://img.example/a.jpg", BASE).as_deref(),
            Some("https://img.example/a.jpg")
        );
        assert_eq!(
            normalize_image_url("  HTTP://img.example/a.jpg ", BASE).as_deref(),
            Some("HTTP://img.example/a.jpg")
        );
        assert_eq!(
            normalize_image_url("data:image/png;base64,AAAA", BASE).as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_empty_and_placeholder() {
        assert_eq!(normalize_image_url("", BASE), None);
        assert_eq!(normalize_image_url("   ", BASE), None);
        assert_eq!(normalize_image_url("null", BASE), None);
        assert_eq!(normalize_image_url("undefined", BASE), None);
        assert_eq!(normalize_image_url("/", BASE), None);
    }

    #[test]
    fn test_protocol_relative() {
        assert_eq!(
            normalize_image_url("//img.example/a.jpg", BASE).as_deref(),
            Some("https://img.example/a.jpg")
        );
    }

    #[test]
    fn test_relative_path_joined_once() {
        assert_eq!(
            normalize_image_url("/uploads/a.jpg", BASE).as_deref(),
            Some("https://cdn.cessionpro.example/listings/uploads/a.jpg")
        );
        assert_eq!(
            normalize_image_url("uploads\\b.png", "https://cdn.example").as_deref(),
            Some("https://cdn.example/uploads/b.png")
        );
    }

    #[test]
    fn test_relative_without_base() {
        assert_eq!(
            normalize_image_url("uploads/a.jpg", "").as_deref(),
            Some("/uploads/a.jpg")
        );
    }

    #[test]
    fn test_list_dedupes_in_order() {
        let raw = vec![
            "uploads/a.jpg",
            "",
            "https://cdn.cessionpro.example/listings/uploads/a.jpg",
            "null",
            "//img.example/b.jpg",
        ];
        assert_eq!(
            normalize_image_list(raw, BASE),
            vec![
                "https://cdn.cessionpro.example/listings/uploads/a.jpg".to_string(),
                "https://img.example/b.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_primary_image_skips_empties() {
        let raw = [String::new(), "undefined".to_string(), "x.jpg".to_string()];
        assert_eq!(
            primary_image(&raw, BASE).as_deref(),
            Some("https://cdn.cessionpro.example/listings/x.jpg")
        );
        assert_eq!(primary_image(Vec::<String>::new(), BASE), None);
    }
}
