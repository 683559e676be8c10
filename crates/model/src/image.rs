//! Display URL resolution for stored product images

/// Storage path that relative image file names live under
pub const DEFAULT_STORAGE_PREFIX: &str = "/products";

/// Check if a stored image reference is already a full URL
pub fn is_absolute_url(url: &str) -> bool {
    let url = url.trim();
    url.starts_with("https://") || url.starts_with("http://") || url.starts_with("//")
}

/// Resolve the URL an image should be displayed from.
///
/// Absolute references are returned trimmed. Anything else is treated as a
/// file name under `storage_prefix`.
pub fn resolve_image_url(url: &str, storage_prefix: &str) -> String {
    let url = url.trim();
    if is_absolute_url(url) {
        return url.to_string();
    }

    format!(
        "{}/{}",
        storage_prefix.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_is_kept() {
        assert_eq!(
            resolve_image_url("https://cdn.example.com/x.png", DEFAULT_STORAGE_PREFIX),
            "https://cdn.example.com/x.png"
        );
    }

    #[test]
    fn test_absolute_url_is_trimmed() {
        assert_eq!(
            resolve_image_url("  https://cdn.example.com/x.png \n", DEFAULT_STORAGE_PREFIX),
            "https://cdn.example.com/x.png"
        );
    }

    #[test]
    fn test_file_name_joins_prefix() {
        assert_eq!(
            resolve_image_url("abc.png", DEFAULT_STORAGE_PREFIX),
            "/products/abc.png"
        );
        assert_eq!(resolve_image_url("abc.png", "/media/"), "/media/abc.png");
    }

    #[test]
    fn test_detection() {
        assert!(is_absolute_url("http://example.com/a.jpg"));
        assert!(is_absolute_url("//cdn.example.com/a.jpg"));
        assert!(!is_absolute_url("a.jpg"));
        assert!(!is_absolute_url("/products/a.jpg"));
    }
}
