//! Redirect target resolution.
//!
//! The verifier follows redirects itself, one expected response at a time;
//! this module only turns a `Location` value into the next request target.

use url::Url;

/// Resolves a `Location` header value against the URI of the hop that returned it.
///
/// Absolute locations are returned normalized; relative ones (`/next`,
/// `../other`) are joined onto `current`. If neither works the raw value is
/// returned unchanged and the transport reports it as an invalid target.
pub fn resolve_location(current: &str, location: &str) -> String {
    match Url::parse(location).or_else(|_| Url::parse(current).and_then(|base| base.join(location)))
    {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::warn!(
                "Cannot resolve Location {:?} against {}: {}",
                location,
                current,
                e
            );
            location.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_location_is_used_as_is() {
        assert_eq!(
            resolve_location("http://old.example/a", "https://new.example/b"),
            "https://new.example/b"
        );
    }

    #[test]
    fn test_absolute_path_location() {
        assert_eq!(
            resolve_location("http://x.example/a/b?q=1", "/next"),
            "http://x.example/next"
        );
    }

    #[test]
    fn test_relative_path_location() {
        assert_eq!(
            resolve_location("http://x.example/a/b", "c"),
            "http://x.example/a/c"
        );
    }

    #[test]
    fn test_unresolvable_location_is_passed_through() {
        assert_eq!(resolve_location("not a url", "/next"), "/next");
    }
}
