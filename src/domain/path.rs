pub const SEPARATOR: char = '/';

/// Drops a single leading separator. Repeated separators are left for the
/// store to interpret.
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix(SEPARATOR).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_separator() {
        assert_eq!(normalize_path("/secret/foo"), "secret/foo");
    }

    #[test]
    fn test_strips_only_one_separator() {
        assert_eq!(normalize_path("//secret/foo"), "/secret/foo");
        assert_eq!(normalize_path("/"), "");
    }

    #[test]
    fn test_other_paths_unchanged() {
        for path in ["secret/foo", "secret/foo/", "a", "sys/mounts", " /x"] {
            assert_eq!(normalize_path(path), path);
        }
    }
}
