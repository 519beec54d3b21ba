// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// A file stem built from free text (city names, labels).
/// Keeps ASCII alphanumerics, `-` and `_`; whitespace becomes `_`.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

/// Shorten to `max` chars, marking the cut with `.`.
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() <= max || max == 0 {
        return s!(s);
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_are_filesystem_safe() {
        assert_eq!(sanitize_file_stem("New York, NY", "city"), "New_York_NY");
        assert_eq!(sanitize_file_stem("  São Paulo  ", "city"), "So_Paulo");
        assert_eq!(sanitize_file_stem("a__b - c", "city"), "a_b_-_c");
        assert_eq!(sanitize_file_stem("***", "city"), "city");
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  Data \n\t Analyst "), "Data Analyst");
    }

    #[test]
    fn ellipsize_marks_cut() {
        assert_eq!(ellipsize("Kubernetes", 5), "Kube.");
        assert_eq!(ellipsize("SQL", 5), "SQL");
    }
}
