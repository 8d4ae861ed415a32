//! The filter buffer the user types into, and the sanitization applied to
//! it when it's about to become part of a new directory name.

/// Only printable ASCII ever gets appended (the event loop enforces this),
/// so this bound is a byte bound and a character bound at once.
pub const MAX_FILTER_LEN: usize = 255;

/// Appends `c` to `filter` unless it's already at the length bound.
/// Returns whether the filter changed.
pub fn push_char(filter: &mut String, c: char) -> bool {
    if filter.len() >= MAX_FILTER_LEN {
        return false;
    }
    filter.push(c);
    true
}

/// Pops the last character, if any. Returns whether the filter changed.
pub fn pop_char(filter: &mut String) -> bool {
    filter.pop().is_some()
}

/// Collapses every run of whitespace into a single `-`, for turning a
/// filter buffer into the tail of a new try's directory name.
pub fn sanitize_for_dirname(filter: &str) -> String {
    let mut out = String::with_capacity(filter.len());
    let mut in_run = false;
    for c in filter.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push('-');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_and_pop_roundtrip() {
        let mut filter = String::new();
        push_char(&mut filter, 'a');
        push_char(&mut filter, 'b');
        assert_eq!(filter, "ab");
        assert!(pop_char(&mut filter));
        assert_eq!(filter, "a");
    }

    #[test]
    fn pop_on_empty_is_a_no_op_returning_false() {
        let mut filter = String::new();
        assert!(!pop_char(&mut filter));
    }

    #[test]
    fn push_stops_at_bound() {
        let mut filter = "x".repeat(MAX_FILTER_LEN);
        assert!(!push_char(&mut filter, 'y'));
        assert_eq!(filter.len(), MAX_FILTER_LEN);
    }

    #[test]
    fn sanitize_collapses_whitespace_runs() {
        assert_eq!(sanitize_for_dirname("foo  bar\tbaz"), "foo-bar-baz");
        assert_eq!(sanitize_for_dirname("  lead"), "-lead");
        assert_eq!(sanitize_for_dirname("noswap"), "noswap");
    }
}
