//! Fuzzy subsequence matching with word-boundary/proximity bonuses, plus the
//! unconditional recency bonus folded into every entry's score regardless of
//! whether a filter is active.
//!
//! Ported from `calculate_score`/`highlight_matches` in
//! `examples/original_source/src/fuzzy.c`. Matching runs over `char`s rather
//! than bytes so highlighted output is always valid UTF-8; the domain is
//! ASCII directory names in practice, so this is a strict improvement over
//! the original's byte-at-a-time walk rather than a behavior change.

use std::time::SystemTime;

/// `name` must start with `YYYY-MM-DD-` (four digits, dash, two digits,
/// dash, two digits, dash) to count as date-prefixed.
pub fn has_date_prefix(name: &str) -> bool {
    let prefix: Vec<char> = name.chars().take(11).collect();
    if prefix.len() < 11 {
        return false;
    }
    prefix[0].is_ascii_digit()
        && prefix[1].is_ascii_digit()
        && prefix[2].is_ascii_digit()
        && prefix[3].is_ascii_digit()
        && prefix[4] == '-'
        && prefix[5].is_ascii_digit()
        && prefix[6].is_ascii_digit()
        && prefix[7] == '-'
        && prefix[8].is_ascii_digit()
        && prefix[9].is_ascii_digit()
        && prefix[10] == '-'
}

/// Scores `name` against `query` as of `now`, given `mtime`.
///
/// - `+2.0` if `name` is date-prefixed.
/// - If `query` is non-empty: a left-to-right subsequence match, `+1.0` per
///   matched character, `+1.0` more if the match lands on a word boundary
///   (start of string or preceded by a non-alphanumeric character), plus a
///   `1/√(gap+1)` proximity bonus between consecutive matches. Any query
///   character that fails to match anywhere in the remaining name makes the
///   whole score `0.0`. A successful match is then scaled by a density
///   factor (`query_len / (last_match_pos + 1)`) and a length penalty
///   (`10 / (name_len + 10)`) that favors shorter names.
/// - An unconditional recency bonus: `+0.5` under an hour old, `+0.3` under
///   a day, `+0.1` under a week, `+0.0` beyond that.
pub fn score(name: &str, query: &str, mtime: SystemTime, now: SystemTime) -> f64 {
    let mut s = 0.0f64;

    if has_date_prefix(name) {
        s += 2.0;
    }

    if !query.is_empty() {
        let name_chars: Vec<char> = name.chars().map(|c| c.to_ascii_lowercase()).collect();
        let query_chars: Vec<char> = query.chars().map(|c| c.to_ascii_lowercase()).collect();

        let mut query_idx = 0usize;
        let mut last_pos: Option<usize> = None;

        for (pos, &c) in name_chars.iter().enumerate() {
            if query_idx >= query_chars.len() {
                break;
            }
            if c != query_chars[query_idx] {
                continue;
            }
            s += 1.0;

            let boundary = pos == 0 || !name_chars[pos - 1].is_alphanumeric();
            if boundary {
                s += 1.0;
            }
            if let Some(lp) = last_pos {
                let gap = (pos - lp - 1) as f64;
                s += 1.0 / (gap + 1.0).sqrt();
            }
            last_pos = Some(pos);
            query_idx += 1;
        }

        if query_idx < query_chars.len() {
            return 0.0;
        }

        if let Some(lp) = last_pos {
            s *= query_chars.len() as f64 / (lp as f64 + 1.0);
        }
        s *= 10.0 / (name_chars.len() as f64 + 10.0);
    }

    let age_secs = now.duration_since(mtime).unwrap_or_default().as_secs_f64();
    if age_secs < 3600.0 {
        s += 0.5;
    } else if age_secs < 86400.0 {
        s += 0.3;
    } else if age_secs < 604_800.0 {
        s += 0.1;
    }

    s
}

/// Wraps each character of `name` that participates in the subsequence
/// match against `query` in `{highlight}…{/}` markup, matching
/// `highlight_matches`'s per-character wrapping. Unmatched characters pass
/// through unchanged. Closes with `{/}` rather than the original's
/// `{text}` — `{text}` is a full style reset in the token engine, which
/// would also unwind any markup the picker wraps the list row in; `{/}`
/// pops only the `{highlight}` composite.
pub fn highlight(name: &str, query: &str) -> String {
    if query.is_empty() {
        return name.to_string();
    }

    let query_chars: Vec<char> = query.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut query_idx = 0usize;
    let mut out = String::with_capacity(name.len() + query.len() * 16);

    for ch in name.chars() {
        if query_idx < query_chars.len() && ch.to_ascii_lowercase() == query_chars[query_idx] {
            out.push_str("{highlight}");
            out.push(ch);
            out.push_str("{/}");
            query_idx += 1;
        } else {
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn minutes_ago(now: SystemTime, m: u64) -> SystemTime {
        now - Duration::from_secs(m * 60)
    }

    #[test]
    fn empty_query_has_no_match_bonus() {
        let now = SystemTime::now();
        let a = score("alpha", "", now, now);
        let b = score("alpha", "", minutes_ago(now, 120), now);
        assert!(a > b, "fresher entry should score higher with no query");
    }

    #[test]
    fn unmatched_query_character_yields_zero() {
        let now = SystemTime::now();
        assert_eq!(score("alpha", "z", now, now), 0.0);
        assert_eq!(score("alpha", "az", now, now), 0.0);
    }

    #[test]
    fn score_is_case_insensitive() {
        let now = SystemTime::now();
        let lower = score("AlphaBeta", "ab", now, now);
        let upper = score("AlphaBeta", "AB", now, now);
        assert_eq!(lower, upper);
    }

    #[test]
    fn word_boundary_match_scores_higher_than_mid_word() {
        let now = SystemTime::now();
        let boundary = score("foo-bar", "b", now, now);
        let midword = score("foobar", "b", now, now);
        assert!(boundary > midword);
    }

    #[test]
    fn date_prefix_and_recency_scenario() {
        let now = SystemTime::now();
        let fresh = score("2025-01-15-foo-bar", "fb", minutes_ago(now, 10), now);
        let stale = score(
            "2025-01-15-foo-bar",
            "fb",
            now - Duration::from_secs(30 * 86400),
            now,
        );
        assert!(fresh > stale);
    }

    #[test]
    fn highlight_wraps_matched_characters_only() {
        let out = highlight("foobar", "fb");
        assert_eq!(out, "{highlight}f{/}oo{highlight}b{/}ar");
    }

    #[test]
    fn highlight_with_empty_query_is_identity() {
        assert_eq!(highlight("foobar", ""), "foobar");
    }

    #[test]
    fn has_date_prefix_requires_full_pattern() {
        assert!(has_date_prefix("2025-01-15-foo"));
        assert!(!has_date_prefix("2025-01-1-foo"));
        assert!(!has_date_prefix("foo"));
    }
}
