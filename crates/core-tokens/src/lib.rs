//! Brace-delimited style markup (`{h1}Title{/}`) expanded to ANSI escape
//! sequences, with deferred emission: a style change is only written
//! immediately before the next visible byte, newline, or control tag.

mod color;
mod engine;
mod stack;
mod style;
mod tags;

pub use color::Color;
pub use engine::{expand, ExpandOptions, TokenExpansion};
pub use style::{AttrFlags, StyleState};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_with_no_tags_is_unchanged() {
        let out = expand("just text", &ExpandOptions::default());
        assert_eq!(out.as_str(), "just text");
    }

    #[test]
    fn tokens_disabled_copies_input_byte_for_byte() {
        let opts = ExpandOptions {
            colors_enabled: true,
            expand_tokens: false,
        };
        let out = expand("{h1}Title{/}", &opts);
        assert_eq!(out.as_str(), "{h1}Title{/}");
    }

    #[test]
    fn colors_disabled_suppresses_ansi_but_keeps_text() {
        let opts = ExpandOptions {
            colors_enabled: false,
            expand_tokens: true,
        };
        let out = expand("{h1}Title{/}", &opts);
        assert_eq!(out.as_str(), "Title");
    }

    #[test]
    fn colors_disabled_still_records_cursor_position() {
        let opts = ExpandOptions {
            colors_enabled: false,
            expand_tokens: true,
        };
        let out = expand("abc{cursor}def", &opts);
        assert_eq!(out.cursor, Some((1, 4)));
        assert_eq!(out.as_str(), "abcdef");
    }

    #[test]
    fn newline_resets_style_and_tracks_row_col() {
        let out = expand("{red}a\nb", &ExpandOptions::default());
        assert_eq!(out.as_str(), "\x1b[31ma\x1b[0m\nb");
        assert_eq!(out.final_row, 2);
        assert_eq!(out.final_col, 2);
    }

    #[test]
    fn style_active_across_newline_via_stack_still_pops() {
        // {/} after a newline must still unwind the stack even though the
        // emitted color was already reset at the newline.
        let out = expand("{red}a\n{/}b", &ExpandOptions::default());
        assert_eq!(out.as_str(), "\x1b[31ma\x1b[0m\nb");
    }

    #[test]
    fn malformed_unclosed_brace_falls_back_to_literal() {
        let out = expand("{oops", &ExpandOptions::default());
        assert_eq!(out.as_str(), "{oops");
    }

    #[test]
    fn pre_existing_escape_sequence_passes_through_opaquely() {
        let out = expand("\x1b[2J{red}x", &ExpandOptions::default());
        assert_eq!(out.as_str(), "\x1b[2J\x1b[31mx");
    }

    #[test]
    fn bare_escape_with_no_csi_is_treated_as_literal() {
        let out = expand("\x1bq", &ExpandOptions::default());
        assert_eq!(out.as_str(), "\x1bq");
    }

    #[test]
    fn bright_in_place_brightens_active_standard_color() {
        let out = expand("{red}a{bright}b", &ExpandOptions::default());
        assert_eq!(out.as_str(), "\x1b[31ma\x1b[91mb");
    }

    #[test]
    fn text_tag_is_a_reset_alias() {
        let out = expand("{red}a{text}b", &ExpandOptions::default());
        assert_eq!(out.as_str(), "\x1b[31ma\x1b[0mb");
    }
}
