//! Foreground/background color representation for the style engine.

/// A single color channel (foreground or background).
///
/// `Standard` holds the literal SGR parameter (30-37, 40-47, 90-97, 100-107);
/// `Extended` holds a 256-color palette index emitted as `38;5;N`/`48;5;N`.
/// Keeping the raw SGR code around (rather than re-deriving it from a color
/// name each sync) is what lets `{bright}` flip an already-applied standard
/// color in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Standard(u8),
    Extended(u8),
}

impl Color {
    pub fn is_default(self) -> bool {
        matches!(self, Color::Default)
    }
}

/// Maps a color name (`black`, `red`, ..., `white`) to its base foreground
/// SGR code (30-37). Background forms add 10, bright forms add 60.
pub fn standard_fg_code(name: &str) -> Option<u8> {
    let base = match name {
        "black" => 30,
        "red" => 31,
        "green" => 32,
        "yellow" => 33,
        "blue" => 34,
        "magenta" => 35,
        "cyan" => 36,
        "white" => 37,
        _ => return None,
    };
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_names_map_to_30_37() {
        assert_eq!(standard_fg_code("black"), Some(30));
        assert_eq!(standard_fg_code("white"), Some(37));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(standard_fg_code("chartreuse"), None);
    }
}
