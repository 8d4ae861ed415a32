//! `StyleState`: the engine's desired-vs-emitted style model (data model
//! section's `StyleState`).

use crate::color::Color;
use bitflags::bitflags;

bitflags! {
    /// Boolean SGR attributes. `DIM` corresponds to the real SGR-2 "faint"
    /// attribute; no markup tag in this language sets it directly (the
    /// `{dim}` tag instead recolors the foreground — see `tags::dispatch`),
    /// but the bit is kept in the model because sync diffing is written
    /// generically over the whole flag set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AttrFlags: u8 {
        const BOLD          = 0b0000_0001;
        const DIM           = 0b0000_0010;
        const ITALIC        = 0b0000_0100;
        const UNDERLINE     = 0b0000_1000;
        const REVERSE       = 0b0001_0000;
        const STRIKETHROUGH = 0b0010_0000;
    }
}

impl AttrFlags {
    /// SGR parameter for each bit, in the fixed emission order the sync
    /// algorithm walks.
    pub const ORDER: &'static [(AttrFlags, &'static str)] = &[
        (AttrFlags::BOLD, "1"),
        (AttrFlags::DIM, "2"),
        (AttrFlags::ITALIC, "3"),
        (AttrFlags::UNDERLINE, "4"),
        (AttrFlags::REVERSE, "7"),
        (AttrFlags::STRIKETHROUGH, "9"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleState {
    pub fg: Color,
    pub bg: Color,
    pub attrs: AttrFlags,
}

impl StyleState {
    pub fn is_default(&self) -> bool {
        *self == StyleState::default()
    }

    pub fn reset(&mut self) {
        *self = StyleState::default();
    }
}
