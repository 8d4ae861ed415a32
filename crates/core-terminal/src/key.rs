//! Logical keys the picker's event loop reacts to.
//!
//! Deliberately small: the picker only ever needs navigation, editing, and
//! exit keys. Everything else (function keys, mouse events, focus events)
//! is consumed and discarded by the key sources before it reaches here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    CtrlC,
}
