/// Transfer buffer capacity when copying bytes unchanged.
pub const NORMAL_CHUNK_CAPACITY: usize = 4096;
/// Transfer buffer capacity when escaping hidden bytes.
pub const ESCAPE_CHUNK_CAPACITY: usize = 1024;

/// What a run does with its inputs. Fixed before any I/O starts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Print usage only; inputs are not touched.
    Help,
    /// Copy bytes unchanged.
    #[default]
    Normal,
    /// Replace bytes that are neither printable nor whitespace with hex escapes.
    EscapeHidden,
}

impl Mode {
    /// Resolve the mode from command-line flags. Help wins over escaping.
    pub fn from_flags(help: bool, escape_hidden: bool) -> Self {
        if help {
            Mode::Help
        } else if escape_hidden {
            Mode::EscapeHidden
        } else {
            Mode::Normal
        }
    }

    /// Bytes read per chunk, or 0 when no transfer happens.
    pub fn chunk_capacity(self) -> usize {
        match self {
            Mode::Help => 0,
            Mode::Normal => NORMAL_CHUNK_CAPACITY,
            Mode::EscapeHidden => ESCAPE_CHUNK_CAPACITY,
        }
    }

    /// Capacity of the escape output buffer, or 0 when escaping is off.
    pub fn escape_capacity(self) -> usize {
        match self {
            Mode::EscapeHidden => ESCAPE_CHUNK_CAPACITY * crate::escape::ESCAPE_WIDTH,
            Mode::Help | Mode::Normal => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_takes_precedence() {
        assert_eq!(Mode::from_flags(true, true), Mode::Help);
        assert_eq!(Mode::from_flags(true, false), Mode::Help);
        assert_eq!(Mode::from_flags(false, true), Mode::EscapeHidden);
        assert_eq!(Mode::from_flags(false, false), Mode::Normal);
    }

    #[test]
    fn capacities_per_mode() {
        assert_eq!(Mode::Normal.chunk_capacity(), 4096);
        assert_eq!(Mode::EscapeHidden.chunk_capacity(), 1024);
        assert_eq!(Mode::EscapeHidden.escape_capacity(), 6 * 1024);
        assert_eq!(Mode::Normal.escape_capacity(), 0);
        assert_eq!(Mode::Help.chunk_capacity(), 0);
    }
}
