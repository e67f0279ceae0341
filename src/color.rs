// color.rs — LSCOLORS color letters and their escape sequences
//
// A color letter selects a foreground sequence or a background sequence
// depending on its position in an LSCOLORS pair.  Lowercase letters are the
// normal colors, uppercase letters the bold/intense variants, and 'x' (or any
// letter not in the table) means "no styling".

use crate::ansi_codes::*;

/// Which half of an LSCOLORS pair a letter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Foreground,
    Background,
}

// ── Letter ↔ sequence mapping ─────────────────────────────────────────────────

struct ColorMapping {
    code: char,
    fore: &'static str,
    back: &'static str,
}

// 'd' and 'h' (and 'D'/'H') both resolve to bright green.  Kept exactly as the
// listing has always rendered them; see DESIGN.md.
static COLOR_MAP: &[ColorMapping] = &[
    ColorMapping { code: 'a', fore: FG_BLACK,             back: BG_BLACK        },
    ColorMapping { code: 'b', fore: FG_RED,               back: BG_RED          },
    ColorMapping { code: 'c', fore: FG_GREEN,             back: BG_GREEN        },
    ColorMapping { code: 'd', fore: FG_BRIGHT_GREEN,      back: BG_BRIGHT_GREEN },
    ColorMapping { code: 'e', fore: FG_BLUE,              back: BG_BLUE         },
    ColorMapping { code: 'f', fore: FG_MAGENTA,           back: BG_MAGENTA      },
    ColorMapping { code: 'g', fore: FG_CYAN,              back: BG_CYAN         },
    ColorMapping { code: 'h', fore: FG_BRIGHT_GREEN,      back: BG_BRIGHT_GREEN },
    ColorMapping { code: 'A', fore: FG_BOLD_BLACK,        back: BG_BRIGHT_BLACK },
    ColorMapping { code: 'B', fore: FG_BOLD_RED,          back: BG_BRIGHT_RED   },
    ColorMapping { code: 'C', fore: FG_BOLD_GREEN,        back: BG_BRIGHT_GREEN },
    ColorMapping { code: 'D', fore: FG_BOLD_BRIGHT_GREEN, back: BG_BRIGHT_GREEN },
    ColorMapping { code: 'E', fore: FG_BOLD_BLUE,         back: BG_BRIGHT_BLUE  },
    ColorMapping { code: 'F', fore: FG_BOLD_MAGENTA,      back: BG_MAGENTA      },
    ColorMapping { code: 'G', fore: FG_BOLD_CYAN,         back: BG_CYAN         },
    ColorMapping { code: 'H', fore: FG_BOLD_BRIGHT_GREEN, back: BG_BRIGHT_GREEN },
];

/// The "default color" letter.
pub const NO_COLOR: char = 'x';

/// Resolve one LSCOLORS letter to an escape sequence.
///
/// Never fails: 'x' and unrecognized letters resolve to the empty string.
pub fn resolve_color(code: char, role: ColorRole) -> &'static str {
    COLOR_MAP
        .iter()
        .find(|mapping| mapping.code == code)
        .map(|mapping| match role {
            ColorRole::Foreground => mapping.fore,
            ColorRole::Background => mapping.back,
        })
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi_codes::is_sgr;

    #[test]
    fn lowercase_foreground() {
        assert_eq!(resolve_color('a', ColorRole::Foreground), "\x1b[0;30m");
        assert_eq!(resolve_color('b', ColorRole::Foreground), "\x1b[0;31m");
        assert_eq!(resolve_color('e', ColorRole::Foreground), "\x1b[0;34m");
        assert_eq!(resolve_color('g', ColorRole::Foreground), "\x1b[0;36m");
    }

    #[test]
    fn lowercase_background() {
        assert_eq!(resolve_color('a', ColorRole::Background), "\x1b[40m");
        assert_eq!(resolve_color('f', ColorRole::Background), "\x1b[45m");
    }

    #[test]
    fn uppercase_is_bold_foreground() {
        assert_eq!(resolve_color('E', ColorRole::Foreground), "\x1b[1;34m");
        assert_eq!(resolve_color('B', ColorRole::Foreground), "\x1b[1;31m");
        assert_eq!(resolve_color('A', ColorRole::Background), "\x1b[100m");
    }

    #[test]
    fn bright_green_duplicates_are_preserved() {
        let d = resolve_color('d', ColorRole::Foreground);
        assert_eq!(d, resolve_color('h', ColorRole::Foreground));
        assert_eq!(resolve_color('D', ColorRole::Foreground), resolve_color('H', ColorRole::Foreground));
        assert_eq!(resolve_color('D', ColorRole::Background), resolve_color('d', ColorRole::Background));
    }

    #[test]
    fn x_and_unknown_resolve_to_nothing() {
        for role in [ColorRole::Foreground, ColorRole::Background] {
            assert_eq!(resolve_color(NO_COLOR, role), "");
            assert_eq!(resolve_color('z', role), "");
            assert_eq!(resolve_color('X', role), "");
            assert_eq!(resolve_color('1', role), "");
            assert_eq!(resolve_color('é', role), "");
        }
    }

    #[test]
    fn every_mapped_sequence_is_sgr() {
        for mapping in COLOR_MAP {
            assert!(is_sgr(mapping.fore));
            assert!(is_sgr(mapping.back));
        }
    }
}
