// ansi_codes.rs — ANSI escape sequence constants
//
// SGR sequences used by the LSCOLORS color letters.  Each letter selects one
// of these for the foreground role and one for the background role.

/// Reset all attributes sequence: ESC[0m
pub const RESET_ALL: &str = "\x1b[0m";

// ── Foreground, normal weight: ESC[0;3Xm ──────────────────────────────────────

pub const FG_BLACK:   &str = "\x1b[0;30m";
pub const FG_RED:     &str = "\x1b[0;31m";
pub const FG_GREEN:   &str = "\x1b[0;32m";
pub const FG_BLUE:    &str = "\x1b[0;34m";
pub const FG_MAGENTA: &str = "\x1b[0;35m";
pub const FG_CYAN:    &str = "\x1b[0;36m";

/// High-intensity green: ESC[0;92m
pub const FG_BRIGHT_GREEN: &str = "\x1b[0;92m";

// ── Foreground, bold: ESC[1;3Xm ───────────────────────────────────────────────

pub const FG_BOLD_BLACK:   &str = "\x1b[1;30m";
pub const FG_BOLD_RED:     &str = "\x1b[1;31m";
pub const FG_BOLD_GREEN:   &str = "\x1b[1;32m";
pub const FG_BOLD_BLUE:    &str = "\x1b[1;34m";
pub const FG_BOLD_MAGENTA: &str = "\x1b[1;35m";
pub const FG_BOLD_CYAN:    &str = "\x1b[1;36m";

/// Bold high-intensity green: ESC[1;92m
pub const FG_BOLD_BRIGHT_GREEN: &str = "\x1b[1;92m";

// ── Background, normal: ESC[4Xm ───────────────────────────────────────────────

pub const BG_BLACK:   &str = "\x1b[40m";
pub const BG_RED:     &str = "\x1b[41m";
pub const BG_GREEN:   &str = "\x1b[42m";
pub const BG_BLUE:    &str = "\x1b[44m";
pub const BG_MAGENTA: &str = "\x1b[45m";
pub const BG_CYAN:    &str = "\x1b[46m";

// ── Background, high intensity: ESC[10Xm ──────────────────────────────────────
//
// No leading "0;" here: the background half is appended after the foreground
// half, and a reset inside it would drop the bold attribute.

pub const BG_BRIGHT_BLACK: &str = "\x1b[100m";
pub const BG_BRIGHT_RED:   &str = "\x1b[101m";
pub const BG_BRIGHT_GREEN: &str = "\x1b[102m";
pub const BG_BRIGHT_BLUE:  &str = "\x1b[104m";





////////////////////////////////////////////////////////////////////////////////
//
//  is_sgr
//
//  True if `s` is exactly one SGR sequence: ESC '[' params 'm'.
//
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
pub(crate) fn is_sgr(s: &str) -> bool {
    s.strip_prefix("\x1b[")
        .and_then(|rest| rest.strip_suffix('m'))
        .is_some_and(|params| params.chars().all(|c| c.is_ascii_digit() || c == ';'))
}
