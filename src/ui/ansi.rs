// ANSI styling shared by the planner views.

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text.
pub const STYLE_BOLD: &str = crate::csi!("1m");
/// Italic text.
pub const STYLE_ITALIC: &str = crate::csi!("3m");
/// Swap foreground and background; marks today in the calendar.
pub const STYLE_REVERSE: &str = crate::csi!("7m");
/// Light gray foreground.
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
/// Bold white on dark gray; the active tab.
pub const ACTIVE_TAB_STYLE: &str = crate::csi2!("1m", "48;5;236m");

/// Wraps `s` in `style` and a reset.
pub fn styled(style: &str, s: &str) -> String {
    format!("{style}{s}{STYLE_RESET}")
}
