use crate::core::types::Tab;
use crate::ui::ansi::{ACTIVE_TAB_STYLE, FG_LIGHT_GRAY, STYLE_BOLD, STYLE_ITALIC, styled};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};
use strum::IntoEnumIterator;

const INNER_WIDTH: usize = 44;

/// Screen furniture around the views: title box and tab strip.
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_title<W: Write + ?Sized>(&self, today: &str, out: &mut W) -> io::Result<()> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{} {}",
            styled(STYLE_BOLD, "D A Y B O A R D"),
            styled(FG_LIGHT_GRAY, &format!("(v{version})"))
        );
        let subtitle = styled(STYLE_ITALIC, &format!("Today is {today}"));
        writeln!(out, "╭{}╮", "─".repeat(INNER_WIDTH))?;
        writeln!(out, "│{}│", self.center_in_box(&title, INNER_WIDTH))?;
        writeln!(out, "│{}│", self.center_in_box(&subtitle, INNER_WIDTH))?;
        writeln!(out, "╰{}╯", "─".repeat(INNER_WIDTH))
    }

    pub fn tab_bar(&self, active: Tab) -> String {
        Tab::iter()
            .map(|tab| {
                let label = format!(" {} ", tab.as_ref().to_uppercase());
                if tab == active {
                    styled(ACTIVE_TAB_STYLE, &format!("[{label}]"))
                } else {
                    format!(" {label} ")
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }

    pub fn render_tab_bar<W: Write + ?Sized>(&self, active: Tab, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.tab_bar(active))
    }

    pub fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
