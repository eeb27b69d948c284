use crate::core::types::PaletteColor;
use crate::ui::width_util::WidthUtil;

#[test]
fn width_util_strips_ansi_for_visible_width() {
    let util = WidthUtil::default();
    let s = PaletteColor::Red.paint("Red");
    assert_eq!(util.visible_width(&s), 3);
}

#[test]
fn width_util_strip_ansi_keeps_multibyte_text() {
    let s = PaletteColor::Blue.paint("수업 ┆");
    assert_eq!(WidthUtil::strip_ansi(&s), "수업 ┆");
}

#[test]
fn width_util_pad_visible_preserves_width() {
    let util = WidthUtil::default();
    assert_eq!(util.pad_visible("abc", 5), "abc  ");
    assert_eq!(util.pad_visible("abcdef", 5), "abcdef");
}

#[test]
fn width_util_truncates_with_ellipsis() {
    let util = WidthUtil::default();
    assert_eq!(util.truncate("Linear Algebra", 6), "Linea…");
    assert_eq!(util.truncate("Gym", 6), "Gym");
    assert_eq!(util.truncate("Gym", 0), "");
}

#[test]
fn width_util_cell_width_stays_in_bounds() {
    let util = WidthUtil::default();
    let w = util.cell_width_for(7, 5, 4, 14);
    assert!((4..=14).contains(&w));
}
