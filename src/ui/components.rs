//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use eframe::egui;

/// Circular white close control, painted to match the wallet's overlay sheet.
pub fn close_button(ui: &mut egui::Ui) -> egui::Response {
    let size = theme::CLOSE_BUTTON_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let fill = if response.hovered() {
            theme::TEXT_SECONDARY
        } else {
            egui::Color32::WHITE
        };
        painter.circle_filled(rect.center(), size / 2.0, fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::X,
            egui::FontId::proportional(size * 0.5),
            theme::BG_BASE,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Shorten a long hex string to "0x1234…abcd" form for display.
pub fn truncate_middle(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len || max_len < 5 {
        return s.to_string();
    }
    let keep = max_len - 1;
    let head = keep / 2 + keep % 2;
    let tail = keep / 2;
    let chars: Vec<char> = s.chars().collect();
    let mut out: String = chars[..head].iter().collect();
    out.push('…');
    out.extend(&chars[chars.len() - tail..]);
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_middle;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_middle("0xabc", 12), "0xabc");
    }

    #[test]
    fn long_address_is_shortened() {
        let addr = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
        let short = truncate_middle(addr, 13);
        assert_eq!(short.chars().count(), 13);
        assert!(short.starts_with("0xf39F"));
        assert!(short.ends_with("2266"));
        assert!(short.contains('…'));
    }

    #[test]
    fn tiny_budget_leaves_string_alone() {
        assert_eq!(truncate_middle("0123456789", 3), "0123456789");
    }
}
