//! Request status dialog
//!
//! A dismissible overlay showing where a JSON-RPC request currently is in its
//! lifecycle: pending approval in the wallet, resolved with a formatted
//! response, or failed with an error. Purely presentational — the caller owns
//! the visibility flag and the status, and reacts to the returned dismiss
//! signal by hiding the dialog. The dialog never closes itself when the
//! status changes.

use crate::theme;
use crate::types::{RequestStatus, RpcError, RpcResponse};
use crate::ui::components::close_button;
use eframe::egui;

const TITLE_PENDING: &str = "Pending JSON-RPC Request";
const TITLE_SUCCESS: &str = "JSON-RPC Request Response";
const TITLE_FAILURE: &str = "JSON-RPC Request Failure";
const PENDING_HINT: &str = "Approve or reject request using your wallet";

/// Show the dialog when `is_visible` is true. Returns true when the user asks
/// to dismiss it (close button, backdrop click, or escape) — once per
/// gesture, never from a status change alone.
pub fn request_status_modal(
    ctx: &egui::Context,
    is_visible: bool,
    status: &RequestStatus,
) -> bool {
    if !is_visible {
        return false;
    }

    let mut dismissed = false;

    let modal_area = egui::Modal::default_area(egui::Id::new("request_status_modal"))
        .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0);
    let modal = egui::Modal::new(egui::Id::new("request_status_modal"))
        .area(modal_area)
        .backdrop_color(egui::Color32::from_black_alpha(180))
        .frame(theme::modal_frame());
    let modal_response = modal.show(ctx, |ui| {
        ui.set_min_width(theme::MODAL_WIDTH);
        ui.set_max_width(theme::MODAL_WIDTH);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if close_button(ui).clicked() {
                dismissed = true;
            }
        });
        ui.add_space(theme::SPACING_SM);

        match status {
            RequestStatus::Idle => {}
            RequestStatus::Pending => render_pending(ui),
            RequestStatus::Succeeded(response) => render_response(ui, response),
            RequestStatus::Failed(error) => render_error(ui, error),
        }

        ui.add_space(theme::SPACING_MD);
    });

    if modal_response.should_close() {
        dismissed = true;
    }
    dismissed
}

fn title(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(theme::FONT_HEADING)
                .strong()
                .color(color),
        );
    });
    ui.add_space(theme::SPACING_MD);
}

fn render_pending(ui: &mut egui::Ui) {
    title(ui, TITLE_PENDING, theme::TEXT_PRIMARY);
    ui.vertical_centered(|ui| {
        ui.add_space(theme::SPACING_XL);
        ui.add(egui::Spinner::new().size(28.0).color(theme::ACCENT));
        ui.add_space(theme::SPACING_XL);
        ui.label(egui::RichText::new(PENDING_HINT).color(theme::STATUS_PENDING));
    });
}

fn render_response(ui: &mut egui::Ui, response: &RpcResponse) {
    title(ui, TITLE_SUCCESS, theme::STATUS_SUCCESS);
    for field in &response.fields {
        field_row(ui, &field.name, field.value.as_deref().unwrap_or_default());
    }
}

fn render_error(ui: &mut egui::Ui, error: &RpcError) {
    title(ui, TITLE_FAILURE, theme::STATUS_FAILURE);
    field_row(ui, "Method", &error.method);
    field_row(ui, "Error", &error.error);
}

/// One `"<name>: <value>"` line: bold name, light value, wrapped.
fn field_row(ui: &mut egui::Ui, name: &str, value: &str) {
    ui.add_space(theme::SPACING_SM);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
        ui.label(
            egui::RichText::new(format!("{}:", name))
                .size(theme::FONT_BODY)
                .strong(),
        );
        ui.label(
            egui::RichText::new(value)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
    });
}
