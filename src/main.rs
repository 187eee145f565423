#![windows_subsystem = "windows"]
//! Wallet RPC Console - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod rpc;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::info;
use ui::components::truncate_middle;
use ui::request_modal::request_status_modal;
use utils::get_data_dir;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "wallet-rpc-console.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wallet_rpc_console=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Wallet RPC Console starting");

    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(900.0, 620.0)))
        .with_min_inner_size([760.0, 520.0])
        .with_title(APP_TITLE);

    // Window/taskbar icon rasterized from the inline SVG
    {
        let (pixels, w, h) = utils::rasterize_icon(64);
        let icon = egui::IconData {
            rgba: pixels,
            width: w,
            height: h,
        };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Pick up finished requests from the runtime
        self.poll_request_outcome();

        // Request status dialog; the app owns the visibility flag and flips
        // it when the dialog reports a dismiss gesture.
        if request_status_modal(ctx, self.show_request_modal, &self.status) {
            self.show_request_modal = false;
        }

        self.render_sidebar(ctx);
        self.render_history(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down, saving settings");
        self.save_settings();
    }
}

impl App {
    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("method_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                // Header
                ui.add_space(4.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(egui_phosphor::regular::WALLET)
                            .size(30.0)
                            .color(theme::ACCENT),
                    );
                    ui.add_space(2.0);
                    ui.label(
                        egui::RichText::new("WALLET RPC CONSOLE")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                });
                ui.add_space(12.0);

                // Signer account
                theme::card_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(
                        egui::RichText::new("SIGNER")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                    ui.label(
                        egui::RichText::new(truncate_middle(&self.account, 21))
                            .monospace()
                            .color(theme::TEXT_SECONDARY),
                    )
                    .on_hover_text(&self.account);
                });
                ui.add_space(12.0);

                // Demo request methods
                ui.label(
                    egui::RichText::new("REQUESTS")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(4.0);
                let pending = self.status.is_pending();
                for method in rpc::DEMO_METHODS {
                    let button = theme::button(format!("{}  {}", method.icon, method.name));
                    let response =
                        ui.add_enabled(!pending, button.min_size(egui::vec2(ui.available_width(), 30.0)));
                    if response.clicked() {
                        self.launch_request(ctx, method);
                    }
                }
                // A resolved request whose dialog was dismissed can be brought back
                if self.status.is_resolved() && !self.show_request_modal {
                    ui.add_space(2.0);
                    if ui
                        .selectable_label(
                            false,
                            egui::RichText::new(format!(
                                "{}  View last result",
                                egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                            ))
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                        )
                        .clicked()
                    {
                        self.show_request_modal = true;
                    }
                }
                ui.add_space(12.0);

                // Simulated wallet behaviour
                ui.label(
                    egui::RichText::new("WALLET SIMULATION")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(4.0);
                ui.add(
                    egui::Slider::new(&mut self.request_delay_ms, 0..=5000)
                        .suffix(" ms")
                        .text("latency"),
                );
                ui.checkbox(&mut self.simulate_rejection, "Reject requests");

                // Version pinned to the bottom
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", APP_VERSION))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                });
            });
    }

    fn render_history(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                let last_method = self.history.last().map(|r| r.method.clone());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Request History")
                            .size(theme::FONT_HEADING)
                            .strong(),
                    );
                    if let Some(method_name) = last_method {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let repeat = theme::button_accent(format!(
                                "{}  Repeat last",
                                egui_phosphor::regular::ARROW_CLOCKWISE
                            ));
                            if ui.add_enabled(!self.status.is_pending(), repeat).clicked() {
                                if let Some(method) = rpc::method_by_name(&method_name) {
                                    self.launch_request(ctx, method);
                                }
                            }
                        });
                    }
                });
                ui.add_space(8.0);

                if self.history.is_empty() {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("No requests yet. Pick a method from the sidebar.")
                                .color(theme::TEXT_DIM),
                        );
                    });
                    return;
                }

                let mut reopen = None;
                egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    // Newest first
                    for (idx, record) in self.history.iter().enumerate().rev() {
                        let (icon, color, summary) = match &record.outcome {
                            Ok(response) => (
                                egui_phosphor::regular::CHECK,
                                theme::STATUS_SUCCESS,
                                response
                                    .display_lines()
                                    .pop()
                                    .unwrap_or_default(),
                            ),
                            Err(error) => (
                                egui_phosphor::regular::X_CIRCLE,
                                theme::STATUS_FAILURE,
                                error.display_lines().pop().unwrap_or_default(),
                            ),
                        };

                        ui.horizontal(|ui| {
                            ui.colored_label(color, icon);
                            if ui
                                .selectable_label(
                                    false,
                                    egui::RichText::new(&record.method).strong(),
                                )
                                .on_hover_text("Show in dialog")
                                .clicked()
                            {
                                reopen = Some(idx);
                            }
                            ui.label(
                                egui::RichText::new(truncate_middle(&summary, 48))
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_MUTED),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(
                                            record.finished_at.format("%H:%M:%S").to_string(),
                                        )
                                        .size(theme::FONT_SMALL)
                                        .color(theme::TEXT_DIM),
                                    );
                                },
                            );
                        });
                    }
                });
                if let Some(idx) = reopen {
                    self.show_record(idx);
                }
            });
    }
}
