//! App module - contains the main application state and logic

mod requests;

use crate::settings::Settings;
use crate::theme;
use crate::types::{RequestRecord, RequestStatus, RpcError, RpcResponse};
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Demo signer + simulated wallet behaviour
    pub(crate) account: String,
    pub(crate) request_delay_ms: u64,
    pub(crate) simulate_rejection: bool,
    // Request status dialog state: the app owns both the visibility flag and
    // the status; the dialog only renders them.
    pub(crate) status: RequestStatus,
    pub(crate) show_request_modal: bool,
    // In-flight request plumbing
    pub(crate) active_method: Option<&'static str>,
    pub(crate) pending_outcome: Arc<Mutex<Option<Result<RpcResponse, RpcError>>>>,
    pub(crate) runtime: tokio::runtime::Runtime,
    // History of finished requests
    pub(crate) history: Vec<RequestRecord>,
    // Window geometry tracking
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            account: settings.account,
            request_delay_ms: settings.request_delay_ms,
            simulate_rejection: settings.simulate_rejection,
            status: RequestStatus::Idle,
            show_request_modal: false,
            active_method: None,
            pending_outcome: Arc::new(Mutex::new(None)),
            runtime: tokio::runtime::Runtime::new().expect("failed to start tokio runtime"),
            history: Vec::new(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            account: self.account.clone(),
            request_delay_ms: self.request_delay_ms,
            simulate_rejection: self.simulate_rejection,
        };
        settings.save(&self.data_dir);
    }

    /// Reopen the dialog showing the outcome of a past request.
    pub fn show_record(&mut self, idx: usize) {
        if let Some(record) = self.history.get(idx) {
            self.status = match &record.outcome {
                Ok(response) => RequestStatus::Succeeded(response.clone()),
                Err(error) => RequestStatus::Failed(error.clone()),
            };
            self.show_request_modal = true;
        }
    }
}
