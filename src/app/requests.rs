//! Simulated wallet request driver
//!
//! Dispatches a demo JSON-RPC request on the tokio runtime and hands the
//! formatted outcome back to the UI thread through a shared slot polled each
//! frame. Dismissing the dialog never cancels the in-flight request; the
//! outcome still lands in the history when it arrives.

use super::App;
use crate::rpc::{self, RpcMethod};
use crate::types::{RequestRecord, RequestStatus};
use chrono::Local;
use eframe::egui;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

impl App {
    pub fn launch_request(&mut self, ctx: &egui::Context, method: &'static RpcMethod) {
        if self.status.is_pending() {
            return;
        }

        info!(method = method.name, "Dispatching JSON-RPC request");
        self.status = RequestStatus::Pending;
        self.show_request_modal = true;
        self.active_method = Some(method.name);

        let outcome = Arc::clone(&self.pending_outcome);
        let delay = Duration::from_millis(self.request_delay_ms);
        let reject = self.simulate_rejection;
        let account = self.account.clone();
        let name = method.name;
        let signs = method.signs;
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let result = if reject {
                Err(rpc::rejection(name))
            } else {
                Ok(rpc::format_response(
                    name,
                    &account,
                    signs.then_some(true),
                    &rpc::sample_result(name),
                ))
            };
            *outcome.lock().unwrap() = Some(result);
            ctx.request_repaint();
        });
    }

    pub fn poll_request_outcome(&mut self) {
        let outcome = self.pending_outcome.lock().unwrap().take();
        let Some(result) = outcome else {
            return;
        };

        let method = self.active_method.take().unwrap_or("unknown").to_string();
        match &result {
            Ok(response) => {
                info!(method = %method, fields = response.fields.len(), "Request succeeded");
            }
            Err(error) => {
                warn!(method = %method, error = %error.error, "Request failed");
            }
        }

        // Update the status in place; the dialog stays open or closed exactly
        // as the user left it.
        self.status = match &result {
            Ok(response) => RequestStatus::Succeeded(response.clone()),
            Err(error) => RequestStatus::Failed(error.clone()),
        };
        self.history.push(RequestRecord {
            method,
            finished_at: Local::now(),
            outcome: result,
        });
    }
}
