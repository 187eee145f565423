//! UI components module

pub mod components;
pub mod request_modal;
