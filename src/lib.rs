//! Covidmapsrv - COVID-19 country marker service
//!
//! This library provides the core functionality for covidmapsrv,
//! which fetches a per-country COVID-19 case snapshot and renders it
//! as a styled, geo-located marker layer for an interactive map page.

use crate::config::Config;
use crate::models::marker::MarkerLayer;
use crate::services::fetch::SnapshotService;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod services;

/// Shared handles for the HTTP handlers. The marker layer is built at
/// most once per process lifetime; repeated requests observe the same
/// rendered layer.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub snapshot_service: Arc<SnapshotService>,
    pub marker_layer: Arc<OnceCell<MarkerLayer>>,
}
