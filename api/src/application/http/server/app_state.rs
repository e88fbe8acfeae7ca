use std::sync::Arc;

use spoonderful_core::application::SpoonderfulService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SpoonderfulService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SpoonderfulService) -> Self {
        Self { args, service }
    }
}
