use std::sync::Arc;

use tera::Tera;

use flashpdf_export::styles::DocumentStyles;

use crate::page;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub styles: Arc<DocumentStyles>,
    pub pages: Arc<Tera>,
}

impl AppState {
    pub fn new(styles: DocumentStyles) -> Result<Self, tera::Error> {
        Ok(Self {
            styles: Arc::new(styles),
            pages: Arc::new(page::load_templates()?),
        })
    }
}
