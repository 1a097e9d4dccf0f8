use tera::{Context, Tera};

use crate::error::ApiError;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const HEADING: &str = "JSON to Beautiful PDF";

/// Compile the HTML templates. The `.html` name turns on autoescaping.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
    Ok(tera)
}

/// Render the upload form, optionally with an error notice above it.
pub fn render_index(tera: &Tera, error: Option<&str>) -> Result<String, ApiError> {
    let mut context = Context::new();
    context.insert("heading", HEADING);
    context.insert("error", &error);

    Ok(tera.render(INDEX_TEMPLATE, &context)?)
}
