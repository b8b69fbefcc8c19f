//! Page rendering seam
//!
//! Templating is an external collaborator: handlers hand a template name and
//! a context mapping to a `PageRenderer` and get back the response body.
//! Handlers themselves only pick between rendering and redirecting.

use axum::response::{Html, IntoResponse, Response};
use serde_json::Value;
use tower_sessions::Session;

use crate::state::AppState;
use crate::utils::errors::Result;
use crate::utils::flash::FlashQueue;

pub trait PageRenderer: Send + Sync {
    fn render(&self, template: &str, context: &Value) -> Result<String>;
}

/// Development renderer used until a template pack is wired in
///
/// Emits a minimal HTML document carrying the template name and the context
/// mapping, so every page flow can be exercised end to end.
pub struct DevRenderer;

impl PageRenderer for DevRenderer {
    fn render(&self, template: &str, context: &Value) -> Result<String> {
        let body = serde_json::to_string_pretty(context)?;
        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{template}</title></head>\n<body>\n<pre>{body}</pre>\n</body>\n</html>\n"
        ))
    }
}

/// Render a page, draining pending flash messages into the context
pub async fn render_page(
    state: &AppState,
    session: &Session,
    template: &str,
    mut context: Value,
) -> Result<Response> {
    let messages = FlashQueue::take(session).await?;
    if let Value::Object(map) = &mut context {
        map.insert("messages".to_string(), serde_json::to_value(messages)?);
    }

    let body = state.renderer.render(template, &context)?;
    Ok(Html(body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dev_renderer_carries_template_and_context() {
        let body = DevRenderer
            .render("hostel/complaints", &json!({"complaints": []}))
            .unwrap();
        assert!(body.contains("hostel/complaints"));
        assert!(body.contains("complaints"));
        assert!(body.starts_with("<!DOCTYPE html>"));
    }
}
