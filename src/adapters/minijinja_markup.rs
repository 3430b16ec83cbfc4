use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, Value as TemplateValue};
use serde_json::Value;

use crate::domain::AppError;
use crate::domain::format::{MarkupRenderer, MarkupTemplate};

static MARKUP_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/markup");

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Markup renderer using Minijinja with the embedded `.html` templates.
///
/// `.html` names turn on auto-escaping, so context values are escaped unless
/// a template applies `|safe`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaMarkupRenderer;

impl MinijinjaMarkupRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupRenderer for MinijinjaMarkupRenderer {
    fn render(&self, template: MarkupTemplate, context: &Value) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_loader(|name| {
                Ok(MARKUP_DIR.get_file(name).and_then(|f| f.contents_utf8()).map(str::to_string))
            });
            env
        });

        let name = template.file_name();
        let tmpl = env.get_template(name).map_err(|err| render_error(name, err))?;
        tmpl.render(TemplateValue::from_serialize(context))
            .map(|out| out.trim().to_string())
            .map_err(|err| render_error(name, err))
    }
}

fn render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Render { template: template_name.to_string(), reason: err.to_string() }
}
