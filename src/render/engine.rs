// ABOUTME: Page renderer built on Handlebars with a compiled-in template
// ABOUTME: Binds a decoded Config to the fixed page layout and produces escaped HTML

use handlebars::Handlebars;
use tracing::debug;

use super::error::Result;
use super::helpers;
use crate::site::Config;

/// The page layout. Fixed at build time and not configurable at runtime.
pub const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html.hbs");

const PAGE_TEMPLATE_NAME: &str = "index";

#[derive(Clone)]
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    /// Create a renderer with the page template compiled and registered
    pub fn new() -> Result<Self> {
        Self::from_source(PAGE_TEMPLATE)
    }

    fn from_source(source: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Every field the template names is always serialized, so a missing
        // variable can only mean the template itself is wrong.
        handlebars.set_strict_mode(true);
        handlebars.set_dev_mode(false);
        handlebars.register_escape_fn(handlebars::html_escape);
        helpers::register_helpers(&mut handlebars);

        handlebars.register_template_string(PAGE_TEMPLATE_NAME, source)?;
        debug!("Registered page template ({} bytes)", source.len());

        Ok(Self { handlebars })
    }

    /// Render the page for `config`
    pub fn render(&self, config: &Config) -> Result<String> {
        let html = self.handlebars.render(PAGE_TEMPLATE_NAME, config)?;
        debug!("Rendered page ({} bytes)", html.len());
        Ok(html)
    }
}
