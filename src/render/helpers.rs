// ABOUTME: Handlebars helpers used by the page template
// ABOUTME: Filters URLs bound into href and src attributes down to safe schemes

use handlebars::{Context, Handlebars, Helper, Output, RenderContext, RenderError};

/// Written in place of a URL whose scheme is not allowed.
pub const UNSAFE_URL_REPLACEMENT: &str = "#ZgotmplZ";

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Returns `url` unchanged if it is relative or uses an allowed scheme.
pub fn filter_url(url: &str) -> &str {
    match url.find(':') {
        // A colon after a slash is part of a path, not a scheme.
        Some(idx) if !url[..idx].contains('/') => {
            let scheme = &url[..idx];
            if SAFE_SCHEMES
                .iter()
                .any(|safe| scheme.eq_ignore_ascii_case(safe))
            {
                url
            } else {
                UNSAFE_URL_REPLACEMENT
            }
        }
        _ => url,
    }
}

/// Safe URL helper - filters the scheme, then HTML-escapes the result
pub fn safe_url_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let url = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("safe_url helper requires a string parameter"))?;

    out.write(&handlebars::html_escape(filter_url(url)))?;
    Ok(())
}

/// Register the page template helpers with a Handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("safe_url", Box::new(safe_url_helper));
}
