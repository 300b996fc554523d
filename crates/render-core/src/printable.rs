//! Standalone print document for the preview.

use crate::error::RenderError;
use handlebars::Handlebars;
use serde::Serialize;

const TEMPLATE_NAME: &str = "printable";

const PRINTABLE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<style>
{{{styles}}}
body {
    margin: 0;
    padding: 20px;
    display: flex;
    justify-content: center;
    align-items: center;
    min-height: 100vh;
    background-color: #f5f5f5;
}
.announcement-preview {
    box-shadow: 0 5px 15px rgba(0,0,0,0.1);
    margin: 0 auto;
}
@media print {
    body {
        background-color: white;
        padding: 0;
    }
    .announcement-preview {
        box-shadow: none;
        margin: 0;
    }
}
.debug-info {
    display: none !important;
}
</style>
</head>
<body>
{{{preview}}}
{{#if auto_print}}
<script>
window.onload = function() {
    setTimeout(function() {
        window.print();
    }, {{print_delay_ms}});
};
</script>
{{/if}}
</body>
</html>
"#;

/// Data for one printable document. `styles` and `preview` are inserted raw.
#[derive(Debug, Clone, Serialize)]
pub struct PrintableContext {
    pub title: String,
    pub styles: String,
    pub preview: String,
    pub auto_print: bool,
    pub print_delay_ms: u32,
}

impl PrintableContext {
    pub fn new(styles: impl Into<String>, preview: impl Into<String>) -> Self {
        Self {
            title: "Printable Announcement".to_string(),
            styles: styles.into(),
            preview: preview.into(),
            auto_print: true,
            print_delay_ms: 500,
        }
    }
}

/// Renders [`PrintableContext`] into a complete HTML document.
#[derive(Debug)]
pub struct PrintableRenderer {
    engine: Handlebars<'static>,
}

impl PrintableRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(true);
        engine
            .register_template_string(TEMPLATE_NAME, PRINTABLE_TEMPLATE)
            .map_err(Box::new)?;
        Ok(Self { engine })
    }

    pub fn render(&self, context: &PrintableContext) -> Result<String, RenderError> {
        let html = self.engine.render(TEMPLATE_NAME, context)?;
        log::debug!("Rendered printable document ({} bytes)", html.len());
        Ok(html)
    }
}
