//! Structured SVG document builder
//!
//! Documents are assembled element by element instead of through one big
//! template string, so text content is always escaped and attribute ordering
//! stays fixed across every producer.

/// Build one SVG document incrementally
#[derive(Debug)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    style: Option<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgDocument {
    /// Start a document with explicit pixel dimensions; the viewBox matches
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            style: None,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        "  ".repeat(self.indent)
    }

    /// Embed a font `@import` in the document's style block
    pub fn import_font(&mut self, url: &str) {
        self.style = Some(format!("@import url('{}');", url.replace('&', "&amp;")));
    }

    /// Add a rounded rectangle spanning the full box from the origin
    pub fn rect(&mut self, width: u32, height: u32, rx: u32, fill: &str) {
        self.elements.push(format!(
            r#"{}<rect width="{}" height="{}" rx="{}" fill="{}"/>"#,
            self.indent_str(),
            width,
            height,
            rx,
            fill
        ));
    }

    /// Open a group; a `fill` here is inherited by the group's children,
    /// which is how icon fragments get tinted to the badge foreground
    pub fn start_group(&mut self, transform: &str, fill: Option<&str>) {
        let fill_attr = fill
            .map(|value| format!(r#" fill="{}""#, value))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"{}<g transform="{}"{}>"#,
            self.indent_str(),
            transform,
            fill_attr
        ));
        self.indent += 1;
    }

    /// Close the innermost group
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Push pre-built markup verbatim at the current indent
    pub fn raw(&mut self, markup: &str) {
        self.elements.push(format!("{}{}", self.indent_str(), markup));
    }

    /// Add a center-anchored text element
    pub fn centered_text(
        &mut self,
        x: f64,
        y: f64,
        font_family: &str,
        font_size: u32,
        fill: &str,
        content: &str,
    ) {
        self.elements.push(format!(
            r#"{}<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="800" fill="{}" text-anchor="middle">{}</text>"#,
            self.indent_str(),
            x,
            y,
            font_family,
            font_size,
            fill,
            escape_xml(content)
        ));
    }

    /// Assemble the final document
    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');

        if let Some(style) = &self.style {
            svg.push_str("  <defs>\n    <style type=\"text/css\">\n      ");
            svg.push_str(style);
            svg.push_str("\n    </style>\n  </defs>\n");
        }

        for element in &self.elements {
            svg.push_str(element);
            svg.push('\n');
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Escape special XML characters in text content
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
