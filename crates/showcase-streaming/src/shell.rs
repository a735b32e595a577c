//! Document shell: what is flushed before and after the streamed sections.

/// One element inside `<head>`, rendered in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Meta { name: String, content: String },
    /// Inline CSS.
    Style(String),
    /// Inline script, run before the body is parsed.
    Script(String),
}

impl HeadTag {
    fn render(&self) -> String {
        match self {
            HeadTag::Meta { name, content } => format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ),
            HeadTag::Style(css) => format!("<style>{}</style>", css),
            HeadTag::Script(js) => format!("<script>{}</script>", js),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    pub title: String,
    pub tags: Vec<HeadTag>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_meta(self, name: &str, content: &str) -> Self {
        self.with_tag(HeadTag::Meta {
            name: name.to_string(),
            content: content.to_string(),
        })
    }

    pub fn with_style(self, css: &str) -> Self {
        self.with_tag(HeadTag::Style(css.to_string()))
    }

    pub fn with_script(self, js: &str) -> Self {
        self.with_tag(HeadTag::Script(js.to_string()))
    }

    fn with_tag(mut self, tag: HeadTag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Charset, escaped title, then tags in insertion order.
    pub fn render(&self) -> String {
        let mut html = format!(
            "<meta charset=\"utf-8\">\n<title>{}</title>\n",
            html_escape(&self.title)
        );
        for tag in &self.tags {
            html.push_str(&tag.render());
            html.push('\n');
        }
        html
    }
}

/// Everything around the streamed sections.
///
/// `render_opening` is the first chunk on the wire and `render_closing` the
/// last; sections are written in between.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    /// Opening `<body>` plus chrome above the sections.
    pub body_start: String,
    /// Chrome below the sections through `</html>`.
    pub body_end: String,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n".to_string(),
            body_end: "</body>\n</html>".to_string(),
        }
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    pub fn render_opening(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{}</head>\n{}",
            self.head.render(),
            self.body_start
        )
    }

    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }

    /// Whole document in one string, for non-streamed rendering.
    pub fn render_document(&self, sections: &[&str]) -> String {
        let mut html = self.render_opening();
        html.extend(sections.iter().copied());
        html.push_str(&self.body_end);
        html
    }
}

/// Escape text for element content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
