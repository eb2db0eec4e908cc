use crate::config::SiteConfig;
use crate::renderer::traits::OutputFormat;
use crate::renderer::tree::*;

/// Serializes a display tree in the requested format.
///
/// Only [`OutputFormat::Json`] can fail.
pub fn render_tree(tree: &DisplayTree, format: OutputFormat) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Html => HtmlWriter::default().write(tree),
        OutputFormat::Markdown => MarkdownWriter.write(tree),
        OutputFormat::Text => TextWriter.write(tree),
        OutputFormat::Json => serde_json::to_string_pretty(tree)?,
    })
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(Default)]
pub struct HtmlWriter {
    output: String,
}

impl HtmlWriter {
    pub fn write(mut self, tree: &DisplayTree) -> String {
        for node in &tree.nodes {
            self.write_node(node, 0);
        }
        self.output
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.output.push_str(&"  ".repeat(depth));
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn write_node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Heading { level, text } => {
                self.line(depth, &format!("<h{0}>{1}</h{0}>", level, escape_html(text)));
            }
            Node::Paragraph {
                text,
                preserve_whitespace,
            } => {
                let open = if *preserve_whitespace {
                    "<p style=\"white-space: pre-line\">"
                } else {
                    "<p>"
                };
                self.line(depth, &format!("{}{}</p>", open, escape_html(text)));
            }
            Node::Code { text } => {
                self.line(depth, &format!("<code>{}</code>", escape_html(text)));
            }
            Node::Table(table) => self.write_table(table, depth),
            Node::Section { class, children } => {
                self.line(depth, &format!("<div class=\"{}\">", escape_html(class)));
                for child in children {
                    self.write_node(child, depth + 1);
                }
                self.line(depth, "</div>");
            }
        }
    }

    fn write_table(&mut self, table: &Table, depth: usize) {
        self.line(depth, "<table>");
        self.line(depth + 1, "<thead>");
        self.line(depth + 2, "<tr>");
        for header in &table.headers {
            self.line(depth + 3, &format!("<th colspan=\"1\">{}</th>", escape_html(header)));
        }
        self.line(depth + 2, "</tr>");
        self.line(depth + 1, "</thead>");
        self.line(depth + 1, "<tbody>");
        for row in &table.rows {
            self.line(depth + 2, "<tr>");
            for (i, cell) in row.iter().enumerate() {
                let tag = if table.row_headers && i == 0 { "th" } else { "td" };
                self.line(
                    depth + 3,
                    &format!("<{0} colspan=\"1\">{1}</{0}>", tag, escape_html(cell)),
                );
            }
            self.line(depth + 2, "</tr>");
        }
        self.line(depth + 1, "</tbody>");
        self.line(depth, "</table>");
    }
}

/// Wraps rendered HTML in a standalone page themed by [`SiteConfig`].
pub struct HtmlPage<'a> {
    config: &'a SiteConfig,
}

impl<'a> HtmlPage<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// `source` is the path of the documented file, used for the edit link.
    pub fn render(&self, title: &str, source: Option<&str>, tree: &DisplayTree) -> String {
        let config = self.config;
        let mut page = String::new();

        page.push_str("<!DOCTYPE html>\n");
        if config.dark_mode {
            page.push_str("<html data-theme=\"dark\">\n");
        } else {
            page.push_str("<html>\n");
        }

        page.push_str("<head>\n");
        page.push_str("  <meta charset=\"utf-8\" />\n");
        page.push_str(&format!(
            "  <title>{}{}</title>\n",
            escape_html(title),
            escape_html(&config.title_suffix)
        ));
        for meta in &config.head {
            page.push_str(&format!(
                "  <meta name=\"{}\" content=\"{}\" />\n",
                escape_html(&meta.name),
                escape_html(&meta.content)
            ));
        }
        page.push_str("</head>\n");

        page.push_str("<body>\n");
        page.push_str("<nav>\n");
        page.push_str(&format!(
            "  <span class=\"logo\">{}</span>\n",
            escape_html(&config.logo_text)
        ));
        if !config.project_link.is_empty() {
            page.push_str(&format!(
                "  <a href=\"{}\">GitHub</a>\n",
                escape_html(&config.project_link)
            ));
        }
        page.push_str("</nav>\n");

        page.push_str("<main>\n");
        page.push_str(&HtmlWriter::default().write(tree));
        page.push_str("</main>\n");

        if config.footer {
            page.push_str("<footer>\n");
            if let Some(link) = self.edit_link(source) {
                page.push_str(&format!(
                    "  <a href=\"{}\">{}</a>\n",
                    escape_html(&link),
                    escape_html(config.footer_edit_link.trim())
                ));
            }
            if !config.footer_text.is_empty() {
                page.push_str(&format!("  <p>{}</p>\n", escape_html(&config.footer_text)));
            }
            page.push_str("</footer>\n");
        }

        page.push_str("</body>\n</html>\n");
        page
    }

    fn edit_link(&self, source: Option<&str>) -> Option<String> {
        let base = self.config.docs_repository_base.trim_end_matches('/');
        if base.is_empty() {
            return None;
        }
        Some(match source {
            Some(path) => format!("{}/{}", base, path.trim_start_matches('/')),
            None => base.to_string(),
        })
    }
}

pub struct MarkdownWriter;

impl MarkdownWriter {
    pub fn write(&self, tree: &DisplayTree) -> String {
        let mut blocks = Vec::new();
        for node in &tree.nodes {
            self.collect_blocks(node, &mut blocks);
        }
        let mut output = blocks.join("\n\n");
        output.push('\n');
        output
    }

    fn collect_blocks(&self, node: &Node, blocks: &mut Vec<String>) {
        match node {
            Node::Heading { level, text } => {
                blocks.push(format!(
                    "{} {}",
                    "#".repeat(*level as usize),
                    escape_markdown_text(text)
                ));
            }
            Node::Paragraph {
                text,
                preserve_whitespace,
            } => {
                if text.is_empty() {
                    return;
                }
                if *preserve_whitespace {
                    // Trailing double space is a hard line break
                    let lines: Vec<String> = text
                        .lines()
                        .map(|line| escape_markdown_text(line.trim_end()))
                        .collect();
                    blocks.push(lines.join("  \n"));
                } else {
                    blocks.push(escape_markdown_text(text));
                }
            }
            Node::Code { text } => {
                if !text.is_empty() {
                    blocks.push(format!("`{}`", text));
                }
            }
            Node::Table(table) => blocks.push(self.table(table)),
            Node::Section { children, .. } => {
                for child in children {
                    self.collect_blocks(child, blocks);
                }
            }
        }
    }

    fn table(&self, table: &Table) -> String {
        let mut lines = Vec::with_capacity(table.rows.len() + 2);
        let headers: Vec<String> = table.headers.iter().map(|h| escape_markdown_cell(h)).collect();
        lines.push(format!("| {} |", headers.join(" | ")));
        lines.push(format!("|{}|", vec!["---"; table.headers.len()].join("|")));
        for row in &table.rows {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let cell = escape_markdown_cell(cell);
                    if table.row_headers && i == 0 && !cell.is_empty() {
                        format!("**{}**", cell)
                    } else {
                        cell
                    }
                })
                .collect();
            lines.push(format!("| {} |", cells.join(" | ")));
        }
        lines.join("\n")
    }
}

/// Keeps `<`, `>` and `&` from being read as inline HTML. Code spans are
/// literal in Markdown and are not passed through here.
fn escape_markdown_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_markdown_cell(cell: &str) -> String {
    escape_markdown_text(cell)
        .replace('|', "\\|")
        .replace('\n', "<br>")
}

pub struct TextWriter;

impl TextWriter {
    pub fn write(&self, tree: &DisplayTree) -> String {
        let mut blocks = Vec::new();
        for node in &tree.nodes {
            self.collect_blocks(node, &mut blocks);
        }
        let mut output = blocks.join("\n\n");
        output.push('\n');
        output
    }

    fn collect_blocks(&self, node: &Node, blocks: &mut Vec<String>) {
        match node {
            Node::Heading { level, text } => {
                let underline = match *level {
                    1 => Some('='),
                    2 => Some('-'),
                    _ => None,
                };
                match underline {
                    Some(c) => blocks.push(format!(
                        "{}\n{}",
                        text,
                        c.to_string().repeat(text.chars().count().max(1))
                    )),
                    None => blocks.push(format!("{}:", text)),
                }
            }
            Node::Paragraph { text, .. } => {
                if !text.is_empty() {
                    blocks.push(text.clone());
                }
            }
            Node::Code { text } => {
                if !text.is_empty() {
                    blocks.push(format!("  {}", text));
                }
            }
            Node::Table(table) => blocks.push(self.table(table)),
            Node::Section { children, .. } => {
                for child in children {
                    self.collect_blocks(child, blocks);
                }
            }
        }
    }

    fn table(&self, table: &Table) -> String {
        let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
        for row in &table.rows {
            for (i, cell) in row.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }

        let format_row = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                .collect();
            format!("  {}", padded.join("  ").trim_end())
        };

        let mut lines = vec![format_row(&table.headers[..])];
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        lines.push(format!("  {}", rule.join("  ")));
        for row in &table.rows {
            lines.push(format_row(&row[..]));
        }
        lines.join("\n")
    }
}
