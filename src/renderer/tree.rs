use serde::Serialize;

/// Output structure produced by the renderers.
///
/// The tree only describes presentation: serializers in
/// [`crate::renderer::output`] turn it into HTML, Markdown, or text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayTree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum Node {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
        preserve_whitespace: bool,
    },
    Code {
        text: String,
    },
    Table(Table),
    Section {
        class: String,
        children: Vec<Node>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// The first cell of each row labels the row (metadata tables).
    pub row_headers: bool,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            row_headers: false,
        }
    }

    pub fn with_row_headers(mut self) -> Self {
        self.row_headers = true;
        self
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }
}

impl Node {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph {
            text: text.into(),
            preserve_whitespace: false,
        }
    }

    pub fn pre_line(text: impl Into<String>) -> Self {
        Node::Paragraph {
            text: text.into(),
            preserve_whitespace: true,
        }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Node::Code { text: text.into() }
    }

    pub fn section(class: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Section {
            class: class.into(),
            children,
        }
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        if let Node::Section { children, .. } = self {
            for child in children {
                child.collect(out);
            }
        }
    }
}

impl DisplayTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn extend(&mut self, other: DisplayTree) {
        self.nodes.extend(other.nodes);
    }

    pub fn into_section(self, class: impl Into<String>) -> Node {
        Node::section(class, self.nodes)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in document order, sections included.
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.collect(&mut out);
        }
        out
    }

    pub fn headings(&self) -> Vec<(u8, &str)> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Heading { level, text } => Some((*level, text.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn tables(&self) -> Vec<&Table> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Table(table) => Some(table),
                _ => None,
            })
            .collect()
    }

    pub fn paragraphs(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Paragraph { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn code_fragments(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Code { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl From<Vec<Node>> for DisplayTree {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}
