use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;
use crate::renderer::tree::*;
use tracing::trace;

impl Render for EventDescriptor {
    fn render(&self, context: &RenderContext) -> DisplayTree {
        trace!(event = ?self, "rendering event");

        let mut children = vec![
            Node::heading(context.heading_level, &self.name),
            DocRenderer.render_docs(self.documentation.as_ref()),
        ];

        // Events always get a table, even an empty one
        children.push(Node::Table(
            TableRenderer.event_parameters(&self.parameters, self.from_abi),
        ));

        if self.anonymous {
            children.push(Node::paragraph("Anonymous"));
        }

        DisplayTree::from(vec![Node::section("event", children)])
    }
}

impl FunctionDescriptor {
    /// The heading text. Constructors are always called "constructor";
    /// nameless fallback and receive functions are called by their kind.
    pub fn display_name(&self) -> &str {
        match self.kind {
            FunctionKind::Constructor => "constructor",
            FunctionKind::Fallback | FunctionKind::Receive if self.name.is_empty() => {
                self.kind.as_str()
            }
            _ => &self.name,
        }
    }
}

impl Render for FunctionDescriptor {
    fn render(&self, context: &RenderContext) -> DisplayTree {
        trace!(function = ?self, "rendering function");

        let sub_level = context.sub_heading_level();
        let mut children = vec![
            Node::heading(context.heading_level, self.display_name()),
            DocRenderer.render_docs(self.documentation.as_ref()),
        ];

        if !self.is_constructor() {
            children.push(Node::section(
                "metadata",
                vec![
                    Node::heading(sub_level, "Metadata"),
                    Node::Table(TableRenderer.metadata(self, FUNCTION_METADATA)),
                ],
            ));
        }

        if !self.parameters.is_empty() {
            children.push(Node::section(
                "parameters",
                vec![
                    Node::heading(sub_level, "Parameters"),
                    Node::Table(TableRenderer.parameters(&self.parameters)),
                ],
            ));
        }

        if !self.returns.is_empty() {
            children.push(Node::section(
                "returns",
                vec![
                    Node::heading(sub_level, "Returns"),
                    Node::Table(TableRenderer.parameters(&self.returns)),
                ],
            ));
        }

        DisplayTree::from(vec![Node::section("function", children)])
    }
}

impl Render for VariableDescriptor {
    fn render(&self, context: &RenderContext) -> DisplayTree {
        trace!(variable = ?self, "rendering variable");

        let mut children = vec![Node::heading(context.heading_level, &self.name)];

        if let Some(selector) = &self.selector {
            children.push(Node::code(selector));
        }

        children.push(DocRenderer.render_docs(self.documentation.as_ref()));
        children.push(Node::section(
            "metadata",
            vec![
                Node::heading(context.sub_heading_level(), "Metadata"),
                Node::Table(TableRenderer.metadata(self, VARIABLE_METADATA)),
            ],
        ));

        DisplayTree::from(vec![Node::section("variable", children)])
    }
}

impl Render for ErrorDescriptor {
    fn render(&self, context: &RenderContext) -> DisplayTree {
        trace!(error = ?self, "rendering error");

        let mut children = vec![
            Node::heading(context.heading_level, &self.name),
            Node::paragraph(
                self.documentation
                    .as_deref()
                    .map(str::trim_end)
                    .unwrap_or_default(),
            ),
            Node::code(self.selector.as_deref().unwrap_or_default()),
        ];

        if !self.parameters.is_empty() {
            children.push(Node::section(
                "parameters",
                vec![
                    Node::heading(context.sub_heading_level(), "Parameters"),
                    Node::Table(TableRenderer.parameters(&self.parameters)),
                ],
            ));
        }

        DisplayTree::from(vec![Node::section("error", children)])
    }
}
