use crate::parser::*;
use crate::renderer::traits::*;
use crate::renderer::tree::*;
use tracing::debug;

impl Render for ContractDoc {
    fn render(&self, context: &RenderContext) -> DisplayTree {
        let title_level = context.heading_level.saturating_sub(1).max(1);
        let group_level = title_level + 1;
        let member_context = context.with_heading_level(group_level).nested();
        // Free functions and file constants are internal by nature
        let keep_all = context.show_internal || self.kind == ContractKind::File;

        let mut children = vec![Node::heading(title_level, format!("{} {}", self.kind, self.name))];

        if let Some(docs) = &self.documentation {
            children.push(Node::pre_line(docs.trim_end()));
        }

        let events: Vec<&EventDescriptor> = self.events.iter().collect();
        push_group(
            &mut children,
            ("events", "Events"),
            group_level,
            &events,
            &member_context,
        );

        // Constructor first, everything else in source order
        let (constructors, others): (Vec<&FunctionDescriptor>, Vec<&FunctionDescriptor>) = self
            .functions
            .iter()
            .filter(|f| keep_all || f.is_exposed())
            .partition(|f| f.is_constructor());
        let functions: Vec<&FunctionDescriptor> = constructors.into_iter().chain(others).collect();
        push_group(
            &mut children,
            ("functions", "Functions"),
            group_level,
            &functions,
            &member_context,
        );

        let variables: Vec<&VariableDescriptor> = self
            .variables
            .iter()
            .filter(|v| keep_all || v.is_exposed())
            .collect();
        push_group(
            &mut children,
            ("variables", "Variables"),
            group_level,
            &variables,
            &member_context,
        );

        let errors: Vec<&ErrorDescriptor> = self.errors.iter().collect();
        push_group(
            &mut children,
            ("errors", "Errors"),
            group_level,
            &errors,
            &member_context,
        );

        debug!(
            contract = %self.name,
            hidden_functions = self.functions.len() - functions.len(),
            hidden_variables = self.variables.len() - variables.len(),
            "rendered contract page"
        );

        DisplayTree::from(vec![Node::section("contract", children)])
    }
}

/// Appends a titled group section; `(class, title)` names it. Empty groups are left out.
fn push_group<T: Render>(
    children: &mut Vec<Node>,
    (class, title): (&str, &str),
    level: u8,
    members: &[&T],
    context: &RenderContext,
) {
    if members.is_empty() {
        return;
    }

    let mut group = DisplayTree::new();
    group.push(Node::heading(level, title));
    for member in members {
        group.extend(member.render(context));
    }
    children.push(group.into_section(class));
}

/// Renders every contract of a parsed input, one page section each.
pub struct DocSetRenderer;

impl DocSetRenderer {
    pub fn render(&self, doc_set: &DocSet, context: &RenderContext) -> DisplayTree {
        let mut tree = DisplayTree::new();
        for contract in &doc_set.contracts {
            tree.extend(contract.render(context));
        }
        tree
    }
}
