use crate::parser::*;
use crate::renderer::tree::*;
use std::fmt;

/// "True" / "False", the only spelling of booleans in rendered output.
pub fn bool_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A metadata cell value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaValue<'a> {
    Flag(bool),
    Text(&'a str),
}

impl fmt::Display for MetaValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Flag(value) => f.write_str(bool_label(*value)),
            MetaValue::Text(text) => f.write_str(text),
        }
    }
}

pub type MetadataRow<D> = (&'static str, fn(&D) -> MetaValue<'_>);

pub const FUNCTION_METADATA: &[MetadataRow<FunctionDescriptor>] = &[
    ("Selector", function_selector),
    ("State Mutability", function_state_mutability),
    ("Visibility", function_visibility),
];

// Labels are capitalized when rendered
pub const VARIABLE_METADATA: &[MetadataRow<VariableDescriptor>] = &[
    ("constant", variable_constant),
    ("visibility", variable_visibility),
    ("mutability", variable_mutability),
];

fn function_selector(func: &FunctionDescriptor) -> MetaValue<'_> {
    MetaValue::Text(func.selector.as_deref().unwrap_or_default())
}

fn function_state_mutability(func: &FunctionDescriptor) -> MetaValue<'_> {
    MetaValue::Text(&func.state_mutability)
}

fn function_visibility(func: &FunctionDescriptor) -> MetaValue<'_> {
    MetaValue::Text(&func.visibility)
}

fn variable_constant(variable: &VariableDescriptor) -> MetaValue<'_> {
    MetaValue::Flag(variable.constant)
}

fn variable_visibility(variable: &VariableDescriptor) -> MetaValue<'_> {
    MetaValue::Text(&variable.visibility)
}

fn variable_mutability(variable: &VariableDescriptor) -> MetaValue<'_> {
    MetaValue::Text(&variable.mutability)
}

/// Helper for building tables
pub struct TableRenderer;

impl TableRenderer {
    pub fn metadata<D>(&self, descriptor: &D, rows: &[MetadataRow<D>]) -> Table {
        let mut table = Table::new(["Type", "Value"]).with_row_headers();
        for (label, accessor) in rows {
            table.push_row([capitalize(label), accessor(descriptor).to_string()]);
        }
        table
    }

    /// Adds an "Internal Type" column when any parameter carries one, which
    /// only JSON ABI input does.
    pub fn parameters(&self, parameters: &[Parameter]) -> Table {
        if parameters.iter().any(|p| p.internal_type.is_some()) {
            let mut table = Table::new(["Name", "Type", "Internal Type"]);
            for param in parameters {
                table.push_row([
                    param.name.as_str(),
                    param.type_string.as_str(),
                    param.internal_type.as_deref().unwrap_or_default(),
                ]);
            }
            table
        } else {
            let mut table = Table::new(["Name", "Type"]);
            for param in parameters {
                table.push_row([param.name.as_str(), param.type_string.as_str()]);
            }
            table
        }
    }

    pub fn event_parameters(&self, parameters: &[Parameter], with_internal_type: bool) -> Table {
        if with_internal_type {
            let mut table = Table::new(["Name", "Type", "Internal Type", "Indexed"]);
            for param in parameters {
                table.push_row([
                    param.name.as_str(),
                    param.type_string.as_str(),
                    param.internal_type.as_deref().unwrap_or_default(),
                    bool_label(param.indexed),
                ]);
            }
            table
        } else {
            let mut table = Table::new(["Name", "Type", "Indexed"]);
            for param in parameters {
                table.push_row([
                    param.name.as_str(),
                    param.type_string.as_str(),
                    bool_label(param.indexed),
                ]);
            }
            table
        }
    }
}

/// Helper for rendering documentation comments
pub struct DocRenderer;

impl DocRenderer {
    /// NatSpec keeps its line breaks. A missing comment yields an empty
    /// paragraph so every member has the same shape.
    pub fn render_docs(&self, docs: Option<&String>) -> Node {
        Node::pre_line(docs.map(|d| d.trim_end()).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_label() {
        assert_eq!(bool_label(true), "True");
        assert_eq!(bool_label(false), "False");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("visibility"), "Visibility");
        assert_eq!(capitalize("State Mutability"), "State Mutability");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn test_meta_value_display() {
        assert_eq!(MetaValue::Flag(true).to_string(), "True");
        assert_eq!(MetaValue::Text("mutable").to_string(), "mutable");
    }

    #[test]
    fn test_event_table_layouts() {
        let params = vec![Parameter::new("owner", "address")
            .indexed(true)
            .with_internal_type("address")];

        let plain = TableRenderer.event_parameters(&params, false);
        assert_eq!(plain.headers, vec!["Name", "Type", "Indexed"]);
        assert_eq!(plain.rows, vec![vec!["owner", "address", "True"]]);

        let abi = TableRenderer.event_parameters(&params, true);
        assert_eq!(abi.headers, vec!["Name", "Type", "Internal Type", "Indexed"]);
        assert_eq!(abi.rows[0][2], "address");
    }

    #[test]
    fn test_parameter_table_shows_internal_type_when_known() {
        let calls = vec![
            Parameter::new("calls", "tuple[]").with_internal_type("struct Keep.Call[]"),
            Parameter::new("sigs", "tuple[]"),
        ];
        let table = TableRenderer.parameters(&calls);
        assert_eq!(table.headers, vec!["Name", "Type", "Internal Type"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["calls", "tuple[]", "struct Keep.Call[]"],
                vec!["sigs", "tuple[]", ""],
            ]
        );

        let plain = TableRenderer.parameters(&[Parameter::new("to", "address")]);
        assert_eq!(plain.headers, vec!["Name", "Type"]);
    }

    #[test]
    fn test_missing_docs_render_empty() {
        assert_eq!(DocRenderer.render_docs(None), Node::pre_line(""));
    }
}
