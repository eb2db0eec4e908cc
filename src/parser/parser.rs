use crate::parser::abi::AbiParser;
use crate::parser::error::{ParseError, ParseResult};
use crate::parser::types::*;
use serde_json::Value;
use tracing::{debug, trace};

// Parser for converting raw compiler JSON into typed descriptors
pub struct AstParser<'a> {
    input: &'a Value,
    fallback_name: Option<String>,
}

impl<'a> AstParser<'a> {
    pub fn new(input: &'a Value) -> Self {
        Self {
            input,
            fallback_name: None,
        }
    }

    /// Name used for a contract read from a bare ABI array, which carries
    /// no name of its own. Usually the input file stem.
    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = Some(name.into());
        self
    }

    pub fn parse(&self) -> ParseResult<DocSet> {
        let input = self.input;

        if let Some(entries) = input.as_array() {
            debug!("input is a bare JSON ABI");
            return self.parse_abi(entries, None);
        }

        if input.get("nodeType").and_then(|n| n.as_str()) == Some("SourceUnit") {
            debug!("input is a solc SourceUnit");
            let mut doc_set = DocSet::default();
            self.parse_source_unit(input, &mut doc_set)?;
            return Ok(doc_set);
        }

        // Foundry artifacts carry both; the AST has documentation, the ABI does not
        if let Some(ast) = input.get("ast").filter(|a| a.is_object()) {
            debug!("input is an artifact with an embedded AST");
            let mut doc_set = DocSet::default();
            self.parse_source_unit(ast, &mut doc_set)?;
            return Ok(doc_set);
        }

        if let Some(sources) = input
            .get("output")
            .and_then(|o| o.get("sources"))
            .or_else(|| input.get("sources"))
            .and_then(|s| s.as_object())
        {
            debug!(count = sources.len(), "input is a standard-JSON output");
            let mut doc_set = DocSet::default();
            let mut found_ast = false;
            for (path, source) in sources {
                let Some(ast) = source.get("ast") else {
                    debug!(%path, "source has no AST, skipping");
                    continue;
                };
                found_ast = true;
                self.parse_source_unit(ast, &mut doc_set)?;
            }
            if !found_ast {
                return Err(ParseError::UnrecognizedInput);
            }
            return Ok(doc_set);
        }

        if let Some(entries) = input.get("abi").and_then(|a| a.as_array()) {
            debug!("input is an ABI artifact");
            let name = input.get("contractName").and_then(|n| n.as_str());
            return self.parse_abi(entries, name);
        }

        Err(ParseError::UnrecognizedInput)
    }

    fn parse_abi(&self, entries: &[Value], name: Option<&str>) -> ParseResult<DocSet> {
        let name = name
            .map(str::to_string)
            .or_else(|| self.fallback_name.clone())
            .unwrap_or_else(|| "Contract".to_string());
        let contract = AbiParser::new(&name).parse(entries)?;
        Ok(DocSet {
            source: None,
            contracts: vec![contract],
        })
    }

    fn parse_source_unit(&self, unit: &Value, doc_set: &mut DocSet) -> ParseResult<()> {
        let path = unit.get("absolutePath").and_then(|p| p.as_str());
        if doc_set.source.is_none() {
            doc_set.source = path.map(|p| p.to_string());
        }

        let mut file = ContractDoc::new(path.unwrap_or("<unknown>"), ContractKind::File);
        let mut contracts = Vec::new();

        for node in child_nodes(unit) {
            match node_type(node) {
                Some("ContractDefinition") => contracts.push(self.parse_contract(node)?),
                Some("EventDefinition") => file.events.push(parse_event(node)?),
                Some("FunctionDefinition") => file.functions.push(parse_function(node)?),
                Some("ErrorDefinition") => file.errors.push(parse_error(node)?),
                Some("VariableDeclaration") => file.variables.push(parse_variable(node)?),
                other => {
                    debug!(node_type = ?other, "skipping file-level node");
                }
            }
        }

        // File-level declarations come before the contracts that use them
        if !file.is_empty() {
            debug!(
                source = %file.name,
                events = file.events.len(),
                functions = file.functions.len(),
                variables = file.variables.len(),
                errors = file.errors.len(),
                "parsed file-level declarations"
            );
            doc_set.contracts.push(file);
        }
        doc_set.contracts.extend(contracts);

        Ok(())
    }

    pub fn parse_contract(&self, node: &Value) -> ParseResult<ContractDoc> {
        let name = required_str(node, "name")?;
        let kind = ContractKind::from_solc(
            optional_str(node, "contractKind").unwrap_or("contract"),
            optional_bool(node, "abstract")?.unwrap_or(false),
        );

        let mut contract = ContractDoc::new(name, kind);
        contract.documentation = documentation(node);

        for member in child_nodes(node) {
            match node_type(member) {
                Some("EventDefinition") => contract.events.push(parse_event(member)?),
                Some("FunctionDefinition") => contract.functions.push(parse_function(member)?),
                Some("ErrorDefinition") => contract.errors.push(parse_error(member)?),
                Some("VariableDeclaration") => {
                    if optional_bool(member, "stateVariable")?.unwrap_or(true) {
                        contract.variables.push(parse_variable(member)?);
                    }
                }
                other => {
                    debug!(contract = %contract.name, node_type = ?other, "skipping member");
                }
            }
        }

        debug!(
            contract = %contract.name,
            events = contract.events.len(),
            functions = contract.functions.len(),
            variables = contract.variables.len(),
            errors = contract.errors.len(),
            "parsed contract"
        );

        Ok(contract)
    }
}

pub fn parse_event(node: &Value) -> ParseResult<EventDescriptor> {
    trace!(?node, "event node");
    Ok(EventDescriptor {
        name: required_str(node, "name")?.to_string(),
        documentation: documentation(node),
        parameters: parameter_list(node, "parameters")?,
        anonymous: optional_bool(node, "anonymous")?.unwrap_or(false),
        from_abi: false,
    })
}

pub fn parse_function(node: &Value) -> ParseResult<FunctionDescriptor> {
    trace!(?node, "function node");
    let kind_str = required_str(node, "kind")?;
    let kind = FunctionKind::from_solc(kind_str)
        .ok_or_else(|| ParseError::invalid(node_label(node), "kind", "a solc function kind"))?;

    Ok(FunctionDescriptor {
        name: required_str(node, "name")?.to_string(),
        kind,
        documentation: documentation(node),
        selector: optional_str(node, "functionSelector").map(|s| s.to_string()),
        state_mutability: required_str(node, "stateMutability")?.to_string(),
        visibility: required_str(node, "visibility")?.to_string(),
        parameters: parameter_list(node, "parameters")?,
        returns: parameter_list(node, "returnParameters")?,
    })
}

pub fn parse_variable(node: &Value) -> ParseResult<VariableDescriptor> {
    trace!(?node, "variable node");
    let constant = optional_bool(node, "constant")?
        .ok_or_else(|| ParseError::missing(node_label(node), "constant"))?;

    // Compilers before 0.6.5 do not emit `mutability`
    let mutability = optional_str(node, "mutability")
        .map(|m| m.to_string())
        .unwrap_or_else(|| if constant { "constant" } else { "mutable" }.to_string());

    Ok(VariableDescriptor {
        name: required_str(node, "name")?.to_string(),
        selector: optional_str(node, "functionSelector").map(|s| s.to_string()),
        documentation: documentation(node),
        constant,
        visibility: required_str(node, "visibility")?.to_string(),
        mutability,
    })
}

pub fn parse_error(node: &Value) -> ParseResult<ErrorDescriptor> {
    trace!(?node, "error node");
    Ok(ErrorDescriptor {
        name: required_str(node, "name")?.to_string(),
        documentation: documentation(node),
        selector: optional_str(node, "errorSelector").map(|s| s.to_string()),
        parameters: parameter_list(node, "parameters")?,
    })
}

// `parameters` and `returnParameters` are ParameterList nodes wrapping the array
fn parameter_list(node: &Value, field: &'static str) -> ParseResult<Vec<Parameter>> {
    let Some(list) = node.get(field).and_then(|p| p.get("parameters")) else {
        return Ok(Vec::new());
    };
    let Some(params) = list.as_array() else {
        return Err(ParseError::invalid(node_label(node), field, "a parameter list"));
    };

    params.iter().map(parse_parameter).collect()
}

fn parse_parameter(param: &Value) -> ParseResult<Parameter> {
    let type_string = param
        .get("typeDescriptions")
        .and_then(|t| t.get("typeString"))
        .and_then(|t| t.as_str())
        .ok_or_else(|| ParseError::missing(node_label(param), "typeDescriptions.typeString"))?;

    // Unnamed parameters are legal and carry an empty name
    let name = optional_str(param, "name").unwrap_or_default();

    Ok(Parameter::new(name, type_string).indexed(optional_bool(param, "indexed")?.unwrap_or(false)))
}

/// Reads the NatSpec text of a node. Newer compilers emit a
/// `StructuredDocumentation` object, older ones a bare string.
pub fn documentation(node: &Value) -> Option<String> {
    match node.get("documentation")? {
        Value::String(text) => Some(text.clone()),
        Value::Object(doc) => doc.get("text").and_then(|t| t.as_str()).map(|t| t.to_string()),
        _ => None,
    }
}

pub(crate) fn node_type(node: &Value) -> Option<&str> {
    node.get("nodeType").and_then(|n| n.as_str())
}

fn child_nodes(node: &Value) -> impl Iterator<Item = &Value> {
    node.get("nodes")
        .and_then(|n| n.as_array())
        .into_iter()
        .flatten()
}

pub(crate) fn node_label(node: &Value) -> String {
    let kind = node_type(node)
        .or_else(|| node.get("type").and_then(|t| t.as_str()))
        .unwrap_or("node");
    match (node.get("name").and_then(|n| n.as_str()), node.get("id")) {
        (Some(name), _) if !name.is_empty() => format!("{} `{}`", kind, name),
        (_, Some(id)) => format!("{} #{}", kind, id),
        _ => kind.to_string(),
    }
}

pub(crate) fn required_str<'v>(node: &'v Value, field: &'static str) -> ParseResult<&'v str> {
    match node.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(Value::Null) | None => Err(ParseError::missing(node_label(node), field)),
        Some(_) => Err(ParseError::invalid(node_label(node), field, "a string")),
    }
}

pub(crate) fn optional_str<'v>(node: &'v Value, field: &str) -> Option<&'v str> {
    node.get(field).and_then(|v| v.as_str())
}

pub(crate) fn optional_bool(node: &Value, field: &'static str) -> ParseResult<Option<bool>> {
    match node.get(field) {
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(ParseError::invalid(node_label(node), field, "a boolean")),
    }
}
