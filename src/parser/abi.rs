use crate::parser::error::{ParseError, ParseResult};
use crate::parser::parser::{node_label, optional_bool, optional_str, required_str};
use crate::parser::types::*;
use serde_json::Value;
use tracing::{debug, trace};

/// Builds a [`ContractDoc`] from the entries of a JSON ABI.
///
/// A JSON ABI has no NatSpec, no selectors, and no state variables, so the
/// resulting descriptors leave those empty. Events keep their internal types
/// and render with the four-column table.
pub struct AbiParser<'a> {
    contract_name: &'a str,
}

impl<'a> AbiParser<'a> {
    pub fn new(contract_name: &'a str) -> Self {
        Self { contract_name }
    }

    pub fn parse(&self, entries: &[Value]) -> ParseResult<ContractDoc> {
        let mut contract = ContractDoc::new(self.contract_name, ContractKind::Contract);

        for entry in entries {
            trace!(?entry, "abi entry");
            // `type` may be omitted and then defaults to "function"
            match optional_str(entry, "type").unwrap_or("function") {
                "event" => contract.events.push(self.parse_event(entry)?),
                "error" => contract.errors.push(self.parse_error(entry)?),
                "function" => contract
                    .functions
                    .push(self.parse_function(entry, FunctionKind::Function)?),
                "constructor" => contract
                    .functions
                    .push(self.parse_function(entry, FunctionKind::Constructor)?),
                "fallback" => contract
                    .functions
                    .push(self.parse_function(entry, FunctionKind::Fallback)?),
                "receive" => contract
                    .functions
                    .push(self.parse_function(entry, FunctionKind::Receive)?),
                other => debug!(entry_type = other, "skipping unknown ABI entry"),
            }
        }

        Ok(contract)
    }

    fn parse_event(&self, entry: &Value) -> ParseResult<EventDescriptor> {
        Ok(EventDescriptor {
            name: required_str(entry, "name")?.to_string(),
            documentation: None,
            parameters: abi_parameters(entry, "inputs")?,
            anonymous: optional_bool(entry, "anonymous")?.unwrap_or(false),
            from_abi: true,
        })
    }

    fn parse_error(&self, entry: &Value) -> ParseResult<ErrorDescriptor> {
        Ok(ErrorDescriptor {
            name: required_str(entry, "name")?.to_string(),
            documentation: None,
            selector: None,
            parameters: abi_parameters(entry, "inputs")?,
        })
    }

    fn parse_function(&self, entry: &Value, kind: FunctionKind) -> ParseResult<FunctionDescriptor> {
        // Only named functions require a name; the special kinds have none
        let name = match kind {
            FunctionKind::Function => required_str(entry, "name")?.to_string(),
            _ => optional_str(entry, "name").unwrap_or_default().to_string(),
        };

        let visibility = if kind == FunctionKind::Constructor {
            "public"
        } else {
            "external"
        };

        Ok(FunctionDescriptor {
            name,
            kind,
            documentation: None,
            selector: None,
            state_mutability: state_mutability(entry)?,
            visibility: visibility.to_string(),
            parameters: abi_parameters(entry, "inputs")?,
            returns: abi_parameters(entry, "outputs")?,
        })
    }
}

// Older ABIs describe mutability with the `constant` and `payable` flags
fn state_mutability(entry: &Value) -> ParseResult<String> {
    if let Some(mutability) = optional_str(entry, "stateMutability") {
        return Ok(mutability.to_string());
    }

    let payable = optional_bool(entry, "payable")?.unwrap_or(false);
    let constant = optional_bool(entry, "constant")?.unwrap_or(false);
    let mutability = match (payable, constant) {
        (true, _) => "payable",
        (false, true) => "view",
        (false, false) => "nonpayable",
    };
    Ok(mutability.to_string())
}

fn abi_parameters(entry: &Value, field: &'static str) -> ParseResult<Vec<Parameter>> {
    let params = match entry.get(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(params)) => params,
        Some(_) => return Err(ParseError::invalid(node_label(entry), field, "an array")),
    };

    params
        .iter()
        .map(|param| {
            let type_string = required_str(param, "type")?;
            let mut parameter = Parameter::new(
                optional_str(param, "name").unwrap_or_default(),
                type_string,
            )
            .indexed(optional_bool(param, "indexed")?.unwrap_or(false));
            if let Some(internal_type) = optional_str(param, "internalType") {
                parameter = parameter.with_internal_type(internal_type);
            }
            Ok(parameter)
        })
        .collect()
}
