use serde::Serialize;
use std::fmt;

/// A single parameter of an event, function, or error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub type_string: String,
    /// Only present for parameters read from a JSON ABI.
    pub internal_type: Option<String>,
    pub indexed: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_string: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_string: type_string.into(),
            internal_type: None,
            indexed: false,
        }
    }

    pub fn indexed(mut self, indexed: bool) -> Self {
        self.indexed = indexed;
        self
    }

    pub fn with_internal_type(mut self, internal_type: impl Into<String>) -> Self {
        self.internal_type = Some(internal_type.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionKind {
    Function,
    Constructor,
    Fallback,
    Receive,
    FreeFunction,
}

impl FunctionKind {
    pub fn from_solc(kind: &str) -> Option<Self> {
        match kind {
            "function" => Some(FunctionKind::Function),
            "constructor" => Some(FunctionKind::Constructor),
            "fallback" => Some(FunctionKind::Fallback),
            "receive" => Some(FunctionKind::Receive),
            "freeFunction" => Some(FunctionKind::FreeFunction),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionKind::Function => "function",
            FunctionKind::Constructor => "constructor",
            FunctionKind::Fallback => "fallback",
            FunctionKind::Receive => "receive",
            FunctionKind::FreeFunction => "freeFunction",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDescriptor {
    pub name: String,
    pub documentation: Option<String>,
    pub parameters: Vec<Parameter>,
    pub anonymous: bool,
    /// Set when the event came from a JSON ABI; switches the table to the
    /// four-column layout with internal types.
    pub from_abi: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDescriptor {
    pub name: String,
    pub kind: FunctionKind,
    pub documentation: Option<String>,
    pub selector: Option<String>,
    pub state_mutability: String,
    pub visibility: String,
    pub parameters: Vec<Parameter>,
    pub returns: Vec<Parameter>,
}

impl FunctionDescriptor {
    pub fn is_constructor(&self) -> bool {
        self.kind == FunctionKind::Constructor
    }

    /// Whether the function is part of the contract's callable surface.
    pub fn is_exposed(&self) -> bool {
        match self.kind {
            FunctionKind::Constructor
            | FunctionKind::Fallback
            | FunctionKind::Receive
            | FunctionKind::FreeFunction => true,
            _ => is_exposed_visibility(&self.visibility),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableDescriptor {
    pub name: String,
    pub selector: Option<String>,
    pub documentation: Option<String>,
    pub constant: bool,
    pub visibility: String,
    pub mutability: String,
}

impl VariableDescriptor {
    pub fn is_exposed(&self) -> bool {
        is_exposed_visibility(&self.visibility)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDescriptor {
    pub name: String,
    pub documentation: Option<String>,
    pub selector: Option<String>,
    pub parameters: Vec<Parameter>,
}

fn is_exposed_visibility(visibility: &str) -> bool {
    matches!(visibility, "public" | "external")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractKind {
    Contract,
    AbstractContract,
    Interface,
    Library,
    /// Declarations outside any contract: free functions, file-level
    /// errors, events, and constants.
    File,
}

impl ContractKind {
    pub fn from_solc(kind: &str, is_abstract: bool) -> Self {
        match kind {
            "interface" => ContractKind::Interface,
            "library" => ContractKind::Library,
            _ if is_abstract => ContractKind::AbstractContract,
            _ => ContractKind::Contract,
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractKind::Contract => write!(f, "contract"),
            ContractKind::AbstractContract => write!(f, "abstract contract"),
            ContractKind::Interface => write!(f, "interface"),
            ContractKind::Library => write!(f, "library"),
            ContractKind::File => write!(f, "file"),
        }
    }
}

/// All documented members of one contract, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractDoc {
    pub name: String,
    pub kind: ContractKind,
    pub documentation: Option<String>,
    pub events: Vec<EventDescriptor>,
    pub functions: Vec<FunctionDescriptor>,
    pub variables: Vec<VariableDescriptor>,
    pub errors: Vec<ErrorDescriptor>,
}

impl ContractDoc {
    pub fn new(name: impl Into<String>, kind: ContractKind) -> Self {
        Self {
            name: name.into(),
            kind,
            documentation: None,
            events: Vec::new(),
            functions: Vec::new(),
            variables: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
            && self.functions.is_empty()
            && self.variables.is_empty()
            && self.errors.is_empty()
    }
}

/// The result of parsing one input file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocSet {
    pub source: Option<String>,
    pub contracts: Vec<ContractDoc>,
}

impl DocSet {
    pub fn contract(&self, name: &str) -> Option<&ContractDoc> {
        self.contracts.iter().find(|c| c.name == name)
    }
}
