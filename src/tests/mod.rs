#[cfg(test)]
mod formatting_tests {
    use crate::{
        ContractDoc, ContractKind, DisplayTree, DocSet, DocSetRenderer, ErrorDescriptor,
        EventDescriptor, FunctionDescriptor, FunctionKind, Node, Parameter, Render,
        RenderContext, VariableDescriptor,
    };

    fn transfer_event(parameters: Vec<Parameter>) -> EventDescriptor {
        EventDescriptor {
            name: "Transfer".to_string(),
            documentation: Some("Emitted on every transfer.".to_string()),
            parameters,
            anonymous: false,
            from_abi: false,
        }
    }

    fn function(name: &str, kind: FunctionKind, parameters: Vec<Parameter>) -> FunctionDescriptor {
        FunctionDescriptor {
            name: name.to_string(),
            kind,
            documentation: None,
            selector: Some("a9059cbb".to_string()),
            state_mutability: "nonpayable".to_string(),
            visibility: "public".to_string(),
            parameters,
            returns: vec![],
        }
    }

    fn variable(constant: bool, visibility: &str, mutability: &str) -> VariableDescriptor {
        VariableDescriptor {
            name: "quorum".to_string(),
            selector: Some("1703a018".to_string()),
            documentation: None,
            constant,
            visibility: visibility.to_string(),
            mutability: mutability.to_string(),
        }
    }

    fn render<T: Render>(item: &T) -> DisplayTree {
        item.render(&RenderContext::new())
    }

    #[test]
    fn test_event_row_per_parameter() {
        let event = transfer_event(vec![
            Parameter::new("from", "address").indexed(true),
            Parameter::new("to", "address").indexed(true),
            Parameter::new("amount", "uint256"),
        ]);

        let tree = render(&event);
        let tables = tree.tables();
        assert_eq!(tables.len(), 1);

        let table = tables[0];
        assert_eq!(table.headers, vec!["Name", "Type", "Indexed"]);
        assert_eq!(table.rows.len(), 3);
        let indexed: Vec<&str> = table.rows.iter().map(|r| r[2].as_str()).collect();
        assert_eq!(indexed, vec!["True", "True", "False"]);
        assert_eq!(tree.headings(), vec![(2, "Transfer")]);
        assert_eq!(tree.paragraphs(), vec!["Emitted on every transfer."]);
    }

    #[test]
    fn test_event_without_parameters_keeps_empty_table() {
        let tree = render(&transfer_event(vec![]));
        let tables = tree.tables();
        assert_eq!(tables.len(), 1);
        assert!(tables[0].rows.is_empty());
    }

    #[test]
    fn test_abi_event_has_internal_type_column() {
        let mut event = transfer_event(vec![Parameter::new("id", "uint256")
            .with_internal_type("uint256")
            .indexed(true)]);
        event.from_abi = true;

        let table = render(&event).tables()[0].clone();
        assert_eq!(table.headers, vec!["Name", "Type", "Internal Type", "Indexed"]);
        assert_eq!(table.rows, vec![vec!["id", "uint256", "uint256", "True"]]);
    }

    #[test]
    fn test_anonymous_event_is_marked() {
        let event = EventDescriptor {
            anonymous: true,
            ..transfer_event(vec![Parameter::new("from", "address").indexed(true)])
        };

        let tree = render(&event);
        assert_eq!(tree.paragraphs(), vec!["Emitted on every transfer.", "Anonymous"]);
        assert_eq!(tree.tables().len(), 1);
        assert_eq!(
            render(&transfer_event(vec![])).paragraphs(),
            vec!["Emitted on every transfer."]
        );
    }

    #[test]
    fn test_constructor_heading_ignores_name() {
        for name in ["", "foo"] {
            let tree = render(&function(name, FunctionKind::Constructor, vec![]));
            assert_eq!(tree.headings()[0], (2, "constructor"));
        }
    }

    #[test]
    fn test_constructor_has_no_metadata_table() {
        let tree = render(&function(
            "",
            FunctionKind::Constructor,
            vec![Parameter::new("owner", "address")],
        ));

        let headings: Vec<&str> = tree.headings().into_iter().map(|(_, t)| t).collect();
        assert_eq!(headings, vec!["constructor", "Parameters"]);
        assert_eq!(tree.tables().len(), 1);
    }

    #[test]
    fn test_function_metadata_rows_in_fixed_order() {
        let tree = render(&function("transfer", FunctionKind::Function, vec![]));
        let table = tree.tables()[0];

        assert_eq!(table.headers, vec!["Type", "Value"]);
        assert!(table.row_headers);
        assert_eq!(
            table.rows,
            vec![
                vec!["Selector", "a9059cbb"],
                vec!["State Mutability", "nonpayable"],
                vec!["Visibility", "public"],
            ]
        );
    }

    #[test]
    fn test_function_without_parameters_has_no_parameters_table() {
        let tree = render(&function("pause", FunctionKind::Function, vec![]));
        assert_eq!(tree.tables().len(), 1);
        assert!(!tree.headings().iter().any(|(_, t)| *t == "Parameters"));
    }

    #[test]
    fn test_function_parameters_and_returns() {
        let mut func = function(
            "balanceOf",
            FunctionKind::Function,
            vec![Parameter::new("owner", "address")],
        );
        func.returns = vec![Parameter::new("", "uint256")];

        let tree = render(&func);
        let headings: Vec<(u8, &str)> = tree.headings();
        assert_eq!(
            headings,
            vec![(2, "balanceOf"), (3, "Metadata"), (3, "Parameters"), (3, "Returns")]
        );

        let tables = tree.tables();
        assert_eq!(tables[1].rows, vec![vec!["owner", "address"]]);
        assert_eq!(tables[2].rows, vec![vec!["", "uint256"]]);
    }

    #[test]
    fn test_function_missing_selector_renders_empty_cell() {
        let mut func = function("_check", FunctionKind::Function, vec![]);
        func.selector = None;
        func.visibility = "internal".to_string();

        let tree = render(&func);
        assert_eq!(tree.tables()[0].rows[0], vec!["Selector", ""]);
    }

    #[test]
    fn test_nameless_receive_uses_kind() {
        let tree = render(&function("", FunctionKind::Receive, vec![]));
        assert_eq!(tree.headings()[0], (2, "receive"));
    }

    #[test]
    fn test_variable_metadata_rows() {
        let tree = render(&variable(true, "public", "mutable"));
        let table = tree.tables()[0];

        assert_eq!(
            table.rows,
            vec![
                vec!["Constant", "True"],
                vec!["Visibility", "public"],
                vec!["Mutability", "mutable"],
            ]
        );
        assert_eq!(tree.code_fragments(), vec!["1703a018"]);
    }

    #[test]
    fn test_variable_without_selector_has_no_code() {
        let mut var = variable(false, "internal", "immutable");
        var.selector = None;

        let tree = render(&var);
        assert!(tree.code_fragments().is_empty());
        assert_eq!(tree.tables()[0].rows[0], vec!["Constant", "False"]);
    }

    #[test]
    fn test_error_renders_selector_code() {
        let error = ErrorDescriptor {
            name: "NotSigner".to_string(),
            documentation: Some("Caller is not a signer.".to_string()),
            selector: Some("9c4f9f6b".to_string()),
            parameters: vec![],
        };

        let tree = render(&error);
        assert_eq!(tree.headings(), vec![(2, "NotSigner")]);
        assert_eq!(tree.paragraphs(), vec!["Caller is not a signer."]);
        assert_eq!(tree.code_fragments(), vec!["9c4f9f6b"]);
        assert!(tree.tables().is_empty());
    }

    #[test]
    fn test_missing_documentation_renders_empty() {
        let event = EventDescriptor {
            documentation: None,
            ..transfer_event(vec![])
        };
        let error = ErrorDescriptor {
            name: "E".to_string(),
            documentation: None,
            selector: None,
            parameters: vec![],
        };

        assert_eq!(render(&event).paragraphs(), vec![""]);
        assert_eq!(render(&error).paragraphs(), vec![""]);
        assert_eq!(render(&error).code_fragments(), vec![""]);
        assert_eq!(render(&variable(false, "public", "mutable")).paragraphs(), vec![""]);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let func = function(
            "transfer",
            FunctionKind::Function,
            vec![Parameter::new("to", "address")],
        );
        assert_eq!(render(&func), render(&func));

        let event = transfer_event(vec![Parameter::new("from", "address").indexed(true)]);
        assert_eq!(render(&event), render(&event));
    }

    #[test]
    fn test_heading_level_follows_context() {
        let context = RenderContext::new().with_heading_level(4);
        let tree = function("transfer", FunctionKind::Function, vec![]).render(&context);
        assert_eq!(tree.headings(), vec![(4, "transfer"), (5, "Metadata")]);

        let deepest = RenderContext::new().with_heading_level(9);
        assert_eq!(deepest.heading_level, 6);
        assert_eq!(deepest.sub_heading_level(), 6);
        assert_eq!(RenderContext::new().nested().heading_level, 3);
    }

    fn sample_contract() -> ContractDoc {
        let mut contract = ContractDoc::new("Keep", ContractKind::Contract);
        contract.documentation = Some("Multi-sig wallet.".to_string());
        contract.events.push(transfer_event(vec![]));

        let mut internal = function("_execute", FunctionKind::Function, vec![]);
        internal.visibility = "internal".to_string();
        internal.selector = None;
        contract.functions.push(function("execute", FunctionKind::Function, vec![]));
        contract.functions.push(internal);
        contract.functions.push(function("", FunctionKind::Constructor, vec![]));

        contract.variables.push(variable(false, "public", "mutable"));
        contract
    }

    #[test]
    fn test_contract_page_layout() {
        let tree = render(&sample_contract());

        assert_eq!(
            tree.headings(),
            vec![
                (1, "contract Keep"),
                (2, "Events"),
                (3, "Transfer"),
                (2, "Functions"),
                (3, "constructor"),
                (3, "execute"),
                (4, "Metadata"),
                (2, "Variables"),
                (3, "quorum"),
                (4, "Metadata"),
            ]
        );
    }

    #[test]
    fn test_contract_page_show_internal() {
        let context = RenderContext::new().with_show_internal(true);
        let tree = sample_contract().render(&context);
        assert!(tree.headings().contains(&(3, "_execute")));
    }

    #[test]
    fn test_file_page_keeps_internal_members() {
        let mut file = ContractDoc::new("src/Auth.sol", ContractKind::File);
        let mut helper = function("isOwner", FunctionKind::FreeFunction, vec![]);
        helper.visibility = "internal".to_string();
        helper.selector = None;
        file.functions.push(helper);
        file.variables.push(variable(true, "internal", "constant"));

        let rendered = render(&file);
        let headings = rendered.headings();
        assert_eq!(headings[0], (1, "file src/Auth.sol"));
        assert!(headings.contains(&(3, "isOwner")));
        assert!(headings.contains(&(3, "quorum")));
    }

    #[test]
    fn test_contract_page_sections() {
        let tree = render(&sample_contract());
        let classes: Vec<&str> = tree
            .walk()
            .into_iter()
            .filter_map(|node| match node {
                Node::Section { class, .. } => Some(class.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(classes[0], "contract");
        assert!(classes.contains(&"events"));
        assert!(classes.contains(&"functions"));
        assert!(classes.contains(&"variables"));
        assert!(!classes.contains(&"errors"));
    }

    #[test]
    fn test_doc_set_renders_each_contract() {
        let doc_set = DocSet {
            source: None,
            contracts: vec![
                sample_contract(),
                ContractDoc::new("IKeep", ContractKind::Interface),
            ],
        };

        let tree = DocSetRenderer.render(&doc_set, &RenderContext::new());
        let titles: Vec<&str> = tree
            .headings()
            .into_iter()
            .filter(|(level, _)| *level == 1)
            .map(|(_, text)| text)
            .collect();
        assert_eq!(titles, vec!["contract Keep", "interface IKeep"]);
    }
}
