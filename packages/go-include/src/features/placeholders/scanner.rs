//! Top-level declaration walk

use tree_sitter::Node;

use crate::errors::{IncludeError, Result};
use crate::features::parsing::{SourceDocument, TextSpan};
use crate::features::placeholders::domain::{PlaceholderCall, Selector};
use crate::shared::utils::tree_sitter::{find_child_by_kind, named_children_without_comments};

/// Finds placeholder calls in declaration order
pub struct PlaceholderScanner<'a> {
    namespace: &'a str,
}

impl<'a> PlaceholderScanner<'a> {
    pub fn new(namespace: &'a str) -> Self {
        Self { namespace }
    }

    /// Walk every top-level `var`/`const` spec's initializers and hand each
    /// placeholder to `on_call` as soon as it is recognized, in declaration
    /// order.
    ///
    /// Calls on other receivers or with an argument count other than one are
    /// ignored. A non-string argument, an unknown selector or an error from
    /// `on_call` stops the walk.
    pub fn visit<F>(&self, doc: &SourceDocument, mut on_call: F) -> Result<()>
    where
        F: FnMut(PlaceholderCall) -> Result<()>,
    {
        for decl in named_children_without_comments(&doc.root()) {
            if !matches!(decl.kind(), "var_declaration" | "const_declaration") {
                continue;
            }
            for spec in value_specs(&decl) {
                for value in initializers(&spec) {
                    if value.kind() != "call_expression" {
                        continue;
                    }
                    if let Some(call) = self.match_call(doc, &value)? {
                        tracing::debug!(
                            selector = call.selector.name(),
                            target = %call.target,
                            span = %call.span,
                            "found placeholder"
                        );
                        on_call(call)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn match_call(&self, doc: &SourceDocument, call: &Node) -> Result<Option<PlaceholderCall>> {
        let Some(function) = call.child_by_field_name("function") else {
            return Ok(None);
        };
        if function.kind() != "selector_expression" {
            return Ok(None);
        }

        let receiver = function.child_by_field_name("operand");
        let receiver_matches = receiver
            .map(|r| r.kind() == "identifier" && doc.node_text(&r) == self.namespace)
            .unwrap_or(false);
        if !receiver_matches {
            return Ok(None);
        }

        let selector_name = function
            .child_by_field_name("field")
            .map(|f| doc.node_text(&f).to_string())
            .unwrap_or_default();

        let args = call
            .child_by_field_name("arguments")
            .map(|a| named_children_without_comments(&a))
            .unwrap_or_default();
        if args.len() != 1 {
            return Ok(None);
        }

        let unsupported_argument = || IncludeError::UnsupportedArgument {
            selector: selector_name.clone(),
            file: doc.file_path().to_string(),
        };

        let arg = &args[0];
        if arg.kind() != "interpreted_string_literal" {
            return Err(unsupported_argument());
        }
        let literal = doc.node_text(arg);
        let target = literal
            .strip_prefix('"')
            .and_then(|l| l.strip_suffix('"'))
            .ok_or_else(unsupported_argument)?;

        let selector =
            Selector::from_name(&selector_name).ok_or_else(|| IncludeError::UnsupportedFunction {
                selector: selector_name.clone(),
                file: doc.file_path().to_string(),
            })?;

        Ok(Some(PlaceholderCall {
            selector,
            target: target.to_string(),
            span: TextSpan::of(call),
        }))
    }
}

/// `var_spec` / `const_spec` nodes of a declaration, grouped or not
fn value_specs<'t>(decl: &Node<'t>) -> Vec<Node<'t>> {
    let mut specs = Vec::new();
    for child in named_children_without_comments(decl) {
        match child.kind() {
            "var_spec" | "const_spec" => specs.push(child),
            // newer grammars wrap grouped specs in a list node
            "var_spec_list" => specs.extend(
                named_children_without_comments(&child)
                    .into_iter()
                    .filter(|c| c.kind() == "var_spec"),
            ),
            _ => {}
        }
    }
    specs
}

/// Expressions on the right-hand side of a spec
fn initializers<'t>(spec: &Node<'t>) -> Vec<Node<'t>> {
    spec.child_by_field_name("value")
        .or_else(|| find_child_by_kind(spec, "expression_list"))
        .map(|list| named_children_without_comments(&list))
        .unwrap_or_default()
}
