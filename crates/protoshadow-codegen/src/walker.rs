//! Nested-scope walker
//!
//! Visits every type of a [`DeclarationGraph`] depth-first in document order,
//! handing the visitor the chain of enclosing types. The chain is kept on an
//! explicit stack, so arbitrarily deep nesting never recurses.

use protoshadow_core::{DeclarationGraph, TypeId, TypeNode};

/// Visit every type with its enclosing types, outermost first
pub fn walk<'g, F>(graph: &'g DeclarationGraph, mut visit: F)
where
    F: FnMut(&'g TypeNode, &[&'g TypeNode]),
{
    // (node, depth) pairs; depth is the node's index in `ancestors` once entered
    let mut pending: Vec<(TypeId, usize)> = graph
        .top_level()
        .map(|node| (node.id, 0))
        .rev()
        .collect();
    let mut ancestors: Vec<&'g TypeNode> = Vec::new();

    while let Some((id, depth)) = pending.pop() {
        let node = graph.node(id);
        ancestors.truncate(depth);
        visit(node, &ancestors);
        ancestors.push(node);
        pending.extend(node.children.iter().rev().map(|child| (*child, depth + 1)));
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::test_support::*;

    #[test]
    fn walk___visits_in_document_order_with_ancestors() {
        let mut outer = partial_class("Outer");
        let mut middle = partial_class("Middle");
        middle.nested_types.push(partial_class("Inner"));
        outer.nested_types.push(middle);
        outer.nested_types.push(partial_class("Sibling"));
        let graph = graph(vec![outer, plain_class("Other")]);

        let mut visits = Vec::new();
        walk(&graph, |node, ancestors| {
            let chain: Vec<&str> = ancestors.iter().map(|a| a.decl.name.as_str()).collect();
            visits.push((node.decl.name.clone(), chain.join(".")));
        });

        assert_eq!(
            visits,
            vec![
                ("Outer".to_string(), "".to_string()),
                ("Middle".to_string(), "Outer".to_string()),
                ("Inner".to_string(), "Outer.Middle".to_string()),
                ("Sibling".to_string(), "Outer".to_string()),
                ("Other".to_string(), "".to_string()),
            ]
        );
    }

    #[test]
    fn walk___deep_nesting___reports_full_chain() {
        let mut innermost = partial_class("T0");
        for level in 1..200 {
            let mut outer = partial_class(&format!("T{level}"));
            outer.nested_types.push(innermost);
            innermost = outer;
        }
        let graph = graph(vec![innermost]);

        let mut deepest = 0;
        walk(&graph, |_, ancestors| deepest = deepest.max(ancestors.len()));

        assert_eq!(deepest, 199);
    }
}
