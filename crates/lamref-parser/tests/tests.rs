//! Tests for the node arena.

use super::*;

fn ident(arena: &mut NodeArena, name: &str, pos: u32) -> NodeIndex {
    arena.add_identifier(
        pos,
        pos + name.len() as u32,
        IdentifierData {
            escaped_text: name.to_string(),
        },
    )
}

/// `x -> f(x)` built by hand.
fn single_forwarding_lambda(arena: &mut NodeArena) -> (NodeIndex, NodeIndex, NodeIndex) {
    let x_decl = ident(arena, "x", 0);
    let param = arena.add_parameter(
        0,
        1,
        ParameterData {
            type_name: NodeIndex::NONE,
            name: x_decl,
        },
    );
    let callee = ident(arena, "f", 5);
    let x_use = ident(arena, "x", 7);
    let call = arena.add_call_expr(
        SyntaxKind::MethodInvocation,
        5,
        9,
        CallExprData {
            expression: callee,
            arguments: NodeList::with_range(vec![x_use], 7, 8),
            class_body: NodeIndex::NONE,
        },
    );
    let lambda = arena.add_lambda(
        0,
        9,
        node_flags::NONE,
        LambdaData {
            parameters: NodeList::with_range(vec![param], 0, 1),
            body: call,
            arrow_pos: 2,
        },
    );
    (lambda, call, x_use)
}

#[test]
fn test_node_index() {
    let index = NodeIndex(0);
    assert!(index.is_some());
    assert!(!index.is_none());

    let none = NodeIndex::NONE;
    assert!(none.is_none());
    assert!(!none.is_some());
    assert_eq!(NodeIndex::default(), NodeIndex::NONE);
}

#[test]
fn test_node_list() {
    let list = NodeList::from(vec![NodeIndex(3), NodeIndex(5)]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1), Some(NodeIndex(5)));
    assert_eq!(list.get(2), None);
    assert!(NodeList::new().is_empty());
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![NodeIndex(3), NodeIndex(5)]);
}

#[test]
fn test_typed_accessors_narrow_by_kind() {
    let mut arena = NodeArena::new();
    let (lambda, call, x_use) = single_forwarding_lambda(&mut arena);

    let lambda_node = arena.get(lambda).unwrap();
    let data = arena.get_lambda(lambda_node).expect("lambda data");
    assert_eq!(data.parameters.len(), 1);
    assert_eq!(data.body, call);
    assert_eq!(data.arrow_pos, 2);

    // Narrowing to the wrong kind yields nothing.
    assert!(arena.get_call_expr(lambda_node).is_none());
    assert!(arena.get_block(lambda_node).is_none());

    let call_node = arena.get(call).unwrap();
    assert_eq!(call_node.kind, SyntaxKind::MethodInvocation);
    let call_data = arena.get_call_expr(call_node).expect("call data");
    assert_eq!(call_data.arguments.nodes, vec![x_use]);
    assert!(call_data.class_body.is_none());
    assert!(arena.get_lambda(call_node).is_none());

    assert_eq!(arena.get_identifier_text(x_use), Some("x"));
    assert_eq!(arena.get_identifier_text(call), None);
    assert_eq!(call_node.span(), lamref_common::Span::new(5, 9));
}

#[test]
fn test_parent_links_and_ancestors() {
    let mut arena = NodeArena::new();
    let (lambda, call, x_use) = single_forwarding_lambda(&mut arena);

    assert_eq!(arena.get_parent(x_use), call);
    assert_eq!(arena.get_parent(call), lambda);
    assert!(arena.get_parent(lambda).is_none());
    assert!(arena.get_parent(NodeIndex::NONE).is_none());

    let ancestors: Vec<_> = arena.ancestors(x_use).collect();
    assert_eq!(ancestors, vec![call, lambda]);
    assert_eq!(
        arena.find_ancestor_of_kind(x_use, SyntaxKind::Lambda),
        Some(lambda)
    );
    assert_eq!(arena.find_ancestor_of_kind(x_use, SyntaxKind::Block), None);
}

#[test]
fn test_children_in_source_order() {
    let mut arena = NodeArena::new();
    let (lambda, call, x_use) = single_forwarding_lambda(&mut arena);

    let lambda_children = arena.get_children(lambda);
    assert_eq!(lambda_children.len(), 2);
    assert_eq!(arena.kind(lambda_children[0]), Some(SyntaxKind::Parameter));
    assert_eq!(lambda_children[1], call);

    let call_children = arena.get_children(call);
    assert_eq!(call_children.len(), 2);
    assert_eq!(arena.get_identifier_text(call_children[0]), Some("f"));
    assert_eq!(call_children[1], x_use);

    assert!(arena.get_children(x_use).is_empty());
    assert!(arena.get_children(NodeIndex::NONE).is_empty());
}

#[test]
fn test_anonymous_class_body_is_a_child_of_new() {
    let mut arena = NodeArena::new();
    let type_name = ident(&mut arena, "Pair", 4);
    let body = arena.add_class(
        SyntaxKind::ClassBody,
        11,
        14,
        ClassData {
            name: NodeIndex::NONE,
            members: NodeList::new(),
        },
    );
    let new_expr = arena.add_call_expr(
        SyntaxKind::NewClass,
        0,
        14,
        CallExprData {
            expression: type_name,
            arguments: NodeList::new(),
            class_body: body,
        },
    );

    let node = arena.get(new_expr).unwrap();
    assert!(arena.get_call_expr(node).unwrap().class_body.is_some());
    assert_eq!(arena.get_children(new_expr), vec![type_name, body]);
    assert_eq!(arena.get_parent(body), new_expr);
    let body_node = arena.get(body).unwrap();
    assert!(arena.get_class(body_node).unwrap().name.is_none());
}

#[test]
fn test_syntax_kind_classification() {
    assert!(SyntaxKind::MethodInvocation.is_call());
    assert!(SyntaxKind::NewClass.is_call());
    assert!(!SyntaxKind::Lambda.is_call());
    assert!(SyntaxKind::Lambda.is_expression());
    assert!(SyntaxKind::ReturnStatement.is_statement());
    assert!(!SyntaxKind::Identifier.is_statement());
}

#[test]
fn test_clear_empties_all_pools() {
    let mut arena = NodeArena::with_capacity(16);
    single_forwarding_lambda(&mut arena);
    assert!(!arena.is_empty());
    arena.clear();
    assert!(arena.is_empty());
    assert!(arena.lambdas.is_empty());
    assert!(arena.extended_info.is_empty());
}
