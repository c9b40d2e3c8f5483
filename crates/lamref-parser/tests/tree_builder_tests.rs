use super::*;

#[test]
fn test_dotted_invocation_shape() {
    // s -> System.out.println(s)
    let mut b = TreeBuilder::new("Print.java");
    let head = b.lambda_params(&["s"]);
    let s = b.ident("s");
    let call = b.invoke("System.out.println", vec![s]);
    let lambda = b.lambda(head, call);
    let arena = b.into_arena();

    let call_node = arena.get(call).unwrap();
    let call_data = arena.get_call_expr(call_node).unwrap();
    let callee = arena.get(call_data.expression).unwrap();
    assert_eq!(callee.kind, SyntaxKind::MemberSelect);
    let select = arena.get_member_select(callee).unwrap();
    assert_eq!(arena.get_identifier_text(select.name), Some("println"));
    let receiver = arena.get(select.expression).unwrap();
    let inner = arena.get_member_select(receiver).unwrap();
    assert_eq!(arena.get_identifier_text(inner.expression), Some("System"));
    assert_eq!(arena.get_identifier_text(inner.name), Some("out"));

    assert_eq!(arena.get_parent(call), lambda);
    assert_eq!(arena.get_parent(s), call);
}

#[test]
fn test_arrow_position_follows_parameters() {
    let mut b = TreeBuilder::new("Arrow.java");
    let head = b.lambda_params(&["a", "b"]);
    let arrow = head.arrow_pos;
    let body = b.invoke("f", vec![]);
    let lambda = b.lambda(head, body);
    let arena = b.into_arena();

    let node = arena.get(lambda).unwrap();
    let data = arena.get_lambda(node).unwrap();
    assert_eq!(data.arrow_pos, arrow);
    for param in data.parameters.iter() {
        assert!(arena.get(param).unwrap().end <= arrow);
    }
    assert!(arena.get(body).unwrap().pos > arrow);
    assert!(node.has_flag(node_flags::PARENTHESIZED_PARAMETERS));
}

#[test]
fn test_explicitly_typed_parameters_set_flag() {
    let mut b = TreeBuilder::new("Typed.java");
    let p = b.typed_parameter("String", "s");
    let head = b.lambda_head_with(vec![p]);
    let s = b.ident("s");
    let body = b.invoke("consume", vec![s]);
    let lambda = b.lambda(head, body);
    let arena = b.into_arena();

    let node = arena.get(lambda).unwrap();
    assert!(node.has_flag(node_flags::EXPLICIT_PARAMETER_TYPES));
    let param = arena.get_parameter(arena.get(p).unwrap()).unwrap();
    assert_eq!(arena.get_identifier_text(param.type_name), Some("String"));
}

#[test]
fn test_anonymous_class_and_source_file() {
    let mut b = TreeBuilder::new("Anon.java");
    let x = b.ident("x");
    let anon = b.new_anonymous_class("Pair", vec![x], vec![]);
    let stmt = b.expr_statement(anon);
    let root = b.source_file(vec![stmt]);
    let arena = b.into_arena();

    let new_node = arena.get(anon).unwrap();
    assert_eq!(new_node.kind, SyntaxKind::NewClass);
    let data = arena.get_call_expr(new_node).unwrap();
    assert_eq!(arena.kind(data.class_body), Some(SyntaxKind::ClassBody));

    let root_node = arena.get(root).unwrap();
    let file = arena.get_source_file(root_node).unwrap();
    assert_eq!(file.file_name, "Anon.java");
    assert_eq!(file.statements.nodes, vec![stmt]);
}

#[test]
fn test_bare_return() {
    let mut b = TreeBuilder::new("Ret.java");
    let ret = b.return_statement(NodeIndex::NONE);
    let arena = b.into_arena();
    let node = arena.get(ret).unwrap();
    assert!(arena.get_return_statement(node).unwrap().expression.is_none());
}
