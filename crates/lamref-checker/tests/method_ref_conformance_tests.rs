//! End-to-end runs of the lambda check over class-shaped trees.

use lamref_binder::BinderState;
use lamref_checker::{CheckerOptions, CheckerState};
use lamref_common::{Diagnostic, JavaVersion};
use lamref_parser::parser::{NodeArena, NodeIndex};
use lamref_parser::syntax::TreeBuilder;

struct Sample {
    arena: NodeArena,
    root: NodeIndex,
    /// Lambdas expected to be reported, in source order
    expected: Vec<NodeIndex>,
}

fn arrow_of(arena: &NodeArena, lambda: NodeIndex) -> u32 {
    arena
        .get(lambda)
        .and_then(|node| arena.get_lambda(node))
        .map(|data| data.arrow_pos)
        .expect("lambda")
}

/// ```java
/// class Sample {
///   void m(List<String> list, int k) {
///     list.forEach(s -> System.out.println(s));      // reported
///     list.stream().map(s -> s.length());            // receiver form
///     Supplier<Foo> a = () -> new Foo();             // reported
///     BiFunction<..> b = (x, y) -> combine(y, x);    // swapped
///     Function<..> c = x -> { return transform(x); } // reported
///     Function<..> d = x -> { log(x); return process(x); }
///     BiFunction<..> e = (x, y) -> new Pair(x, y) { };
///     Function<..> f = x -> scale(x, k);             // arity
///     Function<..> g = k2 -> apply(k);               // captured outer name
///   }
/// }
/// ```
fn sample() -> Sample {
    let mut b = TreeBuilder::new("Sample.java");
    let mut expected = Vec::new();
    let class_name = b.ident("Sample");
    let method_name = b.ident("m");
    let list_param = b.typed_parameter("List", "list");
    let k_param = b.typed_parameter("int", "k");
    let mut stmts = Vec::new();

    // list.forEach(s -> System.out.println(s));
    let list = b.ident("list");
    let head = b.lambda_params(&["s"]);
    let s = b.ident("s");
    let print = b.invoke("System.out.println", vec![s]);
    let printer = b.lambda(head, print);
    expected.push(printer);
    let for_each = b.invoke_on(list, "forEach", vec![printer]);
    stmts.push(b.expr_statement(for_each));

    // list.stream().map(s -> s.length());
    let list = b.ident("list");
    let stream = b.invoke_on(list, "stream", vec![]);
    let head = b.lambda_params(&["s"]);
    let s = b.ident("s");
    let length = b.invoke_on(s, "length", vec![]);
    let receiver_form = b.lambda(head, length);
    let map = b.invoke_on(stream, "map", vec![receiver_form]);
    stmts.push(b.expr_statement(map));

    // Supplier<Foo> a = () -> new Foo();
    let head = b.lambda_params(&[]);
    let ctor = b.new_class("Foo", vec![]);
    let supplier = b.lambda(head, ctor);
    expected.push(supplier);
    stmts.push(b.variable("Supplier", "a", supplier));

    // BiFunction b = (x, y) -> combine(y, x);
    let head = b.lambda_params(&["x", "y"]);
    let y = b.ident("y");
    let x = b.ident("x");
    let combine = b.invoke("combine", vec![y, x]);
    let swapped = b.lambda(head, combine);
    stmts.push(b.variable("BiFunction", "b", swapped));

    // Function c = x -> { return transform(x); };
    let head = b.lambda_params(&["x"]);
    let x = b.ident("x");
    let transform = b.invoke("transform", vec![x]);
    let ret = b.return_statement(transform);
    let body = b.block(vec![ret]);
    let returning = b.lambda(head, body);
    expected.push(returning);
    stmts.push(b.variable("Function", "c", returning));

    // Function d = x -> { log(x); return process(x); };
    let head = b.lambda_params(&["x"]);
    let x1 = b.ident("x");
    let log = b.invoke("log", vec![x1]);
    let log_stmt = b.expr_statement(log);
    let x2 = b.ident("x");
    let process = b.invoke("process", vec![x2]);
    let ret = b.return_statement(process);
    let body = b.block(vec![log_stmt, ret]);
    let two_statements = b.lambda(head, body);
    stmts.push(b.variable("Function", "d", two_statements));

    // BiFunction e = (x, y) -> new Pair(x, y) { };
    let head = b.lambda_params(&["x", "y"]);
    let x = b.ident("x");
    let y = b.ident("y");
    let anon = b.new_anonymous_class("Pair", vec![x, y], vec![]);
    let anonymous = b.lambda(head, anon);
    stmts.push(b.variable("BiFunction", "e", anonymous));

    // Function f = x -> scale(x, k);
    let head = b.lambda_params(&["x"]);
    let x = b.ident("x");
    let k = b.ident("k");
    let scale = b.invoke("scale", vec![x, k]);
    let extra_arg = b.lambda(head, scale);
    stmts.push(b.variable("Function", "f", extra_arg));

    // Function g = k2 -> apply(k);
    let head = b.lambda_params(&["k2"]);
    let k = b.ident("k");
    let apply = b.invoke("apply", vec![k]);
    let captured = b.lambda(head, apply);
    stmts.push(b.variable("Function", "g", captured));

    let body = b.block(stmts);
    let method = b.method(method_name, vec![list_param, k_param], body);
    let class = b.class(class_name, vec![method]);
    let root = b.source_file(vec![class]);

    Sample {
        arena: b.into_arena(),
        root,
        expected,
    }
}

fn run(sample: &Sample, options: CheckerOptions) -> Vec<Diagnostic> {
    let mut binder = BinderState::new();
    binder.bind_source_file(&sample.arena, sample.root);
    let mut checker = CheckerState::new(&sample.arena, Some(&binder), "Sample.java", options);
    checker.check_source_file(sample.root);
    assert!(
        checker.ctx.contract_violations.is_empty(),
        "unexpected violations: {:?}",
        checker.ctx.contract_violations
    );
    checker.ctx.diagnostics
}

#[test]
fn reports_exactly_the_forwarding_lambdas() {
    let sample = sample();
    let options = CheckerOptions::default().with_source_version(JavaVersion::new(8));
    let diagnostics = run(&sample, options);

    let starts: Vec<u32> = diagnostics.iter().map(|d| d.start).collect();
    let expected: Vec<u32> = sample
        .expected
        .iter()
        .map(|&lambda| arrow_of(&sample.arena, lambda))
        .collect();
    assert_eq!(starts, expected);
    for diag in &diagnostics {
        assert_eq!(
            diag.format_simple(),
            "suggestion[S1612]: Replace this lambda with a method reference."
        );
    }
}

#[test]
fn unset_version_reports_with_note() {
    let sample = sample();
    let diagnostics = run(&sample, CheckerOptions::default());

    assert_eq!(diagnostics.len(), sample.expected.len());
    assert!(
        diagnostics
            .iter()
            .all(|d| d.message_text.ends_with("(sourceVersion not set. Assuming 8 or greater.)"))
    );
}

#[test]
fn java7_sources_are_not_checked() {
    let sample = sample();
    let options = CheckerOptions::from_json_str(r#"{ "sourceVersion": "1.7" }"#).unwrap();
    assert!(run(&sample, options).is_empty());
}
