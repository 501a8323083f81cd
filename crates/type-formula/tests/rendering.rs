//! Rendering behavior through the public API.

use type_formula::{FormulaError, TypeFormula, TypeFormulaBuilder};

fn leaf(name: &str) -> TypeFormula {
    TypeFormula::leaf(name)
}

fn generic(name: &str, params: Vec<TypeFormula>) -> TypeFormula {
    TypeFormula::new(name, params)
}

#[test]
fn test_scenario_non_generic() {
    assert_eq!(leaf("Int").to_string(), "Int");
}

#[test]
fn test_scenario_list() {
    assert_eq!(generic("List", vec![leaf("Int")]).to_string(), "List<Int>");
}

#[test]
fn test_scenario_map() {
    let ty = generic("Map", vec![leaf("String"), leaf("Int")]);
    assert_eq!(ty.to_string(), "Map<String, Int>");
}

#[test]
fn test_scenario_nested_pair() {
    let ty = generic("Pair", vec![generic("List", vec![leaf("Int")]), leaf("Bool")]);
    assert_eq!(ty.to_string(), "Pair<List<Int>, Bool>");
}

#[test]
fn test_scenario_empty_name() {
    assert_eq!(leaf("").to_string(), "");
}

#[test]
fn test_composed_from_rendered_parameters() {
    let params = vec![
        generic("List", vec![leaf("u64")]),
        leaf("bytes"),
        generic("Option", vec![generic("tuple2", vec![leaf("i32"), leaf("i32")])]),
    ];
    let expected = format!(
        "tuple<{}>",
        params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    assert_eq!(generic("tuple", params).to_string(), expected);
    assert_eq!(expected, "tuple<List<u64>, bytes, Option<tuple2<i32, i32>>>");
}

#[test]
fn test_rendering_is_repeatable() {
    let ty = generic("Map", vec![leaf("String"), generic("List", vec![leaf("Int")])]);

    let first = ty.to_string();
    let second = ty.to_string();
    assert_eq!(first, second);
}

#[test]
fn test_parameter_order_matters() {
    let ab = generic("Pair", vec![leaf("A"), leaf("B")]);
    let ba = generic("Pair", vec![leaf("B"), leaf("A")]);
    assert_ne!(ab.to_string(), ba.to_string());

    let same = generic("Pair", vec![leaf("A"), leaf("A")]);
    assert_eq!(same.to_string(), "Pair<A, A>");
}

#[test]
fn test_builder_renders_like_constructor() {
    let built = TypeFormulaBuilder::new("MultiResultVec")
        .param(
            TypeFormulaBuilder::new("MultiResult2")
                .leaf_param("Address")
                .leaf_param("u64")
                .build(),
        )
        .build();

    assert_eq!(built.to_string(), "MultiResultVec<MultiResult2<Address, u64>>");
}

#[test]
fn test_very_deep_formula() {
    const DEPTH: usize = 100_000;

    let mut ty = leaf("Int");
    for _ in 1..DEPTH {
        ty = generic("List", vec![ty]);
    }

    assert_eq!(ty.depth(), DEPTH);
    assert_eq!(ty.node_count(), DEPTH);

    let rendered = ty.to_string();
    let expected = format!("{}Int{}", "List<".repeat(DEPTH - 1), ">".repeat(DEPTH - 1));
    assert_eq!(rendered, expected);

    assert_eq!(
        ty.render_bounded(64),
        Err(FormulaError::DepthLimitExceeded { limit: 64, depth: DEPTH })
    );
}

#[test]
fn test_replace_parameter_beside_deep_parameter() {
    const DEPTH: usize = 100_000;

    let mut deep = leaf("Int");
    for _ in 1..DEPTH {
        deep = generic("List", vec![deep]);
    }
    let pair = generic("Pair", vec![deep, leaf("Bool")]);

    let updated = pair.with_parameter(1, leaf("Int")).unwrap();

    assert!(updated.parameter(1) == Some(&leaf("Int")));
    assert!(updated.parameter(0) == pair.parameter(0));
    assert!(updated != pair);
    assert_eq!(updated.depth(), DEPTH + 1);
    assert!(updated.to_string().ends_with(">, Int>"));
    assert!(pair.to_string().ends_with(">, Bool>"));
}

#[test]
fn test_render_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let ty = Arc::new(generic("Map", vec![leaf("String"), generic("List", vec![leaf("Int")])]));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ty = Arc::clone(&ty);
            thread::spawn(move || ty.to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Map<String, List<Int>>");
    }
}
