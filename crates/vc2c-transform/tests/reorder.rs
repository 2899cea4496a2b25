use super::*;
use crate::result::{Attribute, ReferenceKind, Tag};
use indexmap::IndexSet;
use vc2c_ir::IRNode;

fn fragment(name: &str, dependencies: &[&str]) -> RewrittenResult {
    RewrittenResult {
        result: ConversionResult::composition(
            Tag::Method,
            ReferenceKind::Variable,
            vec![IRNode::func_decl(name, vec![], vec![])],
        )
        .with_attributes(vec![Attribute::name(name)]),
        dependencies: dependencies.iter().map(|dep| dep.to_string()).collect::<IndexSet<_>>(),
    }
}

fn names(results: &[ConversionResult]) -> Vec<&str> {
    results
        .iter()
        .filter_map(|result| result.name_at(0))
        .collect()
}

#[test]
fn test_seeds_keep_original_order() {
    let ordered = reorder(vec![fragment("a", &[]), fragment("b", &[]), fragment("c", &[])]);
    assert_eq!(names(&ordered), vec!["a", "b", "c"]);
}

#[test]
fn test_dependents_follow_their_dependencies() {
    let ordered = reorder(vec![
        fragment("total", &["price", "count"]),
        fragment("price", &[]),
        fragment("label", &["total"]),
        fragment("count", &[]),
    ]);
    assert_eq!(names(&ordered), vec!["price", "count", "total", "label"]);
}

#[test]
fn test_available_names_grow_as_fragments_are_placed() {
    let ordered = reorder(vec![
        fragment("c", &["b"]),
        fragment("b", &["a"]),
        fragment("a", &[]),
    ]);
    assert_eq!(names(&ordered), vec!["a", "b", "c"]);
}

#[test]
fn test_cycle_keeps_residue_in_original_order() {
    let ordered = reorder(vec![
        fragment("x", &["y"]),
        fragment("seed", &[]),
        fragment("y", &["x"]),
        fragment("z", &["seed"]),
    ]);
    assert_eq!(names(&ordered), vec!["seed", "z", "x", "y"]);
}

#[test]
fn test_unknown_dependency_does_not_drop_fragment() {
    let ordered = reorder(vec![fragment("orphan", &["missing"]), fragment("a", &[])]);
    assert_eq!(names(&ordered), vec!["a", "orphan"]);
}

#[test]
fn test_output_is_a_permutation_of_input() {
    let input = vec![
        fragment("e", &["d"]),
        fragment("d", &["c", "b"]),
        fragment("c", &["a"]),
        fragment("b", &["zz"]),
        fragment("a", &[]),
    ];
    let count = input.len();
    let ordered = reorder(input);
    assert_eq!(ordered.len(), count);

    let mut sorted = names(&ordered);
    sorted.sort_unstable();
    assert_eq!(sorted, vec!["a", "b", "c", "d", "e"]);
    // `c` only needs `a`; `b` is stuck on an unknown name and drags `d`, `e` along.
    assert_eq!(names(&ordered), vec!["a", "c", "e", "d", "b"]);
}

#[test]
fn test_empty_input() {
    assert!(reorder(Vec::new()).is_empty());
}
