use indoc::indoc;

use idmatch_core::{ElementId, ResourceSet};

use super::*;

const TYPES: &str = r#"{ "P": { "id": "name" }, "C": { "id": "name" } }"#;

fn load(set: &mut ResourceSet, contents: &str) -> Vec<ElementId> {
    let json = format!(r#"{{ "types": {TYPES}, "contents": {contents} }}"#);
    let res = set.load(&json).unwrap();
    set.elements(res).collect()
}

fn pick(set: &ResourceSet, elements: &[ElementId], labels: &[&str]) -> Vec<ElementId> {
    labels
        .iter()
        .map(|label| {
            *elements
                .iter()
                .find(|&&e| set.describe(e) == *label)
                .unwrap()
        })
        .collect()
}

fn run(set: &ResourceSet, left: &[ElementId], right: &[ElementId], origin: &[ElementId]) -> String {
    let mut comparison = Comparison::new();
    IdentifierMatcher::new().create_matches(
        set,
        &mut comparison,
        &mut left.iter().copied(),
        &mut right.iter().copied(),
        &mut origin.iter().copied(),
    );
    comparison.printer().labels(|e| set.describe(e)).render()
}

#[test]
fn child_before_parent_is_nested_afterwards() {
    let mut set = ResourceSet::new();
    let right = load(
        &mut set,
        indoc! {r#"
            [
              { "type": "P", "attrs": { "name": "p" }, "children": [
                { "type": "C", "attrs": { "name": "c" } }
              ]}
            ]
        "#},
    );
    let right = pick(&set, &right, &["C(c)", "P(p)"]);

    insta::assert_snapshot!(run(&set, &[], &right, &[]), @r"
    L: - | R: P(p) | O: -
      L: - | R: C(c) | O: -
    ");
}

#[test]
fn parent_known_only_on_right() {
    let mut set = ResourceSet::new();
    let nested = indoc! {r#"
        [
          { "type": "P", "attrs": { "name": "p" }, "children": [
            { "type": "C", "attrs": { "name": "c" } }
          ]}
        ]
    "#};
    let left = load(&mut set, nested);
    let right = load(&mut set, nested);
    let left = pick(&set, &left, &["C(c)"]);

    insta::assert_snapshot!(run(&set, &left, &right, &[]), @r"
    L: - | R: P(p) | O: -
      L: C(c) | R: C(c) | O: -
    ");
}

#[test]
fn parent_known_only_on_origin() {
    let mut set = ResourceSet::new();
    let nested = indoc! {r#"
        [
          { "type": "P", "attrs": { "name": "p" }, "children": [
            { "type": "C", "attrs": { "name": "c" } }
          ]}
        ]
    "#};
    let left = load(&mut set, nested);
    let origin = load(&mut set, nested);
    let left = pick(&set, &left, &["C(c)"]);
    let origin = pick(&set, &origin, &["C(c)", "P(p)"]);

    insta::assert_snapshot!(run(&set, &left, &[], &origin), @r"
    L: - | R: - | O: P(p)
      L: C(c) | R: - | O: C(c)
    ");
}

#[test]
fn left_parent_wins_over_right_parent() {
    let mut set = ResourceSet::new();
    let left = load(
        &mut set,
        indoc! {r#"
            [
              { "type": "P", "attrs": { "name": "p1" }, "children": [
                { "type": "C", "attrs": { "name": "c" } }
              ]},
              { "type": "P", "attrs": { "name": "p2" } }
            ]
        "#},
    );
    let right = load(
        &mut set,
        indoc! {r#"
            [
              { "type": "P", "attrs": { "name": "p1" } },
              { "type": "P", "attrs": { "name": "p2" }, "children": [
                { "type": "C", "attrs": { "name": "c" } }
              ]}
            ]
        "#},
    );
    let left = pick(&set, &left, &["C(c)", "P(p1)", "P(p2)"]);

    insta::assert_snapshot!(run(&set, &left, &right, &[]), @r"
    L: P(p1) | R: P(p1) | O: -
      L: C(c) | R: C(c) | O: -
    L: P(p2) | R: P(p2) | O: -
    ");
}

#[test]
fn swapped_containment_keeps_both_matches_reachable() {
    let mut set = ResourceSet::new();
    let left = load(
        &mut set,
        indoc! {r#"
            [
              { "type": "P", "attrs": { "name": "a" }, "children": [
                { "type": "C", "attrs": { "name": "b" } }
              ]}
            ]
        "#},
    );
    let right = load(
        &mut set,
        indoc! {r#"
            [
              { "type": "C", "attrs": { "name": "b" }, "children": [
                { "type": "P", "attrs": { "name": "a" } }
              ]}
            ]
        "#},
    );
    let left = pick(&set, &left, &["C(b)", "P(a)"]);

    insta::assert_snapshot!(run(&set, &left, &right, &[]), @r"
    L: P(a) | R: P(a) | O: -
      L: C(b) | R: C(b) | O: -
    ");
}

#[test]
fn nested_matches_are_left_alone() {
    let mut set = ResourceSet::new();
    let left = load(
        &mut set,
        indoc! {r#"
            [
              { "type": "P", "attrs": { "name": "p1" }, "children": [
                { "type": "C", "attrs": { "name": "c" } }
              ]},
              { "type": "P", "attrs": { "name": "p2" } }
            ]
        "#},
    );
    let right = load(
        &mut set,
        indoc! {r#"
            [
              { "type": "P", "attrs": { "name": "p2" }, "children": [
                { "type": "C", "attrs": { "name": "c" } }
              ]}
            ]
        "#},
    );

    insta::assert_snapshot!(run(&set, &left, &right, &[]), @r"
    L: P(p1) | R: - | O: -
      L: C(c) | R: C(c) | O: -
    L: P(p2) | R: P(p2) | O: -
    ");
}
