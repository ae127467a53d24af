use indoc::indoc;

use crate::{Model, ModelError, ResourceSet};

const SAMPLE: &str = indoc! {r#"
    {
        "uri": "platform:/resource/demo/left.model",
        "registry": true,
        "types": { "Class": { "id": "name" } },
        "contents": [
            {
                "type": "Package",
                "xmi_id": "_p",
                "children": [
                    { "type": "Class", "attrs": { "name": "Person", "abstract": false } },
                    { "type": "Class", "xmi_id": "_c2", "attrs": { "name": "Address" } },
                    { "type": "Ref", "href": "lib.model#_shared" }
                ]
            },
            { "type": "Note", "attrs": { "text": "hello", "weight": 3, "gone": null } }
        ]
    }
"#};

fn load(json: &str) -> (ResourceSet, Vec<crate::ElementId>) {
    let mut set = ResourceSet::new();
    let res = set.load(json).unwrap();
    let elements = set.elements(res).collect();
    (set, elements)
}

#[test]
fn elements_are_in_containment_order() {
    let (set, elements) = load(SAMPLE);

    let types: Vec<_> = elements.iter().map(|&e| set.type_name(e)).collect();
    assert_eq!(types, ["Package", "Class", "Class", "Ref", "Note"]);
    assert_eq!(set.len(), 5);
}

#[test]
fn containers_follow_nesting() {
    let (set, e) = load(SAMPLE);

    assert_eq!(set.container(e[0]), None);
    assert_eq!(set.container(e[1]), Some(e[0]));
    assert_eq!(set.container(e[3]), Some(e[0]));
    assert_eq!(set.container(e[4]), None);
}

#[test]
fn roots_and_children() {
    let mut set = ResourceSet::new();
    let res = set.load(SAMPLE).unwrap();
    let e: Vec<_> = set.elements(res).collect();

    assert_eq!(set.roots(res), &[e[0], e[4]]);
    let children: Vec<_> = set.children(e[0]).collect();
    assert_eq!(children, [e[1], e[2], e[3]]);
    assert_eq!(set.children(e[4]).count(), 0);
}

#[test]
fn registry_ids_require_registry_resource() {
    let (set, e) = load(SAMPLE);
    assert_eq!(set.registered_id(e[0]), Some("_p"));
    assert_eq!(set.registered_id(e[1]), None);

    let (plain, e) = load(r#"{"contents": [{"type": "Package", "xmi_id": "_p"}]}"#);
    assert_eq!(plain.registered_id(e[0]), None);
}

#[test]
fn id_attribute_uses_type_metadata() {
    let (set, e) = load(SAMPLE);

    assert_eq!(set.id_attribute(e[1]), Some("Person"));
    assert_eq!(set.id_attribute(e[0]), None);
    assert_eq!(set.id_attribute(e[4]), None);
}

#[test]
fn scalar_attributes_are_stringified() {
    let (set, e) = load(SAMPLE);

    assert_eq!(set.attribute(e[1], "abstract"), Some("false"));
    assert_eq!(set.attribute(e[4], "weight"), Some("3"));
    assert_eq!(set.attribute(e[4], "gone"), None);
}

#[test]
fn proxies_expose_their_target() {
    let (set, e) = load(SAMPLE);

    assert!(set.is_proxy(e[3]));
    assert!(!set.is_proxy(e[1]));
    assert_eq!(
        set.proxy_uri(e[3]).and_then(|uri| uri.fragment()),
        Some("_shared")
    );
}

#[test]
fn resource_uri_is_shared_by_elements() {
    let (set, e) = load(SAMPLE);

    assert_eq!(
        set.resource_uri(e[3]).map(|uri| uri.as_str()),
        Some("platform:/resource/demo/left.model")
    );
}

#[test]
fn describe_labels() {
    let (set, e) = load(SAMPLE);

    let labels: Vec<_> = e.iter().map(|&e| set.describe(e)).collect();
    assert_eq!(
        labels,
        [
            "Package#_p",
            "Class(Person)",
            "Class#_c2(Address)",
            "Ref -> lib.model#_shared",
            "Note",
        ]
    );
}

#[test]
fn handles_are_unique_across_resources() {
    let mut set = ResourceSet::new();
    let left = set.load(r#"{"contents": [{"type": "A"}]}"#).unwrap();
    let right = set.load(r#"{"contents": [{"type": "A"}]}"#).unwrap();

    let l: Vec<_> = set.elements(left).collect();
    let r: Vec<_> = set.elements(right).collect();
    assert_ne!(l, r);
    assert_eq!(set.resource_of(r[0]), right);
    assert_eq!(set.resource_count(), 2);
}

#[test]
fn malformed_json_is_an_error() {
    let mut set = ResourceSet::new();
    let err = set.load(r#"{"contents": [{"attrs": {}}]}"#).unwrap_err();

    assert!(matches!(err, ModelError::Json(_)));
    assert!(set.is_empty());
}

#[test]
fn nested_attribute_is_rejected_without_partial_load() {
    let mut set = ResourceSet::new();
    let err = set
        .load(indoc! {r#"
            {"contents": [
                {"type": "A", "children": [{"type": "B", "attrs": {"tags": ["x"]}}]}
            ]}
        "#})
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "attribute `tags` of `B` must be a string, number, or boolean"
    );
    assert!(set.is_empty());
    assert_eq!(set.resource_count(), 0);
}
