use indoc::indoc;

use idmatch_core::{ElementId, ResourceSet};

use super::*;

const SAMPLE: &str = indoc! {r#"
    {
      "uri": "platform:/resource/demo/left.model",
      "registry": true,
      "types": { "Class": { "id": "name" } },
      "contents": [
        { "type": "Package", "xmi_id": "_p", "children": [
          { "type": "Class", "attrs": { "name": "Person" } },
          { "type": "Class", "xmi_id": "_c2", "attrs": { "name": "Address" } },
          { "type": "Ref", "href": "lib.model#_shared" },
          { "type": "Ref", "xmi_id": "_r", "href": "lib.model" },
          { "type": "Note", "attrs": { "weight": 3, "label": "n" } }
        ]}
      ]
    }
"#};

fn sample() -> (ResourceSet, Vec<ElementId>) {
    let mut set = ResourceSet::new();
    let res = set.load(SAMPLE).unwrap();
    let elements = set.elements(res).collect();
    (set, elements)
}

fn identify(f: &impl IdentifierFunction<ResourceSet>, set: &ResourceSet, e: ElementId) -> Option<String> {
    f.identify(set, e)
}

#[test]
fn default_identifier_policy() {
    let (set, e) = sample();
    let ids: Vec<_> = e.iter().map(|&e| identify(&DefaultIdentifier, &set, e)).collect();

    assert_eq!(
        ids,
        [
            Some("_p".to_owned()),
            Some("Person".to_owned()),
            Some("_c2".to_owned()),
            Some("_shared".to_owned()),
            None,
            None,
        ]
    );
}

#[test]
fn registry_ignored_without_registry_flag() {
    let mut set = ResourceSet::new();
    let res = set
        .load(r#"{ "types": { "A": { "id": "name" } }, "contents": [{ "type": "A", "xmi_id": "_a", "attrs": { "name": "n" } }] }"#)
        .unwrap();
    let a = set.roots(res)[0];

    assert_eq!(identify(&DefaultIdentifier, &set, a).as_deref(), Some("n"));
}

#[test]
fn attribute_identifier_reads_named_attribute() {
    let (set, e) = sample();
    let by_label = AttributeIdentifier::new("label");
    assert_eq!(by_label.attribute(), "label");

    assert_eq!(identify(&by_label, &set, e[0]), None);
    assert_eq!(identify(&by_label, &set, e[5]).as_deref(), Some("n"));
    assert_eq!(identify(&by_label, &set, e[3]).as_deref(), Some("_shared"));

    let by_weight = AttributeIdentifier::new("weight");
    assert_eq!(identify(&by_weight, &set, e[5]).as_deref(), Some("3"));
}

#[test]
fn closures_are_identifier_functions() {
    let (set, e) = sample();
    let upper = |set: &ResourceSet, e: ElementId| Some(set.type_name(e).to_uppercase());

    assert_eq!(identify(&upper, &set, e[1]).as_deref(), Some("CLASS"));
}

#[test]
fn containment_parent() {
    let (set, e) = sample();

    assert_eq!(Containment.parent_of(&set, e[0]), None);
    assert_eq!(Containment.parent_of(&set, e[2]), Some(e[0]));
}

#[test]
fn resource_location_forms() {
    let (set, e) = sample();
    assert_eq!(resource_location(&set, e[1]).as_deref(), Some("/demo/left.model"));

    let mut other = ResourceSet::new();
    let res = other
        .load(r#"{ "uri": "file:/tmp/x.model", "contents": [{ "type": "A" }] }"#)
        .unwrap();
    let a = other.roots(res)[0];
    assert_eq!(resource_location(&other, a).as_deref(), Some("file:/tmp/x.model"));

    let res = other.load(r#"{ "contents": [{ "type": "A" }] }"#).unwrap();
    let b = other.roots(res)[0];
    assert_eq!(resource_location(&other, b), None);
}
