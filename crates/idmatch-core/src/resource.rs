//! JSON-backed element model.
//!
//! Two layers, mirroring the on-disk format:
//! - **Deserialization layer** (`RawResource`, `RawElement`): 1:1 with the
//!   resource JSON
//! - **Analysis layer** (`ResourceSet`): dense `ElementId` handles with
//!   container, resource, and attribute lookups
//!
//! Several resources (typically left, right, and origin) live in one set so
//! that element handles are unique across sides.

use std::ops::Range;

use indexmap::IndexMap;

use crate::{Model, Uri};

// ============================================================================
// Deserialization Layer
// ============================================================================

/// One serialized resource.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawResource {
    /// Location of the resource, reported in diagnostics.
    #[serde(default)]
    pub uri: Option<Uri>,
    /// Whether the resource keeps an explicit element ID registry (`xmi_id`).
    #[serde(default)]
    pub registry: bool,
    /// Per-type metadata, keyed by type name.
    #[serde(default)]
    pub types: IndexMap<String, RawType>,
    #[serde(default)]
    pub contents: Vec<RawElement>,
}

/// Type metadata.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawType {
    /// Name of the attribute that identifies instances of this type.
    #[serde(default)]
    pub id: Option<String>,
}

/// One serialized element and its contained children.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawElement {
    #[serde(rename = "type")]
    pub type_name: String,
    /// Registry identifier, honored only when the resource has `registry` set.
    #[serde(default)]
    pub xmi_id: Option<String>,
    /// Target of an unresolved reference. Its presence makes this a proxy.
    #[serde(default)]
    pub href: Option<Uri>,
    #[serde(default)]
    pub attrs: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub children: Vec<RawElement>,
}

/// Parse resource JSON into its raw form.
pub fn parse_resource(json: &str) -> Result<RawResource, serde_json::Error> {
    serde_json::from_str(json)
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("malformed resource: {0}")]
    Json(#[from] serde_json::Error),

    #[error("attribute `{attribute}` of `{type_name}` must be a string, number, or boolean")]
    UnsupportedAttribute {
        type_name: String,
        attribute: String,
    },
}

// ============================================================================
// Analysis Layer
// ============================================================================

/// Handle to an element of a `ResourceSet`.
///
/// IDs are assigned in pre-order, so iterating them in ascending order visits
/// parents before children.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a resource of a `ResourceSet`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ResourceId(u32);

impl ResourceId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ElementInfo {
    pub(crate) resource: ResourceId,
    pub(crate) container: Option<ElementId>,
    pub(crate) type_name: String,
    pub(crate) xmi_id: Option<String>,
    pub(crate) proxy: Option<Uri>,
    pub(crate) attrs: IndexMap<String, String>,
}

#[derive(Debug, Clone)]
pub(crate) struct ResourceInfo {
    pub(crate) uri: Option<Uri>,
    pub(crate) registry: bool,
    pub(crate) types: IndexMap<String, RawType>,
    pub(crate) elements: Range<u32>,
    pub(crate) roots: Vec<ElementId>,
}

/// A set of loaded resources sharing one element ID space.
#[derive(Debug, Clone, Default)]
pub struct ResourceSet {
    resources: Vec<ResourceInfo>,
    elements: Vec<ElementInfo>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and add a resource from JSON.
    pub fn load(&mut self, json: &str) -> Result<ResourceId, ModelError> {
        let raw = parse_resource(json)?;
        self.add(raw)
    }

    /// Add an already parsed resource.
    ///
    /// On error the set is left unchanged.
    pub fn add(&mut self, raw: RawResource) -> Result<ResourceId, ModelError> {
        let id = ResourceId(self.resources.len() as u32);
        let first = self.elements.len();

        let mut roots = Vec::with_capacity(raw.contents.len());
        for element in raw.contents {
            match self.push_element(element, id, None) {
                Ok(root) => roots.push(root),
                Err(err) => {
                    self.elements.truncate(first);
                    return Err(err);
                }
            }
        }

        self.resources.push(ResourceInfo {
            uri: raw.uri,
            registry: raw.registry,
            types: raw.types,
            elements: first as u32..self.elements.len() as u32,
            roots,
        });
        Ok(id)
    }

    fn push_element(
        &mut self,
        raw: RawElement,
        resource: ResourceId,
        container: Option<ElementId>,
    ) -> Result<ElementId, ModelError> {
        let mut attrs = IndexMap::with_capacity(raw.attrs.len());
        for (name, value) in raw.attrs {
            let text = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    return Err(ModelError::UnsupportedAttribute {
                        type_name: raw.type_name,
                        attribute: name,
                    });
                }
            };
            attrs.insert(name, text);
        }

        let id = ElementId(self.elements.len() as u32);
        self.elements.push(ElementInfo {
            resource,
            container,
            type_name: raw.type_name,
            xmi_id: raw.xmi_id,
            proxy: raw.href,
            attrs,
        });

        for child in raw.children {
            self.push_element(child, resource, Some(id))?;
        }
        Ok(id)
    }

    /// Elements of `resource` in containment order (parents before children).
    pub fn elements(&self, resource: ResourceId) -> impl Iterator<Item = ElementId> + '_ {
        self.ensure_resource(resource)
            .elements
            .clone()
            .map(ElementId)
    }

    /// Top-level elements of `resource`.
    pub fn roots(&self, resource: ResourceId) -> &[ElementId] {
        &self.ensure_resource(resource).roots
    }

    /// Elements directly contained by `element`, in document order.
    pub fn children(&self, element: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        let range = self.ensure_resource(self.resource_of(element)).elements.clone();
        let start = element.as_u32() + 1;
        (start..range.end)
            .map(ElementId)
            .filter(move |&e| self.ensure_element(e).container == Some(element))
    }

    pub fn resource_of(&self, element: ElementId) -> ResourceId {
        self.ensure_element(element).resource
    }

    pub fn uri(&self, resource: ResourceId) -> Option<&Uri> {
        self.ensure_resource(resource).uri.as_ref()
    }

    pub fn type_name(&self, element: ElementId) -> &str {
        &self.ensure_element(element).type_name
    }

    /// Short human-readable label: type plus whatever identifies the element.
    ///
    /// `Class#_c1(Person)`, `Package(core)`, `Ref -> lib.model#_x`, `Note`.
    pub fn describe(&self, element: ElementId) -> String {
        let info = self.ensure_element(element);
        let mut out = info.type_name.clone();
        if let Some(target) = &info.proxy {
            out.push_str(" -> ");
            out.push_str(target.as_str());
            return out;
        }
        if let Some(xmi_id) = self.registered_id(element) {
            out.push('#');
            out.push_str(xmi_id);
        }
        if let Some(value) = self.id_attribute(element) {
            out.push('(');
            out.push_str(value);
            out.push(')');
        }
        out
    }

    /// Number of elements across all resources.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

impl Model for ResourceSet {
    type Element = ElementId;

    fn container(&self, element: ElementId) -> Option<ElementId> {
        self.ensure_element(element).container
    }

    fn proxy_uri(&self, element: ElementId) -> Option<&Uri> {
        self.ensure_element(element).proxy.as_ref()
    }

    fn registered_id(&self, element: ElementId) -> Option<&str> {
        let info = self.ensure_element(element);
        if !self.ensure_resource(info.resource).registry {
            return None;
        }
        info.xmi_id.as_deref()
    }

    fn id_attribute(&self, element: ElementId) -> Option<&str> {
        let info = self.ensure_element(element);
        let resource = self.ensure_resource(info.resource);
        let name = resource.types.get(&info.type_name)?.id.as_deref()?;
        info.attrs.get(name).map(String::as_str)
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.ensure_element(element)
            .attrs
            .get(name)
            .map(String::as_str)
    }

    fn resource_uri(&self, element: ElementId) -> Option<&Uri> {
        self.uri(self.resource_of(element))
    }
}

impl ResourceSet {
    pub(crate) fn get_element(&self, element: ElementId) -> Option<&ElementInfo> {
        self.elements.get(element.index())
    }

    pub(crate) fn get_resource(&self, resource: ResourceId) -> Option<&ResourceInfo> {
        self.resources.get(resource.index())
    }
}
