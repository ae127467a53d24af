//! Identifier functions: how an element's stable identifier is computed.

use idmatch_core::Model;

/// Maps an element to an optional stable identifier. Must be pure.
pub trait IdentifierFunction<M: Model> {
    fn identify(&self, model: &M, element: M::Element) -> Option<String>;
}

impl<M, F> IdentifierFunction<M> for F
where
    M: Model,
    F: Fn(&M, M::Element) -> Option<String>,
{
    fn identify(&self, model: &M, element: M::Element) -> Option<String> {
        self(model, element)
    }
}

/// The standard policy, first applicable rule wins:
///
/// 1. proxies are identified by the fragment of their target URI
/// 2. the owning resource's ID registry entry
/// 3. the value of the type's identifying attribute
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultIdentifier;

impl<M: Model> IdentifierFunction<M> for DefaultIdentifier {
    fn identify(&self, model: &M, element: M::Element) -> Option<String> {
        if let Some(target) = model.proxy_uri(element) {
            return target.fragment().map(str::to_owned);
        }
        model
            .registered_id(element)
            .or_else(|| model.id_attribute(element))
            .map(str::to_owned)
    }
}

/// Identifies elements by the value of one named attribute.
///
/// Proxies still use their target fragment, since their attributes are not
/// loaded.
#[derive(Clone, Debug)]
pub struct AttributeIdentifier {
    attribute: String,
}

impl AttributeIdentifier {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

impl<M: Model> IdentifierFunction<M> for AttributeIdentifier {
    fn identify(&self, model: &M, element: M::Element) -> Option<String> {
        if let Some(target) = model.proxy_uri(element) {
            return target.fragment().map(str::to_owned);
        }
        model.attribute(element, &self.attribute).map(str::to_owned)
    }
}
