use idmatch_core::Model;

/// Structural parent lookup used to nest matches.
pub trait ParentFunction<M: Model> {
    fn parent_of(&self, model: &M, element: M::Element) -> Option<M::Element>;
}

impl<M, F> ParentFunction<M> for F
where
    M: Model,
    F: Fn(&M, M::Element) -> Option<M::Element>,
{
    fn parent_of(&self, model: &M, element: M::Element) -> Option<M::Element> {
        self(model, element)
    }
}

/// The element's native container.
#[derive(Clone, Copy, Debug, Default)]
pub struct Containment;

impl<M: Model> ParentFunction<M> for Containment {
    fn parent_of(&self, model: &M, element: M::Element) -> Option<M::Element> {
        model.container(element)
    }
}
