//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::resource::{ElementInfo, ResourceInfo};
use crate::{ElementId, ResourceId, ResourceSet};

impl ResourceSet {
    pub(crate) fn ensure_element(&self, element: ElementId) -> &ElementInfo {
        self.get_element(element).unwrap_or_else(|| {
            panic!(
                "ResourceSet: element {} not found \
                 (handles must come from the set that is queried)",
                element.as_u32()
            )
        })
    }

    pub(crate) fn ensure_resource(&self, resource: ResourceId) -> &ResourceInfo {
        self.get_resource(resource).unwrap_or_else(|| {
            panic!(
                "ResourceSet: resource {} not found \
                 (handles must come from the set that is queried)",
                resource.as_u32()
            )
        })
    }
}
