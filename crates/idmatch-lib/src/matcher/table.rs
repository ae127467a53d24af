use std::collections::HashMap;

use crate::comparison::MatchId;

/// Identifier → match lookup, split by proxy flag.
///
/// A proxy and a resolved element that happen to compute the same
/// identifier land in different maps and never merge.
#[derive(Debug, Default)]
pub(crate) struct IdentifierTable {
    resolved: HashMap<String, MatchId>,
    proxies: HashMap<String, MatchId>,
}

impl IdentifierTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the match previously registered under the same key, if any.
    pub(crate) fn insert(&mut self, proxy: bool, identifier: String, id: MatchId) -> Option<MatchId> {
        self.map_mut(proxy).insert(identifier, id)
    }

    pub(crate) fn get(&self, proxy: bool, identifier: &str) -> Option<MatchId> {
        let map = if proxy { &self.proxies } else { &self.resolved };
        map.get(identifier).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.resolved.len() + self.proxies.len()
    }

    fn map_mut(&mut self, proxy: bool) -> &mut HashMap<String, MatchId> {
        if proxy {
            &mut self.proxies
        } else {
            &mut self.resolved
        }
    }
}
