use crate::domain::model::GroupKey;
use std::collections::BTreeMap;

/// New groups start collapsed.
pub const DEFAULT_EXPANDED: bool = false;

/// Expanded/collapsed flag per group heading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    flags: BTreeMap<GroupKey, bool>,
}

impl ExpansionState {
    pub fn is_expanded(&self, key: &GroupKey) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    pub fn get(&self, key: &GroupKey) -> Option<bool> {
        self.flags.get(key).copied()
    }

    pub fn set(&mut self, key: &GroupKey, expanded: bool) -> bool {
        match self.flags.get_mut(key) {
            Some(flag) => {
                *flag = expanded;
                true
            }
            None => false,
        }
    }

    /// Flips one group. Returns the new flag, or `None` for a key the state does not track.
    pub fn toggle(&mut self, key: &GroupKey) -> Option<bool> {
        let flag = self.flags.get_mut(key)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn any_expanded(&self) -> bool {
        self.flags.values().any(|&v| v)
    }

    pub fn set_all(&mut self, expanded: bool) {
        self.flags.values_mut().for_each(|flag| *flag = expanded);
    }

    /// Collapse everything when anything is open, otherwise open everything.
    pub fn toggle_all(&mut self) -> bool {
        let expand = !self.any_expanded();
        self.set_all(expand);
        expand
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.flags.keys()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Merges the previous state onto a new key set.
///
/// Keys present in both keep their flag, new keys get `default_expanded`, and
/// keys that disappeared are dropped.
pub fn derive_expansion_state<'a, I>(
    keys: I,
    previous: &ExpansionState,
    default_expanded: bool,
) -> ExpansionState
where
    I: IntoIterator<Item = &'a GroupKey>,
{
    let flags = keys
        .into_iter()
        .map(|key| {
            let flag = previous.get(key).unwrap_or(default_expanded);
            (key.clone(), flag)
        })
        .collect();
    ExpansionState { flags }
}
