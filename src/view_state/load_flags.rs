//! Load-once flags.
//!
//! A flag is set when a fetch for that content succeeds and cleared exactly
//! where the data is invalidated (a create or delete on that resource).

use std::collections::HashSet;

use super::AdminResource;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadFlags {
    tips: bool,
    admin: HashSet<AdminResource>,
}

impl LoadFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tips_loaded(&self) -> bool {
        self.tips
    }

    pub fn set_tips_loaded(&mut self, loaded: bool) {
        self.tips = loaded;
    }

    pub fn is_loaded(&self, resource: AdminResource) -> bool {
        self.admin.contains(&resource)
    }

    pub fn mark_loaded(&mut self, resource: AdminResource) {
        self.admin.insert(resource);
    }

    pub fn invalidate(&mut self, resource: AdminResource) {
        self.admin.remove(&resource);
    }

    /// Whether selecting the tab for `resource` should trigger a fetch.
    pub fn needs_load(&self, resource: AdminResource) -> bool {
        resource.always_reload() || !self.is_loaded(resource)
    }
}
