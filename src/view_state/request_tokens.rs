//! Per-container request tokens.
//!
//! Each fetch that will write into a container takes a fresh token for it.
//! When the response arrives the writer checks that its token is still the
//! latest one; otherwise a newer request owns the container and the stale
//! response is dropped.

use std::collections::HashMap;

use crate::bindings::Binding;

/// Opaque ticket for one in-flight render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    container: Binding,
    generation: u64,
}

impl RequestToken {
    pub fn container(&self) -> Binding {
        self.container
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestTokens {
    latest: HashMap<Binding, u64>,
}

impl RequestTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede every earlier token for `container`.
    pub fn issue(&mut self, container: Binding) -> RequestToken {
        let generation = self.latest.entry(container).or_insert(0);
        *generation += 1;
        RequestToken {
            container,
            generation: *generation,
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get(&token.container) == Some(&token.generation)
    }
}
