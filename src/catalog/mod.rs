//! Read-only registry of architecture and design-pattern profiles.
//!
//! The built-in catalog lives in `static` tables, so every profile handed
//! out is `&'static` and can be shared across threads without copying.

pub mod architectures;
pub mod patterns;

use crate::core::profiles::{ArchitectureKind, ArchitectureProfile, DesignPatternProfile};

#[derive(Debug, Clone, Copy)]
pub struct CatalogStore {
    architectures: &'static [ArchitectureProfile],
    patterns: &'static [DesignPatternProfile],
}

impl CatalogStore {
    pub fn new(
        architectures: &'static [ArchitectureProfile],
        patterns: &'static [DesignPatternProfile],
    ) -> Self {
        Self {
            architectures,
            patterns,
        }
    }

    /// Catalog with the four built-in architecture styles and their patterns.
    pub fn builtin() -> Self {
        Self::new(&architectures::ARCHITECTURES, &patterns::PATTERNS)
    }

    pub fn list_architectures(&self) -> &'static [ArchitectureProfile] {
        self.architectures
    }

    /// Look up an architecture by id. A miss is `None`, never an error.
    pub fn get_architecture(&self, id: &str) -> Option<&'static ArchitectureProfile> {
        self.architectures.iter().find(|profile| profile.id == id)
    }

    pub fn list_patterns(&self) -> &'static [DesignPatternProfile] {
        self.patterns
    }

    pub fn get_pattern(&self, id: &str) -> Option<&'static DesignPatternProfile> {
        self.patterns.iter().find(|pattern| pattern.id == id)
    }

    /// Patterns applicable to the given architecture, in catalog order.
    pub fn patterns_for(
        &self,
        kind: ArchitectureKind,
    ) -> impl Iterator<Item = &'static DesignPatternProfile> {
        self.patterns.iter().filter(move |pattern| pattern.applies_to(kind))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::builtin()
    }
}
