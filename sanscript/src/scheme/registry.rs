use hashbrown::HashMap;
use smol_str::SmolStr;

use super::loader::{load_scheme_str, scheme_name};
use super::{Result, Scheme, SchemeError, SchemeKind};

const BUNDLED: &[(&str, &str)] = &[
    (
        "brahmic/devanagari.json",
        include_str!("../../data/brahmic/devanagari.json"),
    ),
    ("roman/hk.json", include_str!("../../data/roman/hk.json")),
    ("roman/iast.json", include_str!("../../data/roman/iast.json")),
    ("roman/itrans.json", include_str!("../../data/roman/itrans.json")),
    (
        "roman/optitrans.json",
        include_str!("../../data/roman/optitrans.json"),
    ),
    ("roman/slp1.json", include_str!("../../data/roman/slp1.json")),
];

/// Schemes by name. Populate it once, then share it read-only.
#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    schemes: HashMap<SmolStr, Scheme>,
}

impl SchemeRegistry {
    pub fn new() -> SchemeRegistry {
        SchemeRegistry::default()
    }

    /// A registry holding the tables shipped with this crate, each built as
    /// the kind [`SchemeKind::for_name`] assigns it.
    pub fn bundled() -> Result<SchemeRegistry> {
        let mut registry = SchemeRegistry::new();

        for (source_id, json) in BUNDLED {
            let kind = SchemeKind::for_name(&scheme_name(source_id));
            let scheme = load_scheme_str(source_id, json, kind)?
                .into_scheme()
                .ok_or_else(|| SchemeError::NotAScheme(source_id.to_string()))?;
            registry.insert(scheme);
        }

        Ok(registry)
    }

    /// Adds a scheme, returning the one it replaced.
    pub fn insert(&mut self, scheme: Scheme) -> Option<Scheme> {
        log::debug!("registering scheme `{}`", scheme.name());
        self.schemes.insert(scheme.name.clone(), scheme)
    }

    /// Looks a scheme up by name; absent names are an error.
    pub fn get(&self, name: &str) -> Result<&Scheme> {
        self.schemes
            .get(name)
            .ok_or_else(|| SchemeError::UnknownScheme(name.into()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemes.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemes.keys().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
