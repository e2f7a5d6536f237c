//! Seams to the collaborators this crate relies on but does not implement:
//! the glyph transliteration engine and script detection.

use smol_str::SmolStr;

use crate::scheme::{Result, Scheme, SchemeRegistry};

/// Symbol-by-symbol conversion between two schemes, using the alignment of
/// their canonical symbols.
pub trait Transliterate {
    fn transliterate(&self, text: &str, from: &Scheme, to: &Scheme) -> String;
}

/// Guesses which scheme a piece of text is written in.
pub trait Detect {
    /// Name of the detected scheme.
    fn detect(&self, text: &str) -> SmolStr;
}

/// Conversion between schemes addressed by name. This is the only capability
/// the rewrite rules need to pass text through the intermediate script.
pub trait Convert {
    fn convert(&self, text: &str, from: &str, to: &str) -> Result<String>;
}

/// [`Convert`] backed by a registry and an engine. Names missing from the
/// registry fail with [`SchemeError::UnknownScheme`](crate::scheme::SchemeError::UnknownScheme).
pub struct RegistryConverter<'a, T: ?Sized> {
    registry: &'a SchemeRegistry,
    engine: &'a T,
}

impl<'a, T: Transliterate + ?Sized> RegistryConverter<'a, T> {
    pub fn new(registry: &'a SchemeRegistry, engine: &'a T) -> RegistryConverter<'a, T> {
        RegistryConverter { registry, engine }
    }

    pub fn registry(&self) -> &SchemeRegistry {
        self.registry
    }
}

impl<'a, T: Transliterate + ?Sized> Convert for RegistryConverter<'a, T> {
    fn convert(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let from = self.registry.get(from)?;
        let to = self.registry.get(to)?;
        log::trace!("convert {} -> {}: {:?}", from.name(), to.name(), text);
        Ok(self.engine.transliterate(text, from, to))
    }
}
