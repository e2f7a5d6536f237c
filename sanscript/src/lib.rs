/*! Scheme data and normalization rules for Sanskrit transliteration.

A [`Scheme`] holds the canonical symbols of one writing system (Devanagari,
IAST, ITRANS, SLP1, ...) together with the alternate spellings it accepts.
On top of that model this crate implements the rewrites that work on a
scheme's spelling conventions:

- standard form: collapse every accepted alternate to the canonical spelling,
- capitalized synonyms for schemes such as IAST,
- lazy anusvāra disambiguation, optionally protecting word-final marks,
- scheme-specific simplifications (double-lettered long vowels, lay-reader
  OPTITRANS, Śatapatha svara marks).

Glyph-by-glyph transliteration itself is not implemented here. Rewrites that
need it take a [`Convert`](transliterate::Convert) capability, usually a
[`RegistryConverter`](transliterate::RegistryConverter) wrapping a
[`SchemeRegistry`] and an engine implementing
[`Transliterate`](transliterate::Transliterate).

# Usage examples

```ignore
use sanscript::{names, AnusvaaraOptions, SchemeRegistry};
use sanscript::transliterate::RegistryConverter;

let registry = SchemeRegistry::bundled()?;
let convert = RegistryConverter::new(&registry, &engine);
let itrans = registry.get(names::ITRANS)?;

assert_eq!(itrans.standard_form("raama", &convert)?, "rAma");
assert_eq!(
    itrans.fix_lazy_anusvaara("raM kaH", &AnusvaaraOptions::default(), &convert)?,
    "ra~N kaH"
);
```
*/

#![warn(missing_docs)]
pub mod names;
pub mod rewrite;
pub mod scheme;
pub mod tokenizer;
pub mod transliterate;

#[cfg(test)]
pub(crate) mod testutil;

pub use crate::rewrite::{AnusvaaraOptions, LayIndianOptions};
pub use crate::scheme::{Scheme, SchemeError, SchemeKind, SchemeRegistry};

/// Routes `log` output to stderr, filtered by `RUST_LOG`.
#[cfg(feature = "logging")]
pub fn enable_logging() {
    let _ = env_logger::try_init();
}
