use regex::Regex;

use crate::names;
use crate::scheme::{Group, Result, Scheme, SchemeError, SchemeKind};
use crate::transliterate::Convert;

/// Combining marks that must precede an accent for the round trip to read
/// them as part of the vowel: ring below, dot above, macron and its spacing
/// form.
const LENGTH_MARKS: &str = "\u{325}\u{307}\u{af}\u{304}";

impl Scheme {
    /// Rewrites every accepted alternate spelling in `text` to this scheme's
    /// canonical spelling, by converting to the intermediate script and back.
    ///
    /// Schemes without alternates return the text unchanged. Capitalizable
    /// schemes first move length marks in front of accents.
    pub fn standard_form<C: Convert + ?Sized>(&self, text: &str, convert: &C) -> Result<String> {
        if self.kind == SchemeKind::Capitalizable {
            let reorder = self
                .accent_reorder
                .as_ref()
                .ok_or_else(|| SchemeError::missing(&self.name, Group::Accents.as_str()))?;
            let text = reorder.replace_all(text, "${2}${1}");
            return self.round_trip(&text, convert);
        }

        self.round_trip(text, convert)
    }

    fn round_trip<C: Convert + ?Sized>(&self, text: &str, convert: &C) -> Result<String> {
        if !self.has_alternates() {
            return Ok(text.to_string());
        }

        let pivot = convert.convert(text, &self.name, names::DEVANAGARI)?;
        convert.convert(&pivot, names::DEVANAGARI, &self.name)
    }

    /// Converts intermediate-script text into this scheme.
    pub fn from_devanagari<C: Convert + ?Sized>(&self, text: &str, convert: &C) -> Result<String> {
        convert.convert(text, names::DEVANAGARI, &self.name)
    }

    pub(crate) fn compile_accent_reorder(&self) -> Result<Option<Regex>> {
        let class: String = match self.groups.accents.as_ref() {
            Some(accents) => accents
                .iter()
                .flat_map(|accent| accent.chars())
                .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
                .collect(),
            None => return Ok(None),
        };

        if class.is_empty() {
            return Ok(None);
        }

        Ok(Some(Regex::new(&format!("([{class}])([{LENGTH_MARKS}]+)"))?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{Alternates, SchemeRegistry, SymbolGroups};
    use crate::testutil::{registry, SymbolwiseTransliterator};
    use crate::tokenizer::case_handling::capitalize;
    use crate::transliterate::RegistryConverter;
    use smol_str::SmolStr;

    fn standard(registry: &SchemeRegistry, scheme: &str, text: &str) -> String {
        let convert = RegistryConverter::new(registry, &SymbolwiseTransliterator);
        registry
            .get(scheme)
            .unwrap()
            .standard_form(text, &convert)
            .unwrap()
    }

    #[test]
    fn collapses_alternates() {
        let r = registry();
        assert_eq!(standard(&r, names::ITRANS, "raameshvaram"), "rAmeshvaram");
        assert_eq!(standard(&r, names::ITRANS, "xetra"), "kShetra");
        assert_eq!(standard(&r, names::ITRANS, "GYAna"), "j~nAna");
        assert_eq!(standard(&r, names::ITRANS, "kRRiShNa"), "kRRiShNa");
        assert_eq!(standard(&r, names::ITRANS, "kR^iShNa"), "kRRiShNa");
    }

    #[test]
    fn every_alternate_resolves_to_its_symbol() {
        let r = registry();
        for name in [names::ITRANS, names::OPTITRANS, names::IAST] {
            let scheme = r.get(name).unwrap();
            for (symbol, alternates) in scheme.alternates() {
                if !scheme.is_canonical(symbol) {
                    continue;
                }
                for alternate in alternates {
                    assert_eq!(
                        standard(&r, name, alternate),
                        symbol.as_str(),
                        "{}: {} should resolve to {}",
                        name,
                        alternate,
                        symbol
                    );
                }
            }
        }
    }

    #[test]
    fn idempotent() {
        let r = registry();
        let samples = [
            (names::ITRANS, "shrii gaNeshaaya namaH"),
            (names::OPTITRANS, "laxmii jnaana"),
            (names::IAST, "Rāmaḥ Kr̥ṣṇaḥ"),
            (names::HK, "rAmaH"),
        ];
        for (name, text) in samples {
            let once = standard(&r, name, text);
            assert_eq!(standard(&r, name, &once), once, "{} {}", name, text);
        }
    }

    #[test]
    fn no_alternates_is_identity() {
        let r = registry();
        assert_eq!(standard(&r, names::HK, "rAmaH"), "rAmaH");
        assert_eq!(standard(&r, names::SLP1, "rAmaH"), "rAmaH");

        // No conversion happens, so an empty registry is enough.
        let empty = SchemeRegistry::new();
        let convert = RegistryConverter::new(&empty, &SymbolwiseTransliterator);
        let hk = r.get(names::HK).unwrap();
        assert_eq!(hk.standard_form("kaH", &convert).unwrap(), "kaH");
    }

    #[test]
    fn capitalized_spellings() {
        let r = registry();
        assert_eq!(standard(&r, names::IAST, "Rāmaḥ"), "rāmaḥ");
        assert_eq!(standard(&r, names::IAST, "Āśrama"), "āśrama");
        assert_eq!(standard(&r, names::IAST, "Kr̥ṣṇa"), "kṛṣṇa");
        assert_eq!(standard(&r, names::IAST, "Oṃ"), "oṃ");
    }

    #[test]
    fn capitalization_closure() {
        let r = registry();
        let iast = r.get(names::IAST).unwrap();
        let letters = iast
            .group(Group::Vowels)
            .unwrap()
            .iter()
            .chain(iast.group(Group::Consonants).unwrap());
        for symbol in letters {
            assert_eq!(standard(&r, names::IAST, &capitalize(symbol)), symbol.as_str());
            for alternate in iast.alternates_of(symbol) {
                assert_eq!(standard(&r, names::IAST, alternate), symbol.as_str());
            }
        }
    }

    #[test]
    fn accents_follow_length_marks() {
        let r = registry();
        // r, udatta, ring below: the ring must join the r before the round trip
        assert_eq!(standard(&r, names::IAST, "r\u{30d}\u{325}"), "ṛ\u{30d}");
        assert_eq!(standard(&r, names::IAST, "a\u{331}\u{304}"), "ā\u{331}");
        assert_eq!(standard(&r, names::IAST, "ā\u{30d}"), "ā\u{30d}");
    }

    #[test]
    fn capitalizable_needs_accents() {
        let symbols = |list: &[&str]| list.iter().map(|s| SmolStr::new(s)).collect::<Vec<_>>();
        let groups = SymbolGroups {
            vowels: symbols(&["a", "ā"]),
            consonants: Some(symbols(&["k"])),
            accented_vowel_alternates: Some(Alternates::new()),
            ..Default::default()
        };
        let scheme =
            Scheme::new("bare", true, SchemeKind::Capitalizable, groups, Alternates::new()).unwrap();
        let r = registry();
        let convert = RegistryConverter::new(&r, &SymbolwiseTransliterator);
        assert!(matches!(
            scheme.standard_form("ka", &convert),
            Err(SchemeError::MissingGroup { .. })
        ));
    }

    #[test]
    fn from_devanagari() {
        let r = registry();
        let convert = RegistryConverter::new(&r, &SymbolwiseTransliterator);
        let iast = r.get(names::IAST).unwrap();
        assert_eq!(iast.from_devanagari("रआमअः", &convert).unwrap(), "rāmaḥ");
    }
}
