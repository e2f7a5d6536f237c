//! A stand-in for the transliteration engine, good enough to exercise the
//! round trips the rewrite rules depend on.

use hashbrown::HashMap;

use crate::scheme::{Group, Scheme, SchemeRegistry};
use crate::transliterate::Transliterate;

const ALIGNED: [Group; 7] = [
    Group::Vowels,
    Group::VowelMarks,
    Group::Yogavaahas,
    Group::Virama,
    Group::Consonants,
    Group::Symbols,
    Group::Accents,
];

/// Replaces each longest-matching source spelling (canonical or alternate)
/// with the target symbol at the same group index. Unknown characters pass
/// through. There is no inherent-vowel or virama handling.
pub(crate) struct SymbolwiseTransliterator;

impl Transliterate for SymbolwiseTransliterator {
    fn transliterate(&self, text: &str, from: &Scheme, to: &Scheme) -> String {
        let mut table: HashMap<&str, &str> = HashMap::new();

        for group in ALIGNED {
            let (Ok(source), Ok(target)) = (from.group(group), to.group(group)) else {
                continue;
            };
            for (symbol, out) in source.iter().zip(target.iter()) {
                let spellings = std::iter::once(symbol).chain(from.alternates_of(symbol));
                for spelling in spellings.filter(|s| !s.is_empty()) {
                    table.entry(spelling.as_str()).or_insert(out.as_str());
                }
            }
        }

        let longest = table.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        'outer: while i < chars.len() {
            let start = chars[i].0;
            for n in (1..=longest.min(chars.len() - i)).rev() {
                let end = chars.get(i + n).map_or(text.len(), |(b, _)| *b);
                if let Some(replacement) = table.get(&text[start..end]) {
                    out.push_str(replacement);
                    i += n;
                    continue 'outer;
                }
            }
            out.push(chars[i].1);
            i += 1;
        }

        out
    }
}

pub(crate) fn registry() -> SchemeRegistry {
    SchemeRegistry::bundled().unwrap()
}
