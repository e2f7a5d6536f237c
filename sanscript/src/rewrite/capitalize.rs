use itertools::Itertools;
use smol_str::SmolStr;

use crate::scheme::{Group, Result, Scheme};
use crate::tokenizer::case_handling::capitalize;

const OM: &str = "o\u{1e43}";

impl Scheme {
    /// Registers the capitalized spelling of every letter, and of each of its
    /// alternates, as further alternates of that letter.
    pub(crate) fn add_capitalized_synonyms(&mut self) -> Result<()> {
        let mut letters: Vec<SmolStr> = self.groups.vowels.clone();
        letters.extend(self.group(Group::Consonants)?.iter().cloned());
        if let Some(extra) = &self.groups.extra_consonants {
            letters.extend(extra.iter().cloned());
        }
        letters.extend(self.accented_vowel_alternates()?.keys().cloned());
        letters.push(SmolStr::new(OM));

        for letter in letters {
            let synonyms = self.capitalized_synonyms(&letter);
            if !synonyms.is_empty() {
                self.alternates.insert(letter, synonyms);
            }
        }

        Ok(())
    }

    /// `[capitalized letter, existing alternates.., their capitalizations..]`,
    /// without repeats. Capitalizations that would shadow another canonical
    /// symbol are dropped.
    fn capitalized_synonyms(&self, letter: &SmolStr) -> Vec<SmolStr> {
        let existing = self.alternates_of(letter);

        std::iter::once(capitalize(letter))
            .chain(existing.iter().cloned())
            .chain(existing.iter().map(|a| capitalize(a)))
            .filter(|s| s != letter)
            .filter(|s| {
                if existing.contains(s) || !self.is_canonical(s) {
                    return true;
                }
                log::warn!(
                    "{}: capitalized `{}` is canonical, not adding it as an alternate of `{}`",
                    self.name,
                    s,
                    letter
                );
                false
            })
            .unique()
            .collect()
    }
}
