//! Resolution of the "lazy" anusvāra.
//!
//! Before a stop, the generic nasal mark stands for the nasal consonant of
//! the stop's place of articulation. Lazy spellings leave the mark as is;
//! these rules write out the nasal. Before y, l and v the mark is kept as a
//! nasalized copy of the semivowel.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::AnusvaaraOptions;
use crate::names;
use crate::scheme::{Result, Scheme, SchemeKind};
use crate::tokenizer::map_word_interiors;
use crate::transliterate::Convert;

/// One rewrite of `<mark><spaces><consonant>`.
#[derive(Debug, Clone, Copy)]
pub struct NasalRule {
    /// Regex class body matching the following consonant
    pub before: &'static str,
    /// What the mark is replaced with
    pub nasal: &'static str,
    /// Emit the consonant before the nasal as well as after it
    pub doubled: bool,
    /// Disabled by `omit_yrl`
    pub semivowel: bool,
}

/// An ordered set of nasal rules for one scheme's spelling.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    /// The generic nasal mark
    pub mark: &'static str,
    /// Text that, directly before the mark, blocks every rule under `omit_sam`
    pub guard: &'static str,
    /// Applied in order
    pub rules: &'static [NasalRule],
}

/// Rules for ITRANS text, where `M` is the generic nasal.
pub static ITRANS_RULES: RuleSet = RuleSet {
    mark: "M",
    guard: "sa",
    rules: &[
        NasalRule { before: "kgx", nasal: "~N", doubled: false, semivowel: false },
        NasalRule { before: "cCj", nasal: "~n", doubled: false, semivowel: false },
        NasalRule { before: "tdn", nasal: "n", doubled: false, semivowel: false },
        NasalRule { before: "TDN", nasal: "N", doubled: false, semivowel: false },
        NasalRule { before: "pb", nasal: "m", doubled: false, semivowel: false },
        NasalRule { before: "yvl", nasal: ".N", doubled: true, semivowel: true },
    ],
};

/// Rules for Devanagari text.
pub static DEVANAGARI_RULES: RuleSet = RuleSet {
    mark: "ं",
    guard: "स",
    rules: &[
        NasalRule { before: "क-घ", nasal: "ङ्", doubled: false, semivowel: false },
        NasalRule { before: "च-झ", nasal: "ञ्", doubled: false, semivowel: false },
        NasalRule { before: "त-न", nasal: "न्", doubled: false, semivowel: false },
        NasalRule { before: "ट-ण", nasal: "ण्", doubled: false, semivowel: false },
        NasalRule { before: "प-भ", nasal: "म्", doubled: false, semivowel: false },
        NasalRule { before: "यलव", nasal: "्ँ", doubled: true, semivowel: true },
    ],
};

static ITRANS: LazyLock<CompiledRuleSet> =
    LazyLock::new(|| ITRANS_RULES.compile().expect("ITRANS nasal rules compile"));
static DEVANAGARI: LazyLock<CompiledRuleSet> =
    LazyLock::new(|| DEVANAGARI_RULES.compile().expect("Devanagari nasal rules compile"));

impl NasalRule {
    fn replacement(&self, spaces: &str, consonant: &str) -> String {
        if self.doubled {
            format!("{consonant}{}{spaces}{consonant}", self.nasal)
        } else {
            format!("{}{spaces}{consonant}", self.nasal)
        }
    }
}

impl RuleSet {
    /// Builds one pattern per rule.
    pub fn compile(&self) -> Result<CompiledRuleSet> {
        let mark = regex::escape(self.mark);
        let rules = self
            .rules
            .iter()
            .map(|rule| Ok((*rule, Regex::new(&format!("{mark}( *)([{}])", rule.before))?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledRuleSet {
            guard: self.guard,
            rules,
        })
    }
}

/// A [`RuleSet`] with its patterns built.
#[derive(Debug, Clone)]
pub struct CompiledRuleSet {
    guard: &'static str,
    rules: Vec<(NasalRule, Regex)>,
}

impl CompiledRuleSet {
    /// Applies every rule in order, each to the previous rule's output.
    pub fn apply(&self, text: &str, omit_sam: bool, omit_yrl: bool) -> String {
        let guard = if omit_sam { Some(self.guard) } else { None };
        let mut out = text.to_string();

        for (rule, pattern) in &self.rules {
            if rule.semivowel && omit_yrl {
                continue;
            }
            out = replace_unguarded(pattern, &out, guard, |caps| {
                rule.replacement(&caps[1], &caps[2])
            });
        }

        out
    }
}

/// Like `Regex::replace_all`, except that matches directly preceded by
/// `guard` are left untouched.
fn replace_unguarded<F>(pattern: &Regex, text: &str, guard: Option<&str>, replace: F) -> String
where
    F: Fn(&Captures) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if guard.map_or(false, |g| text[..whole.start()].ends_with(g)) {
            log::trace!("guarded nasal at {}", whole.start());
            continue;
        }
        out.push_str(&text[last..whole.start()]);
        out.push_str(&replace(&caps));
        last = whole.end();
    }

    out.push_str(&text[last..]);
    out
}

impl Scheme {
    /// Replaces generic nasal marks with the nasal consonant the following
    /// consonant calls for.
    ///
    /// ITRANS and Devanagari are rewritten directly. Every other scheme is
    /// converted to Devanagari, rewritten there, and converted back.
    pub fn fix_lazy_anusvaara<C: Convert + ?Sized>(
        &self,
        text: &str,
        options: &AnusvaaraOptions,
        convert: &C,
    ) -> Result<String> {
        if options.ignore_padaanta {
            return self.fix_lazy_anusvaara_except_padaantas(
                text,
                options.omit_sam,
                options.omit_yrl,
                convert,
            );
        }

        if let Some(rules) = self.direct_nasal_rules() {
            return Ok(rules.apply(text, options.omit_sam, options.omit_yrl));
        }

        let pivot = convert.convert(text, &self.name, names::DEVANAGARI)?;
        let fixed = DEVANAGARI.apply(&pivot, options.omit_sam, options.omit_yrl);
        convert.convert(&fixed, names::DEVANAGARI, &self.name)
    }

    /// As [`fix_lazy_anusvaara`](Self::fix_lazy_anusvaara), but the last
    /// character of every word is kept as written, so that a word-final mark
    /// is never read against the next word.
    pub fn fix_lazy_anusvaara_except_padaantas<C: Convert + ?Sized>(
        &self,
        text: &str,
        omit_sam: bool,
        omit_yrl: bool,
        convert: &C,
    ) -> Result<String> {
        let options = AnusvaaraOptions {
            omit_sam,
            omit_yrl,
            ignore_padaanta: false,
        };
        map_word_interiors(text, |interior| {
            self.fix_lazy_anusvaara(interior, &options, convert)
        })
    }

    fn direct_nasal_rules(&self) -> Option<&'static CompiledRuleSet> {
        match self.kind {
            SchemeKind::Devanagari => Some(&*DEVANAGARI),
            SchemeKind::Itrans => Some(&*ITRANS),
            _ => None,
        }
    }
}
