//! Scheme-specific simplifications of standard-form text.

use std::sync::LazyLock;

use regex::Regex;

use super::LayIndianOptions;
use crate::scheme::{Result, Scheme, SchemeError, SchemeKind};
use crate::transliterate::{Convert, Detect};

const SHATAPATHA_SVARA: &str = "\u{1cd8}";

static SVARA_BEFORE_YOGAVAAHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{1cd8}([ंःँ])").unwrap());

/// Writes acute and grave accents as the Śatapatha svara mark, placed after
/// any anusvāra, visarga or candrabindu that directly follows it.
pub fn to_shatapatha_svara(text: &str) -> String {
    let text = text
        .replace('\u{301}', SHATAPATHA_SVARA)
        .replace('\u{300}', SHATAPATHA_SVARA);
    SVARA_BEFORE_YOGAVAAHA
        .replace_all(&text, format!("${{1}}{SHATAPATHA_SVARA}").as_str())
        .into_owned()
}

impl Scheme {
    fn require(&self, supported: bool, operation: &'static str) -> Result<()> {
        if supported {
            Ok(())
        } else {
            Err(SchemeError::Unsupported {
                scheme: self.name.clone(),
                operation,
            })
        }
    }

    /// Spells the long vowels `A`, `I` and `U` as `aa`, `ii` and `uu`.
    pub fn double_lettered<C: Convert + ?Sized>(&self, text: &str, convert: &C) -> Result<String> {
        self.require(self.kind.is_roman_family(), "double_lettered")?;

        let text = self.standard_form(text, convert)?;
        Ok(text.replace('A', "aa").replace('I', "ii").replace('U', "uu"))
    }

    /// Romanization for readers without a transliteration background:
    /// vocalic r becomes `ri`, vocalic l `lri`, `x` becomes `ksh`, and the
    /// result is lower-cased.
    pub fn to_lay_indian<C: Convert + ?Sized>(
        &self,
        text: &str,
        options: &LayIndianOptions,
        convert: &C,
    ) -> Result<String> {
        self.require(self.kind == SchemeKind::Optitrans, "to_lay_indian")?;

        let mut text = self
            .standard_form(text, convert)?
            .replace("RR", "ri")
            .replace('R', "ri")
            .replace("LLi", "lri")
            .replace("LLI", "lri")
            .replace("jn", &options.jn_replacement)
            .replace('x', "ksh");
        if options.t_replacement != "t" {
            text = text.replace('t', &options.t_replacement);
        }
        Ok(text.to_lowercase())
    }

    /// Wraps each word that `detector` does not attribute to this scheme in
    /// angle brackets.
    pub fn mark_off_non_indic_in_line<D: Detect + ?Sized>(
        &self,
        text: &str,
        detector: &D,
    ) -> Result<String> {
        self.require(self.kind.is_roman_family(), "mark_off_non_indic_in_line")?;

        let words: Vec<String> = text
            .split_whitespace()
            .map(|word| {
                if detector.detect(word).to_lowercase() == self.name.to_lowercase() {
                    word.to_string()
                } else {
                    format!("<{word}>")
                }
            })
            .collect();
        Ok(words.join(" "))
    }
}
