//! Text rewrites defined over a scheme's spelling conventions.
//!
//! Every rewrite is a pure function of the scheme, the input text and its
//! options. Rewrites that must pass through the intermediate script take a
//! [`Convert`](crate::transliterate::Convert) capability explicitly.

use serde::{Deserialize, Serialize};

pub mod anusvaara;
mod capitalize;
pub mod simplify;
mod standard_form;

pub use self::anusvaara::{NasalRule, RuleSet, DEVANAGARI_RULES, ITRANS_RULES};
pub use self::simplify::to_shatapatha_svara;

/// Switches for [`Scheme::fix_lazy_anusvaara`](crate::Scheme::fix_lazy_anusvaara).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnusvaaraOptions {
    /// Leave a nasal mark alone when it directly follows "sa"
    #[serde(default)]
    pub omit_sam: bool,
    /// Skip the rule for the semivowels y, l and v
    #[serde(default)]
    pub omit_yrl: bool,
    /// Never rewrite the last character of a word
    #[serde(default)]
    pub ignore_padaanta: bool,
}

impl AnusvaaraOptions {
    /// Every switch off.
    pub const fn default() -> AnusvaaraOptions {
        AnusvaaraOptions {
            omit_sam: false,
            omit_yrl: false,
            ignore_padaanta: false,
        }
    }
}

/// Substitutions used by [`Scheme::to_lay_indian`](crate::Scheme::to_lay_indian).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayIndianOptions {
    /// Replaces the nasal-glide digraph
    pub jn_replacement: String,
    /// Replaces every dental `t` when it differs from `t`
    pub t_replacement: String,
}

impl Default for LayIndianOptions {
    fn default() -> LayIndianOptions {
        LayIndianOptions {
            jn_replacement: "GY".to_string(),
            t_replacement: "t".to_string(),
        }
    }
}
