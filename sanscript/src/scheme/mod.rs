//! The scheme data model: symbol inventories, alternate spellings, and the
//! variant tag that selects which rewrite rules apply to a scheme.

use hashbrown::HashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::names;

pub mod error;
pub mod loader;
pub mod registry;

pub use self::error::{Result, SchemeError};
pub use self::loader::{load_scheme, load_scheme_file, load_scheme_str, SchemeTree};
pub use self::registry::SchemeRegistry;

/// Map from a canonical symbol to the other spellings accepted for it.
pub type Alternates = HashMap<SmolStr, Vec<SmolStr>>;

/// The named symbol groups a scheme may define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Independent vowels; the first entry is the inherent vowel
    Vowels,
    /// Dependent vowel signs, aligned with `vowels[1..]`
    VowelMarks,
    /// Anusvāra, visarga and candrabindu
    Yogavaahas,
    /// The vowel killer
    Virama,
    /// Consonants, including the conventional conjuncts
    Consonants,
    /// Consonants outside the classical inventory
    ExtraConsonants,
    /// Digits, punctuation and other signs
    Symbols,
    /// Vedic accent marks
    Accents,
}

impl Group {
    /// Every group, in table order.
    pub const ALL: [Group; 8] = [
        Group::Vowels,
        Group::VowelMarks,
        Group::Yogavaahas,
        Group::Virama,
        Group::Consonants,
        Group::ExtraConsonants,
        Group::Symbols,
        Group::Accents,
    ];

    /// Groups whose symbols must be unique within a scheme.
    pub(crate) const INVENTORY: [Group; 5] = [
        Group::Vowels,
        Group::Consonants,
        Group::ExtraConsonants,
        Group::Yogavaahas,
        Group::Symbols,
    ];

    /// The key used for this group in scheme tables.
    pub const fn as_str(self) -> &'static str {
        match self {
            Group::Vowels => "vowels",
            Group::VowelMarks => "vowel_marks",
            Group::Yogavaahas => "yogavaahas",
            Group::Virama => "virama",
            Group::Consonants => "consonants",
            Group::ExtraConsonants => "extra_consonants",
            Group::Symbols => "symbols",
            Group::Accents => "accents",
        }
    }

    /// Looks up a group by its table key. `marks` is accepted for
    /// `yogavaahas`.
    pub fn from_name(name: &str) -> Option<Group> {
        match name {
            "vowels" => Some(Group::Vowels),
            "vowel_marks" => Some(Group::VowelMarks),
            "yogavaahas" | "marks" => Some(Group::Yogavaahas),
            "virama" => Some(Group::Virama),
            "consonants" => Some(Group::Consonants),
            "extra_consonants" => Some(Group::ExtraConsonants),
            "symbols" => Some(Group::Symbols),
            "accents" => Some(Group::Accents),
            _ => None,
        }
    }
}

/// Which family of rewrite rules a scheme belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    /// A non-roman script other than the intermediate one
    Brahmic,
    /// The intermediate script; carries its own anusvāra rules
    Devanagari,
    /// A plain romanization
    Roman,
    /// ITRANS, with direct anusvāra rules
    Itrans,
    /// OPTITRANS, with the lay-reader simplifier
    Optitrans,
    /// A romanization that accepts capitalized spellings
    Capitalizable,
}

impl SchemeKind {
    /// Whether schemes of this kind are romanizations.
    pub fn is_roman_family(self) -> bool {
        matches!(
            self,
            SchemeKind::Roman | SchemeKind::Itrans | SchemeKind::Optitrans | SchemeKind::Capitalizable
        )
    }

    /// The kind conventionally used for a scheme name.
    pub fn for_name(name: &str) -> SchemeKind {
        match name {
            names::DEVANAGARI => SchemeKind::Devanagari,
            names::ITRANS => SchemeKind::Itrans,
            names::OPTITRANS => SchemeKind::Optitrans,
            names::IAST | names::KOLKATA_V2 => SchemeKind::Capitalizable,
            names::HK | names::ISO | names::SLP1 | names::TITUS | names::VELTHUIS | names::WX => {
                SchemeKind::Roman
            }
            _ => SchemeKind::Brahmic,
        }
    }
}

/// Canonical symbols of a scheme, grouped by role. Order within a group is
/// significant: symbols at the same index in two schemes correspond.
#[derive(Debug, Clone, Default)]
pub struct SymbolGroups {
    pub vowels: Vec<SmolStr>,
    pub vowel_marks: Option<Vec<SmolStr>>,
    pub yogavaahas: Option<Vec<SmolStr>>,
    pub virama: Option<Vec<SmolStr>>,
    pub consonants: Option<Vec<SmolStr>>,
    pub extra_consonants: Option<Vec<SmolStr>>,
    pub symbols: Option<Vec<SmolStr>>,
    pub accents: Option<Vec<SmolStr>>,
    pub accented_vowel_alternates: Option<Alternates>,
    /// Groups this crate has no typed field for, kept as decoded
    pub other: HashMap<SmolStr, serde_json::Value>,
}

impl SymbolGroups {
    /// Returns the symbols of a group, if the table defined it.
    pub fn get(&self, group: Group) -> Option<&[SmolStr]> {
        match group {
            Group::Vowels => Some(&self.vowels),
            Group::VowelMarks => self.vowel_marks.as_deref(),
            Group::Yogavaahas => self.yogavaahas.as_deref(),
            Group::Virama => self.virama.as_deref(),
            Group::Consonants => self.consonants.as_deref(),
            Group::ExtraConsonants => self.extra_consonants.as_deref(),
            Group::Symbols => self.symbols.as_deref(),
            Group::Accents => self.accents.as_deref(),
        }
    }

    fn check_unique(&self, scheme: &str) -> Result<()> {
        let mut seen: HashMap<&SmolStr, Group> = HashMap::new();

        for group in Group::INVENTORY {
            for symbol in self.get(group).unwrap_or_default() {
                if symbol.is_empty() {
                    continue;
                }
                if let Some(first) = seen.insert(symbol, group) {
                    return Err(SchemeError::DuplicateSymbol {
                        scheme: scheme.into(),
                        symbol: symbol.clone(),
                        first: first.as_str(),
                        second: group.as_str(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// A writing system's canonical symbols and the alternate spellings it
/// accepts on input. Read-only once constructed.
#[derive(Debug, Clone)]
pub struct Scheme {
    pub(crate) name: SmolStr,
    pub(crate) is_roman: bool,
    pub(crate) kind: SchemeKind,
    pub(crate) groups: SymbolGroups,
    pub(crate) alternates: Alternates,
    pub(crate) accent_reorder: Option<Regex>,
}

impl Scheme {
    /// Builds a scheme and applies the derivations its kind requires.
    ///
    /// Roman kinds get `vowel_marks` derived from `vowels[1..]` and are
    /// always flagged roman. [`SchemeKind::Capitalizable`] schemes receive
    /// capitalized synonyms of their letters in `alternates`.
    pub fn new(
        name: impl Into<SmolStr>,
        is_roman: bool,
        kind: SchemeKind,
        mut groups: SymbolGroups,
        alternates: Alternates,
    ) -> Result<Scheme> {
        let name = name.into();

        if kind.is_roman_family() {
            groups.vowel_marks = Some(groups.vowels.iter().skip(1).cloned().collect());
        }
        groups.check_unique(&name)?;

        let mut scheme = Scheme {
            name,
            is_roman: is_roman || kind.is_roman_family(),
            kind,
            groups,
            alternates,
            accent_reorder: None,
        };

        if kind == SchemeKind::Capitalizable {
            scheme.add_capitalized_synonyms()?;
            scheme.accent_reorder = scheme.compile_accent_reorder()?;
        }

        log::debug!(
            "built {:?} scheme `{}` ({} alternates)",
            scheme.kind,
            scheme.name,
            scheme.alternates.len()
        );

        Ok(scheme)
    }

    /// The scheme's identity key.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn is_roman(&self) -> bool {
        self.is_roman
    }

    #[inline(always)]
    pub fn kind(&self) -> SchemeKind {
        self.kind
    }

    #[inline(always)]
    pub fn groups(&self) -> &SymbolGroups {
        &self.groups
    }

    /// Symbols of `group`, failing when the scheme does not define it.
    pub fn group(&self, group: Group) -> Result<&[SmolStr]> {
        self.groups
            .get(group)
            .ok_or_else(|| SchemeError::missing(&self.name, group.as_str()))
    }

    /// Symbols of a group addressed by its table key.
    pub fn group_by_name(&self, name: &str) -> Result<&[SmolStr]> {
        match Group::from_name(name) {
            Some(group) => self.group(group),
            None => Err(SchemeError::missing(&self.name, name)),
        }
    }

    pub fn accented_vowel_alternates(&self) -> Result<&Alternates> {
        self.groups
            .accented_vowel_alternates
            .as_ref()
            .ok_or_else(|| SchemeError::missing(&self.name, "accented_vowel_alternates"))
    }

    #[inline(always)]
    pub fn alternates(&self) -> &Alternates {
        &self.alternates
    }

    /// Alternate spellings of `symbol`; empty when it has none.
    pub fn alternates_of(&self, symbol: &str) -> &[SmolStr] {
        self.alternates
            .get(symbol)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[inline(always)]
    pub fn has_alternates(&self) -> bool {
        !self.alternates.is_empty()
    }

    /// Whether `symbol` is canonical in one of the inventory groups.
    pub fn is_canonical(&self, symbol: &str) -> bool {
        Group::INVENTORY.iter().any(|group| {
            self.groups
                .get(*group)
                .map_or(false, |symbols| symbols.iter().any(|s| s == symbol))
        })
    }
}
