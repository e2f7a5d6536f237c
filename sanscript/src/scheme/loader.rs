//! Promotion of decoded scheme tables into [`Scheme`]s.
//!
//! Every object in a table is offered to the same test: objects carrying a
//! `vowels` group become schemes, everything else is kept as it was decoded.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use smol_str::SmolStr;

use super::{Alternates, Group, Result, Scheme, SchemeError, SchemeKind, SymbolGroups};

/// A decoded table after scheme promotion.
#[derive(Debug, Clone)]
pub enum SchemeTree {
    /// An object that carried a `vowels` group
    Scheme(Box<Scheme>),
    /// Any other object
    Object(BTreeMap<String, SchemeTree>),
    /// An array, with its elements promoted
    Array(Vec<SchemeTree>),
    /// A scalar, untouched
    Value(Value),
}

impl SchemeTree {
    pub fn into_scheme(self) -> Option<Scheme> {
        match self {
            SchemeTree::Scheme(scheme) => Some(*scheme),
            _ => None,
        }
    }

    pub fn as_scheme(&self) -> Option<&Scheme> {
        match self {
            SchemeTree::Scheme(scheme) => Some(scheme),
            _ => None,
        }
    }

    /// Member `key` of an object node.
    pub fn get(&self, key: &str) -> Option<&SchemeTree> {
        match self {
            SchemeTree::Object(map) => map.get(key),
            _ => None,
        }
    }
}

/// Derives a scheme's name from its source identifier: the base name with
/// the `.json` extension removed.
pub fn scheme_name(source_id: &str) -> SmolStr {
    let base = Path::new(source_id)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(source_id);
    base.replace(".json", "").into()
}

struct Promoter {
    name: SmolStr,
    is_roman: bool,
    kind: SchemeKind,
}

fn decode<T: DeserializeOwned>(scheme: &SmolStr, group: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| SchemeError::InvalidGroup {
        scheme: scheme.clone(),
        group: group.to_string(),
        source,
    })
}

impl Promoter {
    fn promote(&self, value: Value) -> Result<SchemeTree> {
        match value {
            Value::Object(map) if map.contains_key("vowels") => {
                self.build(map).map(|s| SchemeTree::Scheme(Box::new(s)))
            }
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| Ok((key, self.promote(value)?)))
                .collect::<Result<BTreeMap<_, _>>>()
                .map(SchemeTree::Object),
            Value::Array(items) => items
                .into_iter()
                .map(|value| self.promote(value))
                .collect::<Result<Vec<_>>>()
                .map(SchemeTree::Array),
            other => Ok(SchemeTree::Value(other)),
        }
    }

    fn build(&self, map: Map<String, Value>) -> Result<Scheme> {
        let name = &self.name;
        let mut groups = SymbolGroups::default();
        let mut alternates = Alternates::new();

        for (key, value) in map {
            match key.as_str() {
                "alternates" => {
                    alternates = decode::<Option<Alternates>>(name, &key, value)?.unwrap_or_default()
                }
                "accented_vowel_alternates" => {
                    groups.accented_vowel_alternates = Some(decode(name, &key, value)?)
                }
                _ => match Group::from_name(&key) {
                    Some(Group::Vowels) => groups.vowels = decode(name, &key, value)?,
                    Some(Group::VowelMarks) => groups.vowel_marks = Some(decode(name, &key, value)?),
                    Some(Group::Yogavaahas) => groups.yogavaahas = Some(decode(name, &key, value)?),
                    Some(Group::Virama) => groups.virama = Some(decode(name, &key, value)?),
                    Some(Group::Consonants) => groups.consonants = Some(decode(name, &key, value)?),
                    Some(Group::ExtraConsonants) => {
                        groups.extra_consonants = Some(decode(name, &key, value)?)
                    }
                    Some(Group::Symbols) => groups.symbols = Some(decode(name, &key, value)?),
                    Some(Group::Accents) => groups.accents = Some(decode(name, &key, value)?),
                    None => {
                        groups.other.insert(key.into(), value);
                    }
                },
            }
        }

        Scheme::new(name.clone(), self.is_roman, self.kind, groups, alternates)
    }
}

/// Promotes a decoded table. `source_id` is the table's path or other
/// identifier: it names the resulting schemes and marks them roman when it
/// contains `roman`.
pub fn load_scheme(source_id: &str, table: Value, kind: SchemeKind) -> Result<SchemeTree> {
    let promoter = Promoter {
        name: scheme_name(source_id),
        is_roman: source_id.contains("roman"),
        kind,
    };
    log::debug!("loading `{}` from {}", promoter.name, source_id);
    promoter.promote(table)
}

pub fn load_scheme_str(source_id: &str, json: &str, kind: SchemeKind) -> Result<SchemeTree> {
    let table: Value = serde_json::from_str(json)?;
    load_scheme(source_id, table, kind)
}

pub fn load_scheme_file<P: AsRef<Path>>(path: P, kind: SchemeKind) -> Result<SchemeTree> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table: Value = serde_json::from_reader(BufReader::new(file))?;
    load_scheme(&path.to_string_lossy(), table, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_from_source() {
        assert_eq!(scheme_name("data/roman/iast.json"), "iast");
        assert_eq!(scheme_name("hk.json"), "hk");
        assert_eq!(scheme_name("telugu"), "telugu");
    }

    #[test]
    fn promotes_top_level_scheme() {
        let table = json!({
            "vowels": ["a", "A"],
            "consonants": ["k"],
            "alternates": {"A": ["aa"]},
            "candra": ["~"]
        });
        let scheme = load_scheme("data/roman/test.json", table, SchemeKind::Roman)
            .unwrap()
            .into_scheme()
            .unwrap();
        assert_eq!(scheme.name(), "test");
        assert!(scheme.is_roman());
        assert_eq!(scheme.alternates_of("A"), &[SmolStr::new("aa")][..]);
        assert_eq!(scheme.groups().other.get("candra"), Some(&json!(["~"])));
    }

    #[test]
    fn roman_flag_follows_source() {
        let table = json!({"vowels": ["अ", "आ"], "virama": ["्"]});
        let scheme = load_scheme("data/brahmic/test.json", table, SchemeKind::Brahmic)
            .unwrap()
            .into_scheme()
            .unwrap();
        assert!(!scheme.is_roman());
    }

    #[test]
    fn non_scheme_tables_pass_through() {
        let table = json!({"meta": {"version": 2}, "list": [1, {"x": "y"}]});
        let tree = load_scheme("data/roman/meta.json", table, SchemeKind::Roman).unwrap();
        assert!(tree.as_scheme().is_none());
        match tree.get("meta").and_then(|m| m.get("version")) {
            Some(SchemeTree::Value(v)) => assert_eq!(v, &json!(2)),
            other => panic!("unexpected {:?}", other),
        }
        match tree.get("list") {
            Some(SchemeTree::Array(items)) => assert!(matches!(items[1], SchemeTree::Object(_))),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn nested_schemes_are_promoted() {
        let table = json!({"inner": {"vowels": ["a"]}, "other": {"consonants": ["k"]}});
        let tree = load_scheme("data/roman/nested.json", table, SchemeKind::Roman).unwrap();
        assert_eq!(tree.get("inner").and_then(SchemeTree::as_scheme).unwrap().name(), "nested");
        assert!(tree.get("other").and_then(SchemeTree::as_scheme).is_none());
    }

    #[test]
    fn malformed_group() {
        let table = json!({"vowels": ["a"], "consonants": {"k": 1}});
        let err = load_scheme("x.json", table, SchemeKind::Roman).unwrap_err();
        match err {
            SchemeError::InvalidGroup { group, .. } => assert_eq!(group, "consonants"),
            other => panic!("expected InvalidGroup, got {:?}", other),
        }
    }

    #[test]
    fn null_alternates() {
        let table = json!({"vowels": ["a"], "alternates": null});
        let scheme = load_scheme("x.json", table, SchemeKind::Roman)
            .unwrap()
            .into_scheme()
            .unwrap();
        assert!(!scheme.has_alternates());
    }

    #[test]
    fn from_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roman").join("mini.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{"vowels": ["a", "A"], "consonants": ["k"]}}"#).unwrap();
        drop(file);

        let scheme = load_scheme_file(&path, SchemeKind::Roman)
            .unwrap()
            .into_scheme()
            .unwrap();
        assert_eq!(scheme.name(), "mini");
        assert!(scheme.is_roman());

        let missing = load_scheme_file(dir.path().join("nope.json"), SchemeKind::Roman);
        assert!(matches!(missing, Err(SchemeError::Io(_))));
    }
}
