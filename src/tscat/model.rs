use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language key of the only bucket the catalog currently works with.
pub const DEFAULT_LANGUAGE: &str = "en";

/// One localizable unit: a fully-qualified id and its source-language text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationString {
    pub id: String,
    pub default_value: String,
}

impl TranslationString {
    pub fn new(id: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_value: default_value.into(),
        }
    }
}

/// Entries of a single language.
///
/// Stored as a one-key object (`{ "en": [...] }`) so more languages can be
/// added later without changing the format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<TranslationString>>",
    into = "BTreeMap<String, Vec<TranslationString>>"
)]
pub struct LanguageBucket {
    pub language: String,
    pub entries: Vec<TranslationString>,
}

impl LanguageBucket {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: Vec::new(),
        }
    }

    pub fn is_default_language(&self) -> bool {
        self.language == DEFAULT_LANGUAGE
    }
}

impl TryFrom<BTreeMap<String, Vec<TranslationString>>> for LanguageBucket {
    type Error = String;

    fn try_from(map: BTreeMap<String, Vec<TranslationString>>) -> Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(format!(
                "language bucket must have exactly one language key, found {}",
                map.len()
            ));
        }
        let (language, entries) = map
            .into_iter()
            .next()
            .ok_or_else(|| "empty language bucket".to_string())?;
        Ok(Self { language, entries })
    }
}

impl From<LanguageBucket> for BTreeMap<String, Vec<TranslationString>> {
    fn from(bucket: LanguageBucket) -> Self {
        let mut map = BTreeMap::new();
        map.insert(bucket.language, bucket.entries);
        map
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
    pub scope_name: String,
    /// Namespace prefix of the entry ids, e.g. `app.auth`.
    #[serde(default)]
    pub full_scope_string: String,
    #[serde(default)]
    pub languages: Vec<LanguageBucket>,
}

static EMPTY_SCOPE: Lazy<Scope> = Lazy::new(|| Scope::new(""));

impl Scope {
    /// A fresh scope: empty full scope string and one empty `en` bucket.
    pub fn new(scope_name: impl Into<String>) -> Self {
        Self {
            scope_name: scope_name.into(),
            full_scope_string: String::new(),
            languages: vec![LanguageBucket::new(DEFAULT_LANGUAGE)],
        }
    }

    /// Shared empty scope used when composing before any data is available.
    pub fn empty() -> &'static Scope {
        &EMPTY_SCOPE
    }

    pub fn with_full_scope_string(mut self, full_scope_string: impl Into<String>) -> Self {
        self.full_scope_string = full_scope_string.into();
        self
    }

    /// Entries of the `en` bucket, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &TranslationString> {
        self.languages
            .iter()
            .filter(|bucket| bucket.is_default_language())
            .flat_map(|bucket| bucket.entries.iter())
    }

    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    pub fn all_entries(&self) -> impl Iterator<Item = &TranslationString> {
        self.languages.iter().flat_map(|bucket| bucket.entries.iter())
    }

    pub fn default_bucket_mut(&mut self) -> &mut LanguageBucket {
        let pos = match self
            .languages
            .iter()
            .position(LanguageBucket::is_default_language)
        {
            Some(pos) => pos,
            None => {
                self.languages.push(LanguageBucket::new(DEFAULT_LANGUAGE));
                self.languages.len() - 1
            }
        };
        &mut self.languages[pos]
    }

    /// Appends an empty `en` bucket when the scope has none.
    pub fn ensure_default_bucket(&mut self) {
        self.default_bucket_mut();
    }
}

/// Every scope, in insertion order. Serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    scopes: Vec<Scope>,
}

impl Catalog {
    pub fn new(scopes: Vec<Scope>) -> Self {
        Self { scopes }
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn into_scopes(self) -> Vec<Scope> {
        self.scopes
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn scope(&self, scope_name: &str) -> Option<&Scope> {
        self.scopes.iter().find(|s| s.scope_name == scope_name)
    }

    pub(crate) fn scope_mut(&mut self, scope_name: &str) -> Option<&mut Scope> {
        self.scopes.iter_mut().find(|s| s.scope_name == scope_name)
    }

    pub(crate) fn push(&mut self, scope: Scope) {
        self.scopes.push(scope);
    }

    pub(crate) fn retain(&mut self, f: impl FnMut(&Scope) -> bool) {
        self.scopes.retain(f);
    }

    /// Checks every language of every scope, not just `en`.
    pub fn contains_entry_id(&self, id: &str) -> bool {
        self.scopes
            .iter()
            .flat_map(Scope::all_entries)
            .any(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_serializes_with_camel_case_field_names() {
        let mut scope = Scope::new("auth").with_full_scope_string("app.auth");
        scope
            .default_bucket_mut()
            .entries
            .push(TranslationString::new("app.auth.login", "Log in"));

        let json = serde_json::to_value(&scope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "scopeName": "auth",
                "fullScopeString": "app.auth",
                "languages": [{ "en": [{ "id": "app.auth.login", "defaultValue": "Log in" }] }]
            })
        );
    }

    #[test]
    fn missing_full_scope_string_defaults_to_empty() {
        let scope: Scope =
            serde_json::from_str(r#"{"scopeName":"x","languages":[{"en":[]}]}"#).unwrap();
        assert_eq!(scope.full_scope_string, "");
        assert_eq!(scope.languages.len(), 1);
    }

    #[test]
    fn bucket_with_two_languages_is_malformed() {
        let result: Result<LanguageBucket, _> = serde_json::from_str(r#"{"en":[],"de":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn ensure_default_bucket_adds_en_once() {
        let mut scope = Scope {
            scope_name: "x".into(),
            full_scope_string: String::new(),
            languages: vec![],
        };
        scope.ensure_default_bucket();
        scope.ensure_default_bucket();
        assert_eq!(scope.languages, vec![LanguageBucket::new("en")]);
    }

    #[test]
    fn entry_id_lookup_spans_scopes() {
        let mut a = Scope::new("a");
        a.default_bucket_mut()
            .entries
            .push(TranslationString::new("x.one", "One"));
        let catalog = Catalog::new(vec![a, Scope::new("b")]);

        assert!(catalog.contains_entry_id("x.one"));
        assert!(!catalog.contains_entry_id("x.two"));
    }

    #[test]
    fn empty_scope_has_en_bucket() {
        assert_eq!(Scope::empty().entry_count(), 0);
        assert!(Scope::empty().languages[0].is_default_language());
    }
}
