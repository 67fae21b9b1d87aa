use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// A typed hyperlink to another Battle.net document
///
/// `T` is the model the linked document decodes to.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Link<T> {
    pub href: String,
    #[serde(skip)]
    target: PhantomData<fn() -> T>,
}

impl<T> Link<T> {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            target: PhantomData,
        }
    }
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self::new(self.href.clone())
    }
}

impl<T> PartialEq for Link<T> {
    fn eq(&self, other: &Self) -> bool {
        self.href == other.href
    }
}

impl<T> Eq for Link<T> {}

impl<T> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link").field("href", &self.href).finish()
    }
}

/// The `_links.self` block present on game data documents
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SelfLink<T> {
    #[serde(rename = "self")]
    pub link: Link<T>,
}

impl<T> Clone for SelfLink<T> {
    fn clone(&self) -> Self {
        Self {
            link: self.link.clone(),
        }
    }
}

impl<T> PartialEq for SelfLink<T> {
    fn eq(&self, other: &Self) -> bool {
        self.link == other.link
    }
}

impl<T> fmt::Debug for SelfLink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelfLink").field("link", &self.link).finish()
    }
}

/// A `{ "key": { "href": ... }, "name": ..., "id": ... }` reference
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct KeyLink<T> {
    pub key: Link<T>,
    #[serde(default)]
    pub name: Option<LocalizedString>,
    #[serde(default)]
    pub id: Option<u64>,
}

impl<T> Clone for KeyLink<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            name: self.name.clone(),
            id: self.id,
        }
    }
}

impl<T> PartialEq for KeyLink<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.name == other.name && self.id == other.id
    }
}

impl<T> fmt::Debug for KeyLink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyLink")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("id", &self.id)
            .finish()
    }
}

/// A localized string
///
/// Battle.net returns a plain string when a locale was requested and a map of
/// every locale otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedString {
    Single(String),
    All(BTreeMap<String, String>),
}

impl LocalizedString {
    /// Returns the text for `locale`, or the single value if only one was sent
    pub fn get(&self, locale: &str) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::All(map) => map.get(locale).map(String::as_str),
        }
    }
}

impl fmt::Display for LocalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(s) => f.write_str(s),
            Self::All(map) => {
                let text = map
                    .get("en_US")
                    .or_else(|| map.values().next())
                    .map_or("", String::as_str);
                f.write_str(text)
            }
        }
    }
}

/// A `{ "type": ..., "name": ... }` enumeration value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: LocalizedString,
}
