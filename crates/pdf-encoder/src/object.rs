//! PDF object model

use crate::ObjectId;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;

/// PDF name object
///
/// Holds the raw, unescaped bytes. Escaping (`#XX`) is applied once when the
/// name is marshaled, so callers must never pre-escape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Vec<u8>);

impl Name {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Name(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name(s.as_bytes().to_vec())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name(s.into_bytes())
    }
}

impl From<&Name> for Name {
    fn from(name: &Name) -> Self {
        name.clone()
    }
}

impl Borrow<[u8]> for Name {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Reference to an indirect object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reference {
    number: u32,
    generation: u16,
}

impl Reference {
    pub fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn generation(&self) -> u16 {
        self.generation
    }

    pub fn id(&self) -> ObjectId {
        (self.number, self.generation)
    }
}

impl From<ObjectId> for Reference {
    fn from((number, generation): ObjectId) -> Self {
        Self::new(number, generation)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

/// Insertion-ordered PDF dictionary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary(IndexMap<Name, Object>);

impl Dictionary {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Set `key` to `value`
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, key: impl Into<Name>, value: impl Into<Object>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.0.get(key.as_bytes())
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Object> {
        self.0.get_mut(key.as_bytes())
    }

    /// Remove `key`, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<Object> {
        self.0.shift_remove(key.as_bytes())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Object)> {
        self.0.iter()
    }
}

impl<K: Into<Name>, V: Into<Object>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}

/// Build a [`Dictionary`] from `key => value` pairs
///
/// ```ignore
/// let font = dictionary! {
///     "Type" => "Font",
///     "Subtype" => "Type1",
///     "BaseFont" => "Helvetica",
/// };
/// ```
#[macro_export]
macro_rules! dictionary {
    () => {
        $crate::Dictionary::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut dict = $crate::Dictionary::new();
        $(dict.set($key, $value);)+
        dict
    }};
}

/// PDF stream: a dictionary plus raw bytes
///
/// The `Length` entry is computed from the content when the stream is
/// marshaled; any value set by the caller is replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stream {
    dict: Dictionary,
    content: Vec<u8>,
}

impl Stream {
    pub fn new(dict: Dictionary, content: Vec<u8>) -> Self {
        Self { dict, content }
    }

    pub fn dict(&self) -> &Dictionary {
        &self.dict
    }

    pub fn dict_mut(&mut self) -> &mut Dictionary {
        &mut self.dict
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn set_content(&mut self, content: Vec<u8>) {
        self.content = content;
    }
}

/// Any value that can appear in a PDF file
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// Literal string, stored as raw bytes
    String(Vec<u8>),
    Name(Name),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    /// Streams are only valid as the payload of an indirect object
    Stream(Stream),
    Reference(Reference),
}

impl Object {
    /// Literal string object
    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Object::String(bytes.into())
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(dict) => Some(dict),
            Object::Stream(stream) => Some(&stream.dict),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut Dictionary> {
        match self {
            Object::Dictionary(dict) => Some(dict),
            Object::Stream(stream) => Some(&mut stream.dict),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Object>> {
        match self {
            Object::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<Reference> {
        match self {
            Object::Reference(reference) => Some(*reference),
            _ => None,
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<i32> for Object {
    fn from(value: i32) -> Self {
        Object::Integer(value.into())
    }
}

impl From<u32> for Object {
    fn from(value: u32) -> Self {
        Object::Integer(value.into())
    }
}

impl From<u16> for Object {
    fn from(value: u16) -> Self {
        Object::Integer(value.into())
    }
}

impl From<u8> for Object {
    fn from(value: u8) -> Self {
        Object::Integer(value.into())
    }
}

impl From<usize> for Object {
    fn from(value: usize) -> Self {
        Object::Integer(value as i64)
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::Real(value)
    }
}

impl From<f32> for Object {
    fn from(value: f32) -> Self {
        Object::Real(value.into())
    }
}

/// String slices become names, matching how dictionaries are usually written
impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::Name(value.into())
    }
}

impl From<Name> for Object {
    fn from(value: Name) -> Self {
        Object::Name(value)
    }
}

impl From<Reference> for Object {
    fn from(value: Reference) -> Self {
        Object::Reference(value)
    }
}

impl From<Dictionary> for Object {
    fn from(value: Dictionary) -> Self {
        Object::Dictionary(value)
    }
}

impl From<Stream> for Object {
    fn from(value: Stream) -> Self {
        Object::Stream(value)
    }
}

impl<T: Into<Object>> From<Vec<T>> for Object {
    fn from(values: Vec<T>) -> Self {
        Object::Array(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dictionary_keeps_insertion_order() {
        let dict = dictionary! {
            "Type" => "Page",
            "Count" => 3,
            "Alpha" => true,
        };
        let keys: Vec<String> = dict.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["Type", "Count", "Alpha"]);
    }

    #[test]
    fn test_dictionary_set_existing_key_keeps_position() {
        let mut dict = dictionary! { "A" => 1, "B" => 2, "C" => 3 };
        dict.set("A", 10);
        let keys: Vec<String> = dict.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
        assert_eq!(dict.get("A"), Some(&Object::Integer(10)));
    }

    #[test]
    fn test_dictionary_remove() {
        let mut dict = dictionary! { "A" => 1, "B" => 2, "C" => 3 };
        assert_eq!(dict.remove("B"), Some(Object::Integer(2)));
        assert!(!dict.contains_key("B"));
        let keys: Vec<String> = dict.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["A", "C"]);
    }

    #[test]
    fn test_empty_dictionary_macro() {
        let dict = dictionary! {};
        assert!(dict.is_empty());
    }

    #[test]
    fn test_object_conversions() {
        assert_eq!(Object::from("Font"), Object::Name(Name::from("Font")));
        assert_eq!(Object::from(2.5), Object::Real(2.5));
        assert_eq!(Object::from(7u32), Object::Integer(7));
        assert_eq!(
            Object::from(vec![1, 2]),
            Object::Array(vec![Object::Integer(1), Object::Integer(2)])
        );
        assert_eq!(
            Object::from(Reference::new(3, 0)),
            Object::Reference(Reference::new(3, 0))
        );
    }

    #[test]
    fn test_reference_display() {
        assert_eq!(Reference::new(12, 0).to_string(), "12 0 R");
        assert_eq!(Reference::from((5, 2)).id(), (5, 2));
    }

    #[test]
    fn test_stream_dict_access() {
        let mut obj = Object::from(Stream::new(dictionary! { "Type" => "XObject" }, vec![1]));
        obj.as_dict_mut().unwrap().set("Subtype", "Form");
        assert_eq!(obj.as_dict().unwrap().len(), 2);
    }
}
