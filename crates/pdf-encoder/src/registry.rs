//! Arena of top-level indirect objects

use crate::object::{Object, Reference};

/// Owns the indirect objects of one document
///
/// Objects are numbered 1, 2, 3... in insertion order with generation 0; the
/// arena index of object `n` is `n - 1`. There is no removal, so numbers are
/// never reused.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    objects: Vec<Object>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object and return its reference
    pub fn add(&mut self, object: impl Into<Object>) -> Reference {
        self.objects.push(object.into());
        Reference::new(self.objects.len() as u32, 0)
    }

    /// Reference the next call to [`Registry::add`] will return
    ///
    /// Useful for objects that must point at something not built yet.
    pub fn next_reference(&self) -> Reference {
        Reference::new(self.objects.len() as u32 + 1, 0)
    }

    pub fn get(&self, reference: Reference) -> Option<&Object> {
        self.index(reference).map(|i| &self.objects[i])
    }

    /// Mutable access, for closing cycles such as parent/child links
    pub fn get_mut(&mut self, reference: Reference) -> Option<&mut Object> {
        self.index(reference).map(move |i| &mut self.objects[i])
    }

    pub fn contains(&self, reference: Reference) -> bool {
        self.index(reference).is_some()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in insertion order, with their references
    pub fn iter(&self) -> impl Iterator<Item = (Reference, &Object)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, object)| (Reference::new(i as u32 + 1, 0), object))
    }

    fn index(&self, reference: Reference) -> Option<usize> {
        if reference.generation() != 0 || reference.number() == 0 {
            return None;
        }
        let index = (reference.number() - 1) as usize;
        (index < self.objects.len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numbers_are_sequential() {
        let mut registry = Registry::new();
        let refs: Vec<Reference> = vec![
            registry.add(dictionary! { "Type" => "Catalog" }),
            registry.add(42),
            registry.add(Object::string("hi")),
        ];
        assert_eq!(
            refs,
            vec![
                Reference::new(1, 0),
                Reference::new(2, 0),
                Reference::new(3, 0)
            ]
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_get_and_contains() {
        let mut registry = Registry::new();
        let r = registry.add(7);
        assert_eq!(registry.get(r), Some(&Object::Integer(7)));
        assert!(registry.contains(r));
        assert!(!registry.contains(Reference::new(0, 0)));
        assert!(!registry.contains(Reference::new(2, 0)));
        assert!(!registry.contains(Reference::new(1, 1)));
    }

    #[test]
    fn test_get_mut_closes_cycle() {
        let mut registry = Registry::new();
        let parent = registry.add(dictionary! { "Type" => "Pages" });
        let child = registry.add(dictionary! { "Type" => "Page", "Parent" => parent });
        registry
            .get_mut(parent)
            .and_then(Object::as_dict_mut)
            .unwrap()
            .set("Kids", vec![child]);

        let kids = registry.get(parent).unwrap().as_dict().unwrap().get("Kids");
        assert_eq!(kids, Some(&Object::Array(vec![Object::Reference(child)])));
    }

    #[test]
    fn test_next_reference() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        let predicted = registry.next_reference();
        assert_eq!(registry.add(Object::Null), predicted);
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let mut registry = Registry::new();
        registry.add(1);
        registry.add(2);
        let numbers: Vec<u32> = registry.iter().map(|(r, _)| r.number()).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
