// The container contract shared by all removal strategies: an ordered, growable
// sequence with random access, in-place mutation, and range removal.
pub trait Sequence {
    type Item;

    /// Returns the length (i.e., number of elements stored).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the element at `index`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Replace the element at `index`.
    fn set(&mut self, index: usize, value: Self::Item);

    /// Exchange the elements at indices `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Append an element at the end.
    fn push(&mut self, value: Self::Item);

    /// Drop all elements at indices `len` and beyond.
    fn truncate(&mut self, len: usize);

    /// Remove the elements in `start .. end`, shifting later elements left.
    fn remove_range(&mut self, start: usize, end: usize);
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j);
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        self.drain(start .. end);
    }
}

/// A string stored as a flat buffer of `char`, so that the whole-string
/// benchmarks can mutate individual characters through the `Sequence` ops.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharString {
    chars: Vec<char>,
}

impl CharString {
    pub fn new() -> CharString {
        CharString { chars: Vec::new() }
    }
}

impl From<&str> for CharString {
    fn from(s: &str) -> CharString {
        CharString {
            chars: s.chars().collect(),
        }
    }
}

impl From<CharString> for String {
    fn from(s: CharString) -> String {
        s.chars.into_iter().collect()
    }
}

impl Sequence for CharString {
    type Item = char;

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn get(&self, index: usize) -> &char {
        &self.chars[index]
    }

    fn set(&mut self, index: usize, value: char) {
        self.chars[index] = value;
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.chars.swap(i, j);
    }

    fn push(&mut self, value: char) {
        self.chars.push(value);
    }

    fn truncate(&mut self, len: usize) {
        self.chars.truncate(len);
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        self.chars.drain(start .. end);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vec_sequence_ops() {
        let mut v = vec![1, 2, 3, 4, 5];
        assert_eq!(Sequence::len(&v), 5);
        assert_eq!(*Sequence::get(&v, 2), 3);

        Sequence::set(&mut v, 0, 10);
        Sequence::swap(&mut v, 0, 4);
        assert_eq!(v, vec![5, 2, 3, 4, 10]);

        Sequence::push(&mut v, 6);
        Sequence::remove_range(&mut v, 1, 3);
        assert_eq!(v, vec![5, 4, 10, 6]);

        Sequence::truncate(&mut v, 2);
        assert_eq!(v, vec![5, 4]);
    }

    #[test]
    fn test_char_string_round_trip() {
        let s = CharString::from("abcdef");
        assert_eq!(s.len(), 6);
        assert_eq!(String::from(s), "abcdef");
    }

    #[test]
    fn test_char_string_ops() {
        let mut s = CharString::from("abcdef");
        s.set(0, 'x');
        s.swap(0, 5);
        s.push('!');
        assert_eq!(String::from(s.clone()), "fbcdex!");

        s.remove_range(1, 3);
        s.truncate(3);
        assert_eq!(String::from(s), "fde");
    }

    #[test]
    fn test_char_string_empty() {
        let s = CharString::new();
        assert!(s.is_empty());
        assert_eq!(String::from(s), "");
    }
}
