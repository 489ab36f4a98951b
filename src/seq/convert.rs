//! Conversions and operator impls for [`CharSeq`].

use crate::seq::CharSeq;
use crate::utf8char::Utf8Char;
use std::fmt;
use std::ops::{Add, AddAssign};

impl From<&str> for CharSeq {
    fn from(text: &str) -> Self {
        let mut seq = Self::new();
        seq.append(text);
        seq
    }
}

impl From<String> for CharSeq {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<&[u8]> for CharSeq {
    fn from(bytes: &[u8]) -> Self {
        let mut seq = Self::new();
        seq.append(bytes);
        seq
    }
}

impl From<char> for CharSeq {
    fn from(ch: char) -> Self {
        let mut seq = Self::new();
        seq.append(ch);
        seq
    }
}

impl From<u8> for CharSeq {
    fn from(byte: u8) -> Self {
        let mut seq = Self::new();
        seq.append(byte);
        seq
    }
}

impl From<Utf8Char> for CharSeq {
    fn from(unit: Utf8Char) -> Self {
        let mut seq = Self::new();
        seq.append(unit);
        seq
    }
}

impl From<&CharSeq> for String {
    /// Value-converting cast to the host string type (lossy on invalid
    /// byte sequences).
    fn from(seq: &CharSeq) -> Self {
        seq.to_string_lossy().into_owned()
    }
}

impl fmt::Display for CharSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl FromIterator<char> for CharSeq {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl Extend<char> for CharSeq {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.append(ch);
        }
    }
}

impl Extend<Utf8Char> for CharSeq {
    fn extend<I: IntoIterator<Item = Utf8Char>>(&mut self, iter: I) {
        for unit in iter {
            self.append(unit);
        }
    }
}

impl<'a> IntoIterator for &'a CharSeq {
    type Item = &'a Utf8Char;
    type IntoIter = std::slice::Iter<'a, Utf8Char>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AddAssign<&str> for CharSeq {
    fn add_assign(&mut self, rhs: &str) {
        self.append(rhs);
    }
}

impl AddAssign<char> for CharSeq {
    fn add_assign(&mut self, rhs: char) {
        self.append(rhs);
    }
}

impl AddAssign<&CharSeq> for CharSeq {
    fn add_assign(&mut self, rhs: &Self) {
        self.append(rhs);
    }
}

impl Add<&str> for CharSeq {
    type Output = Self;

    fn add(mut self, rhs: &str) -> Self {
        self.append(rhs);
        self
    }
}

impl Add<char> for CharSeq {
    type Output = Self;

    fn add(mut self, rhs: char) -> Self {
        self.append(rhs);
        self
    }
}

impl Add<&CharSeq> for CharSeq {
    type Output = Self;

    fn add(mut self, rhs: &Self) -> Self {
        self.append(rhs);
        self
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CharSeq {
    /// Serializes as a string; invalid byte sequences are replaced with
    /// U+FFFD.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CharSeq {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shapes() {
        assert_eq!(CharSeq::from("a©"), "a©");
        assert_eq!(CharSeq::from(String::from("a©")), "a©");
        assert_eq!(CharSeq::from('©'), "©");
        assert_eq!(CharSeq::from(b'x'), "x");
        assert_eq!(CharSeq::from(Utf8Char::from_char('©')), "©");
        assert_eq!(CharSeq::from("a©".as_bytes()), "a©");
    }

    #[test]
    fn test_into_string() {
        let seq = CharSeq::from("a©b");
        let text: String = String::from(&seq);
        assert_eq!(text, "a©b");
    }

    #[test]
    fn test_into_string_lossy_on_raw_bytes() {
        let mut seq = CharSeq::new();
        seq.append(0xFFu8);
        assert_eq!(String::from(&seq), "\u{FFFD}");
    }

    #[test]
    fn test_display() {
        let seq = CharSeq::from("M©‽🐭");
        assert_eq!(format!("{seq}"), "M©‽🐭");
    }

    #[test]
    fn test_collect_and_extend() {
        let seq: CharSeq = "a©z".chars().collect();
        assert_eq!(seq, "a©z");

        let mut seq = CharSeq::from("a");
        seq.extend(['b', '©']);
        assert_eq!(seq, "ab©");
    }

    #[test]
    fn test_iterate_units() {
        let seq = CharSeq::from("a©");
        let lens: Vec<usize> = (&seq).into_iter().map(Utf8Char::byte_len).collect();
        assert_eq!(lens, vec![1, 2]);
    }

    #[test]
    fn test_concatenation_operators() {
        let mut s = CharSeq::from("ab");
        s += "cd";
        s += '©';
        s += &CharSeq::from("‽");
        assert_eq!(s, "abcd©‽");

        let joined = CharSeq::from("x") + "y" + '©' + &CharSeq::from("z");
        assert_eq!(joined, "xy©z");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let seq = CharSeq::from("M©‽🐭");
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "\"M©‽🐭\"");
        let back: CharSeq = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }
}
