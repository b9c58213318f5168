// SPDX-License-Identifier: MIT OR Apache-2.0

//! String list wrapper decoded from a single comma-separated string.

use crate::domain::errors::Result;
use crate::ports::StringDecode;

/// A list of strings decoded from one string such as `"a, b, c"` or `"[a,b,c]"`.
///
/// Decoding works as follows:
///
/// 1. Every leading and trailing `[` or `]` character is stripped. Brackets are not
///    matched as pairs, so `"[[a]"` becomes `"a"`.
/// 2. The remainder is split on every comma.
/// 3. Each part is trimmed of surrounding whitespace, then of surrounding `"`
///    characters, so `"[\"a\", \"b\"]"` yields `a` and `b`.
///
/// Decoding never fails on the token itself and always yields at least one element:
/// an empty token yields a single empty string.
///
/// # Examples
///
/// ```
/// use string_encoded::domain::StringArray;
///
/// let hosts: StringArray = "[host1, host2,host3]".parse().unwrap();
/// assert_eq!(hosts.value(), ["host1", "host2", "host3"]);
///
/// let empty: StringArray = "".parse().unwrap();
/// assert_eq!(empty.value(), [""]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringArray(Vec<String>);

impl StringArray {
    /// Returns the decoded elements.
    pub fn value(&self) -> &[String] {
        &self.0
    }

    /// Consumes the wrapper, returning the decoded elements.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing has been decoded into this wrapper.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl StringDecode for StringArray {
    fn decode(token: &str) -> Result<Self> {
        let body = token.trim_matches(|c: char| c == '[' || c == ']');
        let parts = body
            .split(',')
            .map(|part| part.trim().trim_matches('"').to_string())
            .collect();
        Ok(StringArray(parts))
    }
}

impl From<Vec<String>> for StringArray {
    fn from(value: Vec<String>) -> Self {
        StringArray(value)
    }
}

impl From<StringArray> for Vec<String> {
    fn from(value: StringArray) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a StringArray {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for StringArray {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(token: &str) -> Vec<String> {
        StringArray::decode(token).unwrap().into_inner()
    }

    #[test]
    fn test_bracketed_list() {
        assert_eq!(decode("[host1,host2,host3]"), ["host1", "host2", "host3"]);
    }

    #[test]
    fn test_plain_list() {
        assert_eq!(decode("item1,item2,item3"), ["item1", "item2", "item3"]);
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(decode("[ a ,  b,c  ]"), ["a", "b", "c"]);
        assert_eq!(decode("a,\tb\n"), ["a", "b"]);
    }

    #[test]
    fn test_quotes_trimmed() {
        assert_eq!(
            decode(r#"["item1", "item2", "item3"]"#),
            ["item1", "item2", "item3"]
        );
        assert_eq!(decode(r#"""a"""#), ["a"]);
    }

    #[test]
    fn test_inner_quotes_kept() {
        assert_eq!(decode(r#"say "hi" now"#), [r#"say "hi" now"#]);
    }

    #[test]
    fn test_empty_token_yields_one_empty_element() {
        assert_eq!(decode(""), [""]);
        assert_eq!(decode("[]"), [""]);
    }

    #[test]
    fn test_empty_elements_kept() {
        assert_eq!(decode("a,,b"), ["a", "", "b"]);
        assert_eq!(decode(","), ["", ""]);
    }

    #[test]
    fn test_unbalanced_brackets_stripped() {
        assert_eq!(decode("[[a,b"), ["a", "b"]);
        assert_eq!(decode("a,b]]]"), ["a", "b"]);
        assert_eq!(decode("]a["), ["a"]);
    }

    #[test]
    fn test_inner_brackets_kept() {
        assert_eq!(decode("[a[0],b]"), ["a[0", "b"]);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(decode("solo"), ["solo"]);
    }

    #[test]
    fn test_zero_value_is_empty() {
        let array = StringArray::default();
        assert!(array.is_empty());
        assert_eq!(array.len(), 0);
        assert!(array.value().is_empty());
    }

    #[test]
    fn test_iteration() {
        let array = StringArray::decode("x,y").unwrap();
        let collected: Vec<&String> = array.iter().collect();
        assert_eq!(collected, ["x", "y"]);

        let mut count = 0;
        for _ in &array {
            count += 1;
        }
        assert_eq!(count, 2);

        let owned: Vec<String> = array.into_iter().collect();
        assert_eq!(owned, ["x", "y"]);
    }
}
