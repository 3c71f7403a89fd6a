use super::{AsHeaderName, HeaderName, HeaderValue};

/// HTTP Headers Multimap.
///
/// Fields are kept in insertion order. Lookup is ASCII case-insensitive and [`get`] returns the
/// most recently appended value of a name.
///
/// [`get`]: HeaderMap::get
#[derive(Clone, Default)]
pub struct HeaderMap {
    fields: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create new empty [`HeaderMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { fields: Vec::with_capacity(capacity) }
    }

    /// Returns the number of fields, including repeated names.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ===== Lookup =====

impl HeaderMap {
    /// Returns `true` if the map contains a header value for given header name.
    #[inline]
    pub fn contains_key<K: AsHeaderName>(&self, name: K) -> bool {
        let name = name.as_name_str();
        self.fields.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Returns a reference to the last header value corresponding to the given header name.
    ///
    /// ```rust
    /// use minhttp::headers::{standard::USER_AGENT, HeaderMap, HeaderValue};
    ///
    /// let mut map = HeaderMap::new();
    /// map.append(USER_AGENT, HeaderValue::from_static("curl/8.0"));
    /// map.append(USER_AGENT, HeaderValue::from_static("test-agent/1.0"));
    /// assert_eq!(map.get("user-agent").unwrap(), "test-agent/1.0");
    /// ```
    #[inline]
    pub fn get<K: AsHeaderName>(&self, name: K) -> Option<&HeaderValue> {
        let name = name.as_name_str();
        self.fields
            .iter()
            .rev()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Returns an iterator to all header values corresponding to the given header name, in the
    /// order they were appended.
    #[inline]
    pub fn get_all<K: AsHeaderName>(&self, name: K) -> GetAll<'_, K> {
        GetAll {
            iter: self.fields.iter(),
            name,
        }
    }

    /// Returns an iterator over headers as name and value pair.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter { iter: self.fields.iter() }
    }
}

// ===== Mutation =====

impl HeaderMap {
    /// Append a header field, keeping any existing value with the same name.
    #[inline]
    pub fn append(&mut self, name: HeaderName, value: HeaderValue) {
        self.fields.push((name, value));
    }

    /// Insert a header field, replacing every existing value with the same name.
    ///
    /// The field keeps the position of the first replaced value. Returns the last replaced
    /// value, if any.
    pub fn insert(&mut self, name: HeaderName, value: HeaderValue) -> Option<HeaderValue> {
        let Some(first) = self.fields.iter().position(|(n, _)| *n == name) else {
            self.fields.push((name, value));
            return None;
        };

        let mut replaced = std::mem::replace(&mut self.fields[first].1, value);
        let mut index = first + 1;
        while index < self.fields.len() {
            if self.fields[index].0 == name {
                replaced = self.fields.remove(index).1;
            } else {
                index += 1;
            }
        }
        Some(replaced)
    }

    /// Remove every value of the given header name, returning the last one.
    pub fn remove<K: AsHeaderName>(&mut self, name: K) -> Option<HeaderValue> {
        let name = name.as_name_str();
        let mut removed = None;
        let mut index = 0;
        while index < self.fields.len() {
            if self.fields[index].0.eq_ignore_ascii_case(name) {
                removed = Some(self.fields.remove(index).1);
            } else {
                index += 1;
            }
        }
        removed
    }

    /// Clears the map, removing all fields.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

// ===== Iterators =====

/// Iterator over header name and value pair, returned from [`HeaderMap::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    iter: std::slice::Iter<'a, (HeaderName, HeaderValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a HeaderName, &'a HeaderValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(n, v)| (n, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator over values of a single header name, returned from [`HeaderMap::get_all`].
#[derive(Debug)]
pub struct GetAll<'a, K> {
    iter: std::slice::Iter<'a, (HeaderName, HeaderValue)>,
    name: K,
}

impl<'a, K: AsHeaderName> Iterator for GetAll<'a, K> {
    type Item = &'a HeaderValue;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.name.as_name_str();
        self.iter
            .by_ref()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a HeaderName, &'a HeaderValue);

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
