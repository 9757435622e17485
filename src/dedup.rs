use std::collections::HashSet;

// Identifiers already emitted during one crawl run. Grows only.
#[derive(Debug, Default, Clone)]
pub struct SeenIds {
    ids: HashSet<String>
}

impl SeenIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id`, returning false when it was already seen.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SeenIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SeenIds {
            ids: iter.into_iter().map(Into::into).collect()
        }
    }
}
