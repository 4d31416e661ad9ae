use std::collections::HashMap;

/// Synonym table mapping alternative words to their standard form.
///
/// Substitution is a single hop: a definition that is itself a synonym is
/// not looked up again.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    synonyms: HashMap<String, String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both sides are stored lowercased. A repeated word replaces the
    /// earlier definition.
    pub fn insert(&mut self, word: &str, definition: &str) {
        self.synonyms
            .insert(word.trim().to_lowercase(), definition.trim().to_lowercase());
    }

    /// Canonical form of `word`: lowercased, then substituted once if it is
    /// a known synonym. Unknown words come back lowercased and unchanged.
    pub fn resolve(&self, word: &str) -> String {
        let word = word.to_lowercase();
        match self.synonyms.get(&word) {
            Some(definition) => definition.clone(),
            None => word,
        }
    }

    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    /// Entries whose definition is itself a synonym.
    pub fn chained(&self) -> impl Iterator<Item = (&str, &str)> {
        self.synonyms
            .iter()
            .filter(|(word, definition)| {
                word != definition && self.synonyms.contains_key(definition.as_str())
            })
            .map(|(w, d)| (w.as_str(), d.as_str()))
    }
}

impl<W: AsRef<str>, D: AsRef<str>> FromIterator<(W, D)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for (word, definition) in iter {
            vocabulary.insert(word.as_ref(), definition.as_ref());
        }
        vocabulary
    }
}
