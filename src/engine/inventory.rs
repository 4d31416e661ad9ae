/// Objects the player is carrying, in pickup order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: impl Into<String>) {
        self.items.push(object.into());
    }

    /// Returns false if the object wasn't being carried.
    pub fn remove(&mut self, object: &str) -> bool {
        match self.items.iter().position(|o| o == object) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, object: &str) -> bool {
        self.items.iter().any(|o| o == object)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
