use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum OutputBlock {
    /// Room descriptions and the objects lying around.
    Description(String),
    /// Responses to commands.
    Text(String),
}

impl OutputBlock {
    pub fn text(&self) -> &str {
        match self {
            OutputBlock::Description(s) | OutputBlock::Text(s) => s,
        }
    }
}

/// Everything one step of the session wants printed, in order.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn describe(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Description(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All output joined into one string, one block per line.
    pub fn to_text(&self) -> String {
        self.blocks
            .iter()
            .map(OutputBlock::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
