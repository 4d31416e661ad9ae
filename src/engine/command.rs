use crate::world::Vocabulary;

/// One player command, recognised from the first word of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Look,
    /// Canonical object word, if one was given.
    Take(Option<String>),
    Drop(Option<String>),
    Inventory,
    /// Anything else is tried as a direction. The word is kept as typed
    /// (lowercased) so navigation applies the synonym table exactly once.
    Motion(String),
    Empty,
}

impl Command {
    pub fn parse(line: &str, vocabulary: &Vocabulary) -> Command {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Command::Empty;
        };
        let argument = words.next().map(|w| vocabulary.resolve(w));

        match vocabulary.resolve(first).as_str() {
            "quit" => Command::Quit,
            "help" => Command::Help,
            "look" => Command::Look,
            "take" => Command::Take(argument),
            "drop" => Command::Drop(argument),
            "inventory" => Command::Inventory,
            _ => Command::Motion(first.to_lowercase()),
        }
    }
}
