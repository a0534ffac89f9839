/// Sink for the battle's observable message log.
pub trait BattleLog {
    fn add(&mut self, message: String);
}

/// In-memory chat log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chat {
    messages: Vec<String>,
}

impl Chat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl BattleLog for Chat {
    fn add(&mut self, message: String) {
        self.messages.push(message);
    }
}

impl BattleLog for Vec<String> {
    fn add(&mut self, message: String) {
        self.push(message);
    }
}
