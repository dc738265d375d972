use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::PLACEHOLDER;

/// How much of a clue is currently on display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disclosure {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl Disclosure {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Answer)
    }

    /// The state a click moves to, `None` once the answer is showing.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Question),
            Self::Question => Some(Self::Answer),
            Self::Answer => None,
        }
    }
}

/// Result of clicking a clue, carrying the text that replaces the cell contents.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome<'a> {
    NoChange,
    ShowQuestion(&'a str),
    ShowAnswer(&'a str),
}

impl<'a> RevealOutcome<'a> {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn text(self) -> Option<&'a str> {
        match self {
            Self::NoChange => None,
            Self::ShowQuestion(text) | Self::ShowAnswer(text) => Some(text),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    disclosure: Disclosure,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            disclosure: Disclosure::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    /// Text the cell should currently display.
    pub fn face(&self) -> &str {
        match self.disclosure {
            Disclosure::Hidden => PLACEHOLDER,
            Disclosure::Question => &self.question,
            Disclosure::Answer => &self.answer,
        }
    }

    /// Advances Hidden -> Question -> Answer. Clicks on an answered clue are ignored.
    pub fn reveal(&mut self) -> RevealOutcome<'_> {
        let Some(next) = self.disclosure.next() else {
            return RevealOutcome::NoChange;
        };
        self.disclosure = next;

        match next {
            Disclosure::Question => RevealOutcome::ShowQuestion(&self.question),
            Disclosure::Answer => RevealOutcome::ShowAnswer(&self.answer),
            Disclosure::Hidden => unreachable!("disclosure never moves back to hidden"),
        }
    }
}
