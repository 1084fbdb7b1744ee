//! Turning turn reports into player-facing log lines.
//!
//! Downstream consumer of [`TurnReport`] events; the engine core never
//! reads anything back from here.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{Event, TurnReport, JOURNAL_CAPACITY};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MessageKind {
    Info,
    Harm,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

/// FIFO game log capped at [`JOURNAL_CAPACITY`] entries.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    messages: VecDeque<Message>,
}

impl Journal {
    /// Render every newsworthy event of a completed turn into the log.
    pub fn push_report(&mut self, report: &TurnReport) {
        for event in &report.events {
            if let Some(message) = render(event) {
                self.push(message);
            }
        }
    }

    /// Note a blocked intent; the engine surfaces those as errors, not
    /// events, but the player still wants a line for them.
    pub fn note_blocked(&mut self) {
        self.push(Message {
            text: "You can't go that way.".into(),
            kind: MessageKind::Info,
        });
    }

    pub fn push(&mut self, message: Message) {
        if self.messages.len() == JOURNAL_CAPACITY {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    /// Messages in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn render(event: &Event) -> Option<Message> {
    let (text, kind) = match event {
        // Ordinary walking is not newsworthy.
        Event::Moved(_) => return None,
        Event::DoorOpened(_) => {
            ("The door swings open.", MessageKind::Info)
        }
        Event::FellIntoPit(_) => {
            ("The floor gives way and you fall!", MessageKind::Harm)
        }
        Event::CursedEffectTriggered(_) => {
            ("A chill curse seeps into you.", MessageKind::Harm)
        }
        Event::PlateTriggered(_) => {
            ("A pressure plate clicks underfoot.", MessageKind::Info)
        }
        Event::Examined(_) => {
            ("The obelisk is covered in unreadable glyphs.", MessageKind::Info)
        }
        Event::NoEffect => ("Nothing happens.", MessageKind::Info),
    };
    Some(Message {
        text: text.into(),
        kind,
    })
}
