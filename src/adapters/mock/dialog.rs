//! Scripted confirmation dialog for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::traits::Dialog;

/// Dialog that answers from a queue and records every prompt.
///
/// When the queue is empty the fallback answer is used.
#[derive(Debug, Clone)]
pub struct ScriptedDialog {
    answers: Arc<Mutex<VecDeque<bool>>>,
    fallback: bool,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedDialog {
    /// Dialog that always confirms.
    pub fn accepting() -> Self {
        Self::with_fallback(true)
    }

    /// Dialog that always declines.
    pub fn declining() -> Self {
        Self::with_fallback(false)
    }

    fn with_fallback(fallback: bool) -> Self {
        Self {
            answers: Arc::new(Mutex::new(VecDeque::new())),
            fallback,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a one-off answer.
    pub fn push_answer(&self, answer: bool) {
        self.answers.lock().unwrap().push_back(answer);
    }

    /// Every message shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Dialog for ScriptedDialog {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.fallback)
    }
}
