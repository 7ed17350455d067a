//! Confirmation gate in front of the service call.

use std::fmt;
use std::io::{self, BufRead, Write};

/// What the user is asked to approve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub action: String,
    pub target: String,
}

impl ConfirmPrompt {
    pub fn create_template(name: &str) -> Self {
        Self {
            action: "CreateTemplate".to_string(),
            target: name.to_string(),
        }
    }
}

impl fmt::Display for ConfirmPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Perform {} on \"{}\"?", self.action, self.target)
    }
}

pub trait Confirm {
    fn confirm(&self, prompt: &ConfirmPrompt) -> io::Result<bool>;
}

/// Asks on stderr and reads the answer from stdin. End of input is a no.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &ConfirmPrompt) -> io::Result<bool> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{prompt} [y/N] ")?;
        stderr.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(is_yes(&line))
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Declined,
    /// Show what would be sent, send nothing.
    WhatIf,
}

/// `what_if` wins over `force`; `force` skips the prompt.
pub fn decide(
    force: bool,
    what_if: bool,
    confirm: &dyn Confirm,
    prompt: &ConfirmPrompt,
) -> io::Result<Decision> {
    if what_if {
        return Ok(Decision::WhatIf);
    }
    if force {
        return Ok(Decision::Proceed);
    }
    Ok(if confirm.confirm(prompt)? {
        Decision::Proceed
    } else {
        Decision::Declined
    })
}
