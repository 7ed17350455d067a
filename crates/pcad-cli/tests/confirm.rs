use std::cell::Cell;
use std::io;

use pcad_cli::confirm::{Confirm, ConfirmPrompt, Decision, decide, is_yes};

/// Scripted answer that records whether it was asked.
struct Answer {
    yes: bool,
    asked: Cell<bool>,
}

impl Answer {
    fn new(yes: bool) -> Self {
        Self {
            yes,
            asked: Cell::new(false),
        }
    }
}

impl Confirm for Answer {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> io::Result<bool> {
        self.asked.set(true);
        Ok(self.yes)
    }
}

struct Broken;

impl Confirm for Broken {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> io::Result<bool> {
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
    }
}

fn prompt() -> ConfirmPrompt {
    ConfirmPrompt::create_template("tmpl1")
}

#[test]
fn yes_proceeds() {
    let answer = Answer::new(true);
    assert_eq!(decide(false, false, &answer, &prompt()).unwrap(), Decision::Proceed);
    assert!(answer.asked.get());
}

#[test]
fn no_declines() {
    let answer = Answer::new(false);
    assert_eq!(decide(false, false, &answer, &prompt()).unwrap(), Decision::Declined);
}

#[test]
fn force_skips_the_prompt() {
    let answer = Answer::new(false);
    assert_eq!(decide(true, false, &answer, &prompt()).unwrap(), Decision::Proceed);
    assert!(!answer.asked.get());
}

#[test]
fn what_if_wins_over_force() {
    let answer = Answer::new(true);
    assert_eq!(decide(true, true, &answer, &prompt()).unwrap(), Decision::WhatIf);
    assert!(!answer.asked.get());
}

#[test]
fn prompt_failure_is_an_error() {
    assert!(decide(false, false, &Broken, &prompt()).is_err());
}

#[test]
fn prompt_names_the_template() {
    assert_eq!(prompt().to_string(), "Perform CreateTemplate on \"tmpl1\"?");
}

#[test]
fn answers() {
    for yes in ["y", "Y", "yes", " YES\n"] {
        assert!(is_yes(yes), "{yes:?}");
    }
    for no in ["", "\n", "n", "no", "yep", "y es"] {
        assert!(!is_yes(no), "{no:?}");
    }
}
