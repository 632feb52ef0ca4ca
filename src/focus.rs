//! Focus state machine.
//!
//! Exactly one element owns keyboard input at a time. The transitions are a
//! plain table from (current target, command) to the next target and the side
//! effect the view model has to perform.

/// Element that currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    LogTable,
    SearchBox,
    StartDateBox,
    EndDateBox,
}

impl FocusTarget {
    /// True for the three text inputs.
    pub fn is_input(self) -> bool {
        !matches!(self, FocusTarget::LogTable)
    }
}

/// Requests that move focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusCommand {
    FocusSearch,
    FocusStartDate,
    FocusEndDate,
    /// Clear the focused field and return to the table
    Cancel,
    /// Keep the focused field and return to the table
    Commit,
}

/// Work the view model performs alongside a focus change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEffect {
    None,
    /// Re-run the filters with the current field values
    Recompute,
    /// Empty the given field, then re-run the filters
    ClearAndRecompute(FocusTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: FocusTarget,
    pub effect: FocusEffect,
}

impl Transition {
    const fn new(next: FocusTarget, effect: FocusEffect) -> Self {
        Self { next, effect }
    }
}

/// Look up the transition for `command` in state `current`.
///
/// Returns `None` when the command is not valid from `current`; the caller
/// leaves focus unchanged in that case.
pub fn transition(current: FocusTarget, command: FocusCommand) -> Option<Transition> {
    use FocusCommand::*;
    use FocusTarget::*;

    match (current, command) {
        (LogTable, FocusSearch) => Some(Transition::new(SearchBox, FocusEffect::None)),
        (LogTable, FocusStartDate) => Some(Transition::new(StartDateBox, FocusEffect::None)),
        (LogTable, FocusEndDate) => Some(Transition::new(EndDateBox, FocusEffect::None)),
        (input, Cancel) if input.is_input() => Some(Transition::new(
            LogTable,
            FocusEffect::ClearAndRecompute(input),
        )),
        (input, Commit) if input.is_input() => {
            Some(Transition::new(LogTable, FocusEffect::Recompute))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUTS: [FocusTarget; 3] = [
        FocusTarget::SearchBox,
        FocusTarget::StartDateBox,
        FocusTarget::EndDateBox,
    ];

    #[test]
    fn test_initial_state_is_log_table() {
        assert_eq!(FocusTarget::default(), FocusTarget::LogTable);
    }

    #[test]
    fn test_enter_inputs_from_table() {
        let cases = [
            (FocusCommand::FocusSearch, FocusTarget::SearchBox),
            (FocusCommand::FocusStartDate, FocusTarget::StartDateBox),
            (FocusCommand::FocusEndDate, FocusTarget::EndDateBox),
        ];
        for (command, expected) in cases {
            let t = transition(FocusTarget::LogTable, command).unwrap();
            assert_eq!(t.next, expected);
            assert_eq!(t.effect, FocusEffect::None);
        }
    }

    #[test]
    fn test_cancel_clears_the_focused_field() {
        for input in INPUTS {
            let t = transition(input, FocusCommand::Cancel).unwrap();
            assert_eq!(t.next, FocusTarget::LogTable);
            assert_eq!(t.effect, FocusEffect::ClearAndRecompute(input));
        }
    }

    #[test]
    fn test_commit_keeps_value() {
        for input in INPUTS {
            let t = transition(input, FocusCommand::Commit).unwrap();
            assert_eq!(t.next, FocusTarget::LogTable);
            assert_eq!(t.effect, FocusEffect::Recompute);
        }
    }

    #[test]
    fn test_no_jump_between_inputs() {
        for input in INPUTS {
            assert_eq!(transition(input, FocusCommand::FocusSearch), None);
            assert_eq!(transition(input, FocusCommand::FocusStartDate), None);
            assert_eq!(transition(input, FocusCommand::FocusEndDate), None);
        }
    }

    #[test]
    fn test_cancel_and_commit_invalid_from_table() {
        assert_eq!(transition(FocusTarget::LogTable, FocusCommand::Cancel), None);
        assert_eq!(transition(FocusTarget::LogTable, FocusCommand::Commit), None);
    }
}
