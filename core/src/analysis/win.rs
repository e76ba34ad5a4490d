use serde::{Deserialize, Serialize};

use crate::*;

/// Which win conditions a level accepts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinPolicy {
    /// Dark board, or a single light left.
    #[default]
    Lenient,
    /// Only a completely dark board.
    AllDark,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// The move switched off the only remaining light.
    LastLightExtinguished,
    AllDark,
    SingleLightRemaining,
}

/// Decides whether the move that turned `before` into `after` completes the level.
///
/// Only active, non-fixed cells are counted.
pub fn evaluate(before: &Board, after: &Board) -> Option<WinReason> {
    evaluate_with(WinPolicy::default(), before, after)
}

pub fn evaluate_with(policy: WinPolicy, before: &Board, after: &Board) -> Option<WinReason> {
    let lit_before = before.lit_count();
    let lit_after = after.lit_count();

    // the first case is a special case of the second, reported separately
    if lit_before == 1 && lit_after == 0 {
        Some(WinReason::LastLightExtinguished)
    } else if lit_after == 0 {
        Some(WinReason::AllDark)
    } else if lit_after == 1 && policy == WinPolicy::Lenient {
        Some(WinReason::SingleLightRemaining)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::parse(rows).unwrap()
    }

    #[test]
    fn all_dark_after_several_lights() {
        let before = board(&[".#.", "###", ".#."]);
        let after = before.toggled((1, 1), false);
        assert_eq!(evaluate(&before, &after), Some(WinReason::AllDark));
    }

    #[test]
    fn last_light_case_is_reported() {
        let before = board(&["#F", "FF"]);
        let after = before.toggled((0, 0), false);
        assert_eq!(evaluate(&before, &after), Some(WinReason::LastLightExtinguished));
    }

    #[test]
    fn several_lights_left_is_not_a_win() {
        let before = board(&["#..", "...", "..#"]);
        let after = before.toggled((2, 2), false);
        assert_eq!(after.lit_count(), 3);
        assert_eq!(evaluate(&before, &after), None);
    }

    #[test]
    fn single_light_depends_on_policy() {
        let before = board(&["##", "##"]);
        let after = before.toggled((0, 0), false);
        assert_eq!(after.lit_count(), 1);
        assert_eq!(evaluate(&before, &after), Some(WinReason::SingleLightRemaining));
        assert_eq!(evaluate_with(WinPolicy::AllDark, &before, &after), None);
    }

    #[test]
    fn lit_fixed_cells_are_ignored() {
        let before = board(&["*#", "##"]);
        let after = before.toggled((1, 1), false);
        assert_eq!(after.lit_count(), 0);
        assert_eq!(evaluate(&before, &after), Some(WinReason::AllDark));
    }
}
