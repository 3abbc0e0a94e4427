use crate::game::{Board, Cell, GameState, GameStatus, Player, COLS, CONNECT, ROWS};

/// Score reported for a position already won (or, negated, lost).
pub const WIN_SCORE: i32 = 10_000;

/// (pieces in window, weight) pairs for the line-potential terms.
const POTENTIAL_WEIGHTS: [(usize, i32); 3] = [(3, 100), (2, 10), (1, 1)];

/// Bonus per own piece in one of the three center columns.
const CENTER_BONUS: i32 = 2;

/// Window orientations as (row step, col step): horizontal, vertical,
/// diagonal `\` and diagonal `/`.
const WINDOW_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Trait for evaluating a position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, state: &GameState, player: Player) -> i32;
}

/// Default heuristic: counts open windows holding 1, 2 or 3 of a player's
/// pieces and rewards center control.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePotentialHeuristic;

impl Heuristic for LinePotentialHeuristic {
    fn evaluate(&self, state: &GameState, player: Player) -> i32 {
        match state.status() {
            GameStatus::Won(winner) if winner == player => return WIN_SCORE,
            GameStatus::Won(_) => return -WIN_SCORE,
            GameStatus::Draw => return 0,
            GameStatus::Ongoing => {}
        }

        let board = state.board();
        let own = player.to_cell();
        let opp = player.other().to_cell();

        let mut score = 0;
        for (target, weight) in POTENTIAL_WEIGHTS {
            score += weight * count_potential(board, own, target) as i32;
            score -= weight * count_potential(board, opp, target) as i32;
        }

        for row in 0..ROWS {
            for col in center_columns() {
                if board.get(row, col) == own {
                    score += CENTER_BONUS;
                }
            }
        }

        score
    }
}

/// The three center-most columns.
fn center_columns() -> std::ops::RangeInclusive<usize> {
    COLS / 2 - 1..=COLS / 2 + 1
}

/// Number of windows holding exactly `target` pieces of `cell` with every
/// other square empty. A window touched by the other player never counts.
pub(crate) fn count_potential(board: &Board, cell: Cell, target: usize) -> usize {
    let mut count = 0;
    for (dr, dc) in WINDOW_DIRECTIONS {
        for row in 0..ROWS {
            for col in 0..COLS {
                let Some(window) = window_at(board, row, col, dr, dc) else {
                    continue;
                };
                let own = window.iter().filter(|&&c| c == cell).count();
                let empty = window.iter().filter(|&&c| c == Cell::Empty).count();
                if own == target && own + empty == CONNECT {
                    count += 1;
                }
            }
        }
    }
    count
}

/// The [`CONNECT`] cells starting at (row, col) along (dr, dc), or `None`
/// if the window would leave the board.
fn window_at(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> Option<[Cell; CONNECT]> {
    let span = CONNECT as isize - 1;
    let end_row = row as isize + dr * span;
    let end_col = col as isize + dc * span;
    if !(0..ROWS as isize).contains(&end_row) || !(0..COLS as isize).contains(&end_col) {
        return None;
    }

    let mut window = [Cell::Empty; CONNECT];
    for (i, slot) in window.iter_mut().enumerate() {
        let r = row as isize + dr * i as isize;
        let c = col as isize + dc * i as isize;
        *slot = board.get(r as usize, c as usize);
    }
    Some(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_as(state: &mut GameState, player: Player, columns: &[usize]) {
        for &col in columns {
            state.set_current_player(player);
            assert!(state.apply_move(col));
        }
    }

    #[test]
    fn empty_board_is_zero() {
        let state = GameState::initial();
        let h = LinePotentialHeuristic;
        assert_eq!(h.evaluate(&state, Player::Red), 0);
        assert_eq!(h.evaluate(&state, Player::Yellow), 0);
    }

    #[test]
    fn terminal_sentinels() {
        let h = LinePotentialHeuristic;
        let mut state = GameState::initial();
        play_as(&mut state, Player::Red, &[0, 1, 2, 3]);
        assert_eq!(state.status(), GameStatus::Won(Player::Red));

        assert_eq!(h.evaluate(&state, Player::Red), WIN_SCORE);
        assert_eq!(h.evaluate(&state, Player::Yellow), -WIN_SCORE);
    }

    #[test]
    fn draw_scores_zero() {
        let h = LinePotentialHeuristic;
        let mut state = GameState::initial();
        for col in 0..COLS {
            for row in (0..ROWS).rev() {
                let player = if (col / 2 + row) % 2 == 0 {
                    Player::Yellow
                } else {
                    Player::Red
                };
                play_as(&mut state, player, &[col]);
            }
        }
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(h.evaluate(&state, Player::Red), 0);
        assert_eq!(h.evaluate(&state, Player::Yellow), 0);
    }

    #[test]
    fn single_center_piece_exact_score() {
        // A bottom-center piece sits in 4 horizontal, 1 vertical and one
        // window along each diagonal, all otherwise empty.
        let h = LinePotentialHeuristic;
        let mut state = GameState::initial();
        play_as(&mut state, Player::Yellow, &[3]);

        assert_eq!(count_potential(state.board(), Cell::Yellow, 1), 7);
        assert_eq!(h.evaluate(&state, Player::Yellow), 7 + CENTER_BONUS);
        assert_eq!(h.evaluate(&state, Player::Red), -7);
    }

    #[test]
    fn center_preference() {
        let h = LinePotentialHeuristic;
        let mut center = GameState::initial();
        play_as(&mut center, Player::Red, &[3]);
        let mut edge = GameState::initial();
        play_as(&mut edge, Player::Red, &[0]);

        let score_center = h.evaluate(&center, Player::Red);
        let score_edge = h.evaluate(&edge, Player::Red);
        assert!(
            score_center > score_edge,
            "Center ({score_center}) should score higher than edge ({score_edge})"
        );
    }

    #[test]
    fn three_in_a_row_scores_high() {
        let h = LinePotentialHeuristic;
        let mut state = GameState::initial();
        play_as(&mut state, Player::Red, &[0, 1, 2]);

        assert_eq!(count_potential(state.board(), Cell::Red, 3), 1);
        let red = h.evaluate(&state, Player::Red);
        let yellow = h.evaluate(&state, Player::Yellow);
        assert!(red > 100, "3-in-a-row should score high, got {red}");
        // Mirror image apart from Red's center bonus on column 2.
        assert_eq!(red, -yellow + CENTER_BONUS);
    }

    #[test]
    fn opponent_piece_disqualifies_window() {
        let mut state = GameState::initial();
        play_as(&mut state, Player::Red, &[0, 1, 2]);
        play_as(&mut state, Player::Yellow, &[3]);

        assert_eq!(count_potential(state.board(), Cell::Red, 3), 0);
        // The blocked window counts for neither player.
        assert_eq!(count_potential(state.board(), Cell::Yellow, 1), 4);
    }
}
