//! Depth-first exhaustive search over the jump tree

use std::{
    collections::HashSet,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use super::history::{HistoryNode, MoveHistory};
use crate::{
    Result,
    board::{Board, Jump, legal_jumps},
    identifiers::BoardKey,
    ports::{NullObserver, SearchObserver},
};

/// Default number of walked states between observer progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Cooperative cancellation flag for a running search.
///
/// The token is cheap to clone and safe to hand to another thread; the
/// search checks it before every recursive step and stops descending once
/// it is set.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the search to stop at its next step.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configuration for a solve invocation.
///
/// # Examples
///
/// ```
/// use pegsol::solver::SearchConfig;
///
/// let config = SearchConfig::new()
///     .with_walk_limit(250_000)
///     .with_progress_interval(50_000);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Walked states between `on_progress` notifications
    pub progress_interval: u64,
    /// Stop after walking this many states (`None` = run to exhaustion)
    pub walk_limit: Option<u64>,
    /// Cooperative cancellation flag
    pub cancel: CancelToken,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            walk_limit: None,
            cancel: CancelToken::new(),
        }
    }

    /// Set the walk budget after which the search stops early.
    pub fn with_walk_limit(mut self, limit: u64) -> Self {
        self.walk_limit = Some(limit);
        self
    }

    /// Set the number of walked states between progress notifications.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Attach an externally held cancellation token.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a solve invocation.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Best move-history chain discovered (newest node first); `None` when
    /// the start position has no legal jumps or nothing was found before an
    /// interruption.
    pub best: Option<MoveHistory>,
    /// Remaining pegs on the best chain's final board.
    pub best_remaining: Option<usize>,
    /// Number of distinct board states walked.
    pub walks: u64,
    /// True when the walk limit or cancellation stopped the search early.
    pub interrupted: bool,
}

impl SearchReport {
    /// Whether the best chain ends with a single peg.
    pub fn is_won(&self) -> bool {
        self.best_remaining == Some(1)
    }
}

/// Exhaustive backtracking solver.
///
/// The solver walks the jump tree depth-first in generator order,
/// deduplicating board states reached by different move orders and keeping
/// the last terminal that improved on the best remaining-peg count. The
/// traversal is deliberately order-dependent: improvements are compared
/// against a single threshold shared across every branch of one invocation,
/// so the result is "no worse than the last improvement found along this
/// traversal order", not a proven global optimum.
///
/// All search state lives in a session created fresh per invocation;
/// repeated solves never interfere.
///
/// # Examples
///
/// ```
/// use pegsol::{
///     board::{Board, Coordinates},
///     solver::{SearchConfig, Solver},
/// };
///
/// let board = Board::standard()
///     .remove_peg(Coordinates::new(3, 3))
///     .unwrap();
/// let solver = Solver::new(SearchConfig::new().with_walk_limit(50_000));
/// let report = solver.solve(&board);
/// assert!(report.best.is_some());
/// ```
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Solve without observation.
    pub fn solve(&self, board: &Board) -> SearchReport {
        match self.solve_observed(board, &mut NullObserver) {
            Ok(report) => report,
            Err(_) => unreachable!("the null observer never fails"),
        }
    }

    /// Solve, reporting search events through the given observer.
    ///
    /// # Errors
    ///
    /// Returns an error only if the observer fails.
    pub fn solve_observed(
        &self,
        board: &Board,
        observer: &mut dyn SearchObserver,
    ) -> Result<SearchReport> {
        SearchSession::new(board, &self.config, observer).run(board)
    }
}

/// Running state of one solve invocation.
///
/// The best-result threshold, the visited set, and the walk counter are
/// deliberately session-scoped rather than process-wide.
struct SearchSession<'a> {
    config: &'a SearchConfig,
    observer: &'a mut dyn SearchObserver,
    /// Canonicalized boards already explored in this invocation
    visited: HashSet<BoardKey>,
    /// Shared threshold every branch compares its terminals against;
    /// seeded with a count no reachable terminal can match
    best_remaining: usize,
    walks: u64,
    interrupted: bool,
}

impl<'a> SearchSession<'a> {
    fn new(
        board: &Board,
        config: &'a SearchConfig,
        observer: &'a mut dyn SearchObserver,
    ) -> Self {
        Self {
            config,
            observer,
            visited: HashSet::new(),
            best_remaining: board.playable_count(),
            walks: 0,
            interrupted: false,
        }
    }

    fn run(mut self, board: &Board) -> Result<SearchReport> {
        let mut best = None;
        for jump in legal_jumps(board) {
            if let Some(found) = self.walk(board, jump, None)? {
                best = Some(found);
            }
        }
        self.observer.on_finish(self.walks)?;

        let best_remaining = best.as_ref().map(|_| self.best_remaining);
        Ok(SearchReport {
            best,
            best_remaining,
            walks: self.walks,
            interrupted: self.interrupted,
        })
    }

    fn stopped(&mut self) -> bool {
        if self.interrupted {
            return true;
        }
        let limit_reached = self
            .config
            .walk_limit
            .is_some_and(|limit| self.walks >= limit);
        if limit_reached || self.config.cancel.is_cancelled() {
            self.interrupted = true;
            return true;
        }
        false
    }

    /// Explore the position reached by applying `jump` to `board`.
    ///
    /// Returns the newest improving chain found in this subtree, if any;
    /// later improvements overwrite earlier ones on the way back up.
    fn walk(
        &mut self,
        board: &Board,
        jump: Jump,
        prev: Option<&MoveHistory>,
    ) -> Result<Option<MoveHistory>> {
        if self.stopped() {
            return Ok(None);
        }

        let next = board
            .move_peg(jump.from, jump.to)
            .expect("generated jumps are always legal");
        if !self.visited.insert(next.key()) {
            // Reached via another move order; prune without touching best.
            return Ok(None);
        }

        self.walks += 1;
        if self.config.progress_interval > 0
            && self.walks.is_multiple_of(self.config.progress_interval)
        {
            self.observer.on_progress(self.walks)?;
        }

        let node = match prev {
            Some(prev) => HistoryNode::extend(prev, jump, next),
            None => HistoryNode::start(jump, next),
        };

        let further = legal_jumps(&next);
        if further.is_empty() {
            let remaining = next.peg_count();
            if remaining == 1 {
                self.observer.on_winner(&node)?;
            }
            if remaining < self.best_remaining {
                self.best_remaining = remaining;
                self.observer.on_improvement(remaining, node.chain_len())?;
                return Ok(Some(node));
            }
            return Ok(None);
        }

        let mut result = None;
        for jump in further {
            if let Some(found) = self.walk(&next, jump, Some(&node))? {
                result = Some(found);
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::{Coordinates, Tile},
        solver::history::{history_to_boards, history_to_jumps},
    };

    fn board_with_pegs(pegs: &[(usize, usize)]) -> Board {
        pegs.iter().fold(Board::cleared(), |board, &(row, column)| {
            board
                .set_tile(Coordinates::new(row, column), Tile::Peg)
                .unwrap()
        })
    }

    #[test]
    fn test_root_without_moves_returns_no_solution() {
        let solver = Solver::new(SearchConfig::new());

        for board in [Board::standard(), Board::cleared()] {
            let report = solver.solve(&board);
            assert!(report.best.is_none());
            assert_eq!(report.best_remaining, None);
            assert_eq!(report.walks, 0);
            assert!(!report.interrupted);
        }
    }

    #[test]
    fn test_two_pegs_solve_to_a_win() {
        let board = board_with_pegs(&[(3, 2), (3, 3)]);
        let report = Solver::new(SearchConfig::new()).solve(&board);

        let best = report.best.clone().expect("two pegs in a row are solvable");
        assert_eq!(report.best_remaining, Some(1));
        assert!(report.is_won());
        assert_eq!(best.chain_len(), 1);
        assert_eq!(history_to_boards(&best).last().unwrap().peg_count(), 1);
    }

    #[test]
    fn test_three_peg_line_solves_to_one() {
        // Solvable in two jumps once the gap at (3, 3) is filled.
        let board = board_with_pegs(&[(3, 1), (3, 2), (3, 4)]);
        let report = Solver::new(SearchConfig::new()).solve(&board);

        let best = report.best.expect("position is solvable");
        assert_eq!(report.best_remaining, Some(1));
        let jumps = history_to_jumps(&best);
        assert_eq!(jumps.len(), 2);

        // Replaying the reported jumps from the start reproduces the chain.
        let mut replay = board;
        for jump in &jumps {
            replay = replay.move_peg(jump.from, jump.to).unwrap();
        }
        assert_eq!(replay, *history_to_boards(&best).last().unwrap());
        assert_eq!(replay.peg_count(), 1);
    }

    #[test]
    fn test_unsolvable_pair_reports_best_effort() {
        // Two pegs that can each jump once but never merge to a single peg:
        //   . o o .  with a second detached pair far away.
        let board = board_with_pegs(&[(1, 2), (1, 3), (5, 2), (5, 3)]);
        let report = Solver::new(SearchConfig::new()).solve(&board);

        let best = report.best.clone().expect("some jump always improves on 33");
        assert_eq!(report.best_remaining, Some(2));
        assert!(!report.is_won());
        let final_board = *history_to_boards(&best).last().unwrap();
        assert_eq!(final_board.peg_count(), 2);
        assert!(legal_jumps(&final_board).is_empty());
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = board_with_pegs(&[(2, 2), (2, 3), (3, 2), (4, 2), (4, 4)]);
        let solver = Solver::new(SearchConfig::new());

        let first = solver.solve(&board);
        let second = solver.solve(&board);

        assert_eq!(first.walks, second.walks);
        assert_eq!(first.best_remaining, second.best_remaining);
        let jumps = |report: &SearchReport| {
            report.best.as_ref().map(history_to_jumps).unwrap_or_default()
        };
        assert_eq!(jumps(&first), jumps(&second));
    }

    #[test]
    fn test_visited_set_prunes_transposed_orders() {
        // Two independent pairs: the same final position is reachable by
        // playing the pairs in either order, so the walk count must stay
        // below the full permutation tree.
        let board = board_with_pegs(&[(1, 2), (1, 3), (5, 2), (5, 3)]);
        let report = Solver::new(SearchConfig::new()).solve(&board);

        // 4 root jumps, 4 midgame states, but only 4 distinct end states
        // instead of 8 order-permuted ones.
        assert!(report.walks < 12, "expected pruning, walked {}", report.walks);
    }

    #[test]
    fn test_walk_limit_interrupts_and_keeps_best_effort() {
        let board = Board::standard()
            .remove_peg(Coordinates::new(3, 3))
            .unwrap();
        let report = Solver::new(SearchConfig::new().with_walk_limit(500)).solve(&board);

        assert!(report.interrupted);
        assert!(report.walks <= 501);
        // Depth-first descent reaches terminals long before 500 walks.
        let best_remaining = report.best_remaining.expect("a terminal was reached");
        assert!(best_remaining < 32);
    }

    #[test]
    fn test_cancel_token_stops_the_search() {
        let token = CancelToken::new();
        token.cancel();

        let board = Board::standard()
            .remove_peg(Coordinates::new(3, 3))
            .unwrap();
        let solver = Solver::new(SearchConfig::new().with_cancel_token(token));
        let report = solver.solve(&board);

        assert!(report.interrupted);
        assert_eq!(report.walks, 0);
        assert!(report.best.is_none());
    }

    #[test]
    fn test_observer_sees_winner_and_improvements() {
        struct Recording {
            winners: usize,
            improvements: Vec<usize>,
            finished: bool,
        }

        impl SearchObserver for Recording {
            fn on_winner(&mut self, _history: &MoveHistory) -> crate::Result<()> {
                self.winners += 1;
                Ok(())
            }

            fn on_improvement(&mut self, remaining: usize, _depth: usize) -> crate::Result<()> {
                self.improvements.push(remaining);
                Ok(())
            }

            fn on_finish(&mut self, _walks: u64) -> crate::Result<()> {
                self.finished = true;
                Ok(())
            }
        }

        let mut observer = Recording {
            winners: 0,
            improvements: Vec::new(),
            finished: false,
        };
        let board = board_with_pegs(&[(3, 2), (3, 3)]);
        let report = Solver::new(SearchConfig::new())
            .solve_observed(&board, &mut observer)
            .unwrap();

        assert!(report.is_won());
        assert!(observer.winners >= 1);
        assert_eq!(observer.improvements, vec![1]);
        assert!(observer.finished);
    }

    #[test]
    fn test_improvements_are_strictly_decreasing() {
        struct Improvements(Vec<usize>);

        impl SearchObserver for Improvements {
            fn on_improvement(&mut self, remaining: usize, _depth: usize) -> crate::Result<()> {
                self.0.push(remaining);
                Ok(())
            }
        }

        // The first branch in generator order dead-ends at two pegs; a
        // later branch reaches a 1-peg finish, improving on it.
        let board = board_with_pegs(&[(3, 1), (3, 2), (3, 4)]);
        let mut observer = Improvements(Vec::new());
        let report = Solver::new(SearchConfig::new())
            .solve_observed(&board, &mut observer)
            .unwrap();

        assert_eq!(observer.0, vec![2, 1]);
        assert!(observer.0.windows(2).all(|pair| pair[1] < pair[0]));
        assert_eq!(report.best_remaining, observer.0.last().copied());
    }
}
