use pegsol::{
    Board, Coordinates, SearchConfig, Solver, Tile,
    adapters::{RecordingObserver, SearchEvent},
    history_to_boards, history_to_jumps, legal_jumps,
};

fn board_with_pegs(pegs: &[(usize, usize)]) -> Board {
    pegs.iter().fold(Board::cleared(), |board, &(row, column)| {
        board
            .set_tile(Coordinates::new(row, column), Tile::Peg)
            .unwrap()
    })
}

#[test]
fn root_without_moves_returns_no_solution_instead_of_failing() {
    let solver = Solver::new(SearchConfig::new());

    // Full board, empty board, and a lone peg: no legal jump anywhere.
    for board in [
        Board::standard(),
        Board::cleared(),
        board_with_pegs(&[(3, 3)]),
    ] {
        assert!(legal_jumps(&board).is_empty());
        let report = solver.solve(&board);
        assert!(report.best.is_none());
        assert_eq!(report.best_remaining, None);
        assert!(!report.interrupted);
    }
}

#[test]
fn solver_replays_cleanly_from_the_reported_chain() {
    let board = board_with_pegs(&[(2, 2), (3, 2), (4, 2), (4, 3), (4, 4)]);
    let report = Solver::new(SearchConfig::new()).solve(&board);

    let best = report.best.expect("position has solutions");
    let jumps = history_to_jumps(&best);
    let boards = history_to_boards(&best);
    assert_eq!(jumps.len(), boards.len());

    let mut replay = board;
    for (jump, snapshot) in jumps.iter().zip(&boards) {
        replay = replay.move_peg(jump.from, jump.to).unwrap();
        assert_eq!(replay, *snapshot);
    }
    assert_eq!(replay.peg_count(), report.best_remaining.unwrap());
    assert!(legal_jumps(&replay).is_empty());
}

#[test]
fn repeated_solves_share_no_state() {
    let board = board_with_pegs(&[(2, 2), (2, 3), (3, 2), (4, 2), (4, 4)]);
    let solver = Solver::new(SearchConfig::new());

    let reports: Vec<_> = (0..3).map(|_| solver.solve(&board)).collect();
    for pair in reports.windows(2) {
        assert_eq!(pair[0].walks, pair[1].walks);
        assert_eq!(pair[0].best_remaining, pair[1].best_remaining);
        let jumps = |report: &pegsol::SearchReport| {
            report.best.as_ref().map(history_to_jumps).unwrap_or_default()
        };
        assert_eq!(jumps(&pair[0]), jumps(&pair[1]));
    }
}

#[test]
fn recording_observer_captures_the_event_sequence() {
    let board = board_with_pegs(&[(3, 2), (3, 3)]);
    let mut observer = RecordingObserver::new();
    let report = Solver::new(SearchConfig::new().with_progress_interval(1))
        .solve_observed(&board, &mut observer)
        .unwrap();

    // Every walk emitted a progress event at interval 1.
    let progress: Vec<u64> = observer
        .events
        .iter()
        .filter_map(|event| match event {
            SearchEvent::Progress { walks } => Some(*walks),
            _ => None,
        })
        .collect();
    assert_eq!(progress.len() as u64, report.walks);

    assert_eq!(observer.winners(), 2);
    assert_eq!(observer.improvements(), vec![1]);
    assert_eq!(
        observer.events.last(),
        Some(&SearchEvent::Finish {
            walks: report.walks
        })
    );
}

#[test]
fn walk_limit_truncates_but_reports_best_effort() {
    let board = Board::standard()
        .remove_peg(Coordinates::new(3, 3))
        .unwrap();

    let limited = Solver::new(SearchConfig::new().with_walk_limit(2_000)).solve(&board);
    assert!(limited.interrupted);
    let remaining = limited.best_remaining.expect("DFS reaches terminals fast");
    assert!(remaining < 32);

    // A larger budget can only match or improve the best found.
    let larger = Solver::new(SearchConfig::new().with_walk_limit(20_000)).solve(&board);
    assert!(larger.best_remaining.unwrap() <= remaining);
}
