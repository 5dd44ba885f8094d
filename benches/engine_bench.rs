use criterion::{black_box, criterion_group, criterion_main, Criterion};

use oan_quan::{legal_moves, start_turn, step, Direction, GameState, Move};

/// Tick the committed turn until it settles (bounded for safety).
fn run_turn(mut state: GameState) -> GameState {
    for _ in 0..100_000 {
        if !state.is_turn_active() {
            break;
        }
        state = step(state);
    }
    state
}

/// Play deterministic games (always the first legal move) until the board
/// settles or `turns` moves have been made.
fn play_game(turns: usize) -> GameState {
    let mut state = GameState::new();
    for _ in 0..turns {
        let moves = legal_moves(&state);
        let Some(mv) = moves.first() else { break };
        state = run_turn(start_turn(state, *mv));
    }
    state
}

fn bench_single_step(c: &mut Criterion) {
    let armed = start_turn(GameState::new(), Move::new(1, Direction::Clockwise));
    c.bench_function("single_sowing_step", |b| {
        b.iter(|| step(black_box(armed.clone())))
    });
}

fn bench_opening_turn(c: &mut Criterion) {
    c.bench_function("opening_turn_to_completion", |b| {
        b.iter(|| {
            run_turn(start_turn(
                black_box(GameState::new()),
                Move::new(1, Direction::Clockwise),
            ))
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("game_100_turns_first_legal", |b| {
        b.iter(|| play_game(black_box(100)))
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let state = play_game(50);
    c.bench_function("clone_state_with_history", |b| {
        b.iter(|| black_box(&state).clone())
    });
}

criterion_group!(
    benches,
    bench_single_step,
    bench_opening_turn,
    bench_full_game,
    bench_state_clone
);
criterion_main!(benches);
