use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pawns_chess::core::rules::{is_stalemate, possible_moves};
use pawns_chess::{utils::perft, Board, Color, Game, Square};

fn middle_game() -> Game {
    let mut game = Game::new();
    for token in ["e2e4", "d7d5", "e4d5", "c7c5", "d5d6", "h7h5", "b2b4", "c5b4"] {
        let (from, to) = pawns_chess::utils::parse_move(token).unwrap();
        game.submit_move(from, to);
    }
    game
}

fn locked_board() -> Board {
    let white: Vec<_> = (0..8).filter_map(|file| Square::new(3, file)).collect();
    let black: Vec<_> = (0..8).filter_map(|file| Square::new(4, file)).collect();
    Board::from_squares(&white, &black).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let start = Board::default();
    c.bench_function("Possible moves (start)", |b| {
        b.iter(|| possible_moves(black_box(&start), None, Color::White))
    });
    let game = middle_game();
    c.bench_function("Possible moves (middle game)", |b| {
        b.iter(|| black_box(&game).legal_moves())
    });
    let locked = locked_board();
    c.bench_function("Stalemate check (locked files)", |b| {
        b.iter(|| is_stalemate(black_box(&locked), None, Color::White))
    });
    let game = Game::new();
    c.bench_function("Perft 3", |b| b.iter(|| perft(black_box(&game), 3)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
