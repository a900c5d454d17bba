use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tetris_duel::core::{Battle, Board, Tetromino};
use tui_tetris_duel::types::{Command, PieceKind, BOARD_WIDTH, CELL_GARBAGE};

fn bench_clear_4_lines(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..BOARD_WIDTH {
                    board.set_cell(x, y, CELL_GARBAGE);
                }
            }
            black_box(board.clear_lines())
        })
    });
}

fn bench_inject_garbage_row(c: &mut Criterion) {
    c.bench_function("inject_garbage_row", |b| {
        let mut board = Board::new();
        b.iter(|| {
            board.inject_garbage_row(black_box(4));
        })
    });
}

fn bench_is_valid(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Tetromino::spawn(PieceKind::T);
    piece.y = 10;

    c.bench_function("is_valid", |b| {
        b.iter(|| black_box(board.is_valid(black_box(&piece))))
    });
}

fn bench_battle_tick(c: &mut Criterion) {
    c.bench_function("battle_tick", |b| {
        let mut battle = Battle::new(12345);
        battle.start();
        b.iter(|| {
            battle.step(black_box(&[]));
        })
    });
}

fn bench_battle_hard_drop_round(c: &mut Criterion) {
    c.bench_function("battle_hard_drop_round", |b| {
        b.iter(|| {
            let mut battle = Battle::new(black_box(777));
            battle.start();
            for _ in 0..4 {
                battle.step(&[(0, Command::HardDrop), (1, Command::HardDrop)]);
            }
            black_box(battle.running())
        })
    });
}

criterion_group!(
    benches,
    bench_clear_4_lines,
    bench_inject_garbage_row,
    bench_is_valid,
    bench_battle_tick,
    bench_battle_hard_drop_round
);
criterion_main!(benches);
