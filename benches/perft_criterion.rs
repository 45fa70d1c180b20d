use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use amazons::game_state::amazons_types::Board;
use amazons::move_generation::perft::perft;
use amazons::utils::algebraic::replay_game_record;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    record: &'static str,
    max_depth: u8,
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "opening",
        record: "",
        max_depth: 1,
    },
    BenchCase {
        name: "after_two_moves",
        record: "d1 d7 d5\ng10 g3 c3\n",
        max_depth: 1,
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "opening",
        record: "",
        max_depth: 2,
    },
    BenchCase {
        name: "after_two_moves",
        record: "d1 d7 d5\ng10 g3 c3\n",
        max_depth: 2,
    },
];

fn suite_name() -> &'static str {
    match std::env::var("AMAZONS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let board: Board = replay_game_record(case.record).expect("benchmark record should replay");

        for depth in 1..=case.max_depth {
            // Node count of the first run is the reference for every iteration.
            let expected = perft(&board, depth).nodes;
            if case.record.is_empty() && depth == 1 {
                assert_eq!(expected, 2176, "opening move count changed");
            }

            group.throughput(Throughput::Elements(expected as u64));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                &expected,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&board), black_box(depth));
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_move_counting(c: &mut Criterion) {
    let board = Board::new();
    let mut group = c.benchmark_group("move_counting");
    group.throughput(Throughput::Elements(2176));

    group.bench_function("legal_moves_iter", |b| {
        b.iter(|| black_box(&board).legal_moves().count())
    });
    group.bench_function("count_legal_moves", |b| {
        b.iter(|| black_box(&board).count_legal_moves(board.turn()))
    });

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_move_counting);
criterion_main!(perft_benches);
