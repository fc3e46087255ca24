use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use command_memento::Narrator;
use command_memento::memento::{Caretaker, Originator, RandomStateGenerator, StateGenerator};

fn seeded_originator(narrator: &Narrator) -> Originator {
    Originator::with_generator(
        "Super-duper-super-puper-super.",
        Box::new(RandomStateGenerator::seeded(42)),
        narrator.clone(),
    )
    .unwrap()
}

/// Benchmark state generation at different lengths
fn bench_state_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_generation");

    for length in [10usize, 30, 300] {
        let mut generator = RandomStateGenerator::seeded(7);
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &len| {
            b.iter(|| black_box(generator.generate(len)));
        });
    }
    group.finish();
}

/// Benchmark filling and draining a history
fn bench_backup_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("backup_undo");

    for depth in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let narrator = Narrator::buffered();
                let mut originator = seeded_originator(&narrator);
                let mut caretaker = Caretaker::new(narrator.clone());

                for _ in 0..depth {
                    caretaker.backup(&originator).unwrap();
                    originator.do_something().unwrap();
                }
                while caretaker.can_undo() {
                    caretaker.undo(&mut originator).unwrap();
                }
                black_box(originator.state().len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_state_generation, bench_backup_undo);
criterion_main!(benches);
