use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ezdiff_recovery::study::condition_rng;
use ezdiff_recovery::RecoveryDriver;

fn bench_condition(c: &mut Criterion) {
    let driver = RecoveryDriver::default();
    let mut group = c.benchmark_group("recovery_condition");
    for n in [10u32, 40, 4000] {
        group.bench_function(format!("n{n}_1000_iterations"), |b| {
            b.iter(|| {
                let mut rng = condition_rng(42, 0);
                black_box(driver.run(black_box(n), 1000, &mut rng).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_condition);
criterion_main!(benches);
