use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};
use traffic_sim::simulation_engine::factory::{VehicleFactory, VehicleSource};

fn bench_vehicle_factory_batches(c: &mut Criterion) {
    let batch_sizes = [10, 20, 50];

    let mut group = c.benchmark_group("next_random_vehicle_batch");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    for &batch_size in &batch_sizes {
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &size| {
                let mut factory = VehicleFactory::seeded(1);
                b.iter(|| {
                    // In each iteration, draw 'size' arrivals.
                    for _ in 0..size {
                        black_box(factory.next_random_vehicle());
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_vehicle_factory_batches);
criterion_main!(benches);
