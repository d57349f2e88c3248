use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};
use traffic_sim::simulation_engine::factory::VehicleFactory;
use traffic_sim::simulation_engine::road::Road;

fn bench_road_tick(c: &mut Criterion) {
    let capacities = [16i64, 64, 256];

    let mut group = c.benchmark_group("road_tick");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    for &capacity in &capacities {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                let mut road =
                    Road::with_source("Bench Road", capacity, false, Box::new(VehicleFactory::seeded(1)));
                b.iter(|| {
                    road.tick();
                    black_box(road.capacity());
                });
            },
        );
    }

    group.finish();
}

fn bench_road_snapshot(c: &mut Criterion) {
    let mut road = Road::with_source("Bench Road", 256, false, Box::new(VehicleFactory::seeded(1)));
    for _ in 0..512 {
        road.tick();
    }

    c.bench_function("road_snapshot_256", |b| {
        b.iter(|| black_box(road.snapshot()));
    });
}

criterion_group!(benches, bench_road_tick, bench_road_snapshot);
criterion_main!(benches);
