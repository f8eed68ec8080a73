use criterion::{criterion_group, criterion_main, Criterion};

use carousel_animation_core::{
    config::Config,
    data::CarouselData,
    engine::Engine,
    inputs::{CarouselCommand, Direction, Inputs},
};

fn mk_data(name: &str, n: usize) -> CarouselData {
    CarouselData {
        id: None,
        name: name.to_string(),
        slides: (0..n).map(|i| format!("{name}_{i}")).collect(),
        slide_size: 100.0,
        step_duration_ms: 500,
        pause_duration_ms: 250,
        slide_padding: 0.0,
        initial_direction: Direction::Forward,
        autostart: false,
        chrome: serde_json::Value::Null,
    }
}

fn mk_engine(carousels: usize) -> Engine {
    let mut eng = Engine::new(Config::default());
    for i in 0..carousels {
        let id = eng.add_carousel(mk_data(&format!("deck_{i}"), 8)).unwrap();
        eng.update(
            0.0,
            Inputs {
                commands: vec![
                    CarouselCommand::SetLayout {
                        carousel: id,
                        slide_width: 100.0,
                    },
                    CarouselCommand::Start { carousel: id },
                ],
            },
        );
    }
    eng
}

fn bench_update(c: &mut Criterion) {
    for carousels in [1usize, 16, 64] {
        let mut eng = mk_engine(carousels);
        c.bench_function(&format!("update_16ms_{carousels}_carousels"), |b| {
            b.iter(|| {
                let out = eng.update(0.016, Inputs::default());
                criterion::black_box(out.changes.len());
            })
        });
    }
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
