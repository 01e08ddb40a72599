use criterion::{black_box, criterion_group, criterion_main, Criterion};
use limpet_engine::{CollapseTuning, PolicyInput, StickyPolicy};
use limpet_geometry::{Axis, Edge, Rect, StickyFrame};

fn dense_header_stack(count: usize) -> Vec<StickyFrame> {
    (0..count)
        .map(|i| {
            StickyFrame::new(
                Rect::new(0.0, -40.0 + i as f32 * 60.0, 320.0, 40.0),
                Edge::Starting,
            )
        })
        .collect()
}

fn policy_evaluation(c: &mut Criterion) {
    let others = dense_header_stack(32);
    let input = PolicyInput {
        axis: Axis::Vertical,
        edge: Edge::Starting,
        rect: Rect::new(0.0, -100.0, 320.0, 40.0),
        safe_area_inset: 0.0,
        container_end: 800.0,
        others: &others,
        collapse_tuning: CollapseTuning::default(),
    };

    let mut group = c.benchmark_group("policy_evaluation");
    for policy in [
        StickyPolicy::Replace,
        StickyPolicy::Stack,
        StickyPolicy::Fade,
        StickyPolicy::Collapse,
    ] {
        group.bench_function(policy.to_string(), |b| {
            b.iter(|| black_box(policy).evaluate(black_box(&input)))
        });
    }
    group.finish();
}

criterion_group!(benches, policy_evaluation);
criterion_main!(benches);
