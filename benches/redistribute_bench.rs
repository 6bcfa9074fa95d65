//! Criterion benchmarks for linked-slider redistribution.
//!
//! Uses a minimal in-memory widget so the numbers measure the pass itself,
//! not any real UI plumbing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linked_sliders::link::{LinkedSliders, Policy, SettingsPatch};
use linked_sliders::slider::{ChangeObserver, Slider, SliderRef};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct BenchSlider {
    value: Cell<f64>,
    observers: RefCell<Vec<(String, ChangeObserver)>>,
}

impl BenchSlider {
    fn new(value: f64) -> Rc<Self> {
        Rc::new(Self {
            value: Cell::new(value),
            observers: RefCell::new(Vec::new()),
        })
    }
}

impl Slider for BenchSlider {
    fn value(&self) -> f64 {
        self.value.get()
    }

    fn set_value(&self, value: f64) {
        let clamped = value.clamp(self.min(), self.max());
        if clamped == self.value.get() {
            return;
        }
        self.value.set(clamped);
        let observers: Vec<ChangeObserver> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, o)| Rc::clone(o))
            .collect();
        for observer in observers {
            observer(clamped);
        }
    }

    fn min(&self) -> f64 {
        0.0
    }

    fn max(&self) -> f64 {
        1_000_000.0
    }

    fn subscribe(&self, namespace: &str, observer: ChangeObserver) {
        self.observers
            .borrow_mut()
            .push((namespace.to_string(), observer));
    }

    fn unsubscribe(&self, namespace: &str) {
        self.observers
            .borrow_mut()
            .retain(|(ns, _)| ns != namespace);
    }
}

fn attach_group(policy: Policy, size: usize) -> (LinkedSliders, Vec<Rc<BenchSlider>>) {
    let stubs: Vec<Rc<BenchSlider>> = (0..size).map(|_| BenchSlider::new(10.0)).collect();
    let refs: Vec<SliderRef> = stubs.iter().map(|s| Rc::clone(s) as SliderRef).collect();

    let mut manager = LinkedSliders::new();
    manager
        .attach(
            &refs[0],
            SettingsPatch::new()
                .with_total(10.0 * size as f64)
                .with_policy(policy),
            &refs,
        )
        .expect("attach");
    (manager, stubs)
}

fn bench_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("redistribute_pass");

    for &size in &[2usize, 8, 64] {
        for (name, policy) in [("next", Policy::Next), ("all", Policy::All)] {
            let (_manager, stubs) = attach_group(policy, size);
            let mut toggle = false;
            group.bench_with_input(
                BenchmarkId::new(name, size),
                &size,
                |b, _| {
                    b.iter(|| {
                        // Alternate the origin between two values so every
                        // iteration triggers a real pass.
                        toggle = !toggle;
                        let v = if toggle { 15.0 } else { 10.0 };
                        stubs[0].set_value(black_box(v));
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_attach(c: &mut Criterion) {
    c.bench_function("attach_initial_sync_8", |b| {
        b.iter(|| {
            let (manager, stubs) = attach_group(Policy::All, 8);
            black_box((manager, stubs))
        });
    });
}

criterion_group!(benches, bench_pass, bench_attach);
criterion_main!(benches);
