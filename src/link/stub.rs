//! In-memory slider double for exercising the redistribution core.

use crate::slider::{ChangeObserver, Slider, SliderRef};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Minimal widget standing in for a real slider.
///
/// Mirrors the widget contract the controller relies on: writes clamp to the
/// bounds, observers fire synchronously and only on an actual change.
pub(crate) struct StubSlider {
    value: Cell<f64>,
    min: f64,
    max: f64,
    slider_behavior: bool,
    observers: RefCell<Vec<(String, ChangeObserver)>>,
    changes: Cell<usize>,
}

impl StubSlider {
    pub(crate) fn new(value: f64, min: f64, max: f64) -> Rc<Self> {
        Rc::new(Self {
            value: Cell::new(value),
            min,
            max,
            slider_behavior: true,
            observers: RefCell::new(Vec::new()),
            changes: Cell::new(0),
        })
    }

    /// A widget without slider behavior; attaching to it must fail.
    pub(crate) fn bare(value: f64) -> Rc<Self> {
        Rc::new(Self {
            value: Cell::new(value),
            min: 0.0,
            max: 100.0,
            slider_behavior: false,
            observers: RefCell::new(Vec::new()),
            changes: Cell::new(0),
        })
    }

    pub(crate) fn handle(self: &Rc<Self>) -> SliderRef {
        self.clone()
    }

    pub(crate) fn get(&self) -> f64 {
        self.value.get()
    }

    /// Number of actual value changes observed so far.
    pub(crate) fn change_count(&self) -> usize {
        self.changes.get()
    }

    pub(crate) fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

impl Slider for StubSlider {
    fn value(&self) -> f64 {
        self.value.get()
    }

    fn set_value(&self, value: f64) {
        let clamped = value.clamp(self.min, self.max);
        if clamped == self.value.get() {
            return;
        }
        self.value.set(clamped);
        self.changes.set(self.changes.get() + 1);

        // Snapshot the observers before calling out: an observer may
        // re-enter this slider while the notification is in flight.
        let observers: Vec<ChangeObserver> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(clamped);
        }
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn is_slider(&self) -> bool {
        self.slider_behavior
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
