//! Capability trait for the external slider widget.

use std::rc::Rc;

/// Callback invoked when a slider's value actually changes.
///
/// Receives the new (post-clamp) value. Widgets fire observers
/// synchronously from within `set_value`, so an observer may re-enter
/// code that is still on the stack; the linked-group controller guards
/// against that with a per-group flag.
pub type ChangeObserver = Rc<dyn Fn(f64)>;

/// Shared, non-owning handle to a slider widget.
///
/// Sliders are owned by the surrounding UI tree; groups and observers hold
/// `Rc` handles to them. The model is single-threaded, so widgets use
/// interior mutability and the trait takes `&self` throughout.
pub type SliderRef = Rc<dyn Slider>;

/// The slice of slider behavior the linked-group controller consumes.
///
/// The controller never renders, handles input, or configures the widget;
/// it only reads values and bounds, writes corrected values back, and
/// observes value-changed notifications. Anything implementing this trait —
/// a real widget adapter or a lightweight test double — can be linked.
///
/// # Contract
///
/// - `min() <= max()` at all times.
/// - `set_value` clamps the incoming value to `[min, max]`.
/// - `set_value` notifies subscribed observers synchronously, and only when
///   the stored value actually changed.
/// - `unsubscribe(namespace)` removes exactly the observers registered under
///   that namespace, leaving other observers in place.
pub trait Slider {
    /// Current value.
    fn value(&self) -> f64;

    /// Writes a new value, clamped by the widget to `[min, max]`.
    ///
    /// May synchronously re-emit a value-changed notification.
    fn set_value(&self, value: f64);

    /// Lower bound.
    fn min(&self) -> f64;

    /// Upper bound.
    fn max(&self) -> f64;

    /// Whether slider behavior is actually initialised on this widget.
    ///
    /// Linked groups refuse to attach when this is false. Defaults to true;
    /// adapters wrapping lazily-initialised widgets override it.
    fn is_slider(&self) -> bool {
        true
    }

    /// Registers an observer under a namespace.
    fn subscribe(&self, namespace: &str, observer: ChangeObserver);

    /// Removes every observer registered under `namespace`.
    fn unsubscribe(&self, namespace: &str);
}
