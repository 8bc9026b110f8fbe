//! Two-thumb range slider built from a pair of overlapping range inputs.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumb {
    Low,
    High,
}

/// New `[low, high]` after one thumb moved.
///
/// A thumb cannot pass the other one; it stops at its value.
pub fn move_thumb(current: [f64; 2], thumb: Thumb, value: f64) -> [f64; 2] {
    let [low, high] = current;
    match thumb {
        Thumb::Low => [value.min(high), high],
        Thumb::High => [low, value.max(low)],
    }
}

/// Range slider emitting both bounds on every gesture
#[component]
pub fn RangeSlider(
    /// Lowest selectable value
    #[prop(into)]
    min: Signal<f64>,
    /// Highest selectable value
    #[prop(into)]
    max: Signal<f64>,
    /// Current `[low, high]`
    #[prop(into)]
    values: Signal<[f64; 2]>,
    /// Step between values
    #[prop(optional)]
    step: Option<f64>,
    /// Called with the new `[low, high]`
    on_change: Callback<[f64; 2]>,
) -> impl IntoView {
    let step = step.unwrap_or(1.0);

    let handle = move |thumb: Thumb, raw: String| {
        if let Ok(value) = raw.parse::<f64>() {
            on_change.run(move_thumb(values.get_untracked(), thumb, value));
        }
    };

    view! {
        <div class="range-slider">
            <input
                type="range"
                class="range-slider__input range-slider__input--low"
                min=move || min.get()
                max=move || max.get()
                step=step
                prop:value=move || values.get()[0]
                on:input=move |ev| handle(Thumb::Low, event_target_value(&ev))
            />
            <input
                type="range"
                class="range-slider__input range-slider__input--high"
                min=move || min.get()
                max=move || max.get()
                step=step
                prop:value=move || values.get()[1]
                on:input=move |ev| handle(Thumb::High, event_target_value(&ev))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_thumb_stops_at_high() {
        assert_eq!(move_thumb([10.0, 50.0], Thumb::Low, 20.0), [20.0, 50.0]);
        assert_eq!(move_thumb([10.0, 50.0], Thumb::Low, 70.0), [50.0, 50.0]);
    }

    #[test]
    fn test_high_thumb_stops_at_low() {
        assert_eq!(move_thumb([10.0, 50.0], Thumb::High, 40.0), [10.0, 40.0]);
        assert_eq!(move_thumb([10.0, 50.0], Thumb::High, 5.0), [10.0, 10.0]);
    }
}
