pub mod empty_state;
pub mod range_slider;
pub mod ui;

pub use empty_state::EmptyState;
pub use range_slider::RangeSlider;
