pub mod entities;
pub mod scales;
pub mod value_objects;
pub mod viewport;

pub use entities::Chart;
pub use scales::{LinearScale, TimeScale};
pub use value_objects::{CandleTone, ChartLayout, ChartTheme, Color};
pub use viewport::{GestureDelta, ViewportState};
