//! The stats card: render, snapshot, and PNG export.

mod export;
mod snapshot;
mod view;

pub use export::{export_filename, CardExportPanel, RASTER_SCALE};
pub use snapshot::{svg_snapshot, SNAPSHOT_HEIGHT, SNAPSHOT_WIDTH};
pub use view::StatsCard;
