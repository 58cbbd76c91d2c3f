pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{divider, error, file_header, muted, section, success, summary_row, warn};
pub use table::{BatchTable, batch_table};
pub use theme::{theme, Theme};
