pub mod column_player;
pub mod player;
pub mod row_player;

pub use column_player::ColumnScanPlayer;
pub use player::Player;
pub use row_player::RowScanPlayer;
