mod game_list;
mod play_by_play;

pub use game_list::{game_card_lines, GameListView};
pub use play_by_play::PlayByPlayView;
