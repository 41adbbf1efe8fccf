mod fav;
mod favorites;
mod info;
mod init;
mod top;

pub use fav::cmd_toggle_favorite;
pub use favorites::cmd_favorites;
pub use info::cmd_movie_info;
pub use init::cmd_init;
pub use top::cmd_top_movies;
