//! Top movies command handler

use crate::state::AppState;

pub async fn cmd_top_movies(state: &AppState) -> anyhow::Result<()> {
    let view = state.list_view();
    view.load().await;

    let favorite_ids = state.favorites.ids()?;
    print!("{}", view.render(&favorite_ids));

    if let Some(movies) = view.state().data() {
        println!("{} movies", movies.len());
        println!("Show details with: movieapp info <id>");
    }

    Ok(())
}
