//! Favorites command handler

use crate::state::AppState;

pub async fn cmd_favorites(state: &AppState) -> anyhow::Result<()> {
    let view = state.favorites_view();
    view.load().await?;
    print!("{}", view.render());

    if view.state().data().is_some_and(Vec::is_empty) {
        println!("No favorites yet.");
        println!("Add one with: movieapp fav <id>");
    }

    Ok(())
}
