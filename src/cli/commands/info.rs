use crate::domain::MovieId;
use crate::render;
use crate::state::AppState;

pub async fn cmd_movie_info(state: &AppState, id_str: &str) -> anyhow::Result<()> {
    let Ok(id) = id_str.parse::<MovieId>() else {
        println!("Invalid movie ID: {id_str:?}");
        println!("Use 'movieapp top' to see movie IDs.");
        return Ok(());
    };

    let view = state.detail_view();
    view.show(&id).await;
    print!("{}", view.render());

    if view.state().data().is_some() {
        let is_favorite = state.favorites.contains(&id)?;
        println!("{}", render::favorite_label(is_favorite));
    }

    Ok(())
}
