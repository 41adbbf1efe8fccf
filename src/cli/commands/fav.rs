use crate::domain::MovieId;
use crate::state::AppState;

pub fn cmd_toggle_favorite(state: &AppState, id_str: &str) -> anyhow::Result<()> {
    let Ok(id) = id_str.parse::<MovieId>() else {
        println!("Invalid movie ID: {id_str:?}");
        return Ok(());
    };

    if state.favorites.toggle(&id)? {
        println!("✓ Added {id} to favorites");
    } else {
        println!("✓ Removed {id} from favorites");
    }

    Ok(())
}
