include!("../../lib.rs");

use crate::console::menu::Menu;
use crate::core::controller::AppState;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::utils::log::setup_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> LibraryResult<()> {
    setup_tracing();

    let state = AppState::new("main", RepositoryStore::InMemory);
    let menu = Menu::new(&state).await;
    if state.config.seed_demo_books {
        menu.seed_demo_books().await;
    }

    let mut reader = tokio::io::BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();
    menu.run(&mut reader, &mut writer).await
}
