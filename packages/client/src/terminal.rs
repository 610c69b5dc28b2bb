//! Line-oriented front end that drives the pages from a terminal.

use std::io::{self, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::api::NamesApi;
use crate::components::vote_card::VoteCard;
use crate::pages::first_stage_result::FirstStageResultPage;
use crate::pages::first_stage_vote::FirstStageVotePage;
use crate::pages::game_list::GameListPage;
use crate::routes::Route;

/// Opens `route` and renders it to `out`; the vote page reads commands from `input`.
pub async fn run<R, W>(api: Arc<dyn NamesApi>, route: &Route, input: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match route {
        Route::GameList => show_games(api, out).await,
        Route::Vote { game_id } => vote(api, game_id, input, out).await,
        Route::Results { game_id } => show_results(api, game_id, out).await,
    }
}

async fn show_games<W: Write>(api: Arc<dyn NamesApi>, out: &mut W) -> io::Result<()> {
    let page = GameListPage::new(api);
    page.activate().await;

    let games = page.games().get();
    if games.is_empty() {
        writeln!(out, "No games.")?;
    }
    for game in games {
        writeln!(
            out,
            "{}  {}  [{}]  owner: {}",
            game.id,
            game.description.as_deref().unwrap_or("-"),
            game.gender.map_or("M/F".to_string(), |g| g.to_string()),
            game.owner.username
        )?;
    }
    Ok(())
}

async fn show_results<W: Write>(api: Arc<dyn NamesApi>, game_id: &str, out: &mut W) -> io::Result<()> {
    let page = FirstStageResultPage::new(api);
    page.set_game_id(game_id).await;

    let names = page.names().get();
    if names.is_empty() {
        writeln!(out, "No name selected yet.")?;
    }
    for name in names {
        writeln!(out, "{} ({})", name.value, name.gender)?;
    }
    Ok(())
}

/// Like/dislike loop for one game.
///
/// Request failures are only logged, so a game that cannot be loaded (for
/// instance one the user is not a member of) ends with the same
/// "No more names to vote on." line as a finished session.
async fn vote<R, W>(api: Arc<dyn NamesApi>, game_id: &str, input: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let page = FirstStageVotePage::new(api);
    let (events, mut received) = mpsc::unbounded_channel();
    let mut card = VoteCard::new(events);
    let mut lines = input.lines();

    page.set_game_id(game_id).await;

    loop {
        card.set_loading(page.loading().get());
        card.set_name(page.current().get());

        let Some(name) = card.name() else {
            writeln!(out, "No more names to vote on.")?;
            break;
        };
        writeln!(out, "{} ({})  [l]ike / [d]islike / [q]uit", name.value, name.gender)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let emitted = match line.trim() {
            "l" | "like" => card.like(),
            "d" | "dislike" => card.dislike(),
            "q" | "quit" => break,
            other => {
                writeln!(out, "Unknown command: {}", other)?;
                continue;
            }
        };

        if emitted {
            while let Ok(event) = received.try_recv() {
                page.handle(event).await;
            }
        }
    }
    Ok(())
}
