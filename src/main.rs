//! Interactive terminal demo for the cinescope orchestration core.
//!
//! Reads commands from stdin and prints a plain-text rendering of each
//! snapshot the engine publishes:
//!
//! - any text      → update the search term (debounced)
//! - `:page N`     → jump to page N
//! - `:open ID`    → open the detail view for a record
//! - `:close`      → close the detail view
//! - `:quit`       → exit

use cinescope::view::{ResultsView, Snapshot};
use cinescope::{Engine, Settings};
use std::io::BufRead;

#[tokio::main(flavor = "current_thread")]
async fn main() -> cinescope::Result<()> {
    let settings = Settings::load()?;
    cinescope::observability::init_tracing(&settings);

    let (engine, handle) = Engine::from_settings(&settings)?;
    tokio::spawn(engine.run());

    // Re-render whenever the engine publishes a new snapshot.
    let mut snapshots = handle.watch();
    tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow().clone();
            render(&snapshot);
        }
    });

    // Bridge blocking stdin reads onto the runtime.
    let (line_tx, mut line_rx) = tokio::sync::mpsc::channel::<String>(16);
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    println!("cinescope demo — type to search, :page N, :open ID, :close, :quit");

    while let Some(line) = line_rx.recv().await {
        let line = line.trim();
        if let Some(page) = line.strip_prefix(":page ") {
            match page.parse::<u32>() {
                Ok(page) => handle.change_page(page).await?,
                Err(_) => println!("not a page number: {page}"),
            }
        } else if let Some(id) = line.strip_prefix(":open ") {
            match id.parse::<u64>() {
                Ok(id) => handle.select_record(id).await?,
                Err(_) => println!("not a record id: {id}"),
            }
        } else if line == ":close" {
            handle.close_detail().await?;
        } else if line == ":quit" {
            break;
        } else {
            handle.set_search_term(line).await?;
        }
    }

    Ok(())
}

fn render(snapshot: &Snapshot) {
    match &snapshot.results {
        ResultsView::Loading => println!("… loading"),
        ResultsView::Error(message) => println!("! {message}"),
        ResultsView::Empty => println!("No movies found. Try a different search!"),
        ResultsView::List { cards, pagination } => {
            for card in cards {
                let year = card.year.as_deref().unwrap_or("—");
                println!("  [{}] {} ({year}) ⭐ {}", card.id, card.title, card.rating);
            }
            if let Some(pagination) = pagination {
                println!(
                    "  page {}/{}",
                    pagination.current_page, pagination.total_pages
                );
            }
        }
    }

    if !snapshot.trending.is_empty() {
        let terms: Vec<&str> = snapshot
            .trending
            .iter()
            .map(|entry| entry.term.as_str())
            .collect();
        println!("  trending: {}", terms.join(", "));
    }

    if snapshot.detail_loading {
        println!("… loading detail");
    }
    if let Some(message) = &snapshot.detail_error {
        println!("! {message}");
    }
    if let Some(detail) = &snapshot.detail {
        println!("== {} ==", detail.title);
        if let Some(tagline) = &detail.tagline {
            println!("   {tagline}");
        }
        let mut meta = vec![format!("⭐ {}/10", detail.rating)];
        if let Some(year) = &detail.year {
            meta.push(year.clone());
        }
        if let Some(runtime) = &detail.runtime {
            meta.push(runtime.clone());
        }
        println!("   {}", meta.join("  "));
        if !detail.genres.is_empty() {
            println!("   {}", detail.genres.join(", "));
        }
        if let Some(overview) = &detail.overview {
            println!("   {overview}");
        }
        for cast in &detail.cast {
            println!("   {} as {}", cast.name, cast.character);
        }
        if let Some(trailer) = &detail.trailer_url {
            println!("   trailer: {trailer}");
        }
    }
}
