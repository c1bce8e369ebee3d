use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use buzzboard_core::{update, AppState, Category, Msg};
use buzzboard_engine::EngineHandle;
use reader_logging::reader_info;

use super::effects::EffectRunner;
use super::input::{self, Command};
use super::logging::{self, LogDestination};
use super::settings;
use super::ui;
use super::viewer::ArticleViewer;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);
    let settings = settings::load();

    let engine = EngineHandle::new(settings.to_fetch_settings())
        .context("failed to start the fetch engine")?;
    let runner = EffectRunner::new(engine);
    let mut viewer = ArticleViewer::new();
    let mut state = AppState::new();

    print_banner();

    // Screen creation: a fresh load of the default category.
    let (next, effects) = update(state, Msg::CategorySelected(settings.default_category()));
    state = next;
    runner.run(effects, &mut viewer);
    flush_output(&mut state);

    let line_rx = spawn_stdin_reader();

    loop {
        let mut inbox: Vec<Msg> = Vec::new();
        while let Some(msg) = runner.try_msg() {
            inbox.push(msg);
        }

        let mut quit = false;
        loop {
            match line_rx.try_recv() {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match input::parse(&line) {
                        Ok(Command::Quit) => {
                            quit = true;
                            break;
                        }
                        Ok(command) => handle_command(command, &mut inbox, &mut viewer),
                        Err(problem) => println!("{problem}"),
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    quit = true;
                    break;
                }
            }
        }

        inbox.push(Msg::Tick);
        for msg in inbox {
            let (next, effects) = update(state, msg);
            state = next;
            runner.run(effects, &mut viewer);
        }
        flush_output(&mut state);

        if quit {
            break;
        }
        thread::sleep(Duration::from_millis(50));
    }

    // Dropping the engine handle cancels whatever is still in flight.
    reader_info!("shutting down");
    Ok(())
}

fn handle_command(command: Command, inbox: &mut Vec<Msg>, viewer: &mut ArticleViewer) {
    match command {
        Command::Category(category) => inbox.push(Msg::CategorySelected(category)),
        Command::More => inbox.push(Msg::EndReached),
        Command::Open(n) => inbox.push(Msg::RowActivated { index: n - 1 }),
        Command::Back => {
            if viewer.is_open() {
                match viewer.back() {
                    Some(url) => println!("Viewing article: {url}"),
                    None => println!("Viewer closed."),
                }
            } else {
                println!("No article is open.");
            }
        }
        Command::Categories => {
            for category in Category::ALL {
                println!("  {category}");
            }
        }
        Command::Help => print_help(),
        // Quit never reaches here; the caller exits on it.
        Command::Quit => {}
    }
}

fn flush_output(state: &mut AppState) {
    if state.consume_dirty() {
        let stamp = chrono::Local::now().format("%H:%M:%S").to_string();
        for line in ui::render::render(&state.view(), &stamp) {
            println!("{line}");
        }
    }
    if let Some(notice) = state.take_notice() {
        println!("* {notice}");
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn print_banner() {
    println!("Buzzboard");
    println!("Type a category name to load it, 'help' for commands.");
}

fn print_help() {
    let categories = Category::ALL
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Commands:");
    println!("  <category>   load a category ({categories})");
    println!("  more         fetch the next page of the current category");
    println!("  open <n>     open article n in the viewer");
    println!("  back         step the viewer back through its history");
    println!("  categories   list the categories");
    println!("  help         show this help");
    println!("  quit         exit");
}
