use buzzboard_core::Category;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch to (or reload) a category.
    Category(Category),
    /// Scroll-to-end: ask for the next page.
    More,
    /// Tap a row, 1-based as displayed.
    Open(usize),
    /// Step the article viewer back through its history.
    Back,
    /// List the available categories.
    Categories,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err("empty input (try 'help')".to_string());
    };

    match head.to_ascii_lowercase().as_str() {
        "more" | "m" => Ok(Command::More),
        "open" | "o" => match words.next().map(str::parse::<usize>) {
            Some(Ok(n)) if n > 0 => Ok(Command::Open(n)),
            _ => Err("usage: open <row number>".to_string()),
        },
        "back" | "b" => Ok(Command::Back),
        "categories" | "cats" => Ok(Command::Categories),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => match Category::parse(line) {
            Some(category) => Ok(Command::Category(category)),
            None => Err(format!("unknown command '{line}' (try 'help')")),
        },
    }
}
