use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result, eyre};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use todostore::sort::ParseSortOrderError;
use todostore::{Config, SearchQuery, SortOrder, Task, TodoStore};

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "Interactive to-do list with search, sort and starring")]
#[command(version)]
struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initially selected sort order (overrides the config file)
    #[arg(short, long, value_parser = parse_sort_order)]
    sort: Option<SortOrder>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn parse_sort_order(s: &str) -> Result<SortOrder, String> {
    s.parse().map_err(|err: ParseSortOrderError| err.to_string())
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let mut store = TodoStore::new();
    // Full re-render on every refresh signal, like the list view
    store.on_refresh(|tasks| render_list(tasks));

    let mut current_sort = cli.sort.unwrap_or(config.default_sort);

    println!("{}", "todostore — type `help` for commands".bold());

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("todo> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                match handle_line(&mut store, &mut current_sort, &line) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(err) => eprintln!("{} {:#}", "error:".red().bold(), err),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Dispatch one line of input. Returns `false` when the session should end.
fn handle_line(store: &mut TodoStore, current_sort: &mut SortOrder, line: &str) -> Result<bool> {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "add" => {
            let task = parse_task_fields(rest)?;
            println!("added '{}'", task.title.green());
            store.add(task);
        }
        "edit" => {
            let (row, fields) = rest
                .split_once(' ')
                .ok_or_else(|| eyre!("usage: edit <row> <title> | <due date> | <sub-tasks>"))?;
            let id = resolve_row(store, row)?.0;
            let task = parse_task_fields(fields)?;
            println!("updated '{}'", task.title.green());
            store.replace(id, task)?;
        }
        "rm" => {
            let (id, title, _) = resolve_row(store, rest)?;
            println!("removed '{}'", title.green());
            store.remove(id)?;
        }
        "star" => {
            let (id, title, was_favourite) = resolve_row(store, rest)?;
            let verb = if was_favourite { "unstarred" } else { "starred" };
            println!("{} '{}'", verb, title.green());
            store.toggle_favourite(id)?;
        }
        "sort" => {
            if rest.is_empty() {
                render_sort_menu(*current_sort);
            } else {
                let order: SortOrder = rest.parse()?;
                *current_sort = order;
                println!("{}", order.label());
                store.sort_by(order);
            }
        }
        "list" => render_list(store.tasks()),
        "search" => match SearchQuery::parse(rest) {
            Some(query) => render_results(&query, store.tasks()),
            // blank query falls back to the unfiltered list
            None => render_list(store.tasks()),
        },
        "export" => {
            let json = serde_json::to_string_pretty(store.tasks())
                .context("Failed to serialize task list")?;
            println!("{json}");
        }
        "help" => render_help(),
        "quit" | "exit" => return Ok(false),
        other => {
            return Err(eyre!("unknown command '{other}' (try `help`)"));
        }
    }

    Ok(true)
}

/// Parse `title | due date | sub-tasks`; the last two fields are optional
fn parse_task_fields(input: &str) -> Result<Task> {
    let mut parts = input.splitn(3, '|').map(str::trim);
    let title = parts.next().unwrap_or("");
    if title.is_empty() {
        return Err(eyre!("a task needs a title: <title> | <due date> | <sub-tasks>"));
    }
    let due_date = parts.next().unwrap_or("");
    let sub_tasks = parts.next().unwrap_or("");
    Ok(Task::new(title, due_date, sub_tasks))
}

/// Resolve a 1-based row number from the last `list` render.
///
/// The row is translated to the task's stable id immediately, so later
/// mutations cannot redirect the command to a different task.
fn resolve_row(store: &TodoStore, arg: &str) -> Result<(todostore::TaskId, String, bool)> {
    let row: usize = arg
        .trim()
        .parse()
        .map_err(|_| eyre!("expected a row number, got '{}'", arg.trim()))?;
    let index = row
        .checked_sub(1)
        .ok_or_else(|| eyre!("rows are numbered from 1"))?;
    let task = store
        .get(index)
        .ok_or_else(|| eyre!("no row {} (list has {} tasks)", row, store.len()))?;
    Ok((task.id, task.title.clone(), task.is_favourite))
}

fn render_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("{}", "(no tasks)".dimmed());
        return;
    }
    for (row, task) in tasks.iter().enumerate() {
        let star = if task.is_favourite {
            "★".yellow().to_string()
        } else {
            " ".to_string()
        };
        println!("{:>3} {} {}  {}", row + 1, star, task.title, task.due_date.dimmed());
        if !task.sub_tasks.is_empty() {
            println!("      {}", task.sub_tasks.dimmed());
        }
    }
}

fn render_results(query: &SearchQuery, tasks: &[Task]) {
    let mut hits = 0usize;
    for task in query.filter(tasks) {
        let star = if task.is_favourite {
            "★".yellow().to_string()
        } else {
            " ".to_string()
        };
        println!("  {} {}  {}", star, task.title, task.due_date.dimmed());
        hits += 1;
    }
    if hits == 0 {
        println!("{}", format!("(no matches for '{}')", query.as_str()).dimmed());
    }
}

fn render_sort_menu(current: SortOrder) {
    println!("Choose sort type:");
    for order in SortOrder::ALL {
        let marker = if order == current { "*" } else { " " };
        println!("  {} {:<16} {}", marker, order.token(), order.label());
    }
}

fn render_help() {
    println!("commands:");
    println!("  add <title> | <due date> | <sub-tasks>   append a task");
    println!("  edit <row> <title> | <due> | <sub-tasks> replace the task at a row");
    println!("  rm <row>                                 delete the task at a row");
    println!("  star <row>                               toggle a task's star");
    println!("  sort [order]                             sort, or list the orders");
    println!("  list                                     show all tasks");
    println!("  search <text>                            match title or sub-tasks");
    println!("  export                                   print the list as JSON");
    println!("  quit                                     leave");
}
