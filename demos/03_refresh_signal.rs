//! Example 03: Refresh Signal
//!
//! This example demonstrates the refresh/notify contract: every successful
//! mutation hands each registered listener the full current contents, and
//! views re-render from that rather than applying diffs.
//!
//! Run with: cargo run --example 03_refresh_signal

use todostore::{SortOrder, Task, TodoStore};

fn main() -> eyre::Result<()> {
    println!("TodoStore Refresh Signal Example");
    println!("================================\n");

    let mut store = TodoStore::new();

    // A view registers once and re-renders on every signal
    store.on_refresh(|tasks| {
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        println!("   refresh -> [{}]", titles.join(", "));
    });

    println!("1. Adding tasks fires one signal each...");
    store.add(Task::new("Buy milk", "2024-01-05", ""));
    store.add(Task::new("Call bank", "2024-01-01", ""));
    println!();

    println!("2. Sorting fires a signal...");
    store.sort_by(SortOrder::DateAscending);
    println!();

    println!("3. A failed operation fires no signal...");
    match store.remove_at(9) {
        Ok(_) => unreachable!(),
        Err(err) => println!("   (error, no refresh: {err})"),
    }
    println!();

    println!("4. Removing fires a signal...");
    store.remove_at(0)?;
    println!();

    println!("Example complete!");
    Ok(())
}
