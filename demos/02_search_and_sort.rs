//! Example 02: Search and Sort
//!
//! This example demonstrates the four sort orders and case-insensitive
//! substring search over titles and sub-task text.
//!
//! Run with: cargo run --example 02_search_and_sort

use todostore::{SearchQuery, SortOrder, Task, TodoStore};

fn main() -> eyre::Result<()> {
    println!("TodoStore Search and Sort Example");
    println!("=================================\n");

    let mut store = TodoStore::new();
    store.add(Task::new("Buy milk", "2024-01-05", "2% from the corner shop"));
    store.add(Task::new("Call bank", "2024-01-01", "ask about the fee"));
    store.add(Task::new("Water plants", "2024-01-02", "the fern needs milk-mild water"));

    // Each sort order carries the label the sort menu shows for it
    println!("1. SORT - Applying every order...\n");
    for order in SortOrder::ALL {
        store.sort_by(order);
        println!("   {}", order.label());
        for task in store.tasks() {
            println!("     {} (due {})", task.title, task.due_date);
        }
        println!();
    }

    // Search matches the title or the sub-task text, case-insensitively
    println!("2. SEARCH - Query 'MILK'...");
    let query = SearchQuery::parse("MILK").expect("non-empty query");
    for task in query.filter(store.tasks()) {
        println!("   - {}", task.title);
    }
    println!();

    // A blank query parses to None; the caller decides what to show
    println!("3. SEARCH - Blank query...");
    match SearchQuery::parse("   ") {
        Some(_) => unreachable!(),
        None => println!("   (falls back to the unfiltered list)"),
    }
    println!();

    println!("Example complete!");
    Ok(())
}
