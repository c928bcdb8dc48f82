//! Example 01: Basic CRUD Operations
//!
//! This example demonstrates adding, editing, starring, and deleting tasks
//! in the in-memory store.
//!
//! Run with: cargo run --example 01_basic_crud

use todostore::{Task, TodoStore};

fn main() -> eyre::Result<()> {
    println!("TodoStore Basic CRUD Example");
    println!("============================\n");

    let mut store = TodoStore::new();

    // CREATE: Add a few tasks
    println!("1. CREATE - Adding tasks...");
    store.add(Task::new("Buy milk", "2024-01-05", "2% from the corner shop"));
    store.add(Task::new("Call bank", "2024-01-01", "ask about the fee"));
    println!("   Total tasks: {}\n", store.len());

    // READ: Show the list
    println!("2. READ - Current list...");
    for (row, task) in store.tasks().iter().enumerate() {
        println!("   {}. {} (due {})", row + 1, task.title, task.due_date);
    }
    println!();

    // UPDATE: Edit a task by its stable id
    println!("3. UPDATE - Editing 'Call bank'...");
    let id = store.tasks()[1].id;
    store.replace(id, Task::new("Call landlord", "2024-01-02", "ring before noon"))?;
    println!("   Row 2 is now: {}\n", store.tasks()[1].title);

    // STAR: Toggle the favourite flag
    println!("4. STAR - Starring row 1...");
    let starred = store.toggle_favourite_at(0)?;
    println!("   'Buy milk' starred = {}\n", starred);

    // DELETE: Remove a task by position
    println!("5. DELETE - Removing row 2...");
    let removed = store.remove_at(1)?;
    println!("   Removed '{}', {} task(s) left\n", removed.title, store.len());

    println!("Example complete!");
    Ok(())
}
