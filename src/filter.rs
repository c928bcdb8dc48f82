// Case-insensitive substring search over the task list

use crate::models::Task;

/// A normalised, non-empty search query.
///
/// Matching is a lowercase substring test over the title and the sub-task
/// text. The query is lowercased once at construction; tasks are lowercased
/// per comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Trim and lowercase `raw`. Returns `None` for a blank query; the
    /// caller decides whether that shows the unfiltered list or nothing.
    pub fn parse(raw: &str) -> Option<SearchQuery> {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            None
        } else {
            Some(SearchQuery { needle })
        }
    }

    /// The normalised query text
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// True if the query occurs in the task's title or sub-task text
    pub fn matches(&self, task: &Task) -> bool {
        task.title.to_lowercase().contains(&self.needle)
            || task.sub_tasks.to_lowercase().contains(&self.needle)
    }

    /// Lazily yield the matching tasks.
    ///
    /// Recomputed fresh from `tasks` on every call; the input is never
    /// mutated and no state is cached between calls.
    pub fn filter<'a>(&'a self, tasks: &'a [Task]) -> impl Iterator<Item = &'a Task> + 'a {
        tasks.iter().filter(move |task| self.matches(task))
    }
}
