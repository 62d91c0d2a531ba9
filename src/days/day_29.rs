//! Day 29: The to-do list project.
//!
//! Backed by [`crate::projects::todo`]. The lesson uses its own demo
//! file so it never touches a task list you actually use via
//! `roadmap todo`.

use async_trait::async_trait;

use crate::core::storage::LocalStorage;
use crate::domain::ports::{Lesson, LessonContext};
use crate::projects::todo::{Priority, TodoStore};
use crate::utils::error::Result;

pub struct TodoProject;

const DEMO_FILE: &str = "demo_todos.json";

#[async_trait]
impl Lesson for TodoProject {
    fn day(&self) -> u8 {
        29
    }

    async fn run(&self, ctx: &LessonContext) -> Result<()> {
        ctx.ensure_workspace()?;
        let store = TodoStore::new(LocalStorage::new(&ctx.workspace));

        // Start from whatever a previous run left behind.
        let mut tasks = store.load(DEMO_FILE).await?;
        println!("loaded {} tasks from {DEMO_FILE}", tasks.len());

        let id = tasks.add("Reread ownership chapter", Priority::High)?;
        tasks.add("Do the day 29 exercises", Priority::Medium)?;
        println!("added tasks; marking #{id} as done");
        tasks.complete(id)?;

        print!("{}", tasks.render(true));
        print!("{}", tasks.stats());

        store.save(DEMO_FILE, &tasks).await?;
        println!("saved to {DEMO_FILE} (a plain JSON array, open it!)");

        println!();
        println!("The same engine powers the CLI:");
        println!("    roadmap todo add \"Buy milk\" --priority high");
        println!("    roadmap todo list");
        println!("    roadmap todo done 1");
        println!("    roadmap todo stats");
        Ok(())
    }
}
