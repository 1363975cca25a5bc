//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use std::time::Duration;
use taskql::task::services::{AddTaskRequest, UpdateTaskRequest};

#[when(r#"a task titled "{title}" is added"#)]
fn add_task(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    let created =
        run_async(world.mutations.add_task(AddTaskRequest::new(title))).wrap_err("add task")?;
    world.current_id = Some(created.id());
    world.created = Some(created.clone());
    world.record(Some(created));
    Ok(())
}

#[when("the task is toggled")]
fn toggle_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    let result = run_async(world.mutations.toggle_task(id)).wrap_err("toggle task")?;
    world.record(result);
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    let result = run_async(world.mutations.delete_task(id)).wrap_err("delete task")?;
    world.last_result = Some(result);
    Ok(())
}

#[when("the task priority is set to {priority:i32}")]
fn set_priority(world: &mut TaskWorld, priority: i32) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    run_async(tokio::time::sleep(Duration::from_millis(5)));
    let request = UpdateTaskRequest::new().with_priority(priority);
    let result = run_async(world.mutations.update_task(id, request)).wrap_err("update task")?;
    world.record(result);
    Ok(())
}

#[when(r#"tasks are searched for "{search}""#)]
fn search_tasks(world: &mut TaskWorld, search: String) -> Result<(), eyre::Report> {
    world.listed = run_async(world.queries.list_tasks(Some(search))).wrap_err("search tasks")?;
    Ok(())
}

#[when("all tasks are listed")]
fn list_all_tasks(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    world.listed = run_async(world.queries.list_tasks(None)).wrap_err("list tasks")?;
    Ok(())
}
