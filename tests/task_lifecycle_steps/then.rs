//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::then;

#[then("the task is incomplete with priority {priority:i32} and no deadline")]
fn task_has_creation_defaults(world: &TaskWorld, priority: i32) -> Result<(), eyre::Report> {
    let task = world.last_task()?;
    eyre::ensure!(!task.is_completed(), "new task must be incomplete");
    eyre::ensure!(
        task.priority().value() == priority,
        "expected priority {priority}, found {}",
        task.priority()
    );
    eyre::ensure!(task.deadline().is_none(), "new task must have no deadline");
    eyre::ensure!(
        task.created_at() == task.updated_at(),
        "expected created_at and updated_at timestamps to match at creation"
    );
    Ok(())
}

#[then("the task is completed")]
fn task_is_completed(world: &TaskWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.last_task()?.is_completed(), "task must be completed");
    Ok(())
}

#[then("the deleted task matches its last known state")]
fn deleted_task_matches(world: &TaskWorld) -> Result<(), eyre::Report> {
    let deleted = world.last_task()?;
    let last_known = world
        .last_known
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing last known task state"))?;
    eyre::ensure!(deleted == last_known, "deleted task differs from last state");
    Ok(())
}

#[then("looking up the task returns nothing")]
fn lookup_returns_nothing(world: &TaskWorld) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    let found = run_async(world.queries.get_task(id)).map_err(|err| eyre::eyre!("{err}"))?;
    eyre::ensure!(found.is_none(), "expected no task for {id}");
    Ok(())
}

#[then(r#"the task keeps its title "{title}""#)]
fn task_keeps_title(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.last_task()?;
    eyre::ensure!(
        task.title().as_str() == title,
        "expected title {title:?}, found {:?}",
        task.title().as_str()
    );
    Ok(())
}

#[then("the task has priority {priority:i32}")]
fn task_has_priority(world: &TaskWorld, priority: i32) -> Result<(), eyre::Report> {
    let actual = world.last_task()?.priority().value();
    eyre::ensure!(actual == priority, "expected priority {priority}, found {actual}");
    Ok(())
}

#[then("the task was updated after it was created")]
fn task_updated_after_creation(world: &TaskWorld) -> Result<(), eyre::Report> {
    let task = world.last_task()?;
    let created = world
        .created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;
    eyre::ensure!(
        task.updated_at() > created.updated_at(),
        "updated_at must advance on update"
    );
    eyre::ensure!(
        task.created_at() == created.created_at(),
        "created_at must not change"
    );
    Ok(())
}

#[then("{count:usize} tasks are returned")]
fn count_tasks_returned(world: &TaskWorld, count: usize) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.listed.len() == count,
        "expected {count} tasks, found {}",
        world.listed.len()
    );
    Ok(())
}

#[then("no task is returned")]
fn no_task_returned(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no operation has run yet"))?;
    eyre::ensure!(result.is_none(), "expected no task");
    Ok(())
}
