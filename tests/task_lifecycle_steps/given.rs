//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskql::task::{domain::TaskId, services::AddTaskRequest};

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let existing = run_async(world.queries.list_tasks(None)).wrap_err("list tasks")?;
    eyre::ensure!(existing.is_empty(), "expected an empty store");
    Ok(())
}

#[given(r#"a stored task titled "{title}""#)]
fn stored_task(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.mutations.add_task(AddTaskRequest::new(title)))
        .wrap_err("create task for scenario")?;
    world.current_id = Some(created.id());
    world.created = Some(created.clone());
    world.last_known = Some(created);
    Ok(())
}

#[given("an unknown task identifier")]
fn unknown_task_identifier(world: &mut TaskWorld) {
    world.current_id = Some(TaskId::new());
}
