//! When steps for drag-and-drop BDD scenarios.

use super::world::{BoardWorld, pointer_over, task_ids};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::domain::{ColumnId, TaskDraft, TaskId};

#[when(r#"task "{task_id}" is picked up"#)]
fn task_picked_up(world: &mut BoardWorld, task_id: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(task_id)?;
    world
        .session_mut()?
        .begin_drag(&task_id)
        .wrap_err("begin drag in scenario")?;
    Ok(())
}

#[when("the pointer moves over column {column:u32} row {row:u32}")]
fn pointer_moves(world: &mut BoardWorld, column: u32, row: u32) -> Result<(), eyre::Report> {
    let pointer = pointer_over(column, row)?;
    let candidate = world
        .session_mut()?
        .drag_to(pointer)
        .wrap_err("drag pointer in scenario")?;
    if candidate.is_none() {
        return Err(eyre::eyre!("expected a drop candidate under the pointer"));
    }
    Ok(())
}

#[when("the task is dropped over column {column:u32} row {row:u32}")]
fn task_dropped(world: &mut BoardWorld, column: u32, row: u32) -> Result<(), eyre::Report> {
    let pointer = pointer_over(column, row)?;
    world
        .session_mut()?
        .drop_at(pointer)
        .wrap_err("drop task in scenario")?;
    Ok(())
}

#[when("the drag is cancelled")]
fn drag_cancelled(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if world.session_mut()?.cancel_drag().is_none() {
        return Err(eyre::eyre!("expected an active drag to cancel"));
    }
    Ok(())
}

#[when(r#"column "{column_id}" is reordered as "{tasks}""#)]
fn column_reordered(
    world: &mut BoardWorld,
    column_id: String,
    tasks: String,
) -> Result<(), eyre::Report> {
    let column_id = ColumnId::new(column_id)?;
    let order = task_ids(&tasks)?;
    let result = world
        .session_mut()?
        .reorder_column(&column_id, &order)
        .map(|_| ());
    world.last_error = result.err();
    Ok(())
}

#[when(r#"task "{task_id}" is added to column "{column_id}""#)]
fn task_added(
    world: &mut BoardWorld,
    task_id: String,
    column_id: String,
) -> Result<(), eyre::Report> {
    let column_id = ColumnId::new(column_id)?;
    let draft = TaskDraft::new(TaskId::new(task_id)?, "Added in scenario")?;
    let result = world
        .session_mut()?
        .add_task(&column_id, draft)
        .map(|_| ());
    world.last_error = result.err();
    Ok(())
}
