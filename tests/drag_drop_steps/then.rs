//! Then steps for drag-and-drop BDD scenarios.

use super::world::{BoardWorld, task_ids};
use rstest_bdd_macros::then;
use taskboard::board::{
    domain::{BoardError, ColumnId, TaskId},
    drag::DragPhase,
    services::BoardSessionError,
};

#[then(r#"column "{column_id}" holds "{tasks}""#)]
fn column_holds(world: &BoardWorld, column_id: String, tasks: String) -> Result<(), eyre::Report> {
    let expected = task_ids(&tasks)?;
    let column_id = ColumnId::new(column_id)?;
    let column = world
        .session()?
        .board()
        .column(&column_id)
        .ok_or_else(|| eyre::eyre!("missing column {column_id}"))?;
    let actual: Vec<TaskId> = column.task_ids().cloned().collect();

    if actual != expected {
        return Err(eyre::eyre!(
            "expected {column_id} to hold {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"column "{column_id}" is empty"#)]
fn column_is_empty(world: &BoardWorld, column_id: String) -> Result<(), eyre::Report> {
    let column_id = ColumnId::new(column_id)?;
    let count = world.session()?.task_count(&column_id)?;
    if count != 0 {
        return Err(eyre::eyre!("expected {column_id} to be empty, found {count} tasks"));
    }
    Ok(())
}

#[then(r#"task "{task_id}" has status "{status}""#)]
fn task_has_status(
    world: &BoardWorld,
    task_id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(task_id)?;
    let task = world
        .session()?
        .board()
        .task(&task_id)
        .ok_or_else(|| eyre::eyre!("missing task {task_id}"))?;
    if task.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"the observer received a "{kind}" event"#)]
fn observer_received(world: &BoardWorld, kind: String) -> Result<(), eyre::Report> {
    let kinds: Vec<&'static str> = world
        .observer
        .events()
        .iter()
        .map(|event| event.kind())
        .collect();
    if kinds != [kind.as_str()] {
        return Err(eyre::eyre!("expected a single {kind} event, found {kinds:?}"));
    }
    Ok(())
}

#[then("the observer received no events")]
fn observer_received_nothing(world: &BoardWorld) -> Result<(), eyre::Report> {
    let events = world.observer.events();
    if !events.is_empty() {
        return Err(eyre::eyre!("expected no events, found {events:?}"));
    }
    Ok(())
}

#[then("the drag controller is idle")]
fn drag_controller_idle(world: &BoardWorld) -> Result<(), eyre::Report> {
    let phase = world.session()?.drag_phase();
    if phase != DragPhase::Idle {
        return Err(eyre::eyre!("expected idle, found {phase}"));
    }
    Ok(())
}

#[then("the operation fails with an invalid reorder error")]
fn fails_with_invalid_reorder(world: &BoardWorld) -> Result<(), eyre::Report> {
    let error = world.last_error.as_ref();
    if !matches!(
        error,
        Some(BoardSessionError::Board(BoardError::InvalidReorder { .. }))
    ) {
        return Err(eyre::eyre!("expected InvalidReorder error, got {error:?}"));
    }
    Ok(())
}

#[then("the operation fails with a duplicate task error")]
fn fails_with_duplicate_task(world: &BoardWorld) -> Result<(), eyre::Report> {
    let error = world.last_error.as_ref();
    if !matches!(
        error,
        Some(BoardSessionError::Board(BoardError::DuplicateTaskId(_)))
    ) {
        return Err(eyre::eyre!("expected DuplicateTaskId error, got {error:?}"));
    }
    Ok(())
}
