//! Tests for board construction and structural operations.

use crate::board::domain::{Board, BoardError, Column, ColumnColor, ColumnId, TaskDraft, TaskId, Title};
use eyre::{OptionExt, ensure};
use rstest::{fixture, rstest};

fn id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

fn col(value: &str) -> ColumnId {
    ColumnId::new(value).expect("valid column id")
}

fn draft(value: &str) -> TaskDraft {
    TaskDraft::new(id(value), format!("Task {value}")).expect("valid draft")
}

fn column(value: &str, tasks: &[&str]) -> Column {
    let title = Title::new(value.to_uppercase()).expect("valid title");
    Column::new(col(value), title, ColumnColor::default())
        .with_tasks(tasks.iter().copied().map(draft))
}

fn ids_in(board: &Board, column_id: &str) -> Vec<String> {
    board
        .column(&col(column_id))
        .map(|column| column.task_ids().map(|task_id| task_id.to_string()).collect())
        .unwrap_or_default()
}

/// Every task's status matches the column that holds it.
fn statuses_consistent(board: &Board) -> bool {
    board.columns().iter().all(|column| {
        column
            .tasks()
            .iter()
            .all(|task| task.status() == column.id())
    })
}

fn sorted_ids(board: &Board) -> Vec<TaskId> {
    let mut ids: Vec<TaskId> = board.task_ids().cloned().collect();
    ids.sort();
    ids
}

#[fixture]
fn board() -> Board {
    Board::new(vec![
        column("todo", &["T1", "T2"]),
        column("doing", &["T3"]),
        column("done", &[]),
    ])
    .expect("valid board")
}

#[rstest]
fn new_board_rejects_duplicate_column_ids() {
    let result = Board::new(vec![column("todo", &[]), column("todo", &[])]);
    assert_eq!(result, Err(BoardError::DuplicateColumnId(col("todo"))));
}

#[rstest]
fn new_board_rejects_task_ids_repeated_across_columns() {
    let result = Board::new(vec![column("todo", &["T1"]), column("done", &["T1"])]);
    assert_eq!(result, Err(BoardError::DuplicateTaskId(id("T1"))));
}

#[rstest]
fn empty_board_is_valid() {
    let empty = Board::new(Vec::new()).expect("empty board");
    assert_eq!(empty.columns().len(), 0);
    assert_eq!(empty.total_tasks(), 0);
}

#[rstest]
fn queries_locate_tasks_in_board_order(board: Board) {
    assert_eq!(board.locate_task(&id("T3")), Some((1, 0)));
    assert_eq!(board.locate_task(&id("T9")), None);
    assert_eq!(board.column_index(&col("done")), Some(2));
    assert_eq!(board.total_tasks(), 3);
    let all: Vec<&str> = board.task_ids().map(TaskId::as_str).collect();
    assert_eq!(all, vec!["T1", "T2", "T3"]);
    assert!(statuses_consistent(&board));
}

#[rstest]
#[case("todo", 2)]
#[case("doing", 1)]
#[case("done", 0)]
fn task_count_reports_column_sizes(
    board: Board,
    #[case] column_id: &str,
    #[case] expected: usize,
) {
    assert_eq!(board.task_count(&col(column_id)), Ok(expected));
}

#[rstest]
fn task_count_rejects_unknown_column(board: Board) {
    assert_eq!(
        board.task_count(&col("archive")),
        Err(BoardError::ColumnNotFound(col("archive")))
    );
}

#[rstest]
fn move_task_appends_to_target_and_restamps_status(board: Board) -> eyre::Result<()> {
    let moved = board.move_task(&id("T1"), &col("todo"), &col("doing"))?;

    ensure!(ids_in(&moved, "todo") == ["T2"]);
    ensure!(ids_in(&moved, "doing") == ["T3", "T1"]);
    let task = moved.task(&id("T1")).ok_or_eyre("moved task present")?;
    ensure!(task.status() == &col("doing"));
    ensure!(statuses_consistent(&moved));
    ensure!(sorted_ids(&moved) == sorted_ids(&board), "task set must be conserved");
    Ok(())
}

#[rstest]
fn move_task_to_empty_column(board: Board) -> eyre::Result<()> {
    let moved = board.move_task(&id("T1"), &col("todo"), &col("done"))?;

    ensure!(ids_in(&moved, "todo") == ["T2"]);
    ensure!(ids_in(&moved, "done") == ["T1"]);
    ensure!(moved.task(&id("T1")).map(|task| task.status().as_str()) == Some("done"));
    Ok(())
}

#[rstest]
fn move_task_within_same_column_is_noop(board: Board) {
    let result = board.move_task(&id("T1"), &col("todo"), &col("todo"));
    assert_eq!(result, Ok(board));
}

#[rstest]
fn move_task_rejects_task_missing_from_source(board: Board) {
    let result = board.move_task(&id("T3"), &col("todo"), &col("done"));
    assert_eq!(
        result,
        Err(BoardError::TaskNotFound {
            task_id: id("T3"),
            column_id: col("todo"),
        })
    );
}

#[rstest]
#[case("todo", "archive", "archive")]
#[case("archive", "done", "archive")]
fn move_task_rejects_unknown_columns(
    board: Board,
    #[case] source: &str,
    #[case] target: &str,
    #[case] missing: &str,
) {
    let result = board.move_task(&id("T1"), &col(source), &col(target));
    assert_eq!(result, Err(BoardError::ColumnNotFound(col(missing))));
}

#[rstest]
fn reorder_column_applies_permutation(board: Board) -> eyre::Result<()> {
    let reordered = board.reorder_column(&col("todo"), &[id("T2"), id("T1")])?;

    ensure!(ids_in(&reordered, "todo") == ["T2", "T1"]);
    ensure!(ids_in(&reordered, "doing") == ["T3"]);
    ensure!(statuses_consistent(&reordered));
    Ok(())
}

#[rstest]
#[case(&["T2"])]
#[case(&["T1", "T1"])]
#[case(&["T1", "T3"])]
#[case(&["T1", "T2", "T3"])]
fn reorder_column_rejects_non_permutations(board: Board, #[case] order: &[&str]) {
    let task_order: Vec<TaskId> = order.iter().copied().map(id).collect();
    let result = board.reorder_column(&col("todo"), &task_order);

    assert_eq!(
        result,
        Err(BoardError::InvalidReorder {
            column_id: col("todo"),
        })
    );
    assert_eq!(ids_in(&board, "todo"), ["T1", "T2"]);
}

#[rstest]
fn reorder_column_rejects_unknown_column(board: Board) {
    let result = board.reorder_column(&col("archive"), &[]);
    assert_eq!(result, Err(BoardError::ColumnNotFound(col("archive"))));
}

#[rstest]
fn add_task_appends_and_stamps_status(board: Board) -> eyre::Result<()> {
    let added = board.add_task(&col("todo"), draft("T9"))?;

    ensure!(ids_in(&added, "todo") == ["T1", "T2", "T9"]);
    ensure!(added.task(&id("T9")).map(|task| task.status().as_str()) == Some("todo"));
    ensure!(added.total_tasks() == board.total_tasks() + 1);
    Ok(())
}

#[rstest]
fn add_task_twice_rejects_duplicate_and_keeps_first_result(board: Board) -> eyre::Result<()> {
    let first = board.add_task(&col("todo"), draft("T9"))?;
    let second = first.add_task(&col("done"), draft("T9"));

    ensure!(second == Err(BoardError::DuplicateTaskId(id("T9"))));
    ensure!(ids_in(&first, "todo") == ["T1", "T2", "T9"]);
    ensure!(ids_in(&first, "done").is_empty());
    Ok(())
}

#[rstest]
fn add_task_rejects_unknown_column(board: Board) {
    let result = board.add_task(&col("archive"), draft("T9"));
    assert_eq!(result, Err(BoardError::ColumnNotFound(col("archive"))));
}

#[rstest]
fn operation_sequences_conserve_tasks_and_statuses(board: Board) -> eyre::Result<()> {
    let mut current = board.clone();
    current = current.move_task(&id("T1"), &col("todo"), &col("done"))?;
    current = current.move_task(&id("T3"), &col("doing"), &col("done"))?;
    current = current.reorder_column(&col("done"), &[id("T3"), id("T1")])?;
    current = current.move_task(&id("T1"), &col("done"), &col("todo"))?;

    ensure!(sorted_ids(&current) == sorted_ids(&board));
    ensure!(statuses_consistent(&current));
    ensure!(ids_in(&current, "todo") == ["T2", "T1"]);
    ensure!(ids_in(&current, "done") == ["T3"]);

    let rejected = current.reorder_column(&col("todo"), &[id("T1")]);
    ensure!(rejected.is_err());
    ensure!(ids_in(&current, "todo") == ["T2", "T1"]);
    Ok(())
}
