//! Given steps for drag-and-drop BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::given;

#[given(r#"a column "{column_id}" holding "{tasks}""#)]
fn column_holding(
    world: &mut BoardWorld,
    column_id: String,
    tasks: String,
) -> Result<(), eyre::Report> {
    world.add_column(&column_id, &tasks)
}

#[given(r#"an empty column "{column_id}""#)]
fn empty_column(world: &mut BoardWorld, column_id: String) -> Result<(), eyre::Report> {
    world.add_column(&column_id, "")
}
