//! Then steps for marketplace lifecycle BDD scenarios.

use super::world::{MarketplaceWorld, run_async};
use rstest_bdd_macros::then;
use vespid::marketplace::{
    domain::{Role, TaskStatus},
    services::{LifecycleError, TaskLifecycleError},
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &MarketplaceWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let id = world.task_id()?;
    let view = run_async(
        world
            .service
            .view_task(id, Role::Requester, world.requester),
    )
    .map_err(|err| eyre::eyre!("view task for status assertion: {err}"))?;

    if view.status != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            view.status.as_str()
        ));
    }

    Ok(())
}

#[then("the operation is rejected as forbidden")]
fn operation_rejected_as_forbidden(world: &MarketplaceWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Lifecycle(LifecycleError::Forbidden { .. }))
    ) {
        return Err(eyre::eyre!("expected Forbidden error, got {result:?}"));
    }

    Ok(())
}

#[then("the operation is rejected because the task is closed")]
fn operation_rejected_as_terminal(world: &MarketplaceWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Lifecycle(
            LifecycleError::TerminalStateViolation { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected TerminalStateViolation error, got {result:?}"
        ));
    }

    Ok(())
}
