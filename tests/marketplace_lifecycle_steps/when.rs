//! When steps for marketplace lifecycle BDD scenarios.

use super::world::{MarketplaceWorld, run_async};
use rstest_bdd_macros::when;
use vespid::marketplace::domain::{LifecycleEvent, Role};

fn record_event(
    world: &mut MarketplaceWorld,
    role: Role,
    event: &LifecycleEvent,
) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let result = run_async(world.service.apply(id, role, event));
    world.last_result = Some(result);
    Ok(())
}

#[when("the requester cancels the task")]
fn requester_cancels(world: &mut MarketplaceWorld) -> Result<(), eyre::Report> {
    record_event(world, Role::Requester, &LifecycleEvent::Cancel)
}

#[when("the provider attempts to cancel the task")]
fn provider_attempts_cancel(world: &mut MarketplaceWorld) -> Result<(), eyre::Report> {
    record_event(world, Role::Provider, &LifecycleEvent::Cancel)
}

#[when("the provider confirms completion")]
fn provider_confirms(world: &mut MarketplaceWorld) -> Result<(), eyre::Report> {
    record_event(world, Role::Provider, &LifecycleEvent::ConfirmCompletion)
}

#[when("the requester confirms completion")]
fn requester_confirms(world: &mut MarketplaceWorld) -> Result<(), eyre::Report> {
    record_event(world, Role::Requester, &LifecycleEvent::ConfirmCompletion)
}
