//! Given steps for marketplace lifecycle BDD scenarios.

use super::world::{MarketplaceWorld, run_async, scenario_details};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use vespid::marketplace::domain::{LifecycleEvent, Role};

#[given("a task posted by a requester")]
fn task_posted(world: &mut MarketplaceWorld) -> Result<(), eyre::Report> {
    let task = run_async(world.service.post_task(world.requester, scenario_details()?))
        .wrap_err("post task in scenario setup")?;
    world.task_id = Some(task.id());
    Ok(())
}

#[given("a provider has applied")]
fn provider_applied(world: &mut MarketplaceWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let provider = world.provider;
    run_async(world.service.apply(
        id,
        Role::Provider,
        &LifecycleEvent::Apply { provider },
    ))
    .wrap_err("apply in scenario setup")?;
    Ok(())
}

#[given("the requester has selected the provider")]
fn provider_selected(world: &mut MarketplaceWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let provider = world.provider;
    run_async(world.service.apply(
        id,
        Role::Requester,
        &LifecycleEvent::SelectProvider { provider },
    ))
    .wrap_err("select provider in scenario setup")?;
    Ok(())
}

#[given("both parties have confirmed completion")]
fn both_confirmed(world: &mut MarketplaceWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    run_async(
        world
            .service
            .apply(id, Role::Provider, &LifecycleEvent::ConfirmCompletion),
    )
    .wrap_err("provider confirmation in scenario setup")?;
    run_async(
        world
            .service
            .apply(id, Role::Requester, &LifecycleEvent::ConfirmCompletion),
    )
    .wrap_err("requester confirmation in scenario setup")?;
    Ok(())
}
