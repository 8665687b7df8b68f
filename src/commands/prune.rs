// ABOUTME: Prune command implementation.
// ABOUTME: Tears down every container, volume and image srcd created.

use srcd_engine::components::ComponentManager;
use srcd_engine::error::Result;
use srcd_engine::output::Output;
use srcd_engine::runtime::ContainerRuntime;

pub async fn prune<R: ContainerRuntime>(
    manager: &ComponentManager<R>,
    mut output: Output,
) -> Result<()> {
    output.start_timer();
    output.progress("Removing srcd containers, volumes and images...");
    manager.purge().await?;
    output.success("Prune complete!");
    Ok(())
}
