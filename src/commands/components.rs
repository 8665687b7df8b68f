// ABOUTME: Component subcommands: list, install and status.
// ABOUTME: Resolves component names to image references before calling the manager.

use srcd_engine::components::{ComponentManager, ListOptions, split_image_reference};
use srcd_engine::error::Result;
use srcd_engine::output::{ComponentStatus, Output};
use srcd_engine::runtime::ContainerRuntime;

/// Print installed components, optionally narrowed.
pub async fn list<R: ContainerRuntime>(
    manager: &ComponentManager<R>,
    options: ListOptions,
    output: &Output,
) -> Result<()> {
    let filters = options.into_filters(*manager.registry());
    let components = manager.list(&filters).await?;
    output.components(&components);
    Ok(())
}

/// Pull a component image.
pub async fn install<R: ContainerRuntime>(
    manager: &ComponentManager<R>,
    id: &str,
    mut output: Output,
) -> Result<()> {
    let reference = manager.registry().resolve(id);

    output.start_timer();
    output.progress(&format!("Installing {reference}..."));
    manager.install(&reference).await?;
    output.success(&format!("Installed {reference}"));
    Ok(())
}

/// Report whether a component image is present locally.
pub async fn status<R: ContainerRuntime>(
    manager: &ComponentManager<R>,
    id: &str,
    output: &Output,
) -> Result<()> {
    let registry = manager.registry();
    let reference = registry.resolve(id);
    let installed = manager.is_installed(&reference).await?;

    let (image, _) = split_image_reference(&reference);
    let working_dir_dependant = registry
        .find(id)
        .or_else(|| registry.by_image(image))
        .map(|component| manager.is_working_dir_dependant(component.name));

    output.status(&ComponentStatus {
        reference: &reference,
        installed,
        working_dir_dependant,
    });
    Ok(())
}
