use crate::entities::{Container, Instance, Piece};
use crate::geometry::primitives::Rect;
use crate::io::ext_repr::{ExtContainer, ExtInstance};
use anyhow::{Context, Result};

/// Converts the external representation of a problem instance into an [`Instance`],
/// validating the container and the catalogue in the process.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let container = import_container(&ext_instance.container)
        .with_context(|| format!("invalid container in instance {}", ext_instance.name))?;

    let pieces = ext_instance
        .pieces
        .iter()
        .map(|ext_piece| Piece::new(ext_piece.id as usize, ext_piece.width, ext_piece.height))
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("invalid piece in instance {}", ext_instance.name))?;

    Instance::new(container, pieces)
}

fn import_container(ext_container: &ExtContainer) -> Result<Container> {
    let outer = Rect::try_new(
        ext_container.x_min,
        ext_container.y_min,
        ext_container.x_min + ext_container.width,
        ext_container.y_min + ext_container.height,
    )?;
    Ok(Container::new(outer))
}
