// Built-in lessons
// Each topic module registers its snippets in declaration order.

mod composition;
mod destructuring;
mod iterators;
mod objects;
mod scoping;
mod spread;

use crate::catalog::{Catalog, CatalogBuilder, CatalogError};

/// Topic registration functions, in catalog order
const TOPICS: &[fn(&mut CatalogBuilder) -> Result<(), CatalogError>] = &[
    scoping::register,
    objects::register,
    iterators::register,
    destructuring::register,
    spread::register,
    composition::register,
];

/// Build the frozen catalog of built-in lessons
pub fn catalog() -> Result<Catalog, CatalogError> {
    let mut builder = Catalog::builder();
    for register in TOPICS {
        register(&mut builder)?;
    }
    Ok(builder.freeze())
}
