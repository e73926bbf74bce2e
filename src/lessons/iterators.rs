use crate::catalog::{CatalogBuilder, CatalogError, Snippet};

const COLOURS: [&str; 3] = ["red", "green", "blue"];

struct Job {
    id: u32,
    is_active: bool,
}

pub fn register(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    builder.register(
        Snippet::new("iterators/map", |out| {
            let items: Vec<String> = COLOURS.iter().map(|c| format!("<li>{}</li>", c)).collect();
            for item in &items {
                out.line(item);
            }
            Ok(None)
        })
        .describe("transform every element")
        .expect_lines(["<li>red</li>", "<li>green</li>", "<li>blue</li>"]),
    )?;

    builder.register(
        Snippet::new("iterators/filter", |out| {
            let jobs = [
                Job { id: 1, is_active: true },
                Job { id: 2, is_active: true },
                Job { id: 3, is_active: false },
            ];
            let active: Vec<u32> = jobs.iter().filter(|j| j.is_active).map(|j| j.id).collect();
            out.line(format!("active jobs: {:?}", active));
            Ok(None)
        })
        .describe("keep the elements a predicate accepts")
        .expect_lines(["active jobs: [1, 2]"]),
    )?;

    // Informational only: no expected output.
    builder.register(
        Snippet::new("iterators/enumerate", |out| {
            for (i, colour) in COLOURS.iter().enumerate() {
                out.line(format!("{}: {}", i, colour));
            }
            Ok(None)
        })
        .describe("pair elements with their position"),
    )?;

    Ok(())
}
