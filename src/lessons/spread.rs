use crate::catalog::{CatalogBuilder, CatalogError, Snippet};

#[derive(Debug, Clone)]
struct Profile {
    name: String,
    job: String,
    location: String,
}

pub fn register(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    builder.register(
        Snippet::new("spread/concat", |out| {
            let first = [1, 2, 3];
            let second = [4, 5, 6];

            let combined = [&first[..], &second[..]].concat();
            out.line(format!("{:?}", combined));

            let with_middle = [&first[..], &[99][..], &second[..]].concat();
            out.line(format!("{:?}", with_middle));
            Ok(None)
        })
        .describe("join slices into a new vector")
        .expect_lines(["[1, 2, 3, 4, 5, 6]", "[1, 2, 3, 99, 4, 5, 6]"]),
    )?;

    builder.register(
        Snippet::new("spread/clone", |out| {
            let first = vec![1, 2, 3];
            let mut copy = first.clone();
            copy.push(4);
            out.line(format!("{:?}", first));
            out.line(format!("{:?}", copy));
            Ok(None)
        })
        .describe("a clone is independent of its source")
        .expect_lines(["[1, 2, 3]", "[1, 2, 3, 4]"]),
    )?;

    builder.register(
        Snippet::new("spread/struct-update", |out| {
            let base = Profile {
                name: "Tom".to_string(),
                job: "Instructor".to_string(),
                location: "Amsterdam".to_string(),
            };
            let moved = Profile {
                location: "Berlin".to_string(),
                ..base.clone()
            };

            for p in [&base, &moved] {
                out.line(format!("{}, {}, {}", p.name, p.job, p.location));
            }
            Ok(None)
        })
        .describe("copy the remaining fields from another value")
        .expect_lines(["Tom, Instructor, Amsterdam", "Tom, Instructor, Berlin"]),
    )?;

    Ok(())
}
