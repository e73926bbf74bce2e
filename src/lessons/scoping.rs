use crate::catalog::{CatalogBuilder, CatalogError, Snippet};

pub fn register(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    // The loop binding ends with the loop; only state declared outside survives it.
    builder.register(
        Snippet::new("scoping/block-scope", |out| {
            let mut last = None;
            for i in 0..5 {
                out.line(i);
                last = Some(i);
            }
            out.line(format!("last seen: {:?}", last));
            Ok(None)
        })
        .describe("loop bindings do not outlive their block")
        .expect_lines(["0", "1", "2", "3", "4", "last seen: Some(4)"]),
    )?;

    builder.register(
        Snippet::new("scoping/shadowing", |out| {
            let x = 1;
            let x = x * 2;
            {
                let x = "inner";
                out.line(x);
            }
            out.line(x);
            Ok(None)
        })
        .describe("an inner binding shadows the outer one only inside its block")
        .expect_lines(["inner", "2"]),
    )?;

    builder.register(
        Snippet::new("scoping/immutable-binding", |out| {
            let limit = 3;
            let mut count = 0;
            while count < limit {
                count += 1;
            }
            out.line(format!("counted to {} of {}", count, limit));
            Ok(Some(count.to_string()))
        })
        .describe("only bindings declared `mut` can change")
        .expect_lines(["counted to 3 of 3"]),
    )?;

    Ok(())
}
