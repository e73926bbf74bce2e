use crate::catalog::{CatalogBuilder, CatalogError, Snippet};

struct Address {
    street: String,
    city: String,
    country: String,
}

pub fn register(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    builder.register(
        Snippet::new("destructuring/struct", |out| {
            let address = Address {
                street: "Main St".to_string(),
                city: "Amsterdam".to_string(),
                country: "NL".to_string(),
            };

            let Address {
                street: st,
                city,
                country,
            } = address;

            out.line(format!("street: {}", st));
            out.line(format!("city: {}", city));
            out.line(format!("country: {}", country));
            Ok(None)
        })
        .describe("bind fields to locals, renaming where needed")
        .expect_lines(["street: Main St", "city: Amsterdam", "country: NL"]),
    )?;

    builder.register(
        Snippet::new("destructuring/slice-pattern", |out| {
            let numbers = [1, 2, 3, 4];
            let [first, .., last] = numbers;
            out.line(format!("first: {}, last: {}", first, last));
            Ok(None)
        })
        .describe("take the ends of a fixed-size array")
        .expect_lines(["first: 1, last: 4"]),
    )?;

    Ok(())
}
