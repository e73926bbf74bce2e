use anyhow::anyhow;

use crate::catalog::{CatalogBuilder, CatalogError, Snippet};

struct Person {
    name: String,
}

impl Person {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    fn walk(&self) -> String {
        format!("{} walks", self.name)
    }

    fn talk(&self) -> String {
        format!("{} talks", self.name)
    }
}

pub fn register(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    builder.register(
        Snippet::new("objects/methods", |out| {
            let person = Person::new("Tom");
            out.line(person.walk());
            out.line(person.talk());
            Ok(None)
        })
        .describe("data and the methods that read it")
        .expect_lines(["Tom walks", "Tom talks"]),
    )?;

    // A method taken as a plain function still needs its receiver passed in.
    builder.register(
        Snippet::new("objects/bound-method", |out| {
            let person = Person::new("Tom");
            let walk = Person::walk;
            out.line(walk(&person));

            let bound = move || person.walk();
            out.line(bound());
            Ok(None)
        })
        .describe("method paths take the receiver explicitly; closures bind it")
        .expect_lines(["Tom walks", "Tom walks"]),
    )?;

    builder.register(
        Snippet::new("closures/square", |out| {
            let square = |n: i64| n * n;
            let result = square(4);
            out.line(result);
            Ok(Some(result.to_string()))
        })
        .describe("short closures")
        .expect_lines(["16"]),
    )?;

    builder.register(
        Snippet::new("closures/callback-capture", |out| {
            let person = Person::new("Tom");
            let handle = std::thread::spawn(move || format!("this is {}", person.name));
            let message = handle
                .join()
                .map_err(|_| anyhow!("callback thread panicked"))?;
            out.line(message);
            Ok(None)
        })
        .describe("a callback owns what it captured, wherever it runs")
        .expect_lines(["this is Tom"]),
    )?;

    Ok(())
}
