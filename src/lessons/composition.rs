// Shared behaviour through traits instead of a base class.

use crate::catalog::{CatalogBuilder, CatalogError, Snippet};

trait Named {
    fn name(&self) -> &str;
}

trait Walk: Named {
    fn walk(&self) -> String {
        format!("{} walks", self.name())
    }
}

struct Person {
    name: String,
}

impl Named for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Walk for Person {}

struct Programmer {
    person: Person,
    qualification: String,
}

impl Programmer {
    fn write(&self) -> String {
        format!("{} writes code with a {}", self.name(), self.qualification)
    }
}

impl Named for Programmer {
    fn name(&self) -> &str {
        self.person.name()
    }
}

impl Walk for Programmer {}

pub fn register(builder: &mut CatalogBuilder) -> Result<(), CatalogError> {
    builder.register(
        Snippet::new("composition/traits", |out| {
            let programmer = Programmer {
                person: Person {
                    name: "Tom".to_string(),
                },
                qualification: "MSc".to_string(),
            };
            out.line(programmer.walk());
            out.line(programmer.write());
            Ok(None)
        })
        .describe("a type gains behaviour by implementing traits")
        .expect_lines(["Tom walks", "Tom writes code with a MSc"]),
    )?;

    builder.register(
        Snippet::new("composition/trait-objects", |out| {
            let walkers: Vec<Box<dyn Walk>> = vec![
                Box::new(Person {
                    name: "Ann".to_string(),
                }),
                Box::new(Programmer {
                    person: Person {
                        name: "Tom".to_string(),
                    },
                    qualification: "PhD".to_string(),
                }),
            ];
            for w in &walkers {
                out.line(w.walk());
            }
            Ok(Some(walkers.len().to_string()))
        })
        .describe("independent types behind one interface")
        .expect_lines(["Ann walks", "Tom walks"]),
    )?;

    Ok(())
}
