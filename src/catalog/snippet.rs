// Snippet definition

use std::fmt;
use std::sync::Arc;

use crate::execution::Output;

/// Body of a snippet.
///
/// The body receives the sink of the invocation that runs it and may return a
/// terminal value. It must capture everything it needs by value; nothing
/// ambient is passed in besides the sink.
pub type SnippetBody = Arc<dyn Fn(&mut Output) -> anyhow::Result<Option<String>> + Send + Sync>;

/// A single self-contained, independently executable example
#[derive(Clone)]
pub struct Snippet {
    id: String,
    description: Option<String>,
    body: SnippetBody,
    expected: Option<Vec<String>>,
}

impl Snippet {
    /// Create a snippet with no expected output
    pub fn new<F>(id: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut Output) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            description: None,
            body: Arc::new(body),
            expected: None,
        }
    }

    /// Attach the exact lines the body is expected to write
    pub fn expect_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn expected(&self) -> Option<&[String]> {
        self.expected.as_deref()
    }

    /// Shared handle to the body, for running it off the caller's thread
    pub fn body(&self) -> SnippetBody {
        Arc::clone(&self.body)
    }
}

impl fmt::Debug for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snippet")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}
