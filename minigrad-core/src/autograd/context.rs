/// Storage owned by a single forward-operation invocation.
///
/// The forward pass stashes whatever its backward rule will need with
/// [`save_for_backward`](Context::save_for_backward); the backward rule reads it back
/// through [`saved_tensors`](Context::saved_tensors). When the context is created with
/// `no_grad = true` nothing is ever retained.
///
/// Saved values are opaque: their count and meaning belong to the owning operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Context<T> {
    no_grad: bool,
    saved_values: Vec<T>,
}

impl<T> Context<T> {
    /// Creates an empty context. `no_grad` is fixed for the context's lifetime.
    pub fn new(no_grad: bool) -> Self {
        Context {
            no_grad,
            saved_values: Vec::new(),
        }
    }

    /// Whether this invocation was run without gradient tracking.
    pub fn no_grad(&self) -> bool {
        self.no_grad
    }

    /// Records `values` for the backward pass, replacing anything saved earlier.
    /// A no-op when the context was created with `no_grad`.
    pub fn save_for_backward<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        if self.no_grad {
            return;
        }
        self.saved_values = values.into_iter().collect();
    }

    /// The values saved during the forward pass, or an empty slice if none were.
    pub fn saved_tensors(&self) -> &[T] {
        &self.saved_values
    }
}

impl<T> Default for Context<T> {
    fn default() -> Self {
        Context::new(false)
    }
}
