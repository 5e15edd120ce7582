/// Page load lifecycle: `Loading` until the single fetch settles, then a
/// terminal `Ready` or `Failed`. There is no way back to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T, E> {
    Loading,
    Ready(T),
    Failed(E),
}

impl<T, E> Default for LoadState<T, E> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T, E> LoadState<T, E> {
    /// Settle a loading state with the fetch result; terminal states are kept as-is
    pub fn resolve(self, result: Result<T, E>) -> Self {
        match self {
            LoadState::Loading => match result {
                Ok(value) => LoadState::Ready(value),
                Err(err) => LoadState::Failed(err),
            },
            settled => settled,
        }
    }
}

impl<T, E> From<Option<Result<T, E>>> for LoadState<T, E> {
    /// `None` means the fetch is still pending
    fn from(result: Option<Result<T, E>>) -> Self {
        match result {
            None => LoadState::Loading,
            Some(result) => LoadState::Loading.resolve(result),
        }
    }
}
