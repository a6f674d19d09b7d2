/// State of an async fetch such as the catalog load
///
/// A single enum instead of separate loading/error flags, so a view is always
/// in exactly one state. `Failed` is distinct from an empty `Loaded` result:
/// the first offers a retry, the second a "no products" message.
///
/// ```ignore
/// let mut state = use_signal(|| FetchState::Idle);
/// state.set(FetchState::Loading);
/// state.set(fetch_with_retry(&source, policy, &latency).await.into());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// Nothing requested yet
    #[default]
    Idle,

    /// Request in flight
    Loading,

    Loaded(T),

    /// Every attempt failed
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> FetchState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Loaded(data) => FetchState::Loaded(f(data)),
            FetchState::Failed(msg) => FetchState::Failed(msg),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FetchState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchState::Loaded(data),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let state: FetchState<i32> = FetchState::default();
        assert!(state.is_idle());

        let state: FetchState<i32> = FetchState::Loading;
        assert!(state.is_loading());
        assert_eq!(state.data(), None);

        let state = FetchState::Loaded(42);
        assert!(state.is_loaded());
        assert_eq!(state.data(), Some(&42));

        let state: FetchState<i32> = FetchState::Failed("timed out".to_string());
        assert!(state.is_failed());
        assert_eq!(state.error(), Some("timed out"));
    }

    #[test]
    fn test_empty_is_not_failure() {
        let state: FetchState<Vec<u32>> = FetchState::Loaded(Vec::new());
        assert!(!state.is_failed());
        assert_eq!(state.data().map(Vec::len), Some(0));
    }

    #[test]
    fn test_data_mut() {
        let mut state = FetchState::Loaded(vec![1, 2]);
        if let Some(items) = state.data_mut() {
            items.push(3);
        }
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));

        let mut state: FetchState<Vec<u32>> = FetchState::Loading;
        assert!(state.data_mut().is_none());
    }

    #[test]
    fn test_map() {
        let state = FetchState::Loaded(21).map(|x| x * 2);
        assert_eq!(state.data(), Some(&42));

        let state: FetchState<i32> = FetchState::Failed("down".to_string());
        assert_eq!(state.map(|x| x * 2).error(), Some("down"));
    }

    #[test]
    fn test_from_result() {
        let state: FetchState<i32> = Ok::<_, String>(42).into();
        assert_eq!(state.data(), Some(&42));

        let state: FetchState<i32> = Err::<i32, _>("catalog unavailable").into();
        assert_eq!(state.error(), Some("catalog unavailable"));
    }
}
