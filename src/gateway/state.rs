use crate::provider::ScoreModel;

/// Shared handler state: the model client handle and nothing else.
///
/// Requests are stateless and independent; the state is cloned per request
/// and never written after startup.
#[derive(Clone)]
pub struct HandlerState<M: ScoreModel + Clone + Send + Sync + 'static> {
    pub model: M,
}

impl<M> HandlerState<M>
where
    M: ScoreModel + Clone + Send + Sync + 'static,
{
    pub fn new(model: M) -> Self {
        Self { model }
    }
}
