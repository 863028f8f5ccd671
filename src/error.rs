#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Infallible")]
pub struct InfallibleError;
