use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    #[error("no free short id after {attempts} attempts")]
    SpaceExhausted { attempts: u32 },
}
