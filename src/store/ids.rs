use crate::domain::{IdStrategy, ProjectId};
use uuid::Uuid;

/// Source of fresh project ids
pub trait IdGenerator {
    fn next_id(&mut self) -> ProjectId;
}

/// Random v4 UUID ids
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> ProjectId {
        ProjectId::new(Uuid::new_v4().to_string())
    }
}

/// Counter based ids (e.g., P1, P2, P100)
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ProjectId {
        let id = ProjectId::new(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Builds the generator selected by configuration
pub fn generator_for(strategy: &IdStrategy) -> Box<dyn IdGenerator> {
    match strategy {
        IdStrategy::Random => Box::new(RandomIds),
        IdStrategy::Sequential { prefix } => Box::new(SequentialIds::new(prefix.clone())),
    }
}
