// Application layer - Use case orchestration

pub mod clip_interactor;
pub mod container;

pub use clip_interactor::ClipCutOrchestrator;
pub use container::DefaultAppContainer;
