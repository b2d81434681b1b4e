mod common;

mod engine;
mod intake;
mod orchestrator;
