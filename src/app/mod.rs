mod export;
mod runner;
mod selections;

pub(crate) use runner::run_local;
