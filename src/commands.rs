//! Subcommand drivers: each maps an orchestration outcome to a process exit
//! code.

pub mod serve;
pub mod test;
