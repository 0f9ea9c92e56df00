pub mod commit;
pub mod games;
pub mod list;
pub mod publish;
pub mod repo;
pub mod show;
pub mod sync;
