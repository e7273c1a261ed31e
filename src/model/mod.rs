pub mod issue;
pub mod sprint;
pub mod team;
