//! `SeaORM` entity definitions.

pub mod reports;
