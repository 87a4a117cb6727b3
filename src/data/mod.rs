//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `crate::model`, converting stored string IDs at the boundary.

pub mod attendance_record;

#[cfg(test)]
mod test;
