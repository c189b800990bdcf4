//! Entity for `reduction_viewer_status`.

use sea_orm::entity::prelude::*;

use crate::database::reflection::ReflectedEntity;

/// Row of `reduction_viewer_status`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reduction_viewer_status")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Status name, e.g. `Queued` or `Completed`.
    pub value: String,
}

/// Relations to other reduction tables.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Runs pointing at this row.
    #[sea_orm(has_many = "super::reduction_run::Entity")]
    ReductionRuns,
}

impl Related<super::reduction_run::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReductionRuns.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ReflectedEntity for Entity {}
