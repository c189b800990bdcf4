//! Entity for `reduction_viewer_instrument`.

use sea_orm::entity::prelude::*;

use crate::database::reflection::ReflectedEntity;

/// Row of `reduction_viewer_instrument`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reduction_viewer_instrument")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Instrument name, e.g. `GEM`.
    pub name: String,
    /// Whether the instrument is in use.
    pub is_active: bool,
    /// Paused instruments have their runs skipped.
    pub is_paused: bool,
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
