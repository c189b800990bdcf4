//! Entity for `reduction_viewer_experiment`.

use sea_orm::entity::prelude::*;

use crate::database::reflection::ReflectedEntity;

/// Row of `reduction_viewer_experiment`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reduction_viewer_experiment")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// RB number of the experiment.
    pub reference_number: i32,
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
