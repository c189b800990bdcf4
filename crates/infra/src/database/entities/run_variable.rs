//! Entity for `reduction_variables_runvariable`.

use sea_orm::entity::prelude::*;

use crate::database::reflection::{ForeignKey, ReflectedEntity};

const FOREIGN_KEYS: &[ForeignKey] = &[
    ForeignKey::new("reduction_run_id", "reduction_viewer_reductionrun", "id"),
];

/// Row of `reduction_variables_runvariable`.
///
/// Run variables extend a base variable row, so the primary key is the
/// pointer to that row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reduction_variables_runvariable")]
pub struct Model {
    /// Base variable row this row extends.
    #[sea_orm(primary_key, auto_increment = false)]
    pub variable_ptr_id: i32,
    /// Owning run.
    pub reduction_run_id: i32,
}

/// Relations to other reduction tables.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning run.
    #[sea_orm(
        belongs_to = "super::reduction_run::Entity",
        from = "Column::ReductionRunId",
        to = "super::reduction_run::Column::Id"
    )]
    ReductionRun,
}

impl Related<super::reduction_run::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReductionRun.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ReflectedEntity for Entity {
    fn foreign_keys() -> &'static [ForeignKey] {
        FOREIGN_KEYS
    }
}
