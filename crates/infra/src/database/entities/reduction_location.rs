//! Entity for `reduction_viewer_reductionlocation`.

use sea_orm::entity::prelude::*;

use crate::database::reflection::{ForeignKey, ReflectedEntity};

const FOREIGN_KEYS: &[ForeignKey] = &[
    ForeignKey::new("reduction_run_id", "reduction_viewer_reductionrun", "id"),
];

/// Row of `reduction_viewer_reductionlocation`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reduction_viewer_reductionlocation")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Directory the reduced output was written to.
    #[sea_orm(column_type = "Text")]
    pub file_path: String,
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
