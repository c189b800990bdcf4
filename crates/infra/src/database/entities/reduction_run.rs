//! Entity for `reduction_viewer_reductionrun`.

use sea_orm::entity::prelude::*;

use crate::database::reflection::{ForeignKey, ReflectedEntity};

const FOREIGN_KEYS: &[ForeignKey] = &[
    ForeignKey::new("instrument_id", "reduction_viewer_instrument", "id"),
    ForeignKey::new("status_id", "reduction_viewer_status", "id"),
    ForeignKey::new("experiment_id", "reduction_viewer_experiment", "id"),
];

/// Row of `reduction_viewer_reductionrun`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reduction_viewer_reductionrun")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Instrument run number.
    pub run_number: i32,
    /// Run title.
    pub run_name: String,
    /// Zero for the first reduction of a run, incremented on each rerun.
    pub run_version: i32,
    /// User id, or a negative code for automatic submissions.
    pub started_by: Option<i32>,
    /// Log shown to admins only.
    #[sea_orm(column_type = "Text")]
    pub admin_log: String,
    /// Output of the reduction script.
    #[sea_orm(column_type = "Text")]
    pub reduction_log: String,
    /// Last status or error message.
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    /// Hide the run from the failed-runs view.
    pub hidden_in_failviewer: bool,
    /// Replace earlier output instead of writing a new version.
    pub overwrite: Option<bool>,
    /// Set when a user cancels the run.
    pub cancel: bool,
    /// When the run was submitted.
    pub created: DateTime,
    /// Last change to the row.
    pub last_updated: DateTime,
    /// When a worker picked the run up.
    pub started: Option<DateTime>,
    /// When the reduction ended, successfully or not.
    pub finished: Option<DateTime>,
    /// When a failed run is due to be retried.
    pub retry_when: Option<DateTime>,
    /// Reduction script the run was submitted with.
    #[sea_orm(column_type = "Text")]
    pub script: String,
    /// Owning experiment.
    pub experiment_id: i32,
    /// Instrument the data came from.
    pub instrument_id: Option<i32>,
    /// Current status.
    pub status_id: i32,
}

/// Relations to other reduction tables.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Instrument the run belongs to.
    #[sea_orm(
        belongs_to = "super::instrument::Entity",
        from = "Column::InstrumentId",
        to = "super::instrument::Column::Id"
    )]
    Instrument,
    /// Current status.
    #[sea_orm(
        belongs_to = "super::status::Entity",
        from = "Column::StatusId",
        to = "super::status::Column::Id"
    )]
    Status,
    /// Owning experiment.
    #[sea_orm(
        belongs_to = "super::experiment::Entity",
        from = "Column::ExperimentId",
        to = "super::experiment::Column::Id"
    )]
    Experiment,
    /// Raw data files.
    #[sea_orm(has_many = "super::data_location::Entity")]
    DataLocations,
    /// Output directories.
    #[sea_orm(has_many = "super::reduction_location::Entity")]
    ReductionLocations,
    /// Script variables.
    #[sea_orm(has_many = "super::run_variable::Entity")]
    RunVariables,
}

impl Related<super::instrument::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instrument.def()
    }
}

impl Related<super::status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<super::experiment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiment.def()
    }
}

impl Related<super::data_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DataLocations.def()
    }
}

impl Related<super::reduction_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReductionLocations.def()
    }
}

impl Related<super::run_variable::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RunVariables.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ReflectedEntity for Entity {
    fn foreign_keys() -> &'static [ForeignKey] {
        FOREIGN_KEYS
    }
}
