//! SeaORM entities for the reduction database tables.
//!
//! The tables are owned by the web application; these declarations list the
//! columns the clients rely on and are checked against the live schema before
//! use (see [`ReflectedTable`](super::reflection::ReflectedTable)).

pub mod data_location;
pub mod experiment;
pub mod instrument;
pub mod reduction_location;
pub mod reduction_run;
pub mod run_variable;
pub mod status;

pub use data_location::Entity as DataLocationEntity;
pub use experiment::Entity as ExperimentEntity;
pub use instrument::Entity as InstrumentEntity;
pub use reduction_location::Entity as ReductionLocationEntity;
pub use reduction_run::Entity as ReductionRunEntity;
pub use run_variable::Entity as RunVariableEntity;
pub use status::Entity as StatusEntity;
