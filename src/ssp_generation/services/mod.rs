pub mod component_mapper;
pub mod metadata_generator;
pub mod plan_id_policy;

pub use component_mapper::ComponentMapper;
pub use metadata_generator::MetadataGenerator;
pub use plan_id_policy::PlanIdPolicy;
