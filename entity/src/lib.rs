pub mod cpe_list;
pub mod generator;

pub mod cpe_item;
pub mod cpe_name;

pub mod check;
pub mod note;
pub mod reference;
pub mod title;

pub mod deprecated_by;
pub mod deprecation;

pub mod change_description;
pub mod evidence_reference;
pub mod organization;
pub mod provenance_record;
pub mod provenance_record_authority;

pub mod change_type;
pub mod code;
pub mod deprecation_type;
pub mod evidence_type;
