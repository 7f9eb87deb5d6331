pub mod dataset;
pub mod domain;
pub mod error;
pub mod normalize;
pub mod output;

pub use dataset::Dataset;
pub use domain::*;
pub use error::CoreError;
pub use normalize::{
    normalize, normalize_record, NormalizedRecord, EMAIL_COLUMN, MOBILE_COLUMN, NAME_COLUMN,
};
pub use output::output_file_name;
