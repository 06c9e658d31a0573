pub mod formatter;

pub use formatter::{
    format_career_detail, format_institutes, format_json, format_percent, format_ranked_table,
    format_tsv, should_use_colors,
};
