pub mod formatter;

pub use formatter::{
    format_json, format_results, format_table, format_tsv, format_value, should_use_colors,
    OutputFormat,
};
