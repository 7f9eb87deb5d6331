use std::path::Path;

const OUTPUT_SUFFIX: &str = "_updated";
const OUTPUT_EXTENSION: &str = "xlsx";
const FALLBACK_STEM: &str = "sheet";

/// Name of the processed workbook: the input's file name with its last
/// extension replaced by `_updated.xlsx`.
pub fn output_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| FALLBACK_STEM.into());
    format!("{stem}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::output_file_name;
    use std::path::Path;

    #[test]
    fn output_file_name_replaces_extension() {
        assert_eq!(
            output_file_name(Path::new("renewals.xlsx")),
            "renewals_updated.xlsx"
        );
    }

    #[test]
    fn output_file_name_drops_directories() {
        assert_eq!(
            output_file_name(Path::new("/tmp/in/March list.xlsx")),
            "March list_updated.xlsx"
        );
    }

    #[test]
    fn output_file_name_only_strips_last_extension() {
        assert_eq!(
            output_file_name(Path::new("batch.2024.xlsx")),
            "batch.2024_updated.xlsx"
        );
        assert_eq!(output_file_name(Path::new("plain")), "plain_updated.xlsx");
    }

    #[test]
    fn output_file_name_falls_back_without_stem() {
        assert_eq!(output_file_name(Path::new("")), "sheet_updated.xlsx");
        assert_eq!(output_file_name(Path::new("/")), "sheet_updated.xlsx");
    }
}
