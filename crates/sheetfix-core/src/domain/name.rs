use crate::domain::CellValue;

/// Keeps only ASCII letters and digits.
pub fn clean_name(value: &str) -> String {
    value.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Blank cells stay blank; other non-text cells are cleaned through their text form.
pub fn clean_name_cell(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Empty => None,
        CellValue::String(value) => Some(clean_name(value)),
        other => Some(clean_name(&other.to_text())),
    }
}

#[cfg(test)]
mod tests {
    use super::{clean_name, clean_name_cell};
    use crate::domain::CellValue;

    #[test]
    fn clean_name_drops_spaces_and_punctuation() {
        assert_eq!(clean_name("John O'Brien 123"), "JohnOBrien123");
        assert_eq!(clean_name("Mr. A.K. Sharma-Jr"), "MrAKSharmaJr");
    }

    #[test]
    fn clean_name_drops_non_ascii() {
        assert_eq!(clean_name("José Müller"), "JosMller");
        assert_eq!(clean_name("राम Kumar"), "Kumar");
    }

    #[test]
    fn clean_name_can_produce_empty_string() {
        assert_eq!(clean_name(" .-' "), "");
    }

    #[test]
    fn clean_name_cell_keeps_blank_cells_blank() {
        assert_eq!(clean_name_cell(&CellValue::Empty), None);
    }

    #[test]
    fn clean_name_cell_renders_numbers() {
        assert_eq!(
            clean_name_cell(&CellValue::Float(42.0)).as_deref(),
            Some("420")
        );
    }
}
