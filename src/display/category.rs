//! Category display formatting

use crate::models::Category;

/// Format the fixed category list with keys and labels
pub fn format_category_list() -> String {
    let mut output = String::new();
    output.push_str(&format!("   {:16} {}\n", "Key", "Label"));
    output.push_str(&"-".repeat(36));
    output.push('\n');

    for category in Category::ALL {
        output.push_str(&format!(
            "{} {:16} {}\n",
            category.icon(),
            category.key(),
            category.label()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_category() {
        let output = format_category_list();
        assert_eq!(output.lines().count(), Category::ALL.len() + 2);
        assert!(output.contains("entertainment"));
        assert!(output.contains("Entretenimento"));
    }
}
