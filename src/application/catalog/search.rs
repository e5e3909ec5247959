use crate::domain::CatalogItem;

/// 検索語に一致するか（純粋な関数）
///
/// タイトルまたは著者に検索語を含めば一致。大文字小文字は区別しない。
/// 空の検索語はすべての蔵書に一致する。
pub fn matches(item: &CatalogItem, term: &str) -> bool {
    let term = term.to_lowercase();
    item.title().to_lowercase().contains(&term) || item.author().to_lowercase().contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> CatalogItem {
        CatalogItem::physical(1, "Python Basics", "John Doe", 3)
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        assert!(matches(&book(), "python"));
        assert!(matches(&book(), "BASICS"));
        assert!(matches(&book(), "on ba"));
    }

    #[test]
    fn test_matches_author() {
        assert!(matches(&book(), "doe"));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches(&book(), "rust"));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(matches(&book(), ""));
    }
}
