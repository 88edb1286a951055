// Identity key normalization: two records with the same normalized
// title and author are the same book.

// Trims surrounding whitespace, collapses internal whitespace runs to a
// single space and lowercases.
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<&str>>().join(" ").to_lowercase()
}

// Derives the unique registry key from title and author.
pub fn book_key(title: &str, author: &str) -> String {
    format!("{}_{}", normalize(title), normalize(author))
}
