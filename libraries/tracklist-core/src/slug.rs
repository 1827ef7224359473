//! URL slugs derived from track titles

/// Build a slug from a title.
///
/// Lowercases the input, collapses every run of non-alphanumeric characters
/// into a single `-` and trims leading/trailing separators.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_dashes() {
        assert_eq!(slugify("Test Track Create"), "test-track-create");
    }

    #[test]
    fn punctuation_runs_collapse() {
        assert_eq!(slugify("  Hello,   World!! "), "hello-world");
        assert_eq!(slugify("R&B -- Mix"), "r-b-mix");
    }

    #[test]
    fn empty_and_symbol_only_titles() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("?!"), "");
    }
}
