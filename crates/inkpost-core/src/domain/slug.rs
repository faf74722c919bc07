/// Derive a filesystem-safe directory slug from a post title.
///
/// Lowercases the title, drops every character that is not alphanumeric or
/// a space, then turns spaces into hyphens. Titles made entirely of
/// punctuation produce an empty slug; the store's collision handling turns
/// that into a timestamp-suffixed name.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("My First Post"), "my-first-post");
    }

    #[test]
    fn drops_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn keeps_unicode_letters() {
        assert_eq!(slugify("Caffè Latte"), "caffè-latte");
    }

    #[test]
    fn punctuation_only_title_yields_empty_slug() {
        assert_eq!(slugify("?!?"), "");
    }

    #[test]
    fn consecutive_spaces_become_consecutive_hyphens() {
        assert_eq!(slugify("a  b"), "a--b");
    }
}
