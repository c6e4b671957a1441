/// Derives the URL slug for a product or category name: lowercase, with
/// every space replaced by a hyphen.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates_spaces() {
        assert_eq!(slugify("Wireless Noise Cancelling Headphones"), "wireless-noise-cancelling-headphones");
    }

    #[test]
    fn keeps_existing_hyphens_and_punctuation() {
        assert_eq!(slugify("T-Shirt XL"), "t-shirt-xl");
        assert_eq!(slugify("Book: Volume 2"), "book:-volume-2");
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(slugify("Laptop Stand"), slugify("Laptop Stand"));
    }
}
