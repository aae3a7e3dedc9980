//! Static content pages: home, about, not-found.

pub(super) fn home() -> String {
    String::from("Welcome to the homepage!\nAbout -> /about\n")
}

pub(super) fn about() -> String {
    String::from(
        "About Page\nThat feels like an existential question, don't you think?\nHome -> /home\n",
    )
}

pub(super) fn not_found() -> String {
    String::from("There's nothing here: 404!\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_links_to_about() {
        assert!(home().contains("About -> /about"));
    }

    #[test]
    fn test_about_links_back_home() {
        assert!(about().contains("Home -> /home"));
    }

    #[test]
    fn test_not_found_text() {
        assert!(not_found().contains("404"));
    }
}
