use serde::{Deserialize, Serialize};

// Identifiable defines common traits shared by registry records; for books
// the id is the normalized identity key derived from title and author.
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts config options for the inventory system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub list_page_size: usize,
    pub seed_demo_books: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            list_page_size: 50,
            seed_demo_books: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(50, config.list_page_size);
        assert_eq!(true, config.seed_demo_books);
    }
}
