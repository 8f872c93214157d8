use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub category: String,
    pub address: String,
    pub image: String,
    pub is_visited: bool,
    pub phone: String,
    pub rating: String,
}

impl Restaurant {
    pub fn new(
        name: String,
        category: String,
        address: String,
        phone: String,
        image: String,
        is_visited: bool,
    ) -> Self {
        Self {
            name,
            category,
            address,
            image,
            is_visited,
            phone,
            rating: "".into(),
        }
    }
}
